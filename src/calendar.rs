//! Résolution des jours ouvrables d'un mois (dimanche → jeudi).

use crate::scheduler::SchedError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Vrai pour dimanche, lundi, mardi, mercredi et jeudi.
pub fn is_workday(day: Weekday) -> bool {
    !matches!(day, Weekday::Fri | Weekday::Sat)
}

/// Premier et dernier jour du mois.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), SchedError> {
    let invalid = || SchedError::InvalidCalendarInput { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
    Ok((first, last))
}

/// Dates ouvrables du mois, en ordre chronologique.
///
/// Les dates exclues hors du mois sont ignorées. Un résultat vide est valide.
pub fn resolve(
    year: i32,
    month: u32,
    excluded: &BTreeSet<NaiveDate>,
) -> Result<Vec<NaiveDate>, SchedError> {
    let (first, last) = month_bounds(year, month)?;
    Ok(first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| is_workday(d.weekday()) && !excluded.contains(d))
        .collect())
}

/// Dimanche ouvrant la semaine (dimanche → samedi) qui contient `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

use crate::calendar;
use chrono::NaiveDate;

/// Vrai si `a` et `b` sont deux jours calendaires adjacents.
pub(super) fn adjacent(a: NaiveDate, b: NaiveDate) -> bool {
    (b - a).num_days().abs() == 1
}

pub(super) fn same_week(a: NaiveDate, b: NaiveDate) -> bool {
    calendar::week_start(a) == calendar::week_start(b)
}

/// Dates triées et dédoublonnées.
pub(super) fn chronological(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut out = dates.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

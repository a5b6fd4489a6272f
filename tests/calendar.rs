#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use roulement::{calendar, SchedError};
use std::collections::BTreeSet;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn january_2025_workdays() {
    let dates = calendar::resolve(2025, 1, &BTreeSet::new()).unwrap();
    assert_eq!(dates.len(), 22);
    assert_eq!(dates.first(), Some(&d(2025, 1, 1)));
    assert_eq!(dates.last(), Some(&d(2025, 1, 30)));
    assert!(dates
        .iter()
        .all(|date| !matches!(date.weekday(), Weekday::Fri | Weekday::Sat)));
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn excluded_tuesday_is_omitted() {
    // 2025-01-14 est un mardi
    let excluded = BTreeSet::from([d(2025, 1, 14)]);
    let dates = calendar::resolve(2025, 1, &excluded).unwrap();
    assert_eq!(dates.len(), 21);
    assert!(!dates.contains(&d(2025, 1, 14)));
    assert!(dates.contains(&d(2025, 1, 13)));
    assert!(dates.contains(&d(2025, 1, 15)));
}

#[test]
fn excluded_dates_outside_month_or_on_weekends_change_nothing() {
    let excluded = BTreeSet::from([d(2025, 2, 3), d(2024, 12, 31), d(2025, 1, 3), d(2025, 1, 4)]);
    let with = calendar::resolve(2025, 1, &excluded).unwrap();
    let without = calendar::resolve(2025, 1, &BTreeSet::new()).unwrap();
    assert_eq!(with, without);
}

#[test]
fn exclusions_account_for_every_removed_workday() {
    for year in [2024, 2025, 2026] {
        for month in 1..=12 {
            let all = calendar::resolve(year, month, &BTreeSet::new()).unwrap();
            let excluded: BTreeSet<NaiveDate> = all
                .iter()
                .step_by(3)
                .copied()
                .chain([d(year, month, 1).succ_opt().unwrap(), d(1999, 1, 1)])
                .collect();
            let removed = excluded.iter().filter(|date| all.contains(date)).count();
            let kept = calendar::resolve(year, month, &excluded).unwrap();
            assert_eq!(kept.len() + removed, all.len(), "{year}-{month}");
        }
    }
}

#[test]
fn everything_excluded_is_an_empty_month() {
    let all = calendar::resolve(2025, 3, &BTreeSet::new()).unwrap();
    let excluded: BTreeSet<NaiveDate> = all.iter().copied().collect();
    assert!(calendar::resolve(2025, 3, &excluded).unwrap().is_empty());
}

#[test]
fn resolve_is_repeatable() {
    let excluded = BTreeSet::from([d(2025, 6, 10)]);
    let a = calendar::resolve(2025, 6, &excluded).unwrap();
    let b = calendar::resolve(2025, 6, &excluded).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_month_is_rejected() {
    for month in [0, 13] {
        let err = calendar::resolve(2025, month, &BTreeSet::new()).unwrap_err();
        assert!(matches!(
            err,
            SchedError::InvalidCalendarInput { year: 2025, month: m } if m == month
        ));
    }
}

#[test]
fn workday_window_is_sunday_to_thursday() {
    assert!(calendar::is_workday(Weekday::Sun));
    assert!(calendar::is_workday(Weekday::Thu));
    assert!(!calendar::is_workday(Weekday::Fri));
    assert!(!calendar::is_workday(Weekday::Sat));
}

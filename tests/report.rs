#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::{assign, report, Participant, Scheduler, Team};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn render_schedule_with_gap() {
    let dates = [d(2025, 1, 5), d(2025, 1, 6), d(2025, 1, 7)];
    let schedule = assign(&dates, &[Participant::new("a"), Participant::new("b")]).unwrap();
    let text = report::render_schedule(&schedule);

    insta::assert_snapshot!(text.trim_end(), @r"
    Shift schedule:
    ----------------------------------------
    2025-01-05 (Sunday, week 01): a
    2025-01-06 (Monday, week 01): b
    2025-01-07 (Tuesday, week 01): (unassigned)

    Shifts per participant:
    -------------------------
    a: 1
    b: 1

    Total shifts assigned: 2
    Days that could not be assigned:
      - 2025-01-07
    ");
}

#[test]
fn complete_schedule_has_no_gap_section() {
    let schedule = assign(&[d(2025, 1, 5)], &[Participant::new("a")]).unwrap();
    let text = report::render_schedule(&schedule);
    assert!(text.contains("Total shifts assigned: 1"));
    assert!(!text.contains("could not be assigned"));
}

#[test]
fn render_blocked_days_lists_reasons() {
    let tuesday = d(2025, 1, 14);
    let scheduler = Scheduler::new(Team::new(vec![
        Participant::new("a").with_blocked_weekdays([1]),
        Participant::new("b")
            .with_blocked_weekdays([1])
            .with_blocked_dates([tuesday]),
    ]));
    let text = report::render_blocked_days(&scheduler.blocked_days(&[tuesday]));
    assert_eq!(
        text,
        "2025-01-14 (Tuesday): all participants are blocked\n    a: Tuesday\n    b: Tuesday, specific date\n"
    );
}

//! Rendu texte d'un planning pour la console.

use crate::scheduler::{BlockReason, BlockedDay, Schedule};
use chrono::NaiveDate;

const GAP_MARK: &str = "(unassigned)";

/// Planning jour par jour, charges par personne puis trous éventuels.
///
/// Le numéro de semaine suit `%U` (semaines commençant le dimanche).
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut days: Vec<(NaiveDate, &str)> = schedule
        .assignments
        .iter()
        .map(|(date, name)| (*date, name.as_str()))
        .chain(schedule.gaps.iter().map(|date| (*date, GAP_MARK)))
        .collect();
    days.sort_by_key(|(date, _)| *date);

    let roster: String = days
        .iter()
        .map(|(date, name)| format!("{}: {name}\n", date.format("%Y-%m-%d (%A, week %U)")))
        .collect();
    let counts: String = schedule
        .loads()
        .iter()
        .map(|load| format!("{}: {}\n", load.name, load.shifts))
        .collect();

    let mut out = format!(
        "Shift schedule:\n{rule}\n{roster}\nShifts per participant:\n{short}\n{counts}\nTotal shifts assigned: {total}\n",
        rule = "-".repeat(40),
        short = "-".repeat(25),
        total = schedule.total_assigned(),
    );
    if !schedule.is_complete() {
        out.push_str("Days that could not be assigned:\n");
        for date in &schedule.gaps {
            out.push_str(&format!("  - {date}\n"));
        }
    }
    out
}

/// Avertissements avant assignation : jours où toute l'équipe est bloquée.
pub fn render_blocked_days(days: &[BlockedDay]) -> String {
    let mut out = String::new();
    for day in days {
        out.push_str(&format!(
            "{}: all participants are blocked\n",
            day.date.format("%Y-%m-%d (%A)")
        ));
        for (name, reasons) in &day.blocked {
            let reasons: Vec<String> = reasons.iter().map(|r| reason_label(r, day.date)).collect();
            out.push_str(&format!("    {name}: {}\n", reasons.join(", ")));
        }
    }
    out
}

fn reason_label(reason: &BlockReason, date: NaiveDate) -> String {
    match reason {
        BlockReason::Weekday(_) => date.format("%A").to_string(),
        BlockReason::SpecificDate => "specific date".to_string(),
    }
}

use super::{util, Conflict, ConflictKind, Schedule};
use crate::model::Participant;
use chrono::NaiveDate;

/// Vérification a posteriori d'un planning contre les règles du moteur.
pub(super) fn detect_conflicts(schedule: &Schedule, participants: &[Participant]) -> Vec<Conflict> {
    let mut out = Vec::new();

    for (date, name) in &schedule.assignments {
        if !participants.iter().any(|p| &p.name == name) {
            out.push(conflict(name, *date, None, ConflictKind::UnknownParticipant));
        }
    }

    for person in participants {
        let dates: Vec<NaiveDate> = schedule
            .assignments
            .iter()
            .filter(|(_, name)| **name == person.name)
            .map(|(date, _)| *date)
            .collect();

        for (idx, a) in dates.iter().enumerate() {
            if person.blocks_weekday(*a) {
                out.push(conflict(&person.name, *a, None, ConflictKind::BlockedWeekday));
            }
            if person.blocks_date(*a) {
                out.push(conflict(&person.name, *a, None, ConflictKind::BlockedDate));
            }

            for b in dates.iter().skip(idx + 1) {
                if util::adjacent(*a, *b) {
                    out.push(conflict(&person.name, *a, Some(*b), ConflictKind::ConsecutiveDays));
                }
                if util::same_week(*a, *b) {
                    out.push(conflict(&person.name, *a, Some(*b), ConflictKind::SameWeek));
                }
            }
        }
    }

    out
}

fn conflict(name: &str, date: NaiveDate, other: Option<NaiveDate>, kind: ConflictKind) -> Conflict {
    Conflict {
        participant: name.to_string(),
        date,
        other,
        kind,
    }
}

use super::{util, AssignOptions, BlockReason, BlockedDay, Load, SchedError, Schedule};
use crate::model::{validate_participants, Participant};
use chrono::{Datelike, NaiveDate};

/// Passage glouton unique, dates en ordre chronologique.
///
/// Pour chaque date on retient, parmi les participants éligibles, celui dont la
/// charge ajustée est la plus faible ; départage par nombre de gardes puis par
/// ordre dans l'équipe. Une date sans candidat devient un trou.
///
/// Éligible : ni jour de semaine ni date bloqués, pas de garde la veille, pas
/// de garde dans la même semaine (dimanche → samedi).
pub(super) fn assign(
    dates: &[NaiveDate],
    participants: &[Participant],
    opts: AssignOptions,
) -> Result<Schedule, SchedError> {
    validate_participants(participants)?;
    if opts.fewer_shifts_factor == 0 {
        return Err(SchedError::Configuration(
            "fewer_shifts_factor must be >= 1".into(),
        ));
    }

    let mut history: Vec<Vec<NaiveDate>> = vec![Vec::new(); participants.len()];
    let mut schedule = Schedule::default();

    for date in util::chronological(dates) {
        let chosen = participants
            .iter()
            .zip(&history)
            .enumerate()
            .filter(|(_, (person, taken))| is_eligible(person, taken, date))
            .min_by_key(|(idx, (person, taken))| {
                (adjusted_load(person, taken.len(), opts), taken.len(), *idx)
            })
            .map(|(idx, _)| idx);

        match chosen {
            Some(idx) => {
                let name = &participants[idx].name;
                #[cfg(feature = "logging")]
                tracing::debug!(%date, participant = %name, count = history[idx].len() + 1, "assigned");
                history[idx].push(date);
                schedule.assignments.insert(date, name.clone());
            }
            None => {
                #[cfg(feature = "logging")]
                tracing::warn!(%date, "no eligible participant, leaving a gap");
                schedule.gaps.push(date);
            }
        }
    }

    schedule.loads = participants
        .iter()
        .zip(history)
        .map(|(person, dates)| Load {
            name: person.name.clone(),
            shifts: dates.len(),
            dates,
        })
        .collect();

    Ok(schedule)
}

fn is_eligible(person: &Participant, taken: &[NaiveDate], date: NaiveDate) -> bool {
    if person.blocks(date) {
        return false;
    }
    !taken
        .iter()
        .any(|prev| util::adjacent(*prev, date) || util::same_week(*prev, date))
}

/// Charge après la garde envisagée, mise à l'échelle : un participant
/// `fewer_shifts` paraît plus chargé dès sa première garde.
fn adjusted_load(person: &Participant, count: usize, opts: AssignOptions) -> u64 {
    let next = count as u64 + 1;
    if person.fewer_shifts {
        next * u64::from(opts.fewer_shifts_factor)
    } else {
        next
    }
}

/// Jours où aucun membre n'est disponible à cause de ses seuls blocages.
pub(super) fn blocked_days(dates: &[NaiveDate], participants: &[Participant]) -> Vec<BlockedDay> {
    if participants.is_empty() {
        return Vec::new();
    }
    util::chronological(dates)
        .into_iter()
        .filter(|date| participants.iter().all(|p| p.blocks(*date)))
        .map(|date| BlockedDay {
            date,
            blocked: participants
                .iter()
                .map(|p| (p.name.clone(), block_reasons(p, date)))
                .collect(),
        })
        .collect()
}

fn block_reasons(person: &Participant, date: NaiveDate) -> Vec<BlockReason> {
    let mut reasons = Vec::new();
    if person.blocks_weekday(date) {
        reasons.push(BlockReason::Weekday(date.weekday()));
    }
    if person.blocks_date(date) {
        reasons.push(BlockReason::SpecificDate);
    }
    reasons
}

use crate::scheduler::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Années acceptées pour une date bloquée.
pub const MIN_BLOCKED_YEAR: i32 = 1900;
pub const MAX_BLOCKED_YEAR: i32 = 2999;

/// Participant (membre de l'équipe de garde).
///
/// Les codes de jour suivent la convention 0 = lundi … 6 = dimanche.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked_weekdays: BTreeSet<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked_dates: BTreeSet<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fewer_shifts: bool,
}

impl Participant {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            blocked_weekdays: BTreeSet::new(),
            blocked_dates: BTreeSet::new(),
            fewer_shifts: false,
        }
    }

    pub fn with_blocked_weekdays<I: IntoIterator<Item = u8>>(mut self, codes: I) -> Self {
        self.blocked_weekdays.extend(codes);
        self
    }

    pub fn with_blocked_dates<I: IntoIterator<Item = NaiveDate>>(mut self, dates: I) -> Self {
        self.blocked_dates.extend(dates);
        self
    }

    pub fn with_fewer_shifts(mut self, fewer: bool) -> Self {
        self.fewer_shifts = fewer;
        self
    }

    /// Vrai si le jour de semaine de `date` est bloqué.
    pub fn blocks_weekday(&self, date: NaiveDate) -> bool {
        self.blocked_weekdays.contains(&weekday_code(date.weekday()))
    }

    /// Vrai si `date` figure dans les dates bloquées.
    pub fn blocks_date(&self, date: NaiveDate) -> bool {
        self.blocked_dates.contains(&date)
    }

    pub fn blocks(&self, date: NaiveDate) -> bool {
        self.blocks_weekday(date) || self.blocks_date(date)
    }

    /// Jours bloqués sous forme `chrono::Weekday` (codes invalides ignorés).
    pub fn blocked_weekdays_iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.blocked_weekdays
            .iter()
            .filter_map(|code| weekday_from_code(*code))
    }

    fn validate(&self) -> Result<(), SchedError> {
        if self.name.trim().is_empty() {
            return Err(SchedError::Configuration(
                "participant name cannot be empty".into(),
            ));
        }
        if let Some(code) = self.blocked_weekdays.iter().find(|c| **c > 6) {
            return Err(SchedError::Configuration(format!(
                "participant {}: weekday code {code} outside 0-6",
                self.name
            )));
        }
        if let Some(date) = self
            .blocked_dates
            .iter()
            .find(|d| !(MIN_BLOCKED_YEAR..=MAX_BLOCKED_YEAR).contains(&d.year()))
        {
            return Err(SchedError::Configuration(format!(
                "participant {}: blocked date {date} outside {MIN_BLOCKED_YEAR}-{MAX_BLOCKED_YEAR}",
                self.name
            )));
        }
        Ok(())
    }
}

/// Équipe complète, dans l'ordre de saisie (qui sert de départage).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    pub participants: Vec<Participant>,
}

impl Team {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn find<'a>(&'a self, name: &str) -> Option<&'a Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    pub fn fewer_shifts(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.fewer_shifts)
    }

    /// Vérifie noms non vides et uniques, codes de jour et bornes des dates.
    pub fn validate(&self) -> Result<(), SchedError> {
        validate_participants(&self.participants)
    }
}

pub(crate) fn validate_participants(participants: &[Participant]) -> Result<(), SchedError> {
    let mut seen = HashSet::new();
    for p in participants {
        p.validate()?;
        if !seen.insert(p.name.as_str()) {
            return Err(SchedError::Configuration(format!(
                "duplicate participant name: {}",
                p.name
            )));
        }
    }
    Ok(())
}

/// 0 = lundi … 6 = dimanche.
pub fn weekday_code(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

pub fn weekday_from_code(code: u8) -> Option<Weekday> {
    match code {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

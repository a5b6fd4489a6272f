use chrono::{NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Options d'assignation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    /// Multiplicateur appliqué au compteur d'un participant `fewer_shifts`
    /// avant comparaison des charges (>= 1).
    pub fewer_shifts_factor: u32,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            fewer_shifts_factor: 2,
        }
    }
}

/// Charge finale d'un participant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Load {
    pub name: String,
    pub shifts: usize,
    pub dates: Vec<NaiveDate>,
}

/// Résultat d'un passage du moteur : assignations, trous et charges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub assignments: BTreeMap<NaiveDate, String>,
    pub gaps: Vec<NaiveDate>,
    /// Dans l'ordre de l'équipe.
    pub loads: Vec<Load>,
}

impl Schedule {
    pub fn assignee(&self, date: NaiveDate) -> Option<&str> {
        self.assignments.get(&date).map(String::as_str)
    }

    pub fn shift_count(&self, name: &str) -> usize {
        self.loads
            .iter()
            .find(|l| l.name == name)
            .map_or(0, |l| l.shifts)
    }

    pub fn dates_for(&self, name: &str) -> &[NaiveDate] {
        self.loads
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.dates.as_slice())
            .unwrap_or_default()
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }

    pub fn total_assigned(&self) -> usize {
        self.assignments.len()
    }
}

/// Raison pour laquelle une personne est indisponible un jour donné.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    Weekday(Weekday),
    SpecificDate,
}

/// Jour ouvrable où toute l'équipe est bloquée avant même l'assignation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedDay {
    pub date: NaiveDate,
    pub blocked: Vec<(String, Vec<BlockReason>)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    ConsecutiveDays,
    SameWeek,
    BlockedWeekday,
    BlockedDate,
    UnknownParticipant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub participant: String,
    pub date: NaiveDate,
    /// Autre garde impliquée (jours consécutifs / même semaine).
    pub other: Option<NaiveDate>,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid calendar input: {year}-{month:02} is not a real month")]
    InvalidCalendarInput { year: i32, month: u32 },
    #[error("configuration error: {0}")]
    Configuration(String),
}

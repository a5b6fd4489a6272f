mod assignment;
mod conflicts;
mod types;
mod util;

pub use types::{
    AssignOptions, BlockReason, BlockedDay, Conflict, ConflictKind, Load, SchedError, Schedule,
};

use crate::calendar;
use crate::model::{Participant, Team};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Assigne une personne par date ouvrable avec les options par défaut.
pub fn assign(dates: &[NaiveDate], participants: &[Participant]) -> Result<Schedule, SchedError> {
    assignment::assign(dates, participants, AssignOptions::default())
}

pub fn assign_with(
    dates: &[NaiveDate],
    participants: &[Participant],
    opts: AssignOptions,
) -> Result<Schedule, SchedError> {
    assignment::assign(dates, participants, opts)
}

/// Scheduler : une équipe et ses options, réutilisable d'un mois à l'autre
#[derive(Debug, Default)]
pub struct Scheduler {
    team: Team,
    opts: AssignOptions,
}

impl Scheduler {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            opts: AssignOptions::default(),
        }
    }

    pub fn with_options(mut self, opts: AssignOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn options(&self) -> AssignOptions {
        self.opts
    }

    pub fn assign(&self, dates: &[NaiveDate]) -> Result<Schedule, SchedError> {
        assignment::assign(dates, &self.team.participants, self.opts)
    }

    /// Résout le mois puis assigne ; l'équipe est validée avant tout calcul.
    pub fn plan(
        &self,
        year: i32,
        month: u32,
        excluded: &BTreeSet<NaiveDate>,
    ) -> Result<Schedule, SchedError> {
        self.team.validate()?;
        let dates = calendar::resolve(year, month, excluded)?;
        self.assign(&dates)
    }

    pub fn blocked_days(&self, dates: &[NaiveDate]) -> Vec<BlockedDay> {
        assignment::blocked_days(dates, &self.team.participants)
    }

    pub fn detect_conflicts(&self, schedule: &Schedule) -> Vec<Conflict> {
        conflicts::detect_conflicts(schedule, &self.team.participants)
    }
}

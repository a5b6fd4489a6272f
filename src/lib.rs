#![forbid(unsafe_code)]
//! Roulement — répartition mensuelle des gardes (dimanche → jeudi) sans BD.
//!
//! - Résolution des jours ouvrables d'un mois, jours fériés exclus.
//! - Assignation gloutonne équitable : pas de jours consécutifs, une garde par
//!   semaine (dimanche → samedi), participants « moins de gardes » pondérés.
//! - Les jours sans candidat sont rendus comme trous, jamais comme erreurs.
//! - Équipe en CSV/JSON hors du cœur (feature `serde`).

pub mod calendar;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;

pub use calendar::{resolve, week_start};
pub use model::{Participant, Team};
pub use scheduler::{
    assign, assign_with, AssignOptions, BlockedDay, Conflict, ConflictKind, Load, SchedError,
    Schedule, Scheduler,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};

//! Team infrastructure implementations

mod service;

pub use service::{DeleteOutcome, TeamService, UpdateOutcome};

//! Domain layer - Core business logic and entities

pub mod error;
pub mod team;

pub use error::DomainError;
pub use team::{Team, TeamFields, TeamId};

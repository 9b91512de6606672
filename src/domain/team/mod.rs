//! Team domain: the entity, its validation rules, ID generation and the
//! store it lives in

mod entity;
mod id_generator;
mod store;
mod validation;

pub use entity::{Team, TeamFields, TeamId};
pub use id_generator::{IdGenerator, IdStrategy, SequentialIdGenerator, UuidIdGenerator};
pub use store::{DeleteResult, TeamFilter, TeamStore, UpdateResult};
pub use validation::{
    is_truthy, validate_required_fields, validate_team_id, TeamValidationError, MISSING_PARAMETERS,
};

#[cfg(test)]
pub use store::MockTeamStore;

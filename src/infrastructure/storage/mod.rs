//! Storage infrastructure - Team store implementations

mod factory;
mod in_memory;
mod mongo;

pub use factory::{StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryTeamStore;
pub use mongo::{MongoConfig, MongoTeamStore};

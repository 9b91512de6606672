//! Storage factory for runtime store selection

use std::sync::Arc;

use tracing::warn;

use crate::domain::team::TeamStore;
use crate::domain::DomainError;

use super::in_memory::InMemoryTeamStore;
use super::mongo::{MongoConfig, MongoTeamStore};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// MongoDB storage
    MongoDb,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "mongodb" | "mongo" => Some(Self::MongoDb),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// MongoDB storage configuration
    MongoDb(MongoConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a MongoDB storage configuration
    pub fn mongodb(config: MongoConfig) -> Self {
        Self::MongoDb(config)
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::MongoDb(_) => StorageType::MongoDb,
        }
    }
}

/// Factory for creating team stores
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a team store based on the configuration
    pub async fn create(config: &StorageConfig) -> Result<Arc<dyn TeamStore>, DomainError> {
        match config {
            StorageConfig::InMemory => {
                warn!("Using in-memory team store; data will not survive a restart");
                Ok(Arc::new(InMemoryTeamStore::new()))
            }
            StorageConfig::MongoDb(mongo_config) => {
                let store = MongoTeamStore::connect(mongo_config).await?;
                Ok(Arc::new(store))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("in-memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("In_Memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("mongodb"), Some(StorageType::MongoDb));
        assert_eq!(StorageType::from_str("mongo"), Some(StorageType::MongoDb));
        assert_eq!(StorageType::from_str("postgres"), None);
    }

    #[test]
    fn test_storage_config_type() {
        assert_eq!(StorageConfig::in_memory().storage_type(), StorageType::InMemory);
        assert_eq!(
            StorageConfig::mongodb(MongoConfig::default()).storage_type(),
            StorageType::MongoDb
        );
    }

    #[tokio::test]
    async fn test_create_in_memory() {
        let store = StorageFactory::create(&StorageConfig::in_memory())
            .await
            .unwrap();
        assert!(store.ping().await.is_ok());
    }
}

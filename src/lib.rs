//! Team Registry
//!
//! A small HTTP service that keeps a registry of esports teams:
//! - CRUD endpoints under `/api/teams`
//! - MongoDB or in-memory team storage
//! - Sequential or UUID team identifiers

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::StorageSettings;
use domain::DomainError;
use infrastructure::{
    storage::{MongoConfig, StorageConfig, StorageFactory, StorageType},
    team::TeamService,
};
use tracing::info;

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = storage_config(&config.storage)?;
    info!("Storage backend: {:?}", storage_config.storage_type());

    let store = StorageFactory::create(&storage_config).await?;

    info!(strategy = ?config.ids.strategy, "Team id strategy");
    let team_service = TeamService::with_id_generator(store, config.ids.strategy.build());

    Ok(AppState::new(Arc::new(team_service)))
}

fn storage_config(settings: &StorageSettings) -> Result<StorageConfig, DomainError> {
    let backend = StorageType::from_str(&settings.backend).ok_or_else(|| {
        DomainError::configuration(format!("Unknown storage backend: {}", settings.backend))
    })?;

    Ok(match backend {
        StorageType::InMemory => StorageConfig::in_memory(),
        StorageType::MongoDb => StorageConfig::mongodb(
            MongoConfig::new(&settings.mongodb.uri)
                .with_database(&settings.mongodb.database)
                .with_collection(&settings.mongodb.collection),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TeamFields;

    fn memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.backend = "memory".to_string();
        config
    }

    #[test]
    fn test_storage_config_for_mongodb() {
        let config = storage_config(&StorageSettings::default()).unwrap();
        assert_eq!(config.storage_type(), StorageType::MongoDb);
    }

    #[test]
    fn test_storage_config_unknown_backend() {
        let mut settings = StorageSettings::default();
        settings.backend = "cassandra".to_string();

        let err = storage_config(&settings).unwrap_err();
        assert!(err.to_string().contains("cassandra"));
    }

    #[tokio::test]
    async fn test_create_app_state_with_memory_backend() {
        let state = create_app_state_with_config(&memory_config()).await.unwrap();

        state.team_service.ping().await.unwrap();
        let team = state
            .team_service
            .create(TeamFields {
                name: Some(serde_json::json!("Fnatic")),
                logo: Some(serde_json::json!("fnatic.png")),
                wr: Some(serde_json::json!(0.61)),
                country: Some(serde_json::json!("UK")),
            })
            .await
            .unwrap();
        assert_eq!(team.id().as_str(), "1");
        assert_eq!(state.team_service.list().await.unwrap().len(), 1);
    }
}

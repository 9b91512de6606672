//! Application state for shared services

use std::sync::Arc;

use crate::domain::team::TeamStore;
use crate::domain::{DomainError, Team, TeamFields};
use crate::infrastructure::team::{DeleteOutcome, TeamService, UpdateOutcome};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
}

impl AppState {
    pub fn new(team_service: Arc<dyn TeamServiceTrait>) -> Self {
        Self { team_service }
    }
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn create(&self, fields: TeamFields) -> Result<Team, DomainError>;
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Team>, DomainError>;
    async fn delete(&self, id: &str) -> Result<DeleteOutcome, DomainError>;
    async fn update(&self, id: &str, fields: TeamFields) -> Result<UpdateOutcome, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<S: TeamStore + ?Sized + 'static> TeamServiceTrait for TeamService<S> {
    async fn create(&self, fields: TeamFields) -> Result<Team, DomainError> {
        TeamService::create(self, fields).await
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        TeamService::list(self).await
    }

    async fn get(&self, id: &str) -> Result<Option<Team>, DomainError> {
        TeamService::get(self, id).await
    }

    async fn delete(&self, id: &str) -> Result<DeleteOutcome, DomainError> {
        TeamService::delete(self, id).await
    }

    async fn update(&self, id: &str, fields: TeamFields) -> Result<UpdateOutcome, DomainError> {
        TeamService::update(self, id, fields).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        TeamService::ping(self).await
    }
}

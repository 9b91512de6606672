//! In-memory team store

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::team::{DeleteResult, Team, TeamFields, TeamFilter, TeamStore, UpdateResult};
use crate::domain::DomainError;

/// Thread-safe in-memory team store
///
/// Keeps documents in insertion order and assigns each one a store ID, the
/// way a document database would. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryTeamStore {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with teams
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams: RwLock::new(teams.into_iter().map(assign_store_id).collect()),
        }
    }
}

fn assign_store_id(team: Team) -> Team {
    if team.store_id().is_some() {
        return team;
    }

    team.with_store_id(uuid::Uuid::new_v4().simple().to_string())
}

#[async_trait]
impl TeamStore for InMemoryTeamStore {
    async fn insert_one(&self, team: Team) -> Result<(), DomainError> {
        let mut teams = self.teams.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        teams.push(assign_store_id(team));
        Ok(())
    }

    async fn find(&self, filter: &TeamFilter) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(teams.iter().filter(|t| filter.matches(t)).cloned().collect())
    }

    async fn find_one(&self, filter: &TeamFilter) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(teams.iter().find(|t| filter.matches(t)).cloned())
    }

    async fn update_one(
        &self,
        filter: &TeamFilter,
        fields: TeamFields,
    ) -> Result<UpdateResult, DomainError> {
        let mut teams = self.teams.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let Some(team) = teams.iter_mut().find(|t| filter.matches(t)) else {
            return Ok(UpdateResult::default());
        };

        // Setting a field to its current value is not a modification
        if team.fields() == fields {
            return Ok(UpdateResult {
                matched_count: 1,
                modified_count: 0,
            });
        }

        team.apply(fields);
        Ok(UpdateResult {
            matched_count: 1,
            modified_count: 1,
        })
    }

    async fn delete_one(&self, filter: &TeamFilter) -> Result<DeleteResult, DomainError> {
        let mut teams = self.teams.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match teams.iter().position(|t| filter.matches(t)) {
            Some(index) => {
                teams.remove(index);
                Ok(DeleteResult { deleted_count: 1 })
            }
            None => Ok(DeleteResult::default()),
        }
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.teams
            .read()
            .map(|_| ())
            .map_err(|e| DomainError::storage(format!("Store lock poisoned: {}", e)))
    }
}

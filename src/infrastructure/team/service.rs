//! Team service: the CRUD protocols over a team store

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{
    validate_required_fields, IdGenerator, SequentialIdGenerator, Team, TeamFields, TeamFilter,
    TeamId, TeamStore, MISSING_PARAMETERS,
};
use crate::domain::DomainError;

/// Result of a delete that reached the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Result of an update that reached the store
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// Fields were changed; carries the re-fetched document, which may have
    /// disappeared in the meantime
    Updated(Option<Team>),
    NotFound,
    /// The store matched the team but changed nothing
    NotModified,
}

/// Team service for managing teams
#[derive(Debug)]
pub struct TeamService<S: TeamStore + ?Sized> {
    store: Arc<S>,
    ids: Box<dyn IdGenerator>,
}

impl<S: TeamStore + ?Sized> TeamService<S> {
    /// Create a service numbering teams from "1"
    pub fn new(store: Arc<S>) -> Self {
        Self::with_id_generator(store, Box::new(SequentialIdGenerator::new()))
    }

    /// Create a service with a custom ID source
    pub fn with_id_generator(store: Arc<S>, ids: Box<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Validate, assign the next ID, insert
    pub async fn create(&self, fields: TeamFields) -> Result<Team, DomainError> {
        if let Err(e) = validate_required_fields(&fields) {
            debug!(reason = %e, "Rejecting team creation");
            return Err(DomainError::validation(MISSING_PARAMETERS));
        }

        let team = Team::new(self.ids.next(), fields);
        info!(id = %team.id(), "Creating team");

        self.store.insert_one(team.clone()).await?;
        Ok(team)
    }

    /// All teams, in store order
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        debug!("Listing teams");
        self.store.find(&TeamFilter::all()).await
    }

    /// Look a team up by its logical ID
    pub async fn get(&self, id: &str) -> Result<Option<Team>, DomainError> {
        debug!(id = %id, "Getting team");

        // An empty ID can never have been assigned
        let Ok(team_id) = TeamId::new(id) else {
            return Ok(None);
        };

        self.store.find_one(&TeamFilter::by_id(team_id)).await
    }

    /// Look the team up, then delete it.
    ///
    /// The outcome follows the delete count rather than the lookup, so a team
    /// removed between the two steps still reports `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, DomainError> {
        let filter = parse_filter(id)?;
        info!(id = %id, "Deleting team");

        if self.store.find_one(&filter).await?.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let result = self
            .store
            .delete_one(&filter)
            .await
            .map_err(|e| DomainError::write(e.to_string()))?;

        if result.deleted_count > 0 {
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }

    /// Look the team up, overwrite its fields, then re-fetch it.
    ///
    /// Fields missing from `fields` are cleared. A write that changes nothing,
    /// including one that repeats the stored values, is `NotModified`.
    pub async fn update(&self, id: &str, fields: TeamFields) -> Result<UpdateOutcome, DomainError> {
        let filter = parse_filter(id)?;
        info!(id = %id, "Updating team");

        if self.store.find_one(&filter).await?.is_none() {
            return Ok(UpdateOutcome::NotFound);
        }

        let result = self
            .store
            .update_one(&filter, fields)
            .await
            .map_err(|e| DomainError::write(e.to_string()))?;

        if result.modified_count == 0 {
            return Ok(UpdateOutcome::NotModified);
        }

        let team = self.store.find_one(&filter).await?;
        Ok(UpdateOutcome::Updated(team))
    }

    /// Check the store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }
}

fn parse_filter(id: &str) -> Result<TeamFilter, DomainError> {
    let team_id = TeamId::new(id).map_err(|e| DomainError::validation(e.to_string()))?;
    Ok(TeamFilter::by_id(team_id))
}

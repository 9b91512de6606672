//! Team store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Team, TeamFields, TeamId};
use crate::domain::DomainError;

/// Document filter for team queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    /// Match on the logical team ID
    pub id: Option<TeamId>,
}

impl TeamFilter {
    /// Matches every team
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches the team with the given logical ID
    pub fn by_id(id: TeamId) -> Self {
        Self { id: Some(id) }
    }

    pub fn matches(&self, team: &Team) -> bool {
        match &self.id {
            Some(id) => team.id() == id,
            None => true,
        }
    }
}

/// Outcome of an `update_one` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Outcome of a `delete_one` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Document collection holding team records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamStore: Send + Sync + std::fmt::Debug {
    /// Insert a new team document
    async fn insert_one(&self, team: Team) -> Result<(), DomainError>;

    /// All teams matching the filter, in the store's natural order
    async fn find(&self, filter: &TeamFilter) -> Result<Vec<Team>, DomainError>;

    /// First team matching the filter
    async fn find_one(&self, filter: &TeamFilter) -> Result<Option<Team>, DomainError>;

    /// Set the replaceable fields of the first matching team
    async fn update_one(
        &self,
        filter: &TeamFilter,
        fields: TeamFields,
    ) -> Result<UpdateResult, DomainError>;

    /// Remove the first matching team
    async fn delete_one(&self, filter: &TeamFilter) -> Result<DeleteResult, DomainError>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}

//! MongoDB team store

use std::fmt::Debug;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::domain::team::{DeleteResult, Team, TeamFields, TeamFilter, TeamStore, UpdateResult};
use crate::domain::DomainError;

/// MongoDB connection settings
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string
    pub uri: String,
    /// Database holding the team collection
    pub database: String,
    /// Collection name
    pub collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "teams".to_string(),
            collection: "teams".to_string(),
        }
    }
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }
}

/// Team store backed by a MongoDB collection.
///
/// The client pools connections internally, so one instance is shared by all
/// requests.
pub struct MongoTeamStore {
    client: Client,
    collection: Collection<Document>,
}

impl Debug for MongoTeamStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoTeamStore")
            .field("collection", &self.collection.name())
            .finish()
    }
}

impl MongoTeamStore {
    /// Wrap an existing client
    pub fn new(client: Client, config: &MongoConfig) -> Self {
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        Self { client, collection }
    }

    /// Connect and verify the server answers a ping
    pub async fn connect(config: &MongoConfig) -> Result<Self, DomainError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to MongoDB: {}", e)))?;

        let store = Self::new(client, config);
        store.ping().await?;

        info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        Ok(store)
    }
}

#[async_trait]
impl TeamStore for MongoTeamStore {
    async fn insert_one(&self, team: Team) -> Result<(), DomainError> {
        let document = team_to_document(&team)?;

        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(|e| DomainError::storage(format!("MongoDB insert failed: {}", e)))?;

        debug!(id = %team.id(), inserted_id = %result.inserted_id, "Inserted team document");
        Ok(())
    }

    async fn find(&self, filter: &TeamFilter) -> Result<Vec<Team>, DomainError> {
        let cursor = self
            .collection
            .find(filter_document(filter))
            .await
            .map_err(|e| DomainError::storage(format!("MongoDB find failed: {}", e)))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| DomainError::storage(format!("MongoDB cursor failed: {}", e)))?;

        documents.into_iter().map(document_to_team).collect()
    }

    async fn find_one(&self, filter: &TeamFilter) -> Result<Option<Team>, DomainError> {
        let document = self
            .collection
            .find_one(filter_document(filter))
            .await
            .map_err(|e| DomainError::storage(format!("MongoDB findOne failed: {}", e)))?;

        document.map(document_to_team).transpose()
    }

    async fn update_one(
        &self,
        filter: &TeamFilter,
        fields: TeamFields,
    ) -> Result<UpdateResult, DomainError> {
        let result = self
            .collection
            .update_one(filter_document(filter), set_document(&fields)?)
            .await
            .map_err(|e| DomainError::storage(format!("MongoDB updateOne failed: {}", e)))?;

        Ok(UpdateResult {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_one(&self, filter: &TeamFilter) -> Result<DeleteResult, DomainError> {
        let result = self
            .collection
            .delete_one(filter_document(filter))
            .await
            .map_err(|e| DomainError::storage(format!("MongoDB deleteOne failed: {}", e)))?;

        Ok(DeleteResult {
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| DomainError::storage(format!("MongoDB ping failed: {}", e)))
    }
}

fn filter_document(filter: &TeamFilter) -> Document {
    match &filter.id {
        Some(id) => doc! { "id": id.as_str() },
        None => doc! {},
    }
}

fn set_document(fields: &TeamFields) -> Result<Document, DomainError> {
    let fields = bson::to_document(fields)
        .map_err(|e| DomainError::internal(format!("Failed to encode team fields: {}", e)))?;

    Ok(doc! { "$set": fields })
}

fn team_to_document(team: &Team) -> Result<Document, DomainError> {
    bson::to_document(team)
        .map_err(|e| DomainError::internal(format!("Failed to encode team: {}", e)))
}

/// Decode a stored document, rendering `_id` as a plain string
fn document_to_team(mut document: Document) -> Result<Team, DomainError> {
    let store_id = document.remove("_id").map(|id| match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    });

    let team: Team = bson::from_document(document)
        .map_err(|e| DomainError::storage(format!("Malformed team document: {}", e)))?;

    Ok(match store_id {
        Some(id) => team.with_store_id(id),
        None => team,
    })
}

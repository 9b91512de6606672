//! Team entity and related types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::{validate_team_id, TeamValidationError};

/// Logical team identifier assigned by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(pub(super) String);

impl TeamId {
    /// Create a new TeamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, TeamValidationError> {
        let id = id.into();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The replaceable part of a team.
///
/// Values are free-form JSON. A `None` field means "no value" and is stored as
/// `null`, which is how an update that omits a field clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamFields {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub logo: Option<Value>,
    #[serde(default)]
    pub wr: Option<Value>,
    #[serde(default)]
    pub country: Option<Value>,
}

/// A team document as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    store_id: Option<String>,
    id: TeamId,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    logo: Option<Value>,
    #[serde(default)]
    wr: Option<Value>,
    #[serde(default)]
    country: Option<Value>,
}

impl Team {
    /// Create a team that has not been persisted yet
    pub fn new(id: TeamId, fields: TeamFields) -> Self {
        Self {
            store_id: None,
            id,
            name: fields.name,
            logo: fields.logo,
            wr: fields.wr,
            country: fields.country,
        }
    }

    /// Attach the identifier the store assigned to this document
    pub fn with_store_id(mut self, store_id: impl Into<String>) -> Self {
        self.store_id = Some(store_id.into());
        self
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn store_id(&self) -> Option<&str> {
        self.store_id.as_deref()
    }

    pub fn name(&self) -> Option<&Value> {
        self.name.as_ref()
    }

    pub fn logo(&self) -> Option<&Value> {
        self.logo.as_ref()
    }

    pub fn wr(&self) -> Option<&Value> {
        self.wr.as_ref()
    }

    pub fn country(&self) -> Option<&Value> {
        self.country.as_ref()
    }

    /// Snapshot of the replaceable fields
    pub fn fields(&self) -> TeamFields {
        TeamFields {
            name: self.name.clone(),
            logo: self.logo.clone(),
            wr: self.wr.clone(),
            country: self.country.clone(),
        }
    }

    /// Replace every field except the identifiers
    pub fn apply(&mut self, fields: TeamFields) {
        self.name = fields.name;
        self.logo = fields.logo;
        self.wr = fields.wr;
        self.country = fields.country;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> TeamFields {
        TeamFields {
            name: Some(json!("G2")),
            logo: Some(json!("g2.svg")),
            wr: Some(json!(0.58)),
            country: Some(json!("DE")),
        }
    }

    #[test]
    fn test_team_id_rejects_empty() {
        assert!(TeamId::new("").is_err());
        assert_eq!(TeamId::new("7").unwrap().as_str(), "7");
    }

    #[test]
    fn test_team_serialization_without_store_id() {
        let team = Team::new(TeamId::new("1").unwrap(), fields());
        let value = serde_json::to_value(&team).unwrap();

        assert_eq!(
            value,
            json!({"id": "1", "name": "G2", "logo": "g2.svg", "wr": 0.58, "country": "DE"})
        );
    }

    #[test]
    fn test_team_serialization_with_store_id() {
        let team = Team::new(TeamId::new("1").unwrap(), fields()).with_store_id("abc123");
        let json = serde_json::to_string(&team).unwrap();

        assert!(json.starts_with("{\"_id\":\"abc123\",\"id\":\"1\""));
    }

    #[test]
    fn test_cleared_fields_serialize_as_null() {
        let mut team = Team::new(TeamId::new("1").unwrap(), fields());
        team.apply(TeamFields {
            name: Some(json!("G2 Esports")),
            ..Default::default()
        });

        let value = serde_json::to_value(&team).unwrap();
        assert_eq!(value["name"], json!("G2 Esports"));
        assert_eq!(value["logo"], Value::Null);
        assert_eq!(value["wr"], Value::Null);
        assert_eq!(value["country"], Value::Null);
        assert_eq!(team.id().as_str(), "1");
    }

    #[test]
    fn test_team_deserialization_rejects_empty_id() {
        let result: Result<Team, _> = serde_json::from_value(json!({"id": "", "name": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_fields_roundtrip_through_team() {
        let team = Team::new(TeamId::new("3").unwrap(), fields());
        assert_eq!(team.fields(), fields());
        assert_eq!(team.name(), Some(&json!("G2")));
        assert_eq!(team.wr(), Some(&json!(0.58)));
        assert!(team.store_id().is_none());
    }
}

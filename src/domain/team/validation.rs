//! Team validation rules

use serde_json::Value;
use thiserror::Error;

use super::entity::TeamFields;

/// Message returned to clients when a create request lacks a field
pub const MISSING_PARAMETERS: &str = "Missing required parameters";

/// Team validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
}

/// Validate a logical team ID; any non-empty string is accepted
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    Ok(())
}

/// Every field must be present and truthy for a team to be created
pub fn validate_required_fields(fields: &TeamFields) -> Result<(), TeamValidationError> {
    if !fields.name.as_ref().is_some_and(is_truthy) {
        return Err(TeamValidationError::MissingField("name"));
    }

    if !fields.logo.as_ref().is_some_and(is_truthy) {
        return Err(TeamValidationError::MissingField("logo"));
    }

    if !fields.wr.as_ref().is_some_and(is_truthy) {
        return Err(TeamValidationError::MissingField("wr"));
    }

    if !fields.country.as_ref().is_some_and(is_truthy) {
        return Err(TeamValidationError::MissingField("country"));
    }

    Ok(())
}

/// JSON truthiness: `null`, `false`, `0`, NaN and `""` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> TeamFields {
        TeamFields {
            name: Some(json!("Fnatic")),
            logo: Some(json!("/logos/fnc.png")),
            wr: Some(json!("61%")),
            country: Some(json!("UK")),
        }
    }

    #[test]
    fn test_validate_team_id() {
        assert!(validate_team_id("1").is_ok());
        assert!(validate_team_id("a1b2-c3").is_ok());
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
    }

    #[test]
    fn test_complete_fields_are_valid() {
        assert!(validate_required_fields(&complete()).is_ok());
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        let mut fields = complete();
        fields.name = None;
        assert_eq!(
            validate_required_fields(&fields),
            Err(TeamValidationError::MissingField("name"))
        );

        let mut fields = complete();
        fields.logo = Some(json!(""));
        assert_eq!(
            validate_required_fields(&fields),
            Err(TeamValidationError::MissingField("logo"))
        );

        let mut fields = complete();
        fields.wr = Some(json!(0));
        assert_eq!(
            validate_required_fields(&fields),
            Err(TeamValidationError::MissingField("wr"))
        );

        let mut fields = complete();
        fields.country = None;
        assert_eq!(
            validate_required_fields(&fields),
            Err(TeamValidationError::MissingField("country"))
        );
    }

    #[test]
    fn test_non_string_values_are_accepted_when_truthy() {
        let mut fields = complete();
        fields.name = Some(json!(123));
        fields.country = Some(json!(["SE", "DK"]));
        assert!(validate_required_fields(&fields).is_ok());

        fields.logo = Some(json!(false));
        assert_eq!(
            validate_required_fields(&fields),
            Err(TeamValidationError::MissingField("logo"))
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(0.55)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}

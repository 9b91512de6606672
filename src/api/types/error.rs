//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Message sent for every server-side failure
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Plain-text body for a lookup that found nothing
pub const TEAM_NOT_FOUND: &str = "Team not found";

/// JSON error body: `{"success": false, "message": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
}

/// How an error is rendered; endpoints differ in what they send
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(ApiErrorResponse),
    Text(String),
    Empty,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    /// Error with a JSON body
    pub fn json(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody::Json(ApiErrorResponse {
                success: false,
                message: message.into(),
            }),
        }
    }

    /// Error with a plain-text body
    pub fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody::Text(message.into()),
        }
    }

    /// Error carrying only a status code
    pub fn status_only(status: StatusCode) -> Self {
        Self {
            status,
            body: ErrorBody::Empty,
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::json(StatusCode::BAD_REQUEST, message)
    }

    /// Internal server error with a JSON body
    pub fn internal() -> Self {
        Self::json(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }

    /// Internal server error with a plain-text body
    pub fn internal_text() -> Self {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }

    /// Not found with the plain-text team message
    pub fn team_not_found() -> Self {
        Self::text(StatusCode::NOT_FOUND, TEAM_NOT_FOUND)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.body {
            ErrorBody::Json(response) => (self.status, Json(response)).into_response(),
            ErrorBody::Text(message) => (self.status, message).into_response(),
            ErrorBody::Empty => self.status.into_response(),
        }
    }
}

/// JSON rendering; internal details never reach the client
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Storage { .. }
            | DomainError::Write { .. }
            | DomainError::Configuration { .. }
            | DomainError::Internal { .. } => Self::internal(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            ErrorBody::Json(response) => write!(f, "{}: {}", self.status, response.message),
            ErrorBody::Text(message) => write!(f, "{}: {}", self.status, message),
            ErrorBody::Empty => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

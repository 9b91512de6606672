//! Request and response types shared by the API handlers

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ErrorBody, INTERNAL_SERVER_ERROR, TEAM_NOT_FOUND};
pub use json::Json;

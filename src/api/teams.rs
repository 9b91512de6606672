//! Team CRUD endpoints under `/api/teams`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{DomainError, Team, TeamFields};
use crate::infrastructure::team::{DeleteOutcome, UpdateOutcome};

/// Body of create and update requests; every field is optional on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamApiRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub logo: Option<Value>,
    #[serde(default)]
    pub wr: Option<Value>,
    #[serde(default)]
    pub country: Option<Value>,
}

impl From<TeamApiRequest> for TeamFields {
    fn from(request: TeamApiRequest) -> Self {
        Self {
            name: request.name,
            logo: request.logo,
            wr: request.wr,
            country: request.country,
        }
    }
}

/// Response to a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamResponse {
    pub message: String,
    pub success: bool,
}

impl CreateTeamResponse {
    fn added() -> Self {
        Self {
            message: "Team added successfully".to_string(),
            success: true,
        }
    }
}

/// Response to a successful update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTeamResponse {
    pub team: Option<Team>,
    pub success: bool,
}

/// Routes for the team collection.
///
/// `/api/teams/` is routed so that update and delete without an ID answer 422
/// and a lookup without an ID answers 404.
pub fn create_teams_router() -> Router<AppState> {
    Router::new()
        .route("/api/teams", get(list_teams).post(create_team))
        .route(
            "/api/teams/",
            get(get_team_without_id)
                .patch(update_team_without_id)
                .delete(delete_team_without_id),
        )
        .route(
            "/api/teams/{id}",
            get(get_team).patch(update_team).delete(delete_team),
        )
}

fn log_failure(err: &DomainError, action: &str) {
    if err.is_validation() {
        debug!(error = %err, "Rejected {} request", action);
    } else {
        error!(error = %err, "Failed to {} team", action);
    }
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<TeamApiRequest>,
) -> Result<Json<CreateTeamResponse>, ApiError> {
    state
        .team_service
        .create(request.into())
        .await
        .map_err(|e| {
            log_failure(&e, "create");
            ApiError::from(e)
        })?;

    Ok(Json(CreateTeamResponse::added()))
}

/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = state.team_service.list().await.map_err(|e| {
        log_failure(&e, "list");
        ApiError::internal_text()
    })?;

    Ok(Json(teams))
}

/// GET /api/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    get_by_id(&state, &id).await
}

/// GET /api/teams/
pub async fn get_team_without_id(State(state): State<AppState>) -> Result<Json<Team>, ApiError> {
    get_by_id(&state, "").await
}

async fn get_by_id(state: &AppState, id: &str) -> Result<Json<Team>, ApiError> {
    let team = state.team_service.get(id).await.map_err(|e| {
        log_failure(&e, "get");
        ApiError::internal_text()
    })?;

    team.map(Json).ok_or_else(ApiError::team_not_found)
}

/// DELETE /api/teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete_by_id(&state, &id).await
}

/// DELETE /api/teams/
pub async fn delete_team_without_id(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    delete_by_id(&state, "").await
}

async fn delete_by_id(state: &AppState, id: &str) -> Result<StatusCode, ApiError> {
    match state.team_service.delete(id).await {
        Ok(DeleteOutcome::Deleted) => Ok(StatusCode::OK),
        Ok(DeleteOutcome::NotFound) => Err(ApiError::status_only(StatusCode::NOT_FOUND)),
        Err(e) => {
            log_failure(&e, "delete");

            match e {
                DomainError::Validation { .. } => {
                    Err(ApiError::status_only(StatusCode::UNPROCESSABLE_ENTITY))
                }
                DomainError::Write { .. } => {
                    Err(ApiError::status_only(StatusCode::INTERNAL_SERVER_ERROR))
                }
                _ => Err(ApiError::internal_text()),
            }
        }
    }
}

/// PATCH /api/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<TeamApiRequest>,
) -> Result<Json<UpdateTeamResponse>, ApiError> {
    update_by_id(&state, &id, request).await
}

/// PATCH /api/teams/
pub async fn update_team_without_id(
    State(state): State<AppState>,
    Json(request): Json<TeamApiRequest>,
) -> Result<Json<UpdateTeamResponse>, ApiError> {
    update_by_id(&state, "", request).await
}

async fn update_by_id(
    state: &AppState,
    id: &str,
    request: TeamApiRequest,
) -> Result<Json<UpdateTeamResponse>, ApiError> {
    match state.team_service.update(id, request.into()).await {
        Ok(UpdateOutcome::Updated(team)) => Ok(Json(UpdateTeamResponse {
            team,
            success: true,
        })),
        Ok(UpdateOutcome::NotFound) => Err(ApiError::status_only(StatusCode::NOT_FOUND)),
        Ok(UpdateOutcome::NotModified) => {
            debug!(id = %id, "Update matched but modified nothing");
            Err(ApiError::status_only(StatusCode::INTERNAL_SERVER_ERROR))
        }
        Err(e) => {
            log_failure(&e, "update");

            if e.is_validation() {
                Err(ApiError::status_only(StatusCode::UNPROCESSABLE_ENTITY))
            } else {
                Err(ApiError::status_only(StatusCode::INTERNAL_SERVER_ERROR))
            }
        }
    }
}

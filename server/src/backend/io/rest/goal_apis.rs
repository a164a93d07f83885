//! # REST API for Goal Management
//!
//! Endpoints for listing, creating, retrieving and replacing goals.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use log::{error, info, warn};

use crate::backend::domain::commands::goal::GetGoalCommand;
use crate::backend::domain::GoalServiceError;
use crate::backend::io::rest::mappers::goal_mapper::GoalMapper;
use crate::backend::AppState;
use shared::{CreateGoalRequest, UpdateGoalRequest};

/// Create a router for goal related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:id", get(get_goal).put(update_goal))
}

/// Map a service error to a status code and plain-text body
fn error_response(e: GoalServiceError) -> Response {
    let status = match &e {
        GoalServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        GoalServiceError::IdMismatch { .. } | GoalServiceError::Invalid(_) => StatusCode::BAD_REQUEST,
        GoalServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Goal request failed: {}", e);
    } else {
        warn!("Goal request rejected: {}", e);
    }
    (status, e.to_string()).into_response()
}

/// List all goals
pub async fn list_goals(State(state): State<AppState>) -> Response {
    info!("GET /api/goals");

    match state.goal_service.list_goals().await {
        Ok(result) => {
            let response = GoalMapper::to_goal_list_response(result.goals);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Create a new goal
pub async fn create_goal(
    State(state): State<AppState>,
    Json(request): Json<CreateGoalRequest>,
) -> Response {
    info!("POST /api/goals - request: {:?}", request);

    let command = GoalMapper::to_create_command(request);
    match state.goal_service.create_goal(command).await {
        Ok(result) => {
            let response = GoalMapper::to_goal_response(result.goal, Some(result.success_message));
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Get a single goal
pub async fn get_goal(State(state): State<AppState>, Path(goal_id): Path<String>) -> Response {
    info!("GET /api/goals/{}", goal_id);

    match state.goal_service.get_goal(GetGoalCommand { goal_id }).await {
        Ok(goal) => (StatusCode::OK, Json(GoalMapper::to_goal_response(goal, None))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Replace a goal with the full record in the request body
pub async fn update_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
    Json(request): Json<UpdateGoalRequest>,
) -> Response {
    info!("PUT /api/goals/{} - request: {:?}", goal_id, request);

    let command = GoalMapper::to_update_command(goal_id, request);
    match state.goal_service.update_goal(command).await {
        Ok(result) => {
            let response = GoalMapper::to_goal_response(result.goal, Some(result.success_message));
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

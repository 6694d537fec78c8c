//! Project submission proxy handler

use crate::api::proxy::passthrough;
use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::extract::State;
use axum::{Json, response::Response};
use error_location::ErrorLocation;
use serde_json::Value;

/// POST /api/v1/projects
///
/// Forward a project submission to the external backend.
pub async fn submit_project(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    let reply = state.upstream.submit_project(&body).await.map_err(|e| {
        log::error!("Project submission proxy failed: {e}");
        ApiError::Upstream {
            message: "Failed to submit project".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(passthrough(reply))
}

//! Visitor proxy handlers
//!
//! Visitor records live in the external backend; these handlers forward
//! the request and pass the upstream status and body through verbatim.
//! A transport failure becomes a 502 with a user-facing message — it is
//! caught here, never propagated.

use crate::api::proxy::passthrough;
use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::extract::{Path, State};
use axum::{Json, response::Response};
use error_location::ErrorLocation;
use serde_json::Value;

/// PUT /api/v1/visitors/:id
pub async fn update_visitor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    let reply = state
        .upstream
        .update_visitor(&id, &body)
        .await
        .map_err(|e| {
            log::error!("Visitor update proxy failed: {e}");
            ApiError::Upstream {
                message: "Failed to update visitor".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    Ok(passthrough(reply))
}

/// DELETE /api/v1/visitors/:id
pub async fn delete_visitor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let reply = state.upstream.delete_visitor(&id).await.map_err(|e| {
        log::error!("Visitor delete proxy failed: {e}");
        ApiError::Upstream {
            message: "Failed to delete visitor".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(passthrough(reply))
}

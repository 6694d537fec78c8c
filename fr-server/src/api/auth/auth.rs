//! Auth proxy handlers
//!
//! Account registration, verification and login are owned by the external
//! backend. Each handler is a single best-effort forward; upstream replies
//! pass through untouched.

use crate::api::proxy::passthrough;
use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::extract::State;
use axum::{Json, response::Response};
use error_location::ErrorLocation;
use serde_json::Value;

/// POST /api/v1/auth/register
pub async fn register_account(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    let reply = state.upstream.register_account(&body).await.map_err(|e| {
        log::error!("Account register proxy failed: {e}");
        ApiError::Upstream {
            message: "Failed to register account".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(passthrough(reply))
}

/// POST /api/v1/auth/verify
pub async fn verify_account(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    let reply = state.upstream.verify_account(&body).await.map_err(|e| {
        log::error!("Account verify proxy failed: {e}");
        ApiError::Upstream {
            message: "Failed to verify account".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(passthrough(reply))
}

/// POST /api/v1/auth/login
pub async fn login(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult<Response> {
    let reply = state.upstream.login(&body).await.map_err(|e| {
        log::error!("Login proxy failed: {e}");
        ApiError::Upstream {
            message: "Failed to log in".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(passthrough(reply))
}

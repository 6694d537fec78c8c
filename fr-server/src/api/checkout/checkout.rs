//! Checkout proxy handler
//!
//! Payment is a hand-off: the backend creates a checkout session with the
//! payment provider and replies with a redirect URL the UI follows.

use crate::api::proxy::passthrough;
use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::extract::State;
use axum::{Json, response::Response};
use error_location::ErrorLocation;
use serde_json::Value;

/// POST /api/v1/checkout/session
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    let reply = state
        .upstream
        .create_checkout_session(&body)
        .await
        .map_err(|e| {
            log::error!("Checkout session proxy failed: {e}");
            ApiError::Upstream {
                message: "Failed to create checkout session".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    Ok(passthrough(reply))
}

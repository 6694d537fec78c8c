use fr_client::UpstreamResponse;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Re-emit an upstream reply verbatim: same status code, same JSON body.
pub(crate) fn passthrough(reply: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(reply.body)).into_response()
}

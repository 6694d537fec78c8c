use crate::app_state::AppState;
use crate::health;

use crate::api::auth::auth::{login, register_account, verify_account};
use crate::api::checkout::checkout::create_checkout_session;
use crate::api::projects::projects::submit_project;
use crate::api::registrations::registrations::{
    accept_registration, create_registration, delete_registration, get_registration,
    list_registrations, trash_registration, untrash_registration,
};
use crate::api::visitors::visitors::{delete_visitor, update_visitor};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Registration lifecycle
        .route(
            "/api/v1/registrations",
            post(create_registration).get(list_registrations),
        )
        .route(
            "/api/v1/registrations/{id}",
            get(get_registration).delete(delete_registration),
        )
        .route("/api/v1/registrations/{id}/accept", post(accept_registration))
        .route("/api/v1/registrations/{id}/trash", post(trash_registration))
        .route(
            "/api/v1/registrations/{id}/untrash",
            post(untrash_registration),
        )
        // Proxy routes to the external backend
        .route(
            "/api/v1/visitors/{id}",
            put(update_visitor).delete(delete_visitor),
        )
        .route("/api/v1/auth/register", post(register_account))
        .route("/api/v1/auth/verify", post(verify_account))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/projects", post(submit_project))
        .route("/api/v1/checkout/session", post(create_checkout_session))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (the intake form is served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

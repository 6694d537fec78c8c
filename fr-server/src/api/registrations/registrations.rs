//! Registration REST API handlers
//!
//! Thin HTTP wrappers around the registration store: the store signals
//! absence with `None`/`false`, and these handlers turn that into 404s.

use crate::{
    AcceptResponse, ApiError, ApiResult, AppState, DeleteResponse, RegistrationDto,
    RegistrationListResponse, RegistrationResponse, TrashResponse,
};

use fr_core::RegistrationInput;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/registrations
///
/// Create a registration from the full intake payload. The payload is taken
/// as given; field-level validation happens in the intake form.
pub async fn create_registration(
    State(state): State<AppState>,
    Json(input): Json<RegistrationInput>,
) -> ApiResult<Json<RegistrationResponse>> {
    let mut store = state.store_write()?;
    let registration = store.create(input);

    log::info!("Created registration {} via REST API", registration.id);

    Ok(Json(RegistrationResponse {
        registration: registration.into(),
    }))
}

/// GET /api/v1/registrations
///
/// List all registrations, newest first, trashed ones included.
pub async fn list_registrations(
    State(state): State<AppState>,
) -> ApiResult<Json<RegistrationListResponse>> {
    let store = state.store_read()?;

    Ok(Json(RegistrationListResponse {
        registrations: store.list().into_iter().map(RegistrationDto::from).collect(),
    }))
}

/// GET /api/v1/registrations/:id
///
/// Get a single registration by ID
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RegistrationResponse>> {
    let registration_id = Uuid::parse_str(&id)?;

    let store = state.store_read()?;
    let registration = store
        .get(registration_id)
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Registration {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(RegistrationResponse {
        registration: registration.into(),
    }))
}

/// POST /api/v1/registrations/:id/accept
///
/// Accept a registration and grant it a user identity.
pub async fn accept_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AcceptResponse>> {
    let registration_id = Uuid::parse_str(&id)?;

    let mut store = state.store_write()?;
    let credentials = store
        .accept(registration_id)
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Registration {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Accepted registration {} via REST API", id);

    Ok(Json(credentials.into()))
}

/// POST /api/v1/registrations/:id/trash
///
/// Soft-delete a registration. Re-trashing refreshes the timestamp.
pub async fn trash_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TrashResponse>> {
    let registration_id = Uuid::parse_str(&id)?;

    let mut store = state.store_write()?;
    if !store.trash(registration_id) {
        return Err(ApiError::NotFound {
            message: format!("Registration {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(TrashResponse { id, trashed: true }))
}

/// POST /api/v1/registrations/:id/untrash
///
/// Restore a soft-deleted registration.
pub async fn untrash_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TrashResponse>> {
    let registration_id = Uuid::parse_str(&id)?;

    let mut store = state.store_write()?;
    if !store.untrash(registration_id) {
        return Err(ApiError::NotFound {
            message: format!("Registration {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(TrashResponse { id, trashed: false }))
}

/// DELETE /api/v1/registrations/:id
///
/// Permanently delete a registration regardless of acceptance or trash
/// state. Irreversible.
pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let registration_id = Uuid::parse_str(&id)?;

    let mut store = state.store_write()?;
    if !store.remove(registration_id) {
        return Err(ApiError::NotFound {
            message: format!("Registration {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted registration {} via REST API", id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}

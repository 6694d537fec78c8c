pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::auth::{login, register_account, verify_account},
    checkout::checkout::create_checkout_session,
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    projects::projects::submit_project,
    registrations::{
        accept_response::AcceptResponse,
        registration_dto::RegistrationDto,
        registration_list_response::RegistrationListResponse,
        registration_response::RegistrationResponse,
        registrations::{
            accept_registration, create_registration, delete_registration, get_registration,
            list_registrations, trash_registration, untrash_registration,
        },
        trash_response::TrashResponse,
    },
    visitors::visitors::{delete_visitor, update_visitor},
};

pub use crate::app_state::{AppState, SharedStore};
pub use crate::error::ServerError;
pub use crate::routes::build_router;

//! Shared application state for the HTTP handlers.

use crate::{ApiError, ApiResult};

use fr_client::UpstreamClient;
use fr_store::RegistrationStore;

use std::panic::Location;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use error_location::ErrorLocation;

/// The store itself is synchronous single-writer state; the lock exists only
/// because axum shares state across handler invocations. Guards are never
/// held across an await point.
pub type SharedStore = Arc<RwLock<Box<dyn RegistrationStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(store: Box<dyn RegistrationStore>, upstream: UpstreamClient) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            upstream: Arc::new(upstream),
        }
    }

    #[track_caller]
    pub fn store_read(&self) -> ApiResult<RwLockReadGuard<'_, Box<dyn RegistrationStore>>> {
        self.store.read().map_err(|_| ApiError::Internal {
            message: "registration store lock poisoned".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn store_write(&self) -> ApiResult<RwLockWriteGuard<'_, Box<dyn RegistrationStore>>> {
        self.store.write().map_err(|_| ApiError::Internal {
            message: "registration store lock poisoned".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

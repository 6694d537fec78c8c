use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from talking to the external backend.
///
/// Only transport problems surface here (connect failure, timeout,
/// malformed response stream). Non-success HTTP statuses are NOT errors:
/// the proxy passes them through to the caller untouched.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

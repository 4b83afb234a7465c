use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures of the catalog fetch component.
///
/// `NotFound` and `NetworkFailure` are the two outcomes the page layer renders;
/// `InvalidRequest` means the request could not even be built.
#[derive(Debug, ThisError)]
pub enum FetchError {
    #[error("Not Found Error: {name_or_id} {location}")]
    NotFound {
        name_or_id: String,
        location: ErrorLocation,
    },

    #[error("Network Failure Error: {message} {location}")]
    NetworkFailure {
        message: String,
        status: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    #[error("Invalid Request Error: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl FetchError {
    pub fn is_network_failure(&self) -> bool {
        matches!(self, FetchError::NetworkFailure { .. })
    }
}

impl From<url::ParseError> for FetchError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        FetchError::InvalidRequest {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        FetchError::NetworkFailure {
            message: error.to_string(),
            status: error.status().map(|status| HttpStatusCode(status.as_u16())),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        FetchError::NetworkFailure {
            message: format!("Malformed response: {error}"),
            status: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<models::ModelError> for FetchError {
    #[track_caller]
    fn from(error: models::ModelError) -> Self {
        FetchError::NetworkFailure {
            message: format!("Malformed response: {error}"),
            status: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

use mm_core::CoreError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Shown when a failure carries no message meant for the user.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

const TIMEOUT_MESSAGE: &str = "The server took too long to respond. Please try again.";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected payload: {source} {location}")]
    Payload {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ApiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ApiError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: Option<String>) -> Self {
        ApiError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a validation error with location
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message to show the user: the server's own wording when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Http { source, .. } if source.is_timeout() => TIMEOUT_MESSAGE.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether the request never reached a verdict from the server.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ApiError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ApiError::from_json(err)
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        ApiError::Payload {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

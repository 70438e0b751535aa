//! Error types returned by the Wykop client.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The `/auth` endpoint answered with a non-200 status
    AuthenticationFailed {
        /// Status code returned by the auth endpoint
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// A request was attempted before `authenticate()` obtained a token
    NotAuthenticated,
    /// HTTP method outside GET/POST/PUT/DELETE/PATCH
    UnsupportedMethod(String),
    /// An authenticated request answered with a non-2xx status
    HttpStatus {
        /// Status code returned by the endpoint
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Transport-level failure from the HTTP client
    Network(reqwest::Error),
    /// Failure to decode a JSON payload
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AuthenticationFailed { status, body } => {
                write!(f, "authentication failed: {status} - {body}")
            }
            AppError::NotAuthenticated => {
                write!(f, "not authenticated: call authenticate() first")
            }
            AppError::UnsupportedMethod(method) => {
                write!(f, "unsupported http method: {method}")
            }
            AppError::HttpStatus { status, body } => {
                write!(f, "http error: {status} - {body}")
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

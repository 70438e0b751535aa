use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Request body for the `/auth` endpoint
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct AuthRequest {
    /// Credentials envelope expected by the API
    pub data: AuthCredentials,
}

impl AuthRequest {
    /// Builds an auth request from an application key and secret
    pub fn new(key: &str, secret: &str) -> Self {
        Self {
            data: AuthCredentials {
                key: key.to_string(),
                secret: secret.to_string(),
            },
        }
    }
}

/// Application key and secret sent to the auth endpoint
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct AuthCredentials {
    /// Application key issued by Wykop
    pub key: String,
    /// Secret matching the application key
    pub secret: String,
}

/// Response body from the `/auth` endpoint
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct AuthResponse {
    /// Token envelope returned by the API
    pub data: AuthToken,
}

/// Bearer token issued after a successful login
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct AuthToken {
    /// Opaque bearer token for subsequent requests
    pub token: String,
}

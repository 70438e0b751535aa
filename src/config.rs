use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Wykop API
pub struct Credentials {
    /// Application key issued by Wykop
    pub app_key: String,
    /// Secret matching the application key
    pub secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Wykop REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Wykop API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Reads `WYKOP_APP_KEY`, `WYKOP_SECRET`, `WYKOP_BASE_URL` and
    /// `WYKOP_REST_TIMEOUT`, loading a `.env` file first when present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let app_key = get_env_or_default("WYKOP_APP_KEY", String::from("default_app_key"));
        let secret = get_env_or_default("WYKOP_SECRET", String::from("default_secret"));

        // Check if we are using default values
        if app_key == "default_app_key" {
            error!("WYKOP_APP_KEY not found in environment variables or .env file");
        }
        if secret == "default_secret" {
            error!("WYKOP_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { app_key, secret },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("WYKOP_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("WYKOP_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration with explicit credentials and the default base URL
    pub fn with_credentials(app_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::with_base_url(app_key, secret, DEFAULT_BASE_URL)
    }

    /// Creates a configuration with explicit credentials and base URL
    ///
    /// Mainly useful for tests pointing the client at a mock server.
    pub fn with_base_url(
        app_key: impl Into<String>,
        secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                app_key: app_key.into(),
                secret: secret.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}

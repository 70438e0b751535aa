//! # Wykop Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use wykop_client::prelude::*;
//!
//! let config = Config::with_credentials("app_key", "secret");
//! let client = WykopClient::new(config).unwrap();
//! assert!(client.token().is_none());
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Wykop API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT
// ============================================================================

/// Client for the Wykop REST API
pub use crate::client::WykopClient;

// ============================================================================
// MODELS
// ============================================================================

/// Authentication request and response models
pub use crate::model::auth::{AuthCredentials, AuthRequest, AuthResponse, AuthToken};

/// Feed item records
pub use crate::model::feed::{Entry, FeedItem, Link, Media, Photo, Rank, User, Votes};

/// Tag stream query and response models
pub use crate::model::stream::{StreamSort, StreamType, TagStreamQuery, TagStreamResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging initialization
pub use crate::utils::logger::setup_logger;

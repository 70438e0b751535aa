//! # Wykop Client
//!
//! A thin client for the Wykop REST API v3.
//!
//! The crate covers three things:
//! - obtaining a bearer token from the `/auth` endpoint,
//! - dispatching authenticated JSON requests to arbitrary endpoints,
//! - fetching tag streams as typed [`model::feed::FeedItem`] records.
//!
//! # Example
//! ```ignore
//! use wykop_client::prelude::*;
//!
//! let config = Config::new();
//! let mut client = WykopClient::new(config)?;
//! client.authenticate().await?;
//!
//! let items = client
//!     .get_entries_by_tag("rust", &TagStreamQuery::default())
//!     .await?;
//! client.close();
//! ```

/// API client and request dispatch
pub mod client;
/// Configuration loaded from the environment or built programmatically
pub mod config;
/// Crate-wide default values
pub mod constants;
/// Error types returned by the client
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
pub fn version() -> &'static str {
    VERSION
}

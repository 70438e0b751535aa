//! Client for the Wykop REST API
//!
//! This module provides the [`WykopClient`], which handles:
//! - Obtaining a bearer token from the `/auth` endpoint
//! - Dispatching authenticated JSON requests to arbitrary endpoints
//! - Fetching tag streams as typed feed items
//!
//! # Example
//! ```ignore
//! use wykop_client::client::WykopClient;
//! use wykop_client::config::Config;
//!
//! let mut client = WykopClient::new(Config::new())?;
//! client.authenticate().await?;
//! let response = client
//!     .make_request("/tags/popular", reqwest::Method::GET, None, None)
//!     .await?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::auth::{AuthRequest, AuthResponse};
use crate::model::feed::FeedItem;
use crate::model::stream::{TagStreamQuery, TagStreamResponse};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Wykop REST API
///
/// Holds the configured credentials, the underlying HTTP transport and
/// the bearer token obtained by [`WykopClient::authenticate`]. The token
/// field is not synchronized; sharing a client across threads is the
/// caller's responsibility.
pub struct WykopClient {
    config: Config,
    http: HttpClient,
    token: Option<String>,
}

impl WykopClient {
    /// Creates a new client from the given configuration
    ///
    /// No network traffic happens here; call
    /// [`authenticate`](WykopClient::authenticate) before issuing requests.
    ///
    /// # Returns
    /// * `Ok(WykopClient)` - Client ready to authenticate
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            http,
            token: None,
        })
    }

    /// Returns the current bearer token, if one has been obtained
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Builds the full URL for an endpoint
    ///
    /// Ensures exactly one slash between the base URL and the endpoint and
    /// strips any trailing slash, so `tags/popular` and `/tags/popular/`
    /// resolve to the same URL.
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/').trim_end_matches('/')
        )
    }

    /// Authenticates against the `/auth` endpoint and stores the token
    ///
    /// Re-authenticating simply replaces the stored token.
    ///
    /// # Returns
    /// * `Ok(String)` - The bearer token returned by the API
    /// * `Err(AppError::AuthenticationFailed)` - On any non-200 response,
    ///   carrying the status code and response body
    pub async fn authenticate(&mut self) -> Result<String, AppError> {
        let url = self.endpoint_url("auth");
        let request = AuthRequest::new(
            self.config.credentials.app_key.trim(),
            self.config.credentials.secret.trim(),
        );

        debug!("Authentication request to URL: {}", url);

        let resp = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::OK {
            let json: AuthResponse = resp.json().await?;
            debug!("Authenticated successfully");
            self.token = Some(json.data.token.clone());
            Ok(json.data.token)
        } else {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            error!("Authentication failed with status: {}", status);
            Err(AppError::AuthenticationFailed { status, body })
        }
    }

    /// Makes a request to a specific endpoint using the stored bearer token
    ///
    /// Generic escape hatch for endpoints without a dedicated method; see
    /// the Wykop API documentation at <https://doc.wykop.pl/> for the list
    /// of valid endpoints.
    ///
    /// GET and DELETE requests send `params` as the query string; POST, PUT
    /// and PATCH requests send `body` as JSON. Redirects are followed by
    /// the transport's default policy.
    ///
    /// # Arguments
    /// * `endpoint` - Path under the base URL, with or without slashes
    /// * `method` - One of GET, POST, PUT, DELETE or PATCH
    /// * `params` - Query parameters for GET/DELETE requests
    /// * `body` - JSON body for POST/PUT/PATCH requests
    ///
    /// # Returns
    /// * `Ok(Value)` - The parsed JSON response body
    /// * `Err(AppError::NotAuthenticated)` - If no token is stored
    /// * `Err(AppError::UnsupportedMethod)` - For any other HTTP method,
    ///   before any network traffic
    /// * `Err(AppError::HttpStatus)` - On a non-2xx response
    pub async fn make_request(
        &self,
        endpoint: &str,
        method: Method,
        params: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> Result<Value, AppError> {
        let token = self.token.as_deref().ok_or(AppError::NotAuthenticated)?;

        let url = self.endpoint_url(endpoint);
        debug!("Making {} request to {}", method, url);

        let request = if method == Method::GET || method == Method::DELETE {
            let mut request = self.http.request(method, &url);
            if let Some(params) = params {
                request = request.query(params);
            }
            request
        } else if method == Method::POST || method == Method::PUT || method == Method::PATCH {
            let mut request = self.http.request(method, &url);
            if let Some(body) = body {
                request = request.json(body);
            }
            request
        } else {
            return Err(AppError::UnsupportedMethod(method.to_string()));
        };

        let resp = request
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<Value>().await?)
        } else {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            error!("Request to {} failed with status: {}", url, status);
            Err(AppError::HttpStatus { status, body })
        }
    }

    /// Fetches a single page of the stream for a tag
    ///
    /// Items are returned in response order. A payload with a
    /// `description` field decodes as [`FeedItem::Link`]; anything else
    /// decodes as [`FeedItem::Entry`].
    ///
    /// # Arguments
    /// * `tag` - Tag name without the leading `#`
    /// * `query` - Pagination, sorting and filtering parameters
    ///
    /// # Returns
    /// * `Ok(Vec<FeedItem>)` - Decoded items for the requested page
    /// * `Err(AppError)` - If the request or the decode fails
    pub async fn get_entries_by_tag(
        &self,
        tag: &str,
        query: &TagStreamQuery,
    ) -> Result<Vec<FeedItem>, AppError> {
        let endpoint = format!("/tags/{tag}/stream");
        let params = query.to_query_pairs();

        let json = self
            .make_request(&endpoint, Method::GET, Some(&params), None)
            .await?;
        let stream: TagStreamResponse = serde_json::from_value(json)?;

        debug!("Fetched {} items for tag {}", stream.len(), tag);
        Ok(stream.data)
    }

    /// Consumes the client and releases the HTTP transport
    ///
    /// Ownership makes use after close unrepresentable; build a new client
    /// to reconnect.
    pub fn close(self) {
        debug!("Closing Wykop client");
        drop(self.http);
    }
}

use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use reqwest::Method;
use tokio_test::block_on;
use wykop_client::client::WykopClient;
use wykop_client::config::Config;
use wykop_client::error::AppError;
use wykop_client::model::stream::TagStreamQuery;

// Helper function that stands up an auth mock and returns an
// authenticated client holding the token "test-token"
fn authenticated_client(server: &mut Server) -> WykopClient {
    let _auth = server
        .mock("POST", "/auth")
        .with_status(200)
        .with_body(r#"{"data":{"token":"test-token"}}"#)
        .create();

    let config = Config::with_base_url("test_app_key", "test_secret", server.url());
    let mut client = WykopClient::new(config).unwrap();
    block_on(client.authenticate()).unwrap();
    client
}

#[test]
fn test_make_request_requires_authentication() {
    let server = Server::new();
    let config = Config::with_base_url("test_app_key", "test_secret", server.url());
    let client = WykopClient::new(config).unwrap();

    let err = block_on(client.make_request("/tags/popular", Method::GET, None, None)).unwrap_err();
    assert!(matches!(err, AppError::NotAuthenticated));
}

#[test]
fn test_get_entries_by_tag_requires_authentication() {
    let server = Server::new();
    let config = Config::with_base_url("test_app_key", "test_secret", server.url());
    let client = WykopClient::new(config).unwrap();

    let err = block_on(client.get_entries_by_tag("rust", &TagStreamQuery::default())).unwrap_err();
    assert!(matches!(err, AppError::NotAuthenticated));
}

#[test]
fn test_unsupported_method_fails_without_network_call() {
    let mut server = Server::new();
    let client = authenticated_client(&mut server);

    // No mock exists for this path; a dispatched request would surface as
    // an HttpStatus error from the mock server's 501 fallback
    let err = block_on(client.make_request("/tags/popular", Method::TRACE, None, None)).unwrap_err();

    match err {
        AppError::UnsupportedMethod(method) => assert_eq!(method, "TRACE"),
        other => panic!("Expected UnsupportedMethod, got: {other}"),
    }
}

#[test]
fn test_endpoint_normalization() {
    let mut server = Server::new();
    let client = authenticated_client(&mut server);

    let mock = server
        .mock("GET", "/tags/popular")
        .match_header("Authorization", "Bearer test-token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"data":[]}"#)
        .expect(2)
        .create();

    // Missing leading slash and trailing slash both resolve to the same URL
    block_on(client.make_request("tags/popular", Method::GET, None, None)).unwrap();
    block_on(client.make_request("/tags/popular/", Method::GET, None, None)).unwrap();

    mock.assert();
}

#[test]
fn test_make_request_attaches_bearer_and_json_headers() {
    let mut server = Server::new();
    let client = authenticated_client(&mut server);

    let mock = server
        .mock("GET", "/profile")
        .match_header("Authorization", "Bearer test-token")
        .match_header("Accept", "application/json")
        .with_status(200)
        .with_body(r#"{"data":{"username":"wykopek"}}"#)
        .create();

    let response = block_on(client.make_request("/profile", Method::GET, None, None)).unwrap();

    assert_json_eq!(
        response,
        serde_json::json!({"data": {"username": "wykopek"}})
    );
    mock.assert();
}

#[test]
fn test_post_sends_json_body() {
    let mut server = Server::new();
    let client = authenticated_client(&mut server);

    let body = serde_json::json!({"data": {"content": "hello"}});
    let mock = server
        .mock("POST", "/entries")
        .match_header("Authorization", "Bearer test-token")
        .match_body(Matcher::Json(body.clone()))
        .with_status(200)
        .with_body(r#"{"data":{"id":7}}"#)
        .create();

    let response =
        block_on(client.make_request("/entries", Method::POST, None, Some(&body))).unwrap();

    assert_json_eq!(response, serde_json::json!({"data": {"id": 7}}));
    mock.assert();
}

#[test]
fn test_delete_passes_query_parameters() {
    let mut server = Server::new();
    let client = authenticated_client(&mut server);

    let mock = server
        .mock("DELETE", "/entries/7/votes")
        .match_query(Matcher::UrlEncoded("reason".into(), "spam".into()))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create();

    let params = vec![("reason".to_string(), "spam".to_string())];
    block_on(client.make_request("/entries/7/votes", Method::DELETE, Some(&params), None)).unwrap();

    mock.assert();
}

#[test]
fn test_non_success_status_carries_status_and_body() {
    let mut server = Server::new();
    let client = authenticated_client(&mut server);

    let mock = server
        .mock("GET", "/tags/missing")
        .with_status(404)
        .with_body(r#"{"error":{"message":"tag not found"}}"#)
        .create();

    let err = block_on(client.make_request("/tags/missing", Method::GET, None, None)).unwrap_err();

    match err {
        AppError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("tag not found"));
        }
        other => panic!("Expected HttpStatus, got: {other}"),
    }
    mock.assert();
}

#[test]
fn test_close_consumes_the_client() {
    let server = Server::new();
    let config = Config::with_base_url("test_app_key", "test_secret", server.url());
    let client = WykopClient::new(config).unwrap();

    // close() takes ownership; the client cannot be used afterwards
    client.close();
}

//! Integration tests for the identity client

use aula_http::{ClientError, IdentityClient, IdentityClientBuilder};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile_body() -> serde_json::Value {
    json!({
        "id": 3,
        "username": "admin",
        "email": "admin@aula.edu",
        "first_name": "Ana",
        "last_name": "García",
        "role": "admin",
        "is_active": true,
        "created_at": "2023-11-20T08:30:00Z"
    })
}

#[tokio::test]
async fn test_client_builder() {
    let client = IdentityClientBuilder::new()
        .base_url("http://localhost:8080")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = IdentityClientBuilder::new().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_trimmed() {
    let client = IdentityClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_me_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    let user = client.me("t1").await.unwrap();
    assert_eq!(user.username, "admin");
    assert!(user.is_active);
}

#[tokio::test]
async fn test_me_maps_401_to_auth_expired() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    let result = client.me("stale").await;
    let err = result.unwrap_err();
    assert!(err.is_auth_expired());
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn test_refresh_uses_refresh_token_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(header("authorization", "Bearer r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "t2" })))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    let renewed = client.refresh("r1").await.unwrap();
    assert_eq!(renewed.access_token, "t2");
}

#[tokio::test]
async fn test_refresh_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    let result = client.refresh("r1").await;
    assert!(matches!(
        result,
        Err(ClientError::ServerError { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_logout_ignores_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    assert!(client.logout("t1").await.is_ok());
}

#[tokio::test]
async fn test_network_failure_is_a_request_error() {
    // Nothing listens here; the connection itself fails.
    let client = IdentityClient::new("http://127.0.0.1:1").unwrap();
    let result = client.me("t1").await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}

//! Integration tests for token acquisition and caching, against a
//! wiremock token endpoint.

use std::sync::Arc;
use std::time::Duration;

use jobwire::{ClientCredentials, HttpExecutor, JobwireError, RetryConfig, TokenManager};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_body(token: &str, expires_in: u64) -> serde_json::Value {
    serde_json::json!({ "access_token": token, "expires_in": expires_in })
}

fn manager_for(server: &MockServer, client_id: &str, client_secret: &str) -> TokenManager {
    let credentials = ClientCredentials::new(
        client_id,
        client_secret,
        &format!("{}/oauth/token", server.uri()),
    )
    .unwrap();
    TokenManager::new(
        credentials,
        Arc::new(HttpExecutor::new(RetryConfig::none()).unwrap()),
    )
}

#[tokio::test]
async fn test_usable_token_is_served_from_cache() {
    let server = MockServer::start().await;

    // First exchange hands out T1; a second exchange would hand out T2.
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("T1", 3600)))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("T2", 3600)))
        .expect(0)
        .mount(&server)
        .await;

    let manager = manager_for(&server, "client", "secret");

    assert_eq!(manager.access_token().await.unwrap(), "T1");
    assert_eq!(manager.access_token().await.unwrap(), "T1");
}

#[tokio::test]
async fn test_unusable_token_is_refreshed() {
    let server = MockServer::start().await;

    // 10s of life is inside the 30s expiry buffer, so T1 is never reused.
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("T1", 10)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("T2", 3600)))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server, "client", "secret");

    assert_eq!(manager.access_token().await.unwrap(), "T1");
    assert_eq!(manager.access_token().await.unwrap(), "T2");
}

#[tokio::test]
async fn test_concurrent_callers_collapse_into_one_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("T1", 3600))
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let manager = Arc::new(manager_for(&server, "client", "secret"));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let manager = Arc::clone(&manager);
        tasks.push(tokio::spawn(async move { manager.access_token().await }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), "T1");
    }
}

#[tokio::test]
async fn test_exchange_body_is_form_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("accept", "application/json"))
        .and(body_string(
            "grant_type=client_credentials&client_id=test+new+client+id\
             &client_secret=secret%40%21%23%24%25%5E%26%28%29",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("T1", 3600)))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server, "test new client id", "secret@!#$%^&()");

    assert_eq!(manager.access_token().await.unwrap(), "T1");
}

#[tokio::test]
async fn test_rejected_exchange_is_a_terminal_authentication_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"invalid_client"}"#))
        .expect(1) // a 4xx is never retried
        .mount(&server)
        .await;

    let manager = manager_for(&server, "client", "wrong-secret");
    let err = manager.access_token().await.unwrap_err();

    match err {
        JobwireError::Authentication { message } => {
            assert!(message.contains("client"));
            assert!(message.contains("401"));
            assert!(message.contains("invalid_client"));
            assert!(!message.contains("wrong-secret"));
        }
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_token_response_is_an_authentication_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token":"nope"}"#))
        .mount(&server)
        .await;

    let manager = manager_for(&server, "client", "secret");

    assert!(matches!(
        manager.access_token().await.unwrap_err(),
        JobwireError::Authentication { .. }
    ));
}

#[tokio::test]
async fn test_transient_exchange_failures_are_retried_by_the_executor() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body("T1", 3600)))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = ClientCredentials::new(
        "client",
        "secret",
        &format!("{}/oauth/token", server.uri()),
    )
    .unwrap();
    let retry = RetryConfig {
        max_retries: 3,
        initial_backoff: Duration::from_millis(5),
        backoff_multiplier: 2.0,
        max_backoff: Duration::from_millis(20),
    };
    let manager = TokenManager::new(credentials, Arc::new(HttpExecutor::new(retry).unwrap()));

    assert_eq!(manager.access_token().await.unwrap(), "T1");
}

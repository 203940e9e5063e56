use axum::http::{StatusCode, Uri};
use axum::Json;
use axum::Router;
use serde_json::{json, Value};
use signin::auth::{AuthError, AuthProvider, IdentityToolkitProvider};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Captured = Arc<Mutex<Vec<(String, Value)>>>;

/// Start a fake Identity Toolkit service that answers every request with
/// `status` and `body`, recording the request path/query and JSON payload.
async fn spawn_auth_server(status: StatusCode, body: Value) -> (String, Captured) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));

    let sink = captured.clone();
    let app = Router::new().fallback(move |uri: Uri, Json(payload): Json<Value>| {
        let sink = sink.clone();
        let body = body.clone();
        async move {
            sink.lock().unwrap().push((uri.to_string(), payload));
            (status, Json(body))
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), captured)
}

fn provider(endpoint: &str) -> IdentityToolkitProvider {
    IdentityToolkitProvider::new(endpoint, "test-key", Duration::from_secs(5)).expect("provider")
}

#[tokio::test]
async fn test_success_maps_to_user() {
    let (url, captured) = spawn_auth_server(
        StatusCode::OK,
        json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "abc123",
            "email": "ada@example.com",
            "displayName": "",
            "idToken": "header.payload.sig",
            "registered": true,
            "refreshToken": "refresh",
            "expiresIn": "3600"
        }),
    )
    .await;

    let user = provider(&url)
        .sign_in("ada@example.com", "correct horse")
        .await
        .expect("sign-in should succeed");
    assert_eq!(user.id, "abc123");
    assert_eq!(user.email, "ada@example.com");

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (uri, payload) = &requests[0];
    assert_eq!(uri, "/v1/accounts:signInWithPassword?key=test-key");
    assert_eq!(payload["email"], "ada@example.com");
    assert_eq!(payload["password"], "correct horse");
    assert_eq!(payload["returnSecureToken"], true);
}

#[tokio::test]
async fn test_error_body_keeps_provider_code() {
    let (url, _) = spawn_auth_server(
        StatusCode::BAD_REQUEST,
        json!({
            "error": {
                "code": 400,
                "message": "INVALID_PASSWORD",
                "errors": [{ "message": "INVALID_PASSWORD", "domain": "global", "reason": "invalid" }]
            }
        }),
    )
    .await;

    let err = provider(&url)
        .sign_in("ada@example.com", "nope")
        .await
        .expect_err("sign-in should fail");
    assert_eq!(err.code(), Some("INVALID_PASSWORD"));
}

#[tokio::test]
async fn test_error_without_code_is_invalid_response() {
    let (url, _) = spawn_auth_server(StatusCode::INTERNAL_SERVER_ERROR, json!({ "oops": true })).await;

    let err = provider(&url)
        .sign_in("ada@example.com", "pw")
        .await
        .expect_err("sign-in should fail");
    assert!(matches!(err, AuthError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_malformed_success_body_is_an_error() {
    let (url, _) = spawn_auth_server(StatusCode::OK, json!({ "unexpected": "shape" })).await;

    let err = provider(&url)
        .sign_in("ada@example.com", "pw")
        .await
        .expect_err("sign-in should fail");
    assert!(matches!(err, AuthError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Bind then drop to get a port nobody is listening on
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let err = provider(&format!("http://{addr}"))
        .sign_in("ada@example.com", "pw")
        .await
        .expect_err("sign-in should fail");
    assert!(matches!(err, AuthError::Transport(_)));
}

#[tokio::test]
async fn test_transport_error_does_not_expose_api_key() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let provider = IdentityToolkitProvider::new(
        &format!("http://{addr}"),
        "SECRET-KEY-123",
        Duration::from_secs(2),
    )
    .expect("provider");
    let err = provider
        .sign_in("ada@example.com", "pw")
        .await
        .expect_err("sign-in should fail");

    let text = err.to_string();
    assert!(!text.contains("SECRET-KEY-123"), "key leaked: {text}");
    assert!(!format!("{err:?}").contains("SECRET-KEY-123"));
}

//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the production router via [`ablek_api::router::build_app_router`]
//! so tests exercise the same middleware stack (CORS, request ID, timeout,
//! tracing, panic recovery) that production uses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use ablek_api::auth::session::SessionConfig;
use ablek_api::config::ServerConfig;
use ablek_api::revalidate::Revalidator;
use ablek_api::router::build_app_router;
use ablek_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed session
/// secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: std::env::temp_dir()
            .join("ablek-test-uploads")
            .to_string_lossy()
            .into_owned(),
        production: false,
        env_admin_id: None,
        env_admin_password: None,
        session: SessionConfig {
            secret: "integration-test-session-secret".to_string(),
        },
    }
}

/// Build the full application router with the default test config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with an explicit config (used by the
/// upload tests to point at a scratch directory).
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        revalidator: Arc::new(Revalidator::new()),
    };
    build_app_router(state, &config)
}

/// Send a request, optionally with a JSON body and/or a session cookie.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = builder.body(body).expect("request should build");

    app.oneshot(request).await.expect("request should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(cookie)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(cookie)).await
}

pub async fn post_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(cookie)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(cookie)).await
}

pub async fn delete_auth(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(cookie)).await
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Log in with the given credentials and return the `name=value` session
/// cookie pair for follow-up requests.
pub async fn login_session(app: Router, id: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "id": id, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .expect("cookie header should be ASCII");

    set_cookie
        .split(';')
        .next()
        .expect("cookie header should have a name=value pair")
        .to_string()
}

/// Log in with the default fallback credentials.
pub async fn login_default(app: Router) -> String {
    login_session(app, "admin", "1234").await
}

//! HTTP-level integration tests for the admin session gate.
//!
//! Tests cover login against the credential fallback chain, the generic
//! failure message, logout idempotency, session expiry, and gating of
//! admin routes.

mod common;

use axum::http::{header, StatusCode};
use sqlx::PgPool;

use ablek_api::auth::session::{token_for_expiry, SESSION_COOKIE};
use ablek_db::repositories::SettingRepo;
use common::{body_json, get, get_auth, post_json, test_config};

/// Login with the hardcoded default credentials succeeds on an empty store
/// and sets an HttpOnly session cookie.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_defaults_on_empty_store(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "id": "admin", "password": "1234" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie must be set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(set_cookie.contains("HttpOnly"));
    // Not production: the Secure attribute must be absent.
    assert!(!set_cookie.contains("Secure"));

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}

/// A wrong password yields 401 with the fixed generic message, identical
/// to a wrong id.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_failure_is_generic(pool: PgPool) {
    let app = common::build_test_app(pool);

    let wrong_password = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "id": "admin", "password": "nope" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let body_a = body_json(wrong_password).await;

    let wrong_id = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "id": "nope", "password": "1234" }),
    )
    .await;
    assert_eq!(wrong_id.status(), StatusCode::UNAUTHORIZED);
    let body_b = body_json(wrong_id).await;

    assert_eq!(body_a["error"], body_b["error"], "message must not leak which field was wrong");
    assert_eq!(body_a["code"], "UNAUTHORIZED");
}

/// Stored credentials take priority over the defaults once rotated.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_uses_stored_credentials(pool: PgPool) {
    SettingRepo::get_or_create(&pool).await.unwrap();
    SettingRepo::update_credentials(&pool, "boss", "secret")
        .await
        .unwrap();

    let app = common::build_test_app(pool);

    let old = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "id": "admin", "password": "1234" }),
    )
    .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    let new = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "id": "boss", "password": "secret" }),
    )
    .await;
    assert_eq!(new.status(), StatusCode::OK);
}

/// The session predicate flips with login and logout.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_session_check_after_login_and_logout(pool: PgPool) {
    let app = common::build_test_app(pool);

    let anonymous = get(app.clone(), "/api/v1/auth/session").await;
    assert_eq!(body_json(anonymous).await["authenticated"], false);

    let cookie = common::login_default(app.clone()).await;

    let authed = get_auth(app.clone(), "/api/v1/auth/session", &cookie).await;
    assert_eq!(body_json(authed).await["authenticated"], true);

    // Logout is idempotent and returns 204 even without a session.
    let logout = post_json(app.clone(), "/api/v1/auth/logout", serde_json::json!({})).await;
    assert_eq!(logout.status(), StatusCode::NO_CONTENT);
}

/// A correctly signed but expired marker is rejected everywhere.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_expired_session_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let expired = token_for_expiry(
        &test_config().session,
        chrono::Utc::now().timestamp() - 300,
    );
    let cookie = format!("{SESSION_COOKIE}={expired}");

    let session = get_auth(app.clone(), "/api/v1/auth/session", &cookie).await;
    assert_eq!(body_json(session).await["authenticated"], false);

    let admin = get_auth(app, "/api/v1/admin/inquiries", &cookie).await;
    assert_eq!(admin.status(), StatusCode::UNAUTHORIZED);
}

/// Admin routes reject missing and forged cookies.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_routes_require_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let missing = get(app.clone(), "/api/v1/admin/settings").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let forged = get_auth(
        app,
        "/api/v1/admin/settings",
        &format!("{SESSION_COOKIE}=true"),
    )
    .await;
    assert_eq!(forged.status(), StatusCode::UNAUTHORIZED);
}

//! Health endpoint integration test.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, get};

#[sqlx::test(migrations = "../db/migrations")]
async fn test_healthz_reports_ok(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

//! Handlers for the `/auth` resource (login, logout, session check).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use ablek_core::error::CoreError;
use ablek_core::settings::resolve_credentials;
use ablek_db::repositories::SettingRepo;

use crate::auth::session::{issue_token, verify_token, SESSION_COOKIE, SESSION_LIFETIME_HOURS};
use crate::error::{AppError, AppResult};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Fixed user-facing message for any failed login. Never distinguishes
/// whether the id or the password was wrong.
const LOGIN_FAILED_MESSAGE: &str = "아이디 또는 비밀번호가 올바르지 않습니다.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

/// Response body for `GET /auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Compare the submitted credentials against the resolved expected pair
/// (settings row if readable, else `ADMIN_ID`/`ADMIN_PASSWORD` env values,
/// else the hardcoded defaults) and set the session cookie on success.
///
/// A store read failure degrades to the fallback chain instead of failing
/// the login; availability wins over strictness here.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let stored = match SettingRepo::find(&state.pool).await {
        Ok(row) => row,
        Err(e) => {
            tracing::warn!(error = %e, "Settings unreachable during login; using fallback credentials");
            None
        }
    };

    let expected = resolve_credentials(
        stored.as_ref().map(|s| s.admin_id.as_str()),
        stored.as_ref().map(|s| s.admin_password.as_str()),
        state.config.env_admin_id.as_deref(),
        state.config.env_admin_password.as_deref(),
    );

    if input.id != expected.id || input.password != expected.password {
        return Err(AppError::Core(CoreError::Unauthorized(
            LOGIN_FAILED_MESSAGE.into(),
        )));
    }

    let token = issue_token(&state.config.session);
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.production)
        .max_age(time::Duration::hours(SESSION_LIFETIME_HOURS))
        .build();

    tracing::info!("Admin login succeeded");

    Ok((jar.add(cookie), Json(SuccessResponse::ok())))
}

/// POST /api/v1/auth/logout
///
/// Delete the session cookie. Idempotent: succeeds with or without an
/// existing session. Returns 204 No Content.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
///
/// Pure predicate over the session marker: present, MAC valid, unexpired.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Json<SessionStatus> {
    let authenticated = jar
        .get(SESSION_COOKIE)
        .is_some_and(|c| verify_token(&state.config.session, c.value()));

    Json(SessionStatus { authenticated })
}

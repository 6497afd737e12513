//! Cookie-based admin session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use ablek_core::error::CoreError;

use crate::auth::session::{verify_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Proof of an authenticated admin session.
///
/// Use this as an extractor parameter in any handler that requires admin
/// access:
///
/// ```ignore
/// async fn my_handler(_admin: AdminSession) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
///
/// The extractor checks the session cookie's MAC and expiry only; it does
/// not re-validate credentials against the store.
#[derive(Debug, Clone)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar.get(SESSION_COOKIE).map(|c| c.value()).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Admin session required".into()))
        })?;

        if !verify_token(&state.config.session, token) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid or expired session".into(),
            )));
        }

        Ok(AdminSession)
    }
}

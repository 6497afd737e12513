//! Handlers for the site settings singleton.
//!
//! Reads go through `SettingRepo::get_or_create`, so callers never observe
//! a missing configuration. Every mutation bumps the render-invalidation
//! epoch for the landing page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use ablek_core::error::CoreError;
use ablek_core::settings::validate_credentials;
use ablek_db::models::setting::{PublicSetting, Setting, UpdateCredentials, UpdateSetting};
use ablek_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// The singleton must exist after `get_or_create`; treat its absence during
/// a follow-up update as an internal inconsistency.
fn gone() -> AppError {
    AppError::Core(CoreError::Internal(
        "settings row disappeared during update".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/settings
///
/// Public, credential-free view for the render layer.
pub async fn get_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let setting = SettingRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse {
        data: PublicSetting::from(setting),
    }))
}

/// GET /api/v1/admin/settings
///
/// Full settings row, including credential fields, for the dashboard.
pub async fn get_admin(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Setting>>> {
    let setting = SettingRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse { data: setting }))
}

/// PUT /api/v1/admin/settings
///
/// Partial update of the enumerated public fields. Omitted fields keep
/// their stored values (merge, not replace).
pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<UpdateSetting>,
) -> AppResult<Json<DataResponse<Setting>>> {
    SettingRepo::get_or_create(&state.pool).await?;
    let setting = SettingRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(gone)?;

    state.revalidator.revalidate("/");
    tracing::info!("Site settings updated");

    Ok(Json(DataResponse { data: setting }))
}

/// POST /api/v1/admin/settings/reset
///
/// Restore the hero/contact presentation fields to their built-in
/// defaults. Brand text, contact info, and credentials are untouched.
pub async fn reset(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Setting>>> {
    SettingRepo::get_or_create(&state.pool).await?;
    let setting = SettingRepo::reset_presentation(&state.pool)
        .await?
        .ok_or_else(gone)?;

    state.revalidator.revalidate("/");
    tracing::info!("Site settings presentation reset");

    Ok(Json(DataResponse { data: setting }))
}

/// PUT /api/v1/admin/settings/credentials
///
/// Rotate the admin credentials. Both fields required; this is the only
/// path that changes what the session gate accepts. Already-issued
/// sessions stay valid until their natural expiry.
pub async fn update_credentials(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<UpdateCredentials>,
) -> AppResult<Json<DataResponse<Setting>>> {
    validate_credentials(&input.admin_id, &input.admin_password)?;

    SettingRepo::get_or_create(&state.pool).await?;
    let setting =
        SettingRepo::update_credentials(&state.pool, &input.admin_id, &input.admin_password)
            .await?
            .ok_or_else(gone)?;

    state.revalidator.revalidate("/");
    tracing::info!("Admin credentials rotated");

    Ok(Json(DataResponse { data: setting }))
}

//! Handlers for the `/inquiries` resource.
//!
//! Creation is public (the contact form); listing and deletion are
//! admin-only. Mutations invalidate the admin dashboard page.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ablek_core::content::validate_inquiry;
use ablek_core::error::CoreError;
use ablek_core::types::DbId;
use ablek_db::models::inquiry::CreateInquiry;
use ablek_db::repositories::InquiryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// POST /api/v1/inquiries
///
/// Public contact-form submission.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInquiry>,
) -> AppResult<impl IntoResponse> {
    validate_inquiry(&input.name, &input.phone)?;

    let inquiry = InquiryRepo::create(&state.pool, &input).await?;

    state.revalidator.revalidate("/admin");
    tracing::info!(inquiry_id = inquiry.id, "Inquiry received");

    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}

/// GET /api/v1/admin/inquiries
///
/// List all inquiries, newest first.
pub async fn list(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let inquiries = InquiryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: inquiries }))
}

/// DELETE /api/v1/admin/inquiries/{id}
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = InquiryRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }));
    }

    state.revalidator.revalidate("/admin");
    tracing::info!(inquiry_id = id, "Inquiry deleted");

    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ablek_core::content::{validate_media_type, validate_project};
use ablek_core::error::CoreError;
use ablek_core::types::DbId;
use ablek_db::models::project::CreateProject;
use ablek_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Public portfolio listing, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects
///
/// Create a portfolio entry from the admin form.
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    validate_project(&input.title, &input.category, &input.image_url)?;
    if let Some(media_type) = &input.media_type {
        validate_media_type(media_type)?;
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;

    state.revalidator.revalidate("/");
    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// DELETE /api/v1/admin/projects/{id}
///
/// Remove a portfolio entry. Deleting an id twice reports 404 the second
/// time; deletes are not idempotent.
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = ProjectRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    state.revalidator.revalidate("/");
    tracing::info!(project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

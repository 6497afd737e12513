//! Handlers for the `/characters` resource (landing-page feature blocks).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use ablek_core::content::validate_character_item;
use ablek_core::error::CoreError;
use ablek_db::models::character_item::UpsertCharacterItem;
use ablek_db::repositories::CharacterItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/characters
///
/// Public listing, ascending by the user-controlled sort key.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = CharacterItemRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/admin/characters
///
/// Upsert: update when `id` is present (404 if that id is missing),
/// create otherwise.
pub async fn upsert(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<UpsertCharacterItem>,
) -> AppResult<impl IntoResponse> {
    validate_character_item(&input.title, &input.description, &input.image_url)?;

    let item = match input.id {
        Some(id) => CharacterItemRepo::update(
            &state.pool,
            id,
            &input.title,
            &input.description,
            &input.image_url,
            input.sort_order,
        )
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CharacterItem",
            id,
        }))?,
        None => {
            CharacterItemRepo::create(
                &state.pool,
                &input.title,
                &input.description,
                &input.image_url,
                input.sort_order,
            )
            .await?
        }
    };

    state.revalidator.revalidate("/");
    tracing::info!(item_id = item.id, "Character item upserted");

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/admin/characters/seed
///
/// Populate the built-in sample rows, but only into an empty collection.
/// A populated collection reports a conflict and is left unchanged.
pub async fn seed(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = CharacterItemRepo::count(&state.pool).await?;
    if count > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "이미 데이터가 존재합니다.".into(),
        )));
    }

    let inserted = CharacterItemRepo::insert_seeds(&state.pool).await?;

    state.revalidator.revalidate("/");
    tracing::info!(inserted, "Character items seeded");

    Ok((StatusCode::CREATED, Json(DataResponse { data: inserted })))
}

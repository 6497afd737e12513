//! Character (feature block) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ablek_core::types::DbId;

/// A feature block from the `character_items` table, displayed in
/// ascending `sort_order`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub sort_order: i32,
}

/// DTO for the character upsert: update when `id` is present, create
/// otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCharacterItem {
    pub id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub sort_order: i32,
}

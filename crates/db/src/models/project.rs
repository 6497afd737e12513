//! Portfolio project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ablek_core::types::{DbId, Timestamp};

/// A portfolio entry from the `projects` table.
///
/// Projects are immutable after creation apart from deletion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub media_type: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new project via the admin form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image_url: String,
    /// Defaults to `IMAGE` if omitted.
    pub media_type: Option<String>,
}

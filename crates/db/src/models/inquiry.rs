//! Contact inquiry entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ablek_core::types::{DbId, Timestamp};

/// A contact-form submission from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub area: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for the public contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInquiry {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub message: String,
}

//! Repository for the `inquiries` table.

use sqlx::PgPool;

use ablek_core::types::DbId;

use crate::models::inquiry::{CreateInquiry, Inquiry};

const COLUMNS: &str = "id, name, email, phone, location, area, message, created_at";

/// Provides CRUD operations for contact inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry from the public contact form.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (name, email, phone, location, area, message)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.area)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all inquiries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Inquiry>(&query).fetch_all(pool).await
    }

    /// Delete an inquiry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `character_items` table.

use sqlx::PgPool;

use ablek_core::content::CHARACTER_SEEDS;
use ablek_core::types::DbId;

use crate::models::character_item::CharacterItem;

const COLUMNS: &str = "id, title, description, image_url, sort_order";

/// Provides upsert-oriented operations for character feature blocks.
///
/// There is no delete operation; items are only created, updated, and
/// reordered through their `sort_order` key.
pub struct CharacterItemRepo;

impl CharacterItemRepo {
    /// List all items ordered ascending by the user-controlled sort key.
    pub async fn list(pool: &PgPool) -> Result<Vec<CharacterItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM character_items ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, CharacterItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        image_url: &str,
        sort_order: i32,
    ) -> Result<CharacterItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO character_items (title, description, image_url, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterItem>(&query)
            .bind(title)
            .bind(description)
            .bind(image_url)
            .bind(sort_order)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all fields of an existing item.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        description: &str,
        image_url: &str,
        sort_order: i32,
    ) -> Result<Option<CharacterItem>, sqlx::Error> {
        let query = format!(
            "UPDATE character_items
             SET title = $2, description = $3, image_url = $4, sort_order = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterItem>(&query)
            .bind(id)
            .bind(title)
            .bind(description)
            .bind(image_url)
            .bind(sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Count all items. Used to guard the seed operation.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM character_items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert the built-in sample rows. Callers must check [`Self::count`]
    /// first; this method does not guard against existing data itself.
    pub async fn insert_seeds(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for seed in CHARACTER_SEEDS {
            sqlx::query(
                "INSERT INTO character_items (title, description, image_url, sort_order)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(seed.title)
            .bind(seed.description)
            .bind(seed.image_url)
            .bind(seed.sort_order)
            .execute(pool)
            .await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}

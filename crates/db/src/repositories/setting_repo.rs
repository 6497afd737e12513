//! Repository for the singleton `settings` row.

use sqlx::PgPool;

use ablek_core::settings::{
    presentation_defaults, DEFAULT_ADMIN_ID, DEFAULT_ADMIN_PASSWORD, SETTINGS_KEY,
};

use crate::models::setting::{Setting, UpdateSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, headline, subtext, address, phone, email, \
     instagram, youtube, linkedin, site_url, admin_id, admin_password, \
     main_color, hero_image, hero_headline, hero_headline_color, hero_headline_size, \
     hero_subtext, hero_subtext_color, hero_subtext_size, \
     hero_description, hero_desc_color, hero_desc_size, \
     contact_image, contact_title, contact_title_color, created_at, updated_at";

/// Provides read/merge-update operations on the settings singleton.
pub struct SettingRepo;

impl SettingRepo {
    /// Return the singleton row, creating it with default credentials if it
    /// does not exist yet.
    ///
    /// The insert uses `ON CONFLICT DO NOTHING` followed by a re-read, so two
    /// racing first reads still converge on a single row.
    pub async fn get_or_create(pool: &PgPool) -> Result<Setting, sqlx::Error> {
        sqlx::query(
            "INSERT INTO settings (id, admin_id, admin_password) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(SETTINGS_KEY)
        .bind(DEFAULT_ADMIN_ID)
        .bind(DEFAULT_ADMIN_PASSWORD)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_KEY)
            .fetch_one(pool)
            .await
    }

    /// Fetch the singleton row without creating it. Used by the session gate,
    /// which must tolerate an absent or unreachable row.
    pub async fn find(pool: &PgPool) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_KEY)
            .fetch_optional(pool)
            .await
    }

    /// Merge-update the enumerated public fields. Only non-`None` fields in
    /// `input` are applied; everything else keeps its stored value.
    ///
    /// Returns `None` if the singleton row does not exist (callers normally
    /// run [`Self::get_or_create`] first).
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSetting,
    ) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET
                title = COALESCE($2, title),
                headline = COALESCE($3, headline),
                subtext = COALESCE($4, subtext),
                address = COALESCE($5, address),
                phone = COALESCE($6, phone),
                email = COALESCE($7, email),
                instagram = COALESCE($8, instagram),
                youtube = COALESCE($9, youtube),
                linkedin = COALESCE($10, linkedin),
                site_url = COALESCE($11, site_url),
                main_color = COALESCE($12, main_color),
                hero_image = COALESCE($13, hero_image),
                hero_headline = COALESCE($14, hero_headline),
                hero_headline_color = COALESCE($15, hero_headline_color),
                hero_headline_size = COALESCE($16, hero_headline_size),
                hero_subtext = COALESCE($17, hero_subtext),
                hero_subtext_color = COALESCE($18, hero_subtext_color),
                hero_subtext_size = COALESCE($19, hero_subtext_size),
                hero_description = COALESCE($20, hero_description),
                hero_desc_color = COALESCE($21, hero_desc_color),
                hero_desc_size = COALESCE($22, hero_desc_size),
                contact_image = COALESCE($23, contact_image),
                contact_title = COALESCE($24, contact_title),
                contact_title_color = COALESCE($25, contact_title_color),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_KEY)
            .bind(&input.title)
            .bind(&input.headline)
            .bind(&input.subtext)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.instagram)
            .bind(&input.youtube)
            .bind(&input.linkedin)
            .bind(&input.site_url)
            .bind(&input.main_color)
            .bind(&input.hero_image)
            .bind(&input.hero_headline)
            .bind(&input.hero_headline_color)
            .bind(&input.hero_headline_size)
            .bind(&input.hero_subtext)
            .bind(&input.hero_subtext_color)
            .bind(&input.hero_subtext_size)
            .bind(&input.hero_description)
            .bind(&input.hero_desc_color)
            .bind(&input.hero_desc_size)
            .bind(&input.contact_image)
            .bind(&input.contact_title)
            .bind(&input.contact_title_color)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the credential fields only. The only write path that changes
    /// what the session gate accepts.
    pub async fn update_credentials(
        pool: &PgPool,
        admin_id: &str,
        admin_password: &str,
    ) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET admin_id = $2, admin_password = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_KEY)
            .bind(admin_id)
            .bind(admin_password)
            .fetch_optional(pool)
            .await
    }

    /// Restore the hero/contact presentation fields to their built-in
    /// defaults. Brand text, contact info, and credentials are untouched.
    pub async fn reset_presentation(pool: &PgPool) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!(
            "UPDATE settings SET
                hero_headline = $2,
                hero_headline_color = $3,
                hero_headline_size = $4,
                hero_subtext = $5,
                hero_subtext_color = $6,
                hero_subtext_size = $7,
                hero_description = $8,
                hero_desc_color = $9,
                hero_desc_size = $10,
                contact_title = $11,
                contact_title_color = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Setting>(&query)
            .bind(SETTINGS_KEY)
            .bind(presentation_defaults::HERO_HEADLINE)
            .bind(presentation_defaults::HERO_HEADLINE_COLOR)
            .bind(presentation_defaults::HERO_HEADLINE_SIZE)
            .bind(presentation_defaults::HERO_SUBTEXT)
            .bind(presentation_defaults::HERO_SUBTEXT_COLOR)
            .bind(presentation_defaults::HERO_SUBTEXT_SIZE)
            .bind(presentation_defaults::HERO_DESCRIPTION)
            .bind(presentation_defaults::HERO_DESC_COLOR)
            .bind(presentation_defaults::HERO_DESC_SIZE)
            .bind(presentation_defaults::CONTACT_TITLE)
            .bind(presentation_defaults::CONTACT_TITLE_COLOR)
            .fetch_optional(pool)
            .await
    }
}

//! Singleton site settings model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ablek_core::types::Timestamp;

/// The one row of the `settings` table, keyed by
/// [`ablek_core::settings::SETTINGS_KEY`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub id: String,

    pub title: Option<String>,
    pub headline: Option<String>,
    pub subtext: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
    pub site_url: Option<String>,

    pub admin_id: String,
    pub admin_password: String,

    pub main_color: Option<String>,
    pub hero_image: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_headline_color: Option<String>,
    pub hero_headline_size: Option<String>,
    pub hero_subtext: Option<String>,
    pub hero_subtext_color: Option<String>,
    pub hero_subtext_size: Option<String>,
    pub hero_description: Option<String>,
    pub hero_desc_color: Option<String>,
    pub hero_desc_size: Option<String>,
    pub contact_image: Option<String>,
    pub contact_title: Option<String>,
    pub contact_title_color: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the partial settings update. Exactly the enumerated public
/// fields; `None` leaves the stored value untouched (merge, not replace).
/// Credentials are deliberately absent -- they rotate only through
/// [`UpdateCredentials`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSetting {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub subtext: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
    pub site_url: Option<String>,

    pub main_color: Option<String>,
    pub hero_image: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_headline_color: Option<String>,
    pub hero_headline_size: Option<String>,
    pub hero_subtext: Option<String>,
    pub hero_subtext_color: Option<String>,
    pub hero_subtext_size: Option<String>,
    pub hero_description: Option<String>,
    pub hero_desc_color: Option<String>,
    pub hero_desc_size: Option<String>,
    pub contact_image: Option<String>,
    pub contact_title: Option<String>,
    pub contact_title_color: Option<String>,
}

/// DTO for admin credential rotation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCredentials {
    pub admin_id: String,
    pub admin_password: String,
}

/// Credential-free view of [`Setting`] served to the public render layer.
#[derive(Debug, Clone, Serialize)]
pub struct PublicSetting {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub subtext: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
    pub site_url: Option<String>,

    pub main_color: Option<String>,
    pub hero_image: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_headline_color: Option<String>,
    pub hero_headline_size: Option<String>,
    pub hero_subtext: Option<String>,
    pub hero_subtext_color: Option<String>,
    pub hero_subtext_size: Option<String>,
    pub hero_description: Option<String>,
    pub hero_desc_color: Option<String>,
    pub hero_desc_size: Option<String>,
    pub contact_image: Option<String>,
    pub contact_title: Option<String>,
    pub contact_title_color: Option<String>,
}

impl From<Setting> for PublicSetting {
    fn from(s: Setting) -> Self {
        Self {
            title: s.title,
            headline: s.headline,
            subtext: s.subtext,
            address: s.address,
            phone: s.phone,
            email: s.email,
            instagram: s.instagram,
            youtube: s.youtube,
            linkedin: s.linkedin,
            site_url: s.site_url,
            main_color: s.main_color,
            hero_image: s.hero_image,
            hero_headline: s.hero_headline,
            hero_headline_color: s.hero_headline_color,
            hero_headline_size: s.hero_headline_size,
            hero_subtext: s.hero_subtext,
            hero_subtext_color: s.hero_subtext_color,
            hero_subtext_size: s.hero_subtext_size,
            hero_description: s.hero_description,
            hero_desc_color: s.hero_desc_color,
            hero_desc_size: s.hero_desc_size,
            contact_image: s.contact_image,
            contact_title: s.contact_title,
            contact_title_color: s.contact_title_color,
        }
    }
}

//! Site settings domain rules.
//!
//! The settings table holds exactly one row, addressed by [`SETTINGS_KEY`].
//! It is created lazily on first read and mutated only through partial
//! updates, so readers never observe a missing configuration.

use crate::error::CoreError;

/// Fixed primary key of the singleton settings row.
pub const SETTINGS_KEY: &str = "site-settings";

/// Credentials written into a freshly created settings row, and the last
/// resort of the login fallback chain.
pub const DEFAULT_ADMIN_ID: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

/// Built-in presentation defaults restored by the settings reset operation.
///
/// Reset touches only these hero/contact fields; brand text, contact info,
/// and credentials are left alone.
pub mod presentation_defaults {
    pub const HERO_HEADLINE: &str =
        "Space is not a fixed box, but a physical embodiment that expands with life.";
    pub const HERO_HEADLINE_COLOR: &str = "#E5E4E2";
    pub const HERO_HEADLINE_SIZE: &str = "60";
    pub const HERO_SUBTEXT: &str =
        "We build spatial interfaces that respond flexibly to your growth.";
    pub const HERO_SUBTEXT_COLOR: &str = "#9CA3AF";
    pub const HERO_SUBTEXT_SIZE: &str = "18";
    pub const HERO_DESCRIPTION: &str = "Trends fade, but well-designed architecture endures.\nBeyond simple design, we build an artistic foundation that synchronizes with your life.";
    pub const HERO_DESC_COLOR: &str = "#6B7280";
    pub const HERO_DESC_SIZE: &str = "14";
    pub const CONTACT_TITLE: &str = "Collaborate with ABLE K";
    pub const CONTACT_TITLE_COLOR: &str = "#FFFFFF";
}

/// Resolved admin credentials the session gate compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub id: String,
    pub password: String,
}

/// Resolve the expected admin credentials.
///
/// Priority per field: stored settings value if non-empty, else the
/// environment-configured value if non-empty, else the hardcoded default.
/// Callers pass `None` for the stored pair when the settings row could not
/// be read -- login deliberately degrades to the fallback chain instead of
/// failing when the store is unreachable.
pub fn resolve_credentials(
    stored_id: Option<&str>,
    stored_password: Option<&str>,
    env_id: Option<&str>,
    env_password: Option<&str>,
) -> Credentials {
    Credentials {
        id: first_non_empty(stored_id, env_id, DEFAULT_ADMIN_ID),
        password: first_non_empty(stored_password, env_password, DEFAULT_ADMIN_PASSWORD),
    }
}

fn first_non_empty(stored: Option<&str>, env: Option<&str>, fallback: &str) -> String {
    stored
        .filter(|s| !s.is_empty())
        .or(env.filter(|s| !s.is_empty()))
        .unwrap_or(fallback)
        .to_string()
}

/// Validate a credential rotation request. Both fields must be non-empty.
pub fn validate_credentials(admin_id: &str, admin_password: &str) -> Result<(), CoreError> {
    if admin_id.trim().is_empty() || admin_password.trim().is_empty() {
        return Err(CoreError::Validation(
            "Both admin id and admin password are required".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_credentials_win() {
        let creds = resolve_credentials(Some("db-id"), Some("db-pw"), Some("env-id"), Some("env-pw"));
        assert_eq!(creds.id, "db-id");
        assert_eq!(creds.password, "db-pw");
    }

    #[test]
    fn test_env_beats_hardcoded() {
        let creds = resolve_credentials(None, None, Some("env-id"), Some("env-pw"));
        assert_eq!(creds.id, "env-id");
        assert_eq!(creds.password, "env-pw");
    }

    #[test]
    fn test_hardcoded_fallback() {
        let creds = resolve_credentials(None, None, None, None);
        assert_eq!(creds.id, DEFAULT_ADMIN_ID);
        assert_eq!(creds.password, DEFAULT_ADMIN_PASSWORD);
    }

    /// Empty strings are treated as absent at every level of the chain,
    /// independently per field.
    #[test]
    fn test_empty_values_fall_through_per_field() {
        let creds = resolve_credentials(Some(""), Some("db-pw"), Some("env-id"), Some(""));
        assert_eq!(creds.id, "env-id");
        assert_eq!(creds.password, "db-pw");
    }

    #[test]
    fn test_validate_credentials_rejects_blank() {
        assert!(validate_credentials("admin", "").is_err());
        assert!(validate_credentials("  ", "pw").is_err());
        assert!(validate_credentials("admin", "pw").is_ok());
    }
}

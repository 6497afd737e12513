//! Integration tests for the settings singleton.
//!
//! Covers lazy creation, merge-not-replace updates, credential rotation,
//! and the scoped presentation reset.

use sqlx::PgPool;

use ablek_core::settings::{presentation_defaults, SETTINGS_KEY};
use ablek_db::models::setting::UpdateSetting;
use ablek_db::repositories::SettingRepo;

/// First read creates the row with default credentials; a second read
/// returns the same row without creating a duplicate.
#[sqlx::test]
async fn test_get_or_create_is_idempotent(pool: PgPool) {
    assert!(SettingRepo::find(&pool).await.unwrap().is_none());

    let first = SettingRepo::get_or_create(&pool).await.unwrap();
    assert_eq!(first.id, SETTINGS_KEY);
    assert_eq!(first.admin_id, "admin");
    assert_eq!(first.admin_password, "1234");
    assert!(first.title.is_none());

    let second = SettingRepo::get_or_create(&pool).await.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "no duplicate singleton rows");
}

/// Updating one field leaves every other previously set field untouched.
#[sqlx::test]
async fn test_update_merges_instead_of_replacing(pool: PgPool) {
    SettingRepo::get_or_create(&pool).await.unwrap();

    let initial = UpdateSetting {
        title: Some("ABLE K".to_string()),
        address: Some("Seoul".to_string()),
        main_color: Some("#112233".to_string()),
        ..Default::default()
    };
    SettingRepo::update(&pool, &initial).await.unwrap().unwrap();

    let partial = UpdateSetting {
        title: Some("X".to_string()),
        ..Default::default()
    };
    let updated = SettingRepo::update(&pool, &partial).await.unwrap().unwrap();

    assert_eq!(updated.title.as_deref(), Some("X"));
    assert_eq!(updated.address.as_deref(), Some("Seoul"));
    assert_eq!(updated.main_color.as_deref(), Some("#112233"));
}

/// Update on a missing singleton reports `None` instead of erroring.
#[sqlx::test]
async fn test_update_without_row(pool: PgPool) {
    let result = SettingRepo::update(&pool, &UpdateSetting::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

/// Credential rotation overwrites only the credential columns.
#[sqlx::test]
async fn test_update_credentials(pool: PgPool) {
    SettingRepo::get_or_create(&pool).await.unwrap();
    SettingRepo::update(
        &pool,
        &UpdateSetting {
            title: Some("kept".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = SettingRepo::update_credentials(&pool, "boss", "secret")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.admin_id, "boss");
    assert_eq!(updated.admin_password, "secret");
    assert_eq!(updated.title.as_deref(), Some("kept"));
}

/// Reset restores exactly the presentation fields and leaves brand fields,
/// contact info, and credentials alone.
#[sqlx::test]
async fn test_reset_touches_only_presentation_fields(pool: PgPool) {
    SettingRepo::get_or_create(&pool).await.unwrap();
    SettingRepo::update_credentials(&pool, "boss", "secret")
        .await
        .unwrap();
    SettingRepo::update(
        &pool,
        &UpdateSetting {
            address: Some("Seoul".to_string()),
            phone: Some("02-000-0000".to_string()),
            email: Some("hi@ablek.kr".to_string()),
            hero_headline: Some("custom headline".to_string()),
            contact_title: Some("custom contact".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let reset = SettingRepo::reset_presentation(&pool)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        reset.hero_headline.as_deref(),
        Some(presentation_defaults::HERO_HEADLINE)
    );
    assert_eq!(
        reset.contact_title.as_deref(),
        Some(presentation_defaults::CONTACT_TITLE)
    );
    assert_eq!(
        reset.contact_title_color.as_deref(),
        Some(presentation_defaults::CONTACT_TITLE_COLOR)
    );

    assert_eq!(reset.address.as_deref(), Some("Seoul"));
    assert_eq!(reset.phone.as_deref(), Some("02-000-0000"));
    assert_eq!(reset.email.as_deref(), Some("hi@ablek.kr"));
    assert_eq!(reset.admin_id, "boss");
    assert_eq!(reset.admin_password, "secret");
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod character_item_repo;
pub mod inquiry_repo;
pub mod project_repo;
pub mod setting_repo;

pub use character_item_repo::CharacterItemRepo;
pub use inquiry_repo::InquiryRepo;
pub use project_repo::ProjectRepo;
pub use setting_repo::SettingRepo;

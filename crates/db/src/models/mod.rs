//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where partial updates exist, a `Deserialize` update DTO with all
//!   `Option` fields

pub mod character_item;
pub mod inquiry;
pub mod project;
pub mod setting;

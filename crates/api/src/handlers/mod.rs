//! HTTP handlers, one module per resource.

pub mod auth;
pub mod character;
pub mod inquiry;
pub mod project;
pub mod revalidation;
pub mod settings;
pub mod upload;

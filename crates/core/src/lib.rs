//! Domain logic for the ABLE K site backend.
//!
//! Pure functions and constants only -- no I/O. The database layer lives in
//! `ablek-db` and the HTTP surface in `ablek-api`.

pub mod content;
pub mod error;
pub mod settings;
pub mod types;

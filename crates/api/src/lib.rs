//! HTTP surface of the ABLE K site backend.
//!
//! Exposes the public content reads, the contact form, and the
//! cookie-gated admin API. Library form exists so integration tests can
//! build the exact router used by the binary.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod revalidate;
pub mod router;
pub mod routes;
pub mod state;

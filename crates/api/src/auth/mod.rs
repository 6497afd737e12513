//! Admin session primitives: the signed session marker and its
//! configuration.

pub mod session;

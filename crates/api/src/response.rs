//! Shared response envelope types for API handlers.
//!
//! Resource reads use a `{ "data": ... }` envelope; form-style operations
//! (login, upload) use [`SuccessResponse`] mirroring the admin frontend's
//! expectations.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": true }` acknowledgement for form-style operations.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

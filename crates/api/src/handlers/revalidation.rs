//! Handler exposing the render-invalidation epochs.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/revalidation
///
/// Current path-to-epoch map. The render layer compares these against its
/// cached epochs to decide what to recompute.
pub async fn snapshot(State(state): State<AppState>) -> Json<DataResponse<HashMap<String, u64>>> {
    Json(DataResponse {
        data: state.revalidator.snapshot(),
    })
}

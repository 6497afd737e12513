//! Handler for local file uploads.
//!
//! Files land under the configured upload directory and are served back
//! via static file routes at `/uploads/{name}`. Collisions are avoided by
//! prefixing the stored name with the ingestion timestamp. No size or type
//! validation is performed.

use std::path::Path as FsPath;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Response body for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    /// URL path the file is retrievable from via plain GET.
    pub url: String,
}

/// POST /api/v1/admin/uploads
pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
        }
        // Other fields are ignored.
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let stored_name = stored_filename(&filename, chrono::Utc::now().timestamp_millis());

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Upload directory error: {e}")))?;

    let path = FsPath::new(&state.config.upload_dir).join(&stored_name);
    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Upload write error: {e}")))?;

    tracing::info!(file = %path.display(), bytes = data.len(), "File uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            success: true,
            url: format!("/uploads/{stored_name}"),
        }),
    ))
}

/// Timestamp-prefixed storage name with whitespace collapsed to `_`.
///
/// The base name is stripped of any client-supplied directory components.
fn stored_filename(original: &str, unix_millis: i64) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{unix_millis}_{base}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_filename_prefixes_and_sanitizes() {
        assert_eq!(
            stored_filename("living room.png", 1700000000000),
            "1700000000000_living_room.png"
        );
        assert_eq!(stored_filename("a.png", 5), "5_a.png");
    }

    #[test]
    fn test_stored_filename_strips_directories() {
        assert_eq!(stored_filename("../../etc/passwd", 1), "1_passwd");
        assert_eq!(stored_filename("c:\\tmp\\x y.png", 2), "2_x_y.png");
    }
}

//! Image Upload Handler
//!
//! The browser sends the original file; resizing, JPEG re-encoding and
//! the blob upload all happen in [`ImagePipeline`](crate::upload::ImagePipeline).

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Deserialize;
use shared::ErrorCode;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::upload::{DEFAULT_FOLDER, UploadOutcome, UploadRequest};
use crate::utils::{AppError, AppResult, multipart_error};

#[derive(Debug, Deserialize)]
pub struct DeleteImageRequest {
    pub url: String,
}

/// POST /api/admin/images
///
/// On failure the error details carry `state` and, when the form had an
/// image before, `restoreUrl`.
pub async fn upload(
    State(state): State<ServerState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadOutcome>> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut folder = DEFAULT_FOLDER.to_string();
    let mut previous_url = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("image").to_string();
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        mime_guess::from_path(&file_name)
                            .first_or_octet_stream()
                            .to_string()
                    });
                let bytes = field.bytes().await.map_err(multipart_error)?.to_vec();
                file = Some((file_name, content_type, bytes));
            }
            Some("folder") => {
                let value = field.text().await.map_err(multipart_error)?;
                if !value.trim().is_empty() {
                    folder = value.trim().to_string();
                }
            }
            Some("previousUrl") => {
                let value = field.text().await.map_err(multipart_error)?;
                previous_url = Some(value).filter(|v| !v.trim().is_empty());
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) = file.ok_or_else(|| {
        AppError::invalid_field(ErrorCode::NoFileProvided, "file", "No 'file' field found")
    })?;

    let request = UploadRequest {
        file_name,
        content_type,
        bytes,
        folder,
        previous_url,
    };

    match state.pipeline.ingest(request).await {
        Ok(outcome) => {
            tracing::info!(url = %outcome.url, by = %user.email, "Image uploaded");
            Ok(Json(outcome))
        }
        Err(failure) => {
            let mut error = failure.error.with_detail("state", failure.state.as_str());
            if let Some(url) = failure.restore_url {
                error = error.with_detail("restoreUrl", url);
            }
            Err(error)
        }
    }
}

/// DELETE /api/admin/images - 删除图片 (不存在时 404)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<DeleteImageRequest>,
) -> AppResult<Json<bool>> {
    state.blob_store.delete(&req.url).await?;

    tracing::info!(url = %req.url, by = %user.email, "Image deleted");
    Ok(Json(true))
}

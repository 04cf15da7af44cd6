use std::sync::Arc;

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::state::{UploadState, UploadTracker};
use crate::imaging::{TransformOptions, transform_blocking};
use crate::storage::{BlobFile, BlobStore};
use crate::utils::AppError;
use crate::utils::validation::{validate_folder, validate_image_upload};

/// One image handed in by the admin form
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub folder: String,
    /// Image currently shown by the form, restored on failure
    pub previous_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub size: usize,
    /// SHA-256 of the stored bytes
    pub hash: String,
    pub state: UploadState,
}

#[derive(Debug, Clone)]
pub struct UploadFailure {
    pub error: AppError,
    pub state: UploadState,
    /// What the form should show again
    pub restore_url: Option<String>,
}

/// Validate, transform and store one image
#[derive(Clone)]
pub struct ImagePipeline {
    store: Arc<dyn BlobStore>,
    options: TransformOptions,
    max_bytes: usize,
}

impl ImagePipeline {
    pub fn new(store: Arc<dyn BlobStore>, options: TransformOptions, max_bytes: usize) -> Self {
        Self {
            store,
            options,
            max_bytes,
        }
    }

    pub async fn ingest(&self, request: UploadRequest) -> Result<UploadOutcome, UploadFailure> {
        let mut tracker = UploadTracker::new(request.previous_url.clone());
        match self.run(&mut tracker, request).await {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                let restore_url = tracker.fail();
                tracing::warn!(
                    target: "storage",
                    code = %error.code,
                    error = %error.message,
                    "Image upload failed"
                );
                Err(UploadFailure {
                    error,
                    state: tracker.state(),
                    restore_url,
                })
            }
        }
    }

    async fn run(
        &self,
        tracker: &mut UploadTracker,
        request: UploadRequest,
    ) -> Result<UploadOutcome, AppError> {
        validate_image_upload(&request.content_type, request.bytes.len(), self.max_bytes)?;
        validate_folder(&request.folder)?;
        tracker.advance(UploadState::PreviewLocal).map_err(internal)?;

        tracker.advance(UploadState::Compressing).map_err(internal)?;
        let image = transform_blocking(request.bytes, self.options).await?;

        tracker.advance(UploadState::Uploading).map_err(internal)?;
        let hash = hex::encode(Sha256::digest(&image.bytes));
        let size = image.bytes.len();
        let file = BlobFile {
            name: jpeg_name(&request.file_name),
            content_type: "image/jpeg".to_string(),
            bytes: image.bytes,
        };
        let url = self.store.upload(file, &request.folder).await?;

        tracker.advance(UploadState::Done).map_err(internal)?;
        tracing::info!(
            target: "storage",
            url = %url,
            width = image.width,
            height = image.height,
            size,
            "Image stored"
        );

        Ok(UploadOutcome {
            url,
            width: image.width,
            height: image.height,
            size,
            hash,
            state: tracker.state(),
        })
    }
}

fn internal(e: super::state::InvalidTransition) -> AppError {
    AppError::internal(e.to_string())
}

/// Transformed output is always JPEG; keep the stem, swap the extension
fn jpeg_name(original: &str) -> String {
    let stem = match original.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => original,
    };
    let stem = if stem.trim().is_empty() { "image" } else { stem };
    format!("{}.jpg", stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::utils::ErrorCode;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([120, 80, 40]));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
        out
    }

    fn pipeline() -> (ImagePipeline, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new("http://localhost/blobs"));
        let pipeline = ImagePipeline::new(store.clone(), TransformOptions::default(), 5 * 1024 * 1024);
        (pipeline, store)
    }

    fn request(bytes: Vec<u8>, content_type: &str) -> UploadRequest {
        UploadRequest {
            file_name: "latte.png".into(),
            content_type: content_type.into(),
            bytes,
            folder: "images/products".into(),
            previous_url: Some("http://localhost/blobs/images/old.jpg".into()),
        }
    }

    #[test]
    fn jpeg_name_swaps_extension() {
        assert_eq!(jpeg_name("latte.png"), "latte.jpg");
        assert_eq!(jpeg_name("a.b.webp"), "a.b.jpg");
        assert_eq!(jpeg_name("noext"), "noext.jpg");
        assert_eq!(jpeg_name(".png"), "image.jpg");
        assert_eq!(jpeg_name(""), "image.jpg");
    }

    #[tokio::test]
    async fn stores_bounded_jpeg() {
        let (pipeline, store) = pipeline();
        let outcome = pipeline.ingest(request(png(2400, 1200), "image/png")).await.unwrap();

        assert_eq!(outcome.state, UploadState::Done);
        assert_eq!((outcome.width, outcome.height), (1200, 600));
        assert!(outcome.url.starts_with("http://localhost/blobs/images/products/"));
        assert!(outcome.url.ends_with(".jpg"));

        let stored = store.get(&outcome.url).await.unwrap();
        assert_eq!(stored.content_type, "image/jpeg");
        assert_eq!(stored.bytes.len(), outcome.size);
    }

    #[tokio::test]
    async fn rejected_type_restores_previous_image() {
        let (pipeline, store) = pipeline();
        let failure = pipeline
            .ingest(request(b"%PDF-1.4".to_vec(), "application/pdf"))
            .await
            .unwrap_err();

        assert_eq!(failure.error.code, ErrorCode::UnsupportedFileFormat);
        assert_eq!(failure.state, UploadState::Idle);
        assert_eq!(failure.restore_url.as_deref(), Some("http://localhost/blobs/images/old.jpg"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn undecodable_image_fails_while_compressing() {
        let (pipeline, store) = pipeline();
        let failure = pipeline
            .ingest(request(b"not really a png".to_vec(), "image/png"))
            .await
            .unwrap_err();

        assert_eq!(failure.error.code, ErrorCode::InvalidImageFile);
        assert_eq!(failure.state, UploadState::Failed);
        assert!(store.is_empty().await);
    }
}

//! Blob stores
//!
//! One capability, three hosts: a version-control content API
//! ([`ContentStore`]), S3-compatible object storage ([`ObjectStore`]) and an
//! in-process map ([`MemoryStore`]). The host is chosen once at startup and
//! shared as `Arc<dyn BlobStore>`.

mod content_store;
mod memory;
mod object_store;

pub use content_store::ContentStore;
pub use memory::MemoryStore;
pub use object_store::ObjectStore;

use std::sync::Arc;

use async_trait::async_trait;
use shared::util::{now_millis, random_base36};
use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::core::BlobConfig;

/// Length of the random part of generated filenames
pub const RANDOM_SUFFIX_LEN: usize = 7;

/// A file ready to be stored
#[derive(Debug, Clone)]
pub struct BlobFile {
    /// Original file name, used for the extension
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("upload rejected: {0}")]
    Upload(String),

    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("not a URL of this store: {0}")]
    InvalidUrl(String),

    #[error("blob host unreachable: {0}")]
    Connectivity(String),

    #[error("blob host rejected credentials: {0}")]
    Permission(String),

    #[error("blob host request failed: {0}")]
    Request(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Upload(msg) => AppError::upload(msg),
            StorageError::NotFound(url) => {
                AppError::with_message(ErrorCode::BlobNotFound, format!("Image not found: {}", url))
                    .with_detail("url", url)
            }
            StorageError::InvalidUrl(url) => AppError::invalid_url(url),
            StorageError::Connectivity(msg) => AppError::connectivity(msg),
            StorageError::Permission(msg) => AppError::permission_denied(msg),
            StorageError::Request(msg) => AppError::upload(msg),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Stores files under a folder and hands back a public URL
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Backend name for logs and health output
    fn name(&self) -> &'static str;

    /// Store `file` under `folder` with a freshly generated name. No retry.
    async fn upload(&self, file: BlobFile, folder: &str) -> StorageResult<String>;

    /// Remove the blob behind `url`. Absent blobs are [`StorageError::NotFound`].
    async fn delete(&self, url: &str) -> StorageResult<()>;

    /// `{prefix-}{millis}-{random}.{ext}`
    fn generate_unique_filename(&self, original_name: &str, prefix: Option<&str>) -> String {
        unique_filename(original_name, prefix)
    }
}

/// Build `{prefix-}{timestampMillis}-{7 random base36 chars}.{extension}`.
///
/// The extension is whatever follows the last `.` of the original name.
/// Uniqueness is probabilistic; nothing checks the store.
pub fn unique_filename(original_name: &str, prefix: Option<&str>) -> String {
    let extension = original_name.rsplit('.').next().unwrap_or(original_name);
    let stem = format!("{}-{}", now_millis(), random_base36(RANDOM_SUFFIX_LEN));
    match prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => format!("{}-{}.{}", prefix, stem, extension),
        None => format!("{}.{}", stem, extension),
    }
}

/// Join a folder and a filename into a store path
pub(crate) fn object_path(folder: &str, filename: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", folder, filename)
    }
}

/// Instantiate the configured backend
pub async fn from_config(config: &BlobConfig) -> Result<Arc<dyn BlobStore>, StorageError> {
    let store: Arc<dyn BlobStore> = match config {
        BlobConfig::GitHub(cfg) => Arc::new(ContentStore::new(cfg.clone())?),
        BlobConfig::S3(cfg) => Arc::new(ObjectStore::from_config(cfg).await),
        BlobConfig::Memory { public_base } => Arc::new(MemoryStore::new(public_base.clone())),
    };
    tracing::info!(target: "storage", backend = store.name(), "Blob store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_has_prefix_timestamp_suffix_and_extension() {
        let name = unique_filename("latte.photo.PNG", Some("product"));
        let parts: Vec<&str> = name.splitn(3, '-').collect();
        assert_eq!(parts[0], "product");
        assert!(parts[1].parse::<u128>().is_ok());

        let (random, ext) = parts[2].split_once('.').unwrap();
        assert_eq!(random.len(), RANDOM_SUFFIX_LEN);
        assert!(random.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_eq!(ext, "PNG");
    }

    #[test]
    fn filename_without_prefix() {
        let name = unique_filename("menu.jpg", None);
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.matches('-').count(), 1);
    }

    #[test]
    fn name_without_dot_becomes_extension() {
        let name = unique_filename("blob", None);
        assert!(name.ends_with(".blob"));
    }

    #[test]
    fn consecutive_names_differ() {
        let a = unique_filename("a.jpg", Some("x"));
        let b = unique_filename("a.jpg", Some("x"));
        assert_ne!(a, b);
    }

    #[test]
    fn object_path_trims_slashes() {
        assert_eq!(object_path("/images/products/", "a.jpg"), "images/products/a.jpg");
        assert_eq!(object_path("", "a.jpg"), "a.jpg");
    }

    #[test]
    fn not_found_maps_to_blob_not_found() {
        let err: AppError = StorageError::NotFound("https://x/y.jpg".into()).into();
        assert_eq!(err.code, ErrorCode::BlobNotFound);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
    }
}

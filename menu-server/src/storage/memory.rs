//! In-process blob store for development and tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BlobFile, BlobStore, StorageError, StorageResult, object_path};

pub struct MemoryStore {
    public_base: String,
    blobs: RwLock<HashMap<String, BlobFile>>,
}

impl MemoryStore {
    pub fn new(public_base: impl Into<String>) -> Self {
        Self {
            public_base: public_base.into().trim_end_matches('/').to_string(),
            blobs: RwLock::new(HashMap::new()),
        }
    }

    fn key_from_url(&self, url: &str) -> StorageResult<String> {
        url.strip_prefix(&self.public_base)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| StorageError::InvalidUrl(url.to_string()))
    }

    /// Stored file behind a URL
    pub async fn get(&self, url: &str) -> Option<BlobFile> {
        let key = self.key_from_url(url).ok()?;
        self.blobs.read().await.get(&key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn upload(&self, file: BlobFile, folder: &str) -> StorageResult<String> {
        let filename = self.generate_unique_filename(&file.name, None);
        let key = object_path(folder, &filename);
        self.blobs.write().await.insert(key.clone(), file);
        Ok(format!("{}/{}", self.public_base, key))
    }

    async fn delete(&self, url: &str) -> StorageResult<()> {
        let key = self.key_from_url(url)?;
        match self.blobs.write().await.remove(&key) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(url.to_string())),
        }
    }
}

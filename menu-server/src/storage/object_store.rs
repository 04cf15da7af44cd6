//! S3-compatible object storage

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;

use super::{BlobFile, BlobStore, StorageError, StorageResult, object_path};
use crate::core::config::S3Config;

pub struct ObjectStore {
    client: Client,
    bucket: String,
    public_base: String,
}

impl ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>, public_base: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client from the default AWS credential chain, with an optional
    /// S3-compatible endpoint (path-style addressing)
    pub async fn from_config(config: &S3Config) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        Self::new(
            Client::from_conf(builder.build()),
            config.bucket.clone(),
            config.public_url.clone(),
        )
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }

    /// Object key behind a public URL
    pub fn key_from_url(&self, url: &str) -> StorageResult<String> {
        url.strip_prefix(&self.public_base)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| rest.split(['?', '#']).next().unwrap_or(rest))
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| StorageError::InvalidUrl(url.to_string()))
    }
}

#[async_trait]
impl BlobStore for ObjectStore {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn upload(&self, file: BlobFile, folder: &str) -> StorageResult<String> {
        let filename = self.generate_unique_filename(&file.name, None);
        let key = object_path(folder, &filename);
        let size = file.bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(file.bytes))
            .content_type(file.content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(target: "storage", key = %key, error = %e, "S3 upload failed");
                StorageError::Upload(e.to_string())
            })?;

        tracing::info!(target: "storage", key = %key, size, "Image uploaded to S3");
        Ok(self.public_url(&key))
    }

    async fn delete(&self, url: &str) -> StorageResult<()> {
        let key = self.key_from_url(url)?;

        // S3 deletes are idempotent; absence has to be checked up front
        self.client
            .head_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| {
                let not_found = e.as_service_error().is_some_and(|se| se.is_not_found());
                if not_found {
                    StorageError::NotFound(url.to_string())
                } else {
                    StorageError::Request(e.to_string())
                }
            })?;

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(target: "storage", key = %key, error = %e, "S3 delete failed");
                StorageError::Request(e.to_string())
            })?;

        tracing::info!(target: "storage", key = %key, "Image deleted from S3");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ObjectStore {
        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new("us-east-1"))
            .build();
        ObjectStore::new(Client::from_conf(conf), "menu", "https://cdn.example.com/")
    }

    #[test]
    fn key_round_trips_through_url() {
        let s = store();
        let url = s.public_url("images/products/1-abc.jpg");
        assert_eq!(url, "https://cdn.example.com/images/products/1-abc.jpg");
        assert_eq!(s.key_from_url(&url).unwrap(), "images/products/1-abc.jpg");
    }

    #[test]
    fn query_string_is_not_part_of_key() {
        let s = store();
        assert_eq!(
            s.key_from_url("https://cdn.example.com/a/b.jpg?v=2").unwrap(),
            "a/b.jpg"
        );
    }

    #[test]
    fn other_host_is_invalid() {
        let err = store().key_from_url("https://elsewhere.com/a.jpg").unwrap_err();
        assert!(matches!(err, StorageError::InvalidUrl(_)));
    }
}

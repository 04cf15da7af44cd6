//! Version-control content store
//!
//! Every upload is a commit that adds one file to a fixed branch; every
//! delete is a commit that removes it. Public URLs point at the raw-content
//! host: `https://{raw_host}/{owner}/{repo}/{branch}/{path}`.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

use super::{BlobFile, BlobStore, StorageError, StorageResult, object_path};
use crate::core::config::GitHubConfig;

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const USER_AGENT_HEADER: &str = concat!("menu-server/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct PutContents<'a> {
    message: String,
    content: String,
    branch: &'a str,
}

#[derive(Serialize)]
struct DeleteContents<'a> {
    message: String,
    sha: String,
    branch: &'a str,
}

#[derive(Deserialize)]
struct ContentMetadata {
    sha: String,
}

pub struct ContentStore {
    config: GitHubConfig,
    client: reqwest::Client,
}

impl ContentStore {
    pub fn new(config: GitHubConfig) -> StorageResult<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| StorageError::Permission("token is not a valid header value".into()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_HEADER));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StorageError::Request(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.owner,
            self.config.repo,
            path
        )
    }

    /// Public URL of a stored path
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "https://{}/{}/{}/{}/{}",
            self.config.raw_host, self.config.owner, self.config.repo, self.config.branch, path
        )
    }

    /// Repository path behind a public URL
    pub fn path_from_url(&self, url: &str) -> StorageResult<String> {
        let marker = format!(
            "/{}/{}/{}/",
            self.config.owner, self.config.repo, self.config.branch
        );
        match url.split_once(&marker) {
            Some((_, path)) if !path.is_empty() => Ok(path.to_string()),
            _ => Err(StorageError::InvalidUrl(url.to_string())),
        }
    }

    async fn current_sha(&self, path: &str, url: &str) -> StorageResult<String> {
        let response = self
            .client
            .get(format!("{}?ref={}", self.contents_url(path), self.config.branch))
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StorageError::NotFound(url.to_string())),
            status if status.is_success() => {
                let meta: ContentMetadata = response
                    .json()
                    .await
                    .map_err(|e| StorageError::Request(e.to_string()))?;
                Ok(meta.sha)
            }
            status => Err(status_error(status, "metadata lookup")),
        }
    }
}

fn transport_error(err: reqwest::Error) -> StorageError {
    if err.is_connect() || err.is_timeout() {
        StorageError::Connectivity(err.to_string())
    } else {
        StorageError::Request(err.to_string())
    }
}

fn status_error(status: StatusCode, operation: &str) -> StorageError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            StorageError::Permission(format!("{} rejected with {}", operation, status))
        }
        _ => StorageError::Request(format!("{} failed with {}", operation, status)),
    }
}

#[async_trait]
impl BlobStore for ContentStore {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn upload(&self, file: BlobFile, folder: &str) -> StorageResult<String> {
        let filename = self.generate_unique_filename(&file.name, None);
        let path = object_path(folder, &filename);

        let body = PutContents {
            message: format!("Add image: {}", filename),
            content: BASE64.encode(&file.bytes),
            branch: &self.config.branch,
        };

        let response = self
            .client
            .put(self.contents_url(&path))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(target: "storage", %status, path = %path, detail = %detail, "Content API rejected upload");
            return Err(StorageError::Upload(format!("content API returned {}", status)));
        }

        let url = self.public_url(&path);
        tracing::info!(target: "storage", path = %path, size = file.bytes.len(), "Image committed");
        Ok(url)
    }

    async fn delete(&self, url: &str) -> StorageResult<()> {
        let path = self.path_from_url(url)?;
        let sha = self.current_sha(&path, url).await?;

        let body = DeleteContents {
            message: format!("Delete image: {}", path),
            sha,
            branch: &self.config.branch,
        };

        let response = self
            .client
            .delete(self.contents_url(&path))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StorageError::NotFound(url.to_string())),
            status if status.is_success() => {
                tracing::info!(target: "storage", path = %path, "Image deleted");
                Ok(())
            }
            status => Err(status_error(status, "delete")),
        }
    }
}

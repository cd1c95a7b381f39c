use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::BlobId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub id: BlobId,
    pub size_bytes: u64,
}

#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores a new immutable blob under a freshly generated id.
    async fn store(
        &self,
        content_type: &str,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredBlob, BlobStoreError>;

    async fn fetch(&self, id: &BlobId) -> Result<Vec<u8>, BlobStoreError>;

    /// `None` when the blob does not exist.
    async fn get_url(&self, id: &BlobId) -> Result<Option<String>, BlobStoreError>;

    /// Endpoint clients upload raw bytes to.
    fn upload_target(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("blob not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

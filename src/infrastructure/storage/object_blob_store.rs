use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError, StoredBlob};
use crate::domain::BlobId;

/// Blob store over any `object_store` backend. URLs point back at this
/// service's file endpoint under `public_base_url`.
pub struct ObjectBlobStore {
    inner: Arc<dyn ObjectStore>,
    public_base_url: String,
}

impl ObjectBlobStore {
    pub fn new(inner: Arc<dyn ObjectStore>, public_base_url: &str) -> Self {
        Self {
            inner,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn in_memory(public_base_url: &str) -> Self {
        Self::new(Arc::new(InMemory::new()), public_base_url)
    }

    pub fn local(base_path: PathBuf, public_base_url: &str) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path).map_err(BlobStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(fs), public_base_url))
    }

    pub fn azure(
        account: &str,
        access_key: &str,
        container: &str,
        public_base_url: &str,
    ) -> Result<Self, BlobStoreError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(store), public_base_url))
    }

    fn url_for(&self, id: &BlobId) -> String {
        format!("{}/api/v1/files/{}", self.public_base_url, id)
    }
}

#[async_trait::async_trait]
impl BlobStore for ObjectBlobStore {
    async fn store(
        &self,
        content_type: &str,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredBlob, BlobStoreError> {
        let id = BlobId::generate(content_type);
        let store_path = StorePath::from(id.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(BlobStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(BlobStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(blob_id = %id, bytes = total_bytes, content_type, "Blob stored");

        Ok(StoredBlob {
            id,
            size_bytes: total_bytes,
        })
    }

    async fn fetch(&self, id: &BlobId) -> Result<Vec<u8>, BlobStoreError> {
        let store_path = StorePath::from(id.as_str());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => BlobStoreError::NotFound(id.to_string()),
            other => BlobStoreError::DownloadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn get_url(&self, id: &BlobId) -> Result<Option<String>, BlobStoreError> {
        let store_path = StorePath::from(id.as_str());
        match self.inner.head(&store_path).await {
            Ok(_) => Ok(Some(self.url_for(id))),
            Err(object_store::Error::NotFound { .. }) => Ok(None),
            Err(e) => Err(BlobStoreError::DownloadFailed(e.to_string())),
        }
    }

    fn upload_target(&self) -> String {
        format!("{}/api/v1/files", self.public_base_url)
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::object_blob_store::ObjectBlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        let base_url = settings.public_base_url.as_str();
        match settings.provider {
            StorageProviderSetting::Memory => Ok(Arc::new(ObjectBlobStore::in_memory(base_url))),
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                let store = ObjectBlobStore::local(path, base_url)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Azure => {
                let account = settings.azure_account.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("azure_account required".into())
                })?;
                let key = settings.azure_access_key.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("azure_access_key required".into())
                })?;
                let container = settings.azure_container.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("azure_container required".into())
                })?;
                let store = ObjectBlobStore::azure(account, key, container, base_url)?;
                Ok(Arc::new(store))
            }
        }
    }
}

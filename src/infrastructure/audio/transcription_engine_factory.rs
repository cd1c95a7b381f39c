use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::{AzureWhisperEngine, DEFAULT_AZURE_API_VERSION};
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    /// Fails with `MissingCredential` when no API key is configured; a
    /// missing Azure endpoint or deployment is reported the same way.
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(TranscriptionError::MissingCredential)?;

        match settings.provider {
            TranscriptionProviderSetting::OpenAi => {
                let engine = OpenAiWhisperEngine::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                );
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Azure => {
                let base_url = settings
                    .base_url
                    .as_deref()
                    .ok_or(TranscriptionError::MissingCredential)?;
                let deployment = settings
                    .azure_deployment
                    .as_deref()
                    .ok_or(TranscriptionError::MissingCredential)?;
                let api_version = settings
                    .azure_api_version
                    .as_deref()
                    .unwrap_or(DEFAULT_AZURE_API_VERSION);
                let engine = AzureWhisperEngine::new(base_url, deployment, &key, api_version);
                Ok(Arc::new(engine))
            }
        }
    }
}

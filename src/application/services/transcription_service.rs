use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioClip, local_path_from_uri};

/// Turns a recorded audio resource into transcript text. The service never
/// retries; callers decide whether to re-invoke or fall back to typing.
pub struct TranscriptionService {
    engine: Option<Arc<dyn TranscriptionEngine>>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    /// A service without a credential; every call fails with `MissingCredential`.
    pub fn unconfigured() -> Self {
        Self { engine: None }
    }

    pub fn is_configured(&self) -> bool {
        self.engine.is_some()
    }

    #[tracing::instrument(skip(self))]
    pub async fn transcribe_uri(&self, uri: &str) -> Result<String, TranscriptionError> {
        let engine = self.engine()?;

        let path = local_path_from_uri(uri);
        let data = tokio::fs::read(&path).await.map_err(|e| {
            TranscriptionError::AudioUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let file_name = path.file_name().and_then(|n| n.to_str());
        let clip = AudioClip::new(data, file_name);

        Self::run(engine, &clip).await
    }

    pub async fn transcribe_clip(&self, clip: &AudioClip) -> Result<String, TranscriptionError> {
        let engine = self.engine()?;
        Self::run(engine, clip).await
    }

    fn engine(&self) -> Result<&Arc<dyn TranscriptionEngine>, TranscriptionError> {
        self.engine.as_ref().ok_or_else(|| {
            tracing::error!("Transcription requested but no credential is configured");
            TranscriptionError::MissingCredential
        })
    }

    async fn run(
        engine: &Arc<dyn TranscriptionEngine>,
        clip: &AudioClip,
    ) -> Result<String, TranscriptionError> {
        if clip.is_empty() {
            return Err(TranscriptionError::AudioUnavailable(
                "recording is empty".to_string(),
            ));
        }

        tracing::debug!(
            bytes = clip.data().len(),
            file_name = clip.file_name(),
            "Submitting audio for transcription"
        );

        engine.transcribe(clip).await
    }
}

use async_trait::async_trait;

use crate::domain::AudioClip;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// An empty string means no speech was detected; it is not a failure.
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription credential is not configured")]
    MissingCredential,
    #[error("audio resource unreadable: {0}")]
    AudioUnavailable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Undetermined,
    Denied,
}

/// The device microphone. Only one capture can be open at a time.
#[async_trait]
pub trait AudioRecorder: Send + Sync {
    async fn permission(&self) -> PermissionStatus;

    async fn request_permission(&self) -> PermissionStatus;

    async fn start(&self) -> Result<(), RecorderError>;

    /// Stops the capture and returns the local URI of the recording, if any.
    async fn stop(&self) -> Result<Option<String>, RecorderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("failed to start recording: {0}")]
    StartFailed(String),
    #[error("failed to stop recording: {0}")]
    StopFailed(String),
}

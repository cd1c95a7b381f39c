use crate::domain::RecordingTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PermissionDenied,
    RecordingFailed(String),
    TranscriptionComplete(RecordingTarget),
    TranscriptionFailed {
        target: RecordingTarget,
        reason: String,
    },
}

/// Surfaces user-facing notices (alerts, toasts) from background work.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

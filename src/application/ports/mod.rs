mod audio_recorder;
mod blob_store;
mod notifier;
mod project_repository;
mod report_renderer;
mod repository_error;
mod transcription_engine;

pub use audio_recorder::{AudioRecorder, PermissionStatus, RecorderError};
pub use blob_store::{BlobStore, BlobStoreError, StoredBlob};
pub use notifier::{Notice, Notifier};
pub use project_repository::{ProjectEdit, ProjectRepository};
pub use report_renderer::{RenderError, ReportRenderer};
pub use repository_error::RepositoryError;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

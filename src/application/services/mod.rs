mod project_service;
mod recording_session;
mod report_assembler;
mod report_publisher;
mod report_service;
mod transcription_service;

pub use project_service::{ProjectService, ProjectServiceError};
pub use recording_session::{RecordingSession, RecordingState, SessionError, StopOutcome};
pub use report_assembler::{DEFAULT_PLACEHOLDER_COVER_URL, ReportAssembler};
pub use report_publisher::{PublishError, PublishedReport, ReportPublisher, report_file_name};
pub use report_service::{ReportError, ReportService};
pub use transcription_service::TranscriptionService;

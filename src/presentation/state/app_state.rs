use std::sync::Arc;

use crate::application::ports::BlobStore;
use crate::application::services::{ProjectService, ReportService, TranscriptionService};

#[derive(Clone)]
pub struct AppState {
    pub project_service: Arc<ProjectService>,
    pub report_service: Arc<ReportService>,
    pub transcription_service: Arc<TranscriptionService>,
    pub blob_store: Arc<dyn BlobStore>,
}

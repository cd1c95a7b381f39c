mod audio_clip;
mod blob_id;
mod field_drafts;
mod observation;
mod project;
mod project_id;
mod project_patch;
mod project_template;
mod recommendation;
mod recording_target;
mod report;
mod resolved_project;

pub use audio_clip::{AudioClip, local_path_from_uri};
pub use blob_id::{BlobId, InvalidBlobId};
pub use field_drafts::{FieldDrafts, SectionDraft};
pub use observation::{Observation, ObservationPatch, PLACEHOLDER_OBSERVATION_CONTENT};
pub use project::{Project, ProjectError};
pub use project_id::ProjectId;
pub use project_patch::ProjectPatch;
pub use project_template::{ProjectTemplate, catalog, find_template, search_templates};
pub use recommendation::Recommendation;
pub use recording_target::{RecordingTarget, TextSection};
pub use report::{AssembledReport, ReportField, ReportImage, ReportSection, TocEntry};
pub use resolved_project::ResolvedProject;

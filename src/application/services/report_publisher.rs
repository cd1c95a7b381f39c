use std::io;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{SecondsFormat, Utc};
use futures::stream;
use serde::Serialize;

use crate::application::ports::{BlobStore, BlobStoreError, ProjectRepository};
use crate::domain::{BlobId, Project, ProjectPatch};

const REPORT_CONTENT_TYPE: &str = "text/html";

/// Result of a publish. `bookmark_saved` is `false` when the report exists but
/// the project's "last generated report" URL could not be updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedReport {
    pub storage_id: BlobId,
    pub url: String,
    pub file_name: String,
    pub bookmark_saved: bool,
}

pub struct ReportPublisher {
    blob_store: Arc<dyn BlobStore>,
    repository: Arc<dyn ProjectRepository>,
}

impl ReportPublisher {
    pub fn new(blob_store: Arc<dyn BlobStore>, repository: Arc<dyn ProjectRepository>) -> Self {
        Self {
            blob_store,
            repository,
        }
    }

    /// Every call stores a new blob; identical input still yields a new id and URL.
    #[tracing::instrument(skip(self, project, html), fields(project_id = %project.id))]
    pub async fn publish(
        &self,
        project: &Project,
        html: String,
    ) -> Result<PublishedReport, PublishError> {
        let file_name = report_file_name(&project.name);
        let body = stream::once(async move { Ok::<_, io::Error>(Bytes::from(html)) });

        let stored = self
            .blob_store
            .store(REPORT_CONTENT_TYPE, Box::pin(body))
            .await
            .map_err(PublishError::Store)?;

        let url = match self.blob_store.get_url(&stored.id).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::error!(
                    blob_id = %stored.id,
                    "Report stored but no URL is available; blob is orphaned"
                );
                return Err(PublishError::UrlUnavailable(stored.id));
            }
            Err(e) => {
                tracing::error!(
                    blob_id = %stored.id,
                    error = %e,
                    "Report stored but URL lookup failed; blob is orphaned"
                );
                return Err(PublishError::Store(e));
            }
        };

        let bookmark_saved = match self
            .repository
            .patch(project.id, ProjectPatch::report_url(url.clone()))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    url = %url,
                    "Failed to record report URL on project"
                );
                false
            }
        };

        tracing::info!(
            blob_id = %stored.id,
            bytes = stored.size_bytes,
            file_name = %file_name,
            url = %url,
            "Report published"
        );

        Ok(PublishedReport {
            storage_id: stored.id,
            url,
            file_name,
            bookmark_saved,
        })
    }
}

/// `<name with non-alphanumerics replaced by _>_<timestamp>.html`
pub fn report_file_name(project_name: &str) -> String {
    let base: String = if project_name.is_empty() {
        "Untitled_Report".to_string()
    } else {
        project_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    };
    format!(
        "{}_{}.html",
        base,
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("blob store: {0}")]
    Store(#[from] BlobStoreError),
    #[error("no URL available for stored report {0}")]
    UrlUnavailable(BlobId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_name_with_spaces_when_naming_report_then_non_alphanumerics_are_replaced() {
        let name = report_file_name("Roof Check #2");
        assert!(name.starts_with("Roof_Check__2_"));
        assert!(name.ends_with(".html"));
    }

    #[test]
    fn given_empty_name_when_naming_report_then_uses_untitled() {
        assert!(report_file_name("").starts_with("Untitled_Report_"));
    }
}

mod helpers;

use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;

use helpers::PatchRejectingRepository;
use sitereport::application::ports::{
    BlobStore, BlobStoreError, ProjectRepository, RenderError, ReportRenderer, StoredBlob,
};
use sitereport::application::services::{
    ProjectService, PublishError, ReportAssembler, ReportError, ReportPublisher, ReportService,
};
use sitereport::domain::{AssembledReport, BlobId, Observation, ProjectId};
use sitereport::infrastructure::persistence::InMemoryProjectRepository;
use sitereport::infrastructure::rendering::HandlebarsReportRenderer;
use sitereport::infrastructure::storage::ObjectBlobStore;

const BASE_URL: &str = "http://files.test";

/// Stores normally but never resolves a URL.
struct UrlLessBlobStore {
    inner: ObjectBlobStore,
}

#[async_trait::async_trait]
impl BlobStore for UrlLessBlobStore {
    async fn store(
        &self,
        content_type: &str,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredBlob, BlobStoreError> {
        self.inner.store(content_type, stream).await
    }

    async fn fetch(&self, id: &BlobId) -> Result<Vec<u8>, BlobStoreError> {
        self.inner.fetch(id).await
    }

    async fn get_url(&self, _id: &BlobId) -> Result<Option<String>, BlobStoreError> {
        Ok(None)
    }

    fn upload_target(&self) -> String {
        self.inner.upload_target()
    }
}

struct BrokenRenderer;

impl ReportRenderer for BrokenRenderer {
    fn render(&self, _report: &AssembledReport) -> Result<String, RenderError> {
        Err(RenderError::Rendering("missing helper".to_string()))
    }
}

struct Pipeline {
    projects: Arc<ProjectService>,
    reports: ReportService,
    blob_store: Arc<dyn BlobStore>,
}

fn pipeline_with(
    repository: Arc<dyn ProjectRepository>,
    blob_store: Arc<dyn BlobStore>,
    renderer: Arc<dyn ReportRenderer>,
) -> Pipeline {
    let projects = Arc::new(ProjectService::new(
        Arc::clone(&repository),
        Arc::clone(&blob_store),
    ));
    let reports = ReportService::new(
        Arc::clone(&projects),
        ReportAssembler::default(),
        renderer,
        ReportPublisher::new(Arc::clone(&blob_store), repository),
    );
    Pipeline {
        projects,
        reports,
        blob_store,
    }
}

fn default_pipeline() -> Pipeline {
    pipeline_with(
        Arc::new(InMemoryProjectRepository::new()),
        Arc::new(ObjectBlobStore::in_memory(BASE_URL)),
        Arc::new(HandlebarsReportRenderer::new().unwrap()),
    )
}

async fn roof_check(pipeline: &Pipeline) -> ProjectId {
    let project = pipeline
        .projects
        .create_from_template("1", Some("Roof Check".to_string()), None)
        .await
        .unwrap();
    pipeline
        .projects
        .add_observation(project.id, Observation::new("a", "").with_content("crack"))
        .await
        .unwrap();
    project.id
}

#[tokio::test]
async fn given_same_project_when_generating_twice_then_two_distinct_reports_exist() {
    let pipeline = default_pipeline();
    let id = roof_check(&pipeline).await;

    let first = pipeline.reports.generate(id).await.unwrap();
    let second = pipeline.reports.generate(id).await.unwrap();

    assert_ne!(first.storage_id, second.storage_id);
    assert_ne!(first.url, second.url);
    assert!(first.bookmark_saved && second.bookmark_saved);

    let project = pipeline.projects.get_project(id).await.unwrap();
    assert_eq!(project.generated_report_url.as_deref(), Some(second.url.as_str()));
}

#[tokio::test]
async fn given_generated_report_when_fetching_blob_then_html_contains_project_content() {
    let pipeline = default_pipeline();
    let id = roof_check(&pipeline).await;

    let published = pipeline.reports.generate(id).await.unwrap();
    let html = pipeline.blob_store.fetch(&published.storage_id).await.unwrap();
    let html = String::from_utf8(html).unwrap();

    assert!(html.contains("1. Observations"));
    assert!(html.contains("crack"));
    assert!(published.url.starts_with("http://files.test/api/v1/files/"));
    assert!(published.url.ends_with(".html"));
    assert!(published.file_name.starts_with("Roof_Check_"));
    assert!(published.file_name.ends_with(".html"));
}

#[tokio::test]
async fn given_unknown_project_when_generating_then_reports_not_found() {
    let pipeline = default_pipeline();
    let missing = ProjectId::new();

    let result = pipeline.reports.generate(missing).await;

    assert!(matches!(result, Err(ReportError::ProjectNotFound(id)) if id == missing));
}

#[tokio::test]
async fn given_store_that_rejects_patches_when_generating_then_url_is_returned_as_soft_failure() {
    let repository: Arc<dyn ProjectRepository> = Arc::new(PatchRejectingRepository::default());
    let blob_store: Arc<dyn BlobStore> = Arc::new(ObjectBlobStore::in_memory(BASE_URL));
    let pipeline = pipeline_with(
        Arc::clone(&repository),
        Arc::clone(&blob_store),
        Arc::new(HandlebarsReportRenderer::new().unwrap()),
    );
    let project = pipeline
        .projects
        .create_from_template("4", None, None)
        .await
        .unwrap();

    let published = pipeline.reports.generate(project.id).await.unwrap();

    assert!(!published.bookmark_saved);
    assert!(blob_store.fetch(&published.storage_id).await.is_ok());
    let stored = repository.get_by_id(project.id).await.unwrap().unwrap();
    assert!(stored.generated_report_url.is_none());
}

#[tokio::test]
async fn given_blob_store_without_urls_when_publishing_then_whole_operation_fails() {
    let pipeline = pipeline_with(
        Arc::new(InMemoryProjectRepository::new()),
        Arc::new(UrlLessBlobStore {
            inner: ObjectBlobStore::in_memory(BASE_URL),
        }),
        Arc::new(HandlebarsReportRenderer::new().unwrap()),
    );
    let id = roof_check(&pipeline).await;

    let result = pipeline.reports.generate(id).await;

    assert!(matches!(
        result,
        Err(ReportError::Publish(PublishError::UrlUnavailable(_)))
    ));
    let project = pipeline.projects.get_project(id).await.unwrap();
    assert!(project.generated_report_url.is_none());
}

#[tokio::test]
async fn given_failing_renderer_when_generating_then_nothing_is_published() {
    let pipeline = pipeline_with(
        Arc::new(InMemoryProjectRepository::new()),
        Arc::new(ObjectBlobStore::in_memory(BASE_URL)),
        Arc::new(BrokenRenderer),
    );
    let id = roof_check(&pipeline).await;

    let result = pipeline.reports.generate(id).await;

    assert!(matches!(result, Err(ReportError::Render(_))));
    let project = pipeline.projects.get_project(id).await.unwrap();
    assert!(project.generated_report_url.is_none());
}

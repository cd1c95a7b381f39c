#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use sitereport::application::ports::{
    AudioRecorder, Notice, Notifier, PermissionStatus, ProjectEdit, ProjectRepository, RecorderError,
    RepositoryError, TranscriptionEngine, TranscriptionError,
};
use sitereport::domain::{AudioClip, Project, ProjectId};
use sitereport::infrastructure::persistence::InMemoryProjectRepository;

/// Engine that answers every request with a canned reply.
pub struct StubTranscriptionEngine {
    reply: Result<String, String>,
    calls: AtomicUsize,
    last_file_name: Mutex<Option<String>>,
}

impl StubTranscriptionEngine {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_file_name: Mutex::new(None),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
            last_file_name: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_file_name(&self) -> Option<String> {
        self.last_file_name.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptionEngine for StubTranscriptionEngine {
    async fn transcribe(&self, clip: &AudioClip) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_file_name.lock().unwrap() = Some(clip.file_name().to_string());
        self.reply
            .clone()
            .map_err(TranscriptionError::ApiRequestFailed)
    }
}

/// Microphone double. `stop` hands back whatever `next_recording` holds.
pub struct FakeRecorder {
    permission: Mutex<PermissionStatus>,
    grant_on_request: bool,
    next_recording: Mutex<Option<String>>,
    starts: AtomicUsize,
    stops: AtomicUsize,
}

impl FakeRecorder {
    pub fn granted(recording_uri: Option<String>) -> Self {
        Self {
            permission: Mutex::new(PermissionStatus::Granted),
            grant_on_request: true,
            next_recording: Mutex::new(recording_uri),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
        }
    }

    pub fn undetermined(grant_on_request: bool, recording_uri: Option<String>) -> Self {
        Self {
            permission: Mutex::new(PermissionStatus::Undetermined),
            grant_on_request,
            next_recording: Mutex::new(recording_uri),
            starts: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
        }
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioRecorder for FakeRecorder {
    async fn permission(&self) -> PermissionStatus {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> PermissionStatus {
        let status = if self.grant_on_request {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        };
        *self.permission.lock().unwrap() = status;
        status
    }

    async fn start(&self) -> Result<(), RecorderError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<Option<String>, RecorderError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(self.next_recording.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct CollectingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Delegates to an in-memory store but rejects every write.
#[derive(Default)]
pub struct PatchRejectingRepository {
    inner: InMemoryProjectRepository,
}

#[async_trait]
impl ProjectRepository for PatchRejectingRepository {
    async fn create(&self, project: &Project) -> Result<(), RepositoryError> {
        self.inner.create(project).await
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        self.inner.get_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Project>, RepositoryError> {
        self.inner.list().await
    }

    async fn update(&self, _id: ProjectId, _edit: ProjectEdit) -> Result<Project, RepositoryError> {
        Err(RepositoryError::QueryFailed("database is read-only".to_string()))
    }
}

/// Writes `bytes` under `dir` and returns a `file://` URI for it.
pub fn write_recording(dir: &Path, name: &str, bytes: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    format!("file://{}", path.display())
}

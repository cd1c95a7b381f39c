use std::mem;
use std::sync::Arc;

use crate::application::ports::{AudioRecorder, Notice, Notifier, PermissionStatus, RecorderError};
use crate::domain::{FieldDrafts, RecordingTarget};

use super::TranscriptionService;

/// At most one capture is in flight; the variant carries the field its
/// transcript will populate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingState {
    Idle,
    Recording(RecordingTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// The transcript (possibly empty) was written to the target field.
    Applied { target: RecordingTarget, text: String },
    /// The target field was left unchanged.
    Failed {
        target: RecordingTarget,
        reason: String,
    },
    /// The recorder produced no audio resource.
    NoAudio(RecordingTarget),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error(transparent)]
    Recorder(#[from] RecorderError),
}

/// Client-side capture → transcription workflow.
///
/// Exclusivity comes from sequencing: every transition takes `&mut self`, and
/// starting a new target drains the current session through the full
/// stop/transcribe path before the recorder is reopened.
pub struct RecordingSession {
    recorder: Arc<dyn AudioRecorder>,
    transcription: Arc<TranscriptionService>,
    notifier: Arc<dyn Notifier>,
    state: RecordingState,
    drafts: FieldDrafts,
}

impl RecordingSession {
    pub fn new(
        recorder: Arc<dyn AudioRecorder>,
        transcription: Arc<TranscriptionService>,
        notifier: Arc<dyn Notifier>,
        drafts: FieldDrafts,
    ) -> Self {
        Self {
            recorder,
            transcription,
            notifier,
            state: RecordingState::Idle,
            drafts,
        }
    }

    pub fn state(&self) -> &RecordingState {
        &self.state
    }

    pub fn drafts(&self) -> &FieldDrafts {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut FieldDrafts {
        &mut self.drafts
    }

    pub async fn start(&mut self, target: RecordingTarget) -> Result<(), SessionError> {
        if self.state == RecordingState::Recording(target.clone()) {
            tracing::debug!(field = %target, "Already recording for target");
            return Ok(());
        }

        self.ensure_permission().await?;

        if matches!(self.state, RecordingState::Recording(_)) {
            self.stop().await;
        }

        if let Err(e) = self.recorder.start().await {
            tracing::error!(error = %e, field = %target, "Failed to start recording");
            self.notifier.notify(Notice::RecordingFailed(e.to_string()));
            return Err(e.into());
        }

        tracing::info!(field = %target, "Recording started");
        self.state = RecordingState::Recording(target);
        Ok(())
    }

    /// Stopping while idle is a no-op and returns `None`.
    pub async fn stop(&mut self) -> Option<StopOutcome> {
        let target = match mem::replace(&mut self.state, RecordingState::Idle) {
            RecordingState::Idle => {
                tracing::debug!("No active recording to stop");
                return None;
            }
            RecordingState::Recording(target) => target,
        };

        let uri = match self.recorder.stop().await {
            Ok(Some(uri)) => uri,
            Ok(None) => {
                tracing::warn!(field = %target, "Recorder returned no audio resource");
                return Some(StopOutcome::NoAudio(target));
            }
            Err(e) => {
                tracing::error!(error = %e, field = %target, "Failed to stop recording");
                self.notifier.notify(Notice::RecordingFailed(e.to_string()));
                return Some(StopOutcome::Failed {
                    target,
                    reason: e.to_string(),
                });
            }
        };

        if let RecordingTarget::Observation(id) = &target {
            self.drafts.set_audio_uri(id, &uri);
        }

        match self.transcription.transcribe_uri(&uri).await {
            Ok(text) => {
                if !self.drafts.apply_transcript(&target, &text) {
                    tracing::warn!(field = %target, "Transcript target no longer exists");
                    let reason = "target no longer exists".to_string();
                    self.notifier.notify(Notice::TranscriptionFailed {
                        target: target.clone(),
                        reason: reason.clone(),
                    });
                    return Some(StopOutcome::Failed { target, reason });
                }
                self.notifier
                    .notify(Notice::TranscriptionComplete(target.clone()));
                Some(StopOutcome::Applied { target, text })
            }
            Err(e) => {
                tracing::warn!(error = %e, field = %target, "Transcription failed");
                self.notifier.notify(Notice::TranscriptionFailed {
                    target: target.clone(),
                    reason: e.to_string(),
                });
                Some(StopOutcome::Failed {
                    target,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Stops only when the active recording belongs to `target`.
    pub async fn stop_if_targeting(&mut self, target: &RecordingTarget) -> Option<StopOutcome> {
        match &self.state {
            RecordingState::Recording(active) if active == target => self.stop().await,
            _ => None,
        }
    }

    /// Drops an observation from the working copy, finishing any recording
    /// aimed at it first.
    pub async fn remove_observation(&mut self, observation_id: &str) -> bool {
        self.stop_if_targeting(&RecordingTarget::Observation(observation_id.to_string()))
            .await;
        self.drafts.remove_observation(observation_id)
    }

    async fn ensure_permission(&self) -> Result<(), SessionError> {
        if self.recorder.permission().await == PermissionStatus::Granted {
            return Ok(());
        }

        match self.recorder.request_permission().await {
            PermissionStatus::Granted => Ok(()),
            status => {
                tracing::info!(status = ?status, "Microphone permission not granted");
                self.notifier.notify(Notice::PermissionDenied);
                Err(SessionError::PermissionDenied)
            }
        }
    }
}

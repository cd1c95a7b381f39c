mod helpers;

use std::sync::Arc;

use helpers::{CollectingNotifier, FakeRecorder, StubTranscriptionEngine, write_recording};
use sitereport::application::ports::Notice;
use sitereport::application::services::{
    RecordingSession, RecordingState, SessionError, StopOutcome, TranscriptionService,
};
use sitereport::domain::{FieldDrafts, Observation, Project, RecordingTarget, TextSection};

struct Harness {
    session: RecordingSession,
    recorder: Arc<FakeRecorder>,
    notifier: Arc<CollectingNotifier>,
    engine: Arc<StubTranscriptionEngine>,
    _dir: tempfile::TempDir,
}

fn drafts() -> FieldDrafts {
    let mut project = Project::new("Roof Check", "1", "Basic Field Report", None);
    project
        .add_observation(Observation::new("a", "Crack").with_content("old text"))
        .unwrap();
    project
        .add_observation(Observation::new("b", "Gutter"))
        .unwrap();
    project.conclusions_text = Some("pending".to_string());
    FieldDrafts::from_project(&project)
}

fn harness_with(
    engine: StubTranscriptionEngine,
    recorder: impl FnOnce(String) -> FakeRecorder,
) -> Harness {
    let dir = tempfile::TempDir::new().unwrap();
    let uri = write_recording(dir.path(), "rec.m4a", b"audio");
    let recorder = Arc::new(recorder(uri));
    let notifier = Arc::new(CollectingNotifier::default());
    let engine = Arc::new(engine);
    let session = RecordingSession::new(
        recorder.clone(),
        Arc::new(TranscriptionService::new(engine.clone())),
        notifier.clone(),
        drafts(),
    );
    Harness {
        session,
        recorder,
        notifier,
        engine,
        _dir: dir,
    }
}

fn harness(reply: &str) -> Harness {
    harness_with(StubTranscriptionEngine::replying(reply), |uri| {
        FakeRecorder::granted(Some(uri))
    })
}

fn observation(id: &str) -> RecordingTarget {
    RecordingTarget::Observation(id.to_string())
}

#[tokio::test]
async fn given_idle_session_when_stopping_then_nothing_happens() {
    let mut h = harness("unused");
    let before = h.session.drafts().clone();

    let outcome = h.session.stop().await;

    assert!(outcome.is_none());
    assert_eq!(h.session.state(), &RecordingState::Idle);
    assert_eq!(h.session.drafts(), &before);
    assert_eq!(h.recorder.stops(), 0);
    assert!(h.notifier.notices().is_empty());
}

#[tokio::test]
async fn given_recording_on_observation_when_stopping_then_transcript_replaces_content() {
    let mut h = harness("crack widened to 3mm");

    h.session.start(observation("a")).await.unwrap();
    assert_eq!(h.session.state(), &RecordingState::Recording(observation("a")));

    let outcome = h.session.stop().await;

    assert_eq!(
        outcome,
        Some(StopOutcome::Applied {
            target: observation("a"),
            text: "crack widened to 3mm".to_string(),
        })
    );
    assert_eq!(h.session.state(), &RecordingState::Idle);
    let obs = h.session.drafts().observation("a").unwrap();
    assert_eq!(obs.content, "crack widened to 3mm");
    assert!(obs.audio_uri.is_some());
    assert!(h.session.drafts().is_reviewing("a"));
    assert_eq!(
        h.notifier.notices(),
        vec![Notice::TranscriptionComplete(observation("a"))]
    );
}

#[tokio::test]
async fn given_empty_transcript_when_stopping_then_field_becomes_empty() {
    let mut h = harness("");

    h.session.start(observation("a")).await.unwrap();
    let outcome = h.session.stop().await;

    assert!(matches!(outcome, Some(StopOutcome::Applied { ref text, .. }) if text.is_empty()));
    assert_eq!(h.session.drafts().observation("a").unwrap().content, "");
}

#[tokio::test]
async fn given_transcription_failure_when_stopping_then_field_is_unchanged_and_user_notified() {
    let mut h = harness_with(StubTranscriptionEngine::failing("timeout"), |uri| {
        FakeRecorder::granted(Some(uri))
    });

    h.session.start(observation("a")).await.unwrap();
    let outcome = h.session.stop().await;

    assert!(matches!(outcome, Some(StopOutcome::Failed { .. })));
    assert_eq!(h.session.drafts().observation("a").unwrap().content, "old text");
    assert!(!h.session.drafts().is_reviewing("a"));
    assert!(matches!(
        h.notifier.notices().as_slice(),
        [Notice::TranscriptionFailed { target, .. }] if *target == observation("a")
    ));
}

#[tokio::test]
async fn given_section_target_when_stopping_then_pending_input_is_filled_for_review() {
    let mut h = harness("roof is serviceable");
    let target = RecordingTarget::Section(TextSection::Conclusions);

    h.session.start(target.clone()).await.unwrap();
    h.session.stop().await;

    let draft = h.session.drafts().section(TextSection::Conclusions);
    assert_eq!(draft.input, "roof is serviceable");
    assert!(draft.editing);
}

#[tokio::test]
async fn given_recording_when_starting_other_target_then_first_is_drained_before_restart() {
    let mut h = harness("dictated");

    h.session.start(observation("a")).await.unwrap();
    h.session.start(observation("b")).await.unwrap();

    assert_eq!(h.session.state(), &RecordingState::Recording(observation("b")));
    assert_eq!(h.recorder.starts(), 2);
    assert_eq!(h.recorder.stops(), 1);
    assert_eq!(h.engine.calls(), 1);
    assert_eq!(h.session.drafts().observation("a").unwrap().content, "dictated");
    assert_ne!(h.session.drafts().observation("b").unwrap().content, "dictated");
}

#[tokio::test]
async fn given_recording_when_starting_same_target_then_nothing_restarts() {
    let mut h = harness("dictated");

    h.session.start(observation("a")).await.unwrap();
    h.session.start(observation("a")).await.unwrap();

    assert_eq!(h.recorder.starts(), 1);
    assert_eq!(h.recorder.stops(), 0);
}

#[tokio::test]
async fn given_denied_permission_when_starting_then_stays_idle_with_notice() {
    let mut h = harness_with(StubTranscriptionEngine::replying("unused"), |uri| {
        FakeRecorder::undetermined(false, Some(uri))
    });

    let result = h.session.start(observation("a")).await;

    assert!(matches!(result, Err(SessionError::PermissionDenied)));
    assert_eq!(h.session.state(), &RecordingState::Idle);
    assert_eq!(h.recorder.starts(), 0);
    assert_eq!(h.notifier.notices(), vec![Notice::PermissionDenied]);
}

#[tokio::test]
async fn given_undetermined_permission_when_user_grants_then_recording_starts() {
    let mut h = harness_with(StubTranscriptionEngine::replying("ok"), |uri| {
        FakeRecorder::undetermined(true, Some(uri))
    });

    h.session.start(observation("a")).await.unwrap();

    assert_eq!(h.session.state(), &RecordingState::Recording(observation("a")));
}

#[tokio::test]
async fn given_recorder_without_audio_when_stopping_then_reports_no_audio() {
    let mut h = harness_with(StubTranscriptionEngine::replying("unused"), |_| {
        FakeRecorder::granted(None)
    });

    h.session.start(observation("a")).await.unwrap();
    let outcome = h.session.stop().await;

    assert_eq!(outcome, Some(StopOutcome::NoAudio(observation("a"))));
    assert_eq!(h.engine.calls(), 0);
    assert_eq!(h.session.drafts().observation("a").unwrap().content, "old text");
}

#[tokio::test]
async fn given_recording_on_observation_when_removing_it_then_recording_stops_first() {
    let mut h = harness("late transcript");

    h.session.start(observation("b")).await.unwrap();
    let removed = h.session.remove_observation("b").await;

    assert!(removed);
    assert_eq!(h.session.state(), &RecordingState::Idle);
    assert_eq!(h.recorder.stops(), 1);
    assert!(h.session.drafts().observation("b").is_none());
    assert_eq!(h.session.drafts().observations().len(), 1);
}

#[tokio::test]
async fn given_recording_on_other_field_when_removing_observation_then_recording_continues() {
    let mut h = harness("unused");

    h.session.start(observation("a")).await.unwrap();
    h.session.remove_observation("b").await;

    assert_eq!(h.session.state(), &RecordingState::Recording(observation("a")));
    assert_eq!(h.recorder.stops(), 0);
}

#[tokio::test]
async fn given_target_removed_while_recording_when_stopping_then_fails_with_notice() {
    let mut h = harness("late transcript");

    h.session.start(observation("b")).await.unwrap();
    assert!(h.session.drafts_mut().remove_observation("b"));
    let outcome = h.session.stop().await;

    assert!(matches!(
        outcome,
        Some(StopOutcome::Failed { target, .. }) if target == observation("b")
    ));
    assert!(h.session.drafts().observation("b").is_none());
    assert!(matches!(
        h.notifier.notices().as_slice(),
        [Notice::TranscriptionFailed { target, .. }] if *target == observation("b")
    ));
}

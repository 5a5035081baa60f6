//! Submission pipeline behavior against an in-memory transport.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use client::{
    ClientConfig, FormSession, NoticeKind, SubmitError, Transport, TransportError,
    EMPTY_FORM_MESSAGE, SUCCESS_MESSAGE,
};
use form::{DialogResponse, LabelEvent, SelectOption, SubmitPayload};

#[derive(Default)]
struct RecordingTransport {
    calls: Mutex<Vec<SubmitPayload>>,
    fail: bool,
}

impl RecordingTransport {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<SubmitPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn submit(&self, payload: &SubmitPayload) -> Result<String, TransportError> {
        self.calls.lock().unwrap().push(payload.clone());
        if self.fail {
            return Err(TransportError::Status {
                status: 500,
                body: "disk full".into(),
            });
        }
        Ok("Data saved successfully".into())
    }
}

struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn submit(&self, _payload: &SubmitPayload) -> Result<String, TransportError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("late".into())
    }
}

fn session_with(transport: Arc<RecordingTransport>, config: ClientConfig) -> FormSession {
    FormSession::new(&config, transport)
}

fn filled_session(transport: Arc<RecordingTransport>, config: ClientConfig) -> FormSession {
    let mut session = session_with(transport, config);
    let fields = session.fields_mut();
    let name = fields.add_text().id();
    fields.set_text(name, "Alice").unwrap();
    fields
        .add_select(vec![SelectOption::new("y", "Yes"), SelectOption::new("n", "No")])
        .unwrap();
    session
}

#[tokio::test]
async fn successful_submit_renders_and_resets() {
    let transport = Arc::new(RecordingTransport::default());
    let mut session = filled_session(transport.clone(), ClientConfig::default());

    session.submit().await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        serde_json::to_value(&calls[0]).unwrap(),
        serde_json::json!({"fields": {"Header 1": "Alice", "Header 2": "y"}})
    );

    let table = session.result().unwrap();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[0].value, "Alice");
    assert!(session.fields().is_empty());
    assert_eq!(session.fields_mut().add_text().id().get(), 1);

    let notice = session.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn empty_form_never_reaches_transport() {
    let transport = Arc::new(RecordingTransport::default());
    let mut session = session_with(transport.clone(), ClientConfig::default());

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, SubmitError::EmptyForm));
    assert!(transport.calls().is_empty());

    let notice = session.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, EMPTY_FORM_MESSAGE);
}

#[tokio::test]
async fn validation_failure_keeps_form_and_marks_field() {
    let transport = Arc::new(RecordingTransport::default());
    let mut session = session_with(transport.clone(), ClientConfig::default());
    let fields = session.fields_mut();
    let first = fields.add_text().id();
    let second = fields.add_text().id();
    let third = fields.add_text().id();
    fields.set_text(first, "a").unwrap();
    fields.set_text(third, "c").unwrap();

    match session.submit().await {
        Err(SubmitError::Validation(err)) => assert_eq!(err.field, second),
        other => panic!("expected validation error, got {other:?}"),
    }

    assert!(transport.calls().is_empty());
    assert_eq!(session.fields().size(), 3);
    assert!(session.fields().get(second).unwrap().inline_error().is_some());
    assert!(session.fields().get(first).unwrap().inline_error().is_none());
    assert!(session.fields().get(third).unwrap().inline_error().is_none());
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn failed_submit_clears_form_by_default() {
    let transport = Arc::new(RecordingTransport::failing());
    let mut session = filled_session(transport.clone(), ClientConfig::default());

    let err = session.submit().await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Transport(TransportError::Status { status: 500, .. })
    ));
    assert_eq!(transport.calls().len(), 1);
    assert!(session.fields().is_empty());
    assert!(session.result().is_none());
    assert_eq!(session.notice().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn failed_submit_can_preserve_form() {
    let transport = Arc::new(RecordingTransport::failing());
    let config = ClientConfig {
        preserve_on_failure: true,
        ..Default::default()
    };
    let mut session = filled_session(transport, config);

    assert!(session.submit().await.is_err());
    assert_eq!(session.fields().size(), 2);
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn second_submit_is_refused_while_in_flight() {
    let transport = Arc::new(RecordingTransport::default());
    let mut session = filled_session(transport.clone(), ClientConfig::default());

    let pending = session.begin_submit().unwrap();
    assert!(session.is_submitting());
    assert!(matches!(session.begin_submit(), Err(SubmitError::InFlight)));

    // The form stays editable while the request is outstanding.
    session.fields_mut().add_text();

    let outcome = pending.send().await;
    session.finish_submit(outcome).unwrap();
    assert!(!session.is_submitting());
    assert_eq!(transport.calls().len(), 1);
    assert!(session.fields().is_empty());
}

#[tokio::test]
async fn submit_uses_live_label_draft() {
    let transport = Arc::new(RecordingTransport::default());
    let mut session = session_with(transport.clone(), ClientConfig::default());
    let fields = session.fields_mut();
    let id = fields.add_text().id();
    fields.set_text(id, "42").unwrap();
    fields.label_event(id, LabelEvent::Activate).unwrap();
    fields.label_event(id, LabelEvent::Input("Age".into())).unwrap();

    session.submit().await.unwrap();
    assert_eq!(transport.calls()[0].fields.get("Age"), Some("42"));
}

#[tokio::test]
async fn select_options_come_from_dialog() {
    let transport = Arc::new(RecordingTransport::default());
    let mut session = session_with(transport.clone(), ClientConfig::default());

    let mut replies = vec![
        DialogResponse::Submitted(vec!["Small".into(), "Large".into()]),
        DialogResponse::Cancelled,
    ];
    let mut dialog = || replies.pop().unwrap();
    let id = session.add_select_from_dialog(&mut dialog).unwrap().id();
    session.fields_mut().select(id, "Large").unwrap();

    session.submit().await.unwrap();
    assert_eq!(transport.calls()[0].fields.get("Header 1"), Some("Large"));
}

#[tokio::test(start_paused = true)]
async fn notice_is_hidden_after_display_duration() {
    let transport = Arc::new(RecordingTransport::default());
    let config = ClientConfig {
        notice_duration_ms: 500,
        ..Default::default()
    };
    let mut session = filled_session(transport, config);

    session.submit().await.unwrap();
    assert!(session.notice().is_some());

    tokio::time::sleep(Duration::from_millis(501)).await;
    assert!(session.notice().is_none());
}

#[tokio::test(start_paused = true)]
async fn cancelled_submit_releases_session() {
    let config = ClientConfig::default();
    let mut session = FormSession::new(&config, Arc::new(StalledTransport));
    let id = session.fields_mut().add_text().id();
    session.fields_mut().set_text(id, "Alice").unwrap();

    let timed_out = tokio::time::timeout(Duration::from_secs(1), session.submit()).await;
    assert!(timed_out.is_err());

    assert!(!session.is_submitting());
    assert!(session.begin_submit().is_ok());
}

#[tokio::test]
async fn dropped_pending_submission_releases_session() {
    let transport = Arc::new(RecordingTransport::default());
    let mut session = filled_session(transport.clone(), ClientConfig::default());

    let pending = session.begin_submit().unwrap();
    assert!(session.is_submitting());
    drop(pending);
    assert!(!session.is_submitting());

    session.submit().await.unwrap();
    assert_eq!(transport.calls().len(), 1);
}

//! Form session: the field collection plus everything that happens on submit.
//!
//! Submitting is split in two so the UI stays responsive while the request
//! is outstanding:
//!
//! 1. [`FormSession::begin_submit`] validates, builds the record and marks the
//!    session in flight. A second call before the first finishes is refused.
//! 2. [`PendingSubmission::send`] performs the request without borrowing the
//!    session.
//! 3. [`FormSession::finish_submit`] renders the result, resets the form and
//!    shows a notice.
//!
//! [`FormSession::submit`] runs all three in sequence.
//!
//! The in-flight mark lives in the pending submission and its outcome. Dropping
//! either one, or cancelling the `submit` future, releases it.
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use form::{
    collect_options, render, validate, Field, FieldCollection, FieldError, FieldId,
    OptionsDialog, ResultTable, SubmissionRecord, SubmitPayload,
};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{SubmitError, TransportError};
use crate::notice::{Notice, NoticeBoard};
use crate::transport::Transport;

pub const EMPTY_FORM_MESSAGE: &str = "Cannot submit an empty form";
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully";

/// Holds the session's in-flight mark until dropped.
#[derive(Debug)]
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A submission that passed validation and is ready to be sent.
pub struct PendingSubmission {
    payload: SubmitPayload,
    transport: Arc<dyn Transport>,
    guard: InFlightGuard,
}

impl fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

impl PendingSubmission {
    pub fn payload(&self) -> &SubmitPayload {
        &self.payload
    }

    pub async fn send(self) -> SubmissionOutcome {
        let start = Instant::now();
        let response = self.transport.submit(&self.payload).await;
        debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            ok = response.is_ok(),
            "submit call finished"
        );
        SubmissionOutcome {
            record: self.payload.fields,
            response,
            _guard: self.guard,
        }
    }
}

/// Result of the submit call, handed back to the session.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub record: SubmissionRecord,
    pub response: Result<String, TransportError>,
    _guard: InFlightGuard,
}

pub struct FormSession {
    fields: FieldCollection,
    transport: Arc<dyn Transport>,
    notices: NoticeBoard,
    result: Option<ResultTable>,
    in_flight: Arc<AtomicBool>,
    preserve_on_failure: bool,
}

impl FormSession {
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        if config.preserve_on_failure {
            info!("form fields are kept when a submission fails");
        }
        Self {
            fields: FieldCollection::new(),
            transport,
            notices: NoticeBoard::new(config.notice_duration()),
            result: None,
            in_flight: Arc::new(AtomicBool::new(false)),
            preserve_on_failure: config.preserve_on_failure,
        }
    }

    pub fn fields(&self) -> &FieldCollection {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldCollection {
        &mut self.fields
    }

    /// Ask `dialog` for option texts until at least one is given, then add
    /// the select field.
    pub fn add_select_from_dialog<D: OptionsDialog + ?Sized>(
        &mut self,
        dialog: &mut D,
    ) -> Result<&Field, FieldError> {
        let options = collect_options(dialog);
        self.fields.add_select(options)
    }

    pub fn remove_field(&mut self, id: FieldId) {
        self.fields.remove_field(id);
    }

    /// Most recently rendered submission.
    pub fn result(&self) -> Option<&ResultTable> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notices.current()
    }

    /// True while a submission is outstanding; the submit trigger should be
    /// disabled.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        if let Err(err) = validate(&self.fields) {
            self.fields.mark_invalid(&err);
            return Err(SubmitError::Validation(err));
        }

        let record = SubmissionRecord::from_fields(&self.fields);
        if record.is_empty() {
            self.notices.show(Notice::error(EMPTY_FORM_MESSAGE));
            return Err(SubmitError::EmptyForm);
        }

        let guard = InFlightGuard::acquire(&self.in_flight).ok_or(SubmitError::InFlight)?;
        debug!(fields = record.len(), "submission started");
        Ok(PendingSubmission {
            payload: SubmitPayload::new(record),
            transport: Arc::clone(&self.transport),
            guard,
        })
    }

    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) -> Result<(), SubmitError> {
        let SubmissionOutcome {
            record,
            response,
            _guard: guard,
        } = outcome;
        drop(guard);

        match response {
            Ok(body) => {
                info!(fields = record.len(), response = %body, "form submitted");
                self.result = Some(render(&record));
                self.fields.clear();
                self.notices.show(Notice::success(SUCCESS_MESSAGE));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, preserved = self.preserve_on_failure, "form submission failed");
                if !self.preserve_on_failure {
                    self.fields.clear();
                }
                self.notices
                    .show(Notice::error(format!("Error submitting the form: {err}")));
                Err(SubmitError::Transport(err))
            }
        }
    }

    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let pending = self.begin_submit()?;
        let outcome = pending.send().await;
        self.finish_submit(outcome)
    }
}

//! Workspace umbrella crate for dynform.
//!
//! Re-exports the form core, the client session and the submission store so
//! callers can build, submit and persist ad-hoc forms through one entry point.
//! The HTTP server lives in the `dynform-server` crate.

pub mod config;

pub use client::{
    ClientConfig, ConfigError, FormSession, HttpTransport, Notice, NoticeBoard, NoticeKind,
    PendingSubmission, SubmissionOutcome, SubmitError, Transport, TransportError,
    EMPTY_FORM_MESSAGE, SUCCESS_MESSAGE,
};
pub use config::{ConfigLoadError, DynformConfig, StoreYamlConfig};
pub use form::{
    collect_options, default_label, render, validate, DialogResponse, EditableLabel, Field,
    FieldCollection, FieldError, FieldId, FieldKind, FieldMeta, FieldValue, LabelEffect,
    LabelEvent, LabelState, LabelView, OptionsDialog, ResultRow, ResultTable, SelectOption,
    SubmissionRecord, SubmitPayload, ValidationError, ValidationReason, EMPTY_LABEL_MESSAGE,
};
pub use store::{DocumentStore, PersistedDocument, StoreError, StoreResult};

use std::sync::Arc;

impl DynformConfig {
    /// Open the submission document named in `store.data_path`.
    pub fn open_store(&self) -> DocumentStore {
        DocumentStore::new(self.store.data_path.clone())
    }

    /// Start a form session posting to `client.endpoint` over HTTP.
    pub fn session(&self) -> Result<FormSession, TransportError> {
        let transport = HttpTransport::new(&self.client)?;
        Ok(FormSession::new(&self.client, Arc::new(transport)))
    }
}

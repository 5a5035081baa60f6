//! dynform client
//!
//! Owns one form session: the field collection, the submit pipeline and the
//! transient notice shown after a submit. The network is reached through the
//! [`Transport`] trait; [`HttpTransport`] posts JSON with `reqwest`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use client::{ClientConfig, FormSession, HttpTransport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let transport = Arc::new(HttpTransport::new(&config)?);
//! let mut session = FormSession::new(&config, transport);
//!
//! let id = session.fields_mut().add_text().id();
//! session.fields_mut().set_text(id, "Alice")?;
//! session.submit().await?;
//! println!("{}", session.result().expect("rendered table"));
//! # Ok(())
//! # }
//! ```
mod config;
mod error;
mod notice;
mod session;
mod transport;

pub use crate::config::{ClientConfig, ConfigError};
pub use crate::error::{SubmitError, TransportError};
pub use crate::notice::{Notice, NoticeBoard, NoticeKind};
pub use crate::session::{
    FormSession, PendingSubmission, SubmissionOutcome, EMPTY_FORM_MESSAGE, SUCCESS_MESSAGE,
};
pub use crate::transport::{HttpTransport, Transport};

use form::ValidationError;
use thiserror::Error;

/// Failure of the submit call itself.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
}

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A field is blank; the form is untouched and marked inline.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// There was nothing to submit; no request was made.
    #[error("cannot submit an empty form")]
    EmptyForm,

    /// A previous submission has not finished yet.
    #[error("a submission is already in flight")]
    InFlight,

    #[error("submission failed: {0}")]
    Transport(#[from] TransportError),
}

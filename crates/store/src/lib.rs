//! Append-only persistence for form submissions.
//!
//! Submissions live in one pretty-printed JSON array on disk. The store reads
//! the array, pushes the new record and writes the whole array back. Appends
//! to the same [`DocumentStore`] never interleave; share one instance (for
//! example behind an `Arc`) between request handlers.
//!
//! ```no_run
//! use form::SubmissionRecord;
//! use store::DocumentStore;
//!
//! # async fn run() -> store::StoreResult<()> {
//! let store = DocumentStore::new("data.json");
//! let record: SubmissionRecord = [("Name", "Alice")].into_iter().collect();
//! let total = store.append(record).await?;
//! println!("{total} submissions stored");
//! # Ok(())
//! # }
//! ```
mod document;
mod error;

pub use crate::document::{DocumentStore, PersistedDocument};
pub use crate::error::{StoreError, StoreResult};

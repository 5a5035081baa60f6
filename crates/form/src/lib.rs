//! dynform form core
//!
//! Everything a form session does between user events and the network call:
//!
//! - **Fields** - text or single-select, each with a stable id, a 1-based
//!   position and a typed value slot.
//! - **Collection** - ordered, owns id allocation, re-indexes on every shape
//!   change without touching labels the user renamed.
//! - **Labels** - explicit display/edit state machine; the UI renders a
//!   projection of it.
//! - **Validation** - fail-fast non-empty check over effective headers and
//!   values.
//! - **Records** - flattened `header → value` maps with last-write-wins on
//!   header collisions, plus the `{"fields": ...}` submit payload.
//! - **Rendering** - the result table shown after a submission.
//!
//! ## Example
//!
//! ```
//! use form::{render, validate, FieldCollection, SelectOption, SubmissionRecord};
//!
//! let mut fields = FieldCollection::new();
//! let name = fields.add_text().id();
//! fields.set_text(name, "Alice").unwrap();
//! fields
//!     .add_select(vec![SelectOption::new("y", "Yes"), SelectOption::new("n", "No")])
//!     .unwrap();
//!
//! validate(&fields).unwrap();
//! let record = SubmissionRecord::from_fields(&fields);
//! assert_eq!(record.get("Header 1"), Some("Alice"));
//! assert_eq!(record.get("Header 2"), Some("y"));
//! assert_eq!(render(&record).rows().len(), 2);
//! ```
mod collection;
mod error;
mod field;
mod label;
mod options;
mod record;
mod render;
mod validate;

pub use crate::collection::FieldCollection;
pub use crate::error::{FieldError, ValidationError, ValidationReason};
pub use crate::field::{Field, FieldId, FieldKind, FieldMeta, FieldValue, SelectOption};
pub use crate::label::{
    default_label, EditableLabel, LabelEffect, LabelEvent, LabelState, LabelView,
    EMPTY_LABEL_MESSAGE,
};
pub use crate::options::{collect_options, DialogResponse, OptionsDialog};
pub use crate::record::{SubmissionRecord, SubmitPayload};
pub use crate::render::{render, ResultRow, ResultTable};
pub use crate::validate::validate;

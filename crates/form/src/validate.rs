//! Pre-submit non-empty check.
use tracing::debug;

use crate::collection::FieldCollection;
use crate::error::{ValidationError, ValidationReason};

/// Check every field in position order and stop at the first one whose
/// effective header or value is blank. An empty collection passes; the
/// submission pipeline rejects it separately.
pub fn validate(fields: &FieldCollection) -> Result<(), ValidationError> {
    for field in fields.iter() {
        let reason = if field.effective_header().trim().is_empty() {
            ValidationReason::EmptyHeader
        } else if field.effective_value().trim().is_empty() {
            ValidationReason::EmptyValue
        } else {
            continue;
        };

        debug!(field_id = %field.id(), position = field.position(), %reason, "validation failed");
        return Err(ValidationError {
            field: field.id(),
            position: field.position(),
            reason,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelEvent;

    #[test]
    fn empty_collection_is_valid() {
        assert!(validate(&FieldCollection::new()).is_ok());
    }

    #[test]
    fn blank_value_fails() {
        let mut fields = FieldCollection::new();
        let id = fields.add_text().id();
        fields.set_text(id, "   ").unwrap();

        let err = validate(&fields).unwrap_err();
        assert_eq!(err.field, id);
        assert_eq!(err.reason, ValidationReason::EmptyValue);
    }

    #[test]
    fn blank_draft_header_fails() {
        let mut fields = FieldCollection::new();
        let id = fields.add_text().id();
        fields.set_text(id, "value").unwrap();
        fields.label_event(id, LabelEvent::Activate).unwrap();
        fields.label_event(id, LabelEvent::Input(" ".into())).unwrap();

        let err = validate(&fields).unwrap_err();
        assert_eq!(err.reason, ValidationReason::EmptyHeader);
    }

    #[test]
    fn stops_at_first_failure() {
        let mut fields = FieldCollection::new();
        let first = fields.add_text().id();
        let second = fields.add_text().id();
        fields.add_text();
        fields.set_text(first, "ok").unwrap();

        let err = validate(&fields).unwrap_err();
        assert_eq!(err.field, second);
        assert_eq!(err.position, 2);
    }
}

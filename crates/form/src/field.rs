//! The field entity: identity, kind, label and a typed value slot.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::label::{EditableLabel, LabelEffect, LabelEvent};

/// Stable identity of a field. Assigned by the owning collection and never
/// reused while the field is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(u64);

impl FieldId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Select,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Select => "select",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Option whose submitted value is its display text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            text,
        }
    }
}

/// Value slot of a field. A select always holds at least one option and
/// `selected` always indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Select {
        options: Vec<SelectOption>,
        selected: usize,
    },
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Select { .. } => FieldKind::Select,
        }
    }

    /// Text content, or the chosen option's value.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Select { options, selected } => &options[*selected].value,
        }
    }
}

/// Element metadata derived from the field's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    pub element_id: String,
    pub name: String,
    pub placeholder: Option<String>,
}

impl FieldMeta {
    pub fn for_position(kind: FieldKind, position: usize) -> Self {
        Self {
            element_id: format!("field-{position}"),
            name: format!("{kind}-value-{position}"),
            placeholder: match kind {
                FieldKind::Text => Some(format!("Value {position}")),
                FieldKind::Select => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    id: FieldId,
    position: usize,
    label: EditableLabel,
    value: FieldValue,
    meta: FieldMeta,
    inline_error: Option<String>,
}

impl Field {
    pub(crate) fn new(id: FieldId, position: usize, value: FieldValue) -> Self {
        Self {
            id,
            position,
            label: EditableLabel::new(position),
            meta: FieldMeta::for_position(value.kind(), position),
            value,
            inline_error: None,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// 1-based place in the collection.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }

    pub fn label(&self) -> &EditableLabel {
        &self.label
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn options(&self) -> Option<&[SelectOption]> {
        match &self.value {
            FieldValue::Select { options, .. } => Some(options),
            FieldValue::Text(_) => None,
        }
    }

    pub fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    pub fn inline_error(&self) -> Option<&str> {
        self.inline_error.as_deref()
    }

    pub fn effective_header(&self) -> &str {
        self.label.effective_text()
    }

    pub fn effective_value(&self) -> &str {
        self.value.as_str()
    }

    pub(crate) fn set_text(&mut self, text: String) -> Result<(), FieldError> {
        match &mut self.value {
            FieldValue::Text(current) => {
                *current = text;
                self.inline_error = None;
                Ok(())
            }
            FieldValue::Select { .. } => Err(FieldError::KindMismatch {
                field: self.id,
                expected: FieldKind::Text,
                actual: FieldKind::Select,
            }),
        }
    }

    pub(crate) fn select(&mut self, value: &str) -> Result<(), FieldError> {
        let FieldValue::Select { options, selected } = &mut self.value else {
            return Err(FieldError::KindMismatch {
                field: self.id,
                expected: FieldKind::Select,
                actual: FieldKind::Text,
            });
        };
        let Some(index) = options.iter().position(|option| option.value == value) else {
            return Err(FieldError::UnknownOption {
                field: self.id,
                value: value.to_string(),
            });
        };
        *selected = index;
        self.inline_error = None;
        Ok(())
    }

    pub(crate) fn handle_label(&mut self, event: LabelEvent) -> LabelEffect {
        let effect = self.label.handle(event);
        if effect == LabelEffect::DraftChanged {
            self.inline_error = None;
        }
        effect
    }

    pub(crate) fn set_inline_error(&mut self, message: impl Into<String>) {
        self.inline_error = Some(message.into());
    }

    pub(crate) fn move_to(&mut self, position: usize) {
        let previous = self.position;
        self.position = position;
        self.label.reposition(previous, position);
        self.meta = FieldMeta::for_position(self.kind(), position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> FieldValue {
        FieldValue::Select {
            options: vec![SelectOption::new("y", "Yes"), SelectOption::new("n", "No")],
            selected: 0,
        }
    }

    #[test]
    fn meta_depends_on_kind_and_position() {
        let text = FieldMeta::for_position(FieldKind::Text, 4);
        assert_eq!(text.element_id, "field-4");
        assert_eq!(text.name, "text-value-4");
        assert_eq!(text.placeholder.as_deref(), Some("Value 4"));

        let select = FieldMeta::for_position(FieldKind::Select, 2);
        assert_eq!(select.name, "select-value-2");
        assert!(select.placeholder.is_none());
    }

    #[test]
    fn select_reports_option_value() {
        let mut field = Field::new(FieldId::new(1), 1, yes_no());
        assert_eq!(field.effective_value(), "y");
        field.select("n").unwrap();
        assert_eq!(field.effective_value(), "n");
    }

    #[test]
    fn select_rejects_unknown_value() {
        let mut field = Field::new(FieldId::new(1), 1, yes_no());
        let err = field.select("maybe").unwrap_err();
        assert!(matches!(err, FieldError::UnknownOption { .. }));
        assert_eq!(field.effective_value(), "y");
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let mut text = Field::new(FieldId::new(1), 1, FieldValue::Text(String::new()));
        assert!(matches!(
            text.select("y"),
            Err(FieldError::KindMismatch { .. })
        ));

        let mut select = Field::new(FieldId::new(2), 2, yes_no());
        assert!(matches!(
            select.set_text("x".into()),
            Err(FieldError::KindMismatch { .. })
        ));
    }

    #[test]
    fn editing_value_clears_inline_error() {
        let mut field = Field::new(FieldId::new(1), 1, FieldValue::Text(String::new()));
        field.set_inline_error("bad");
        field.set_text("ok".into()).unwrap();
        assert!(field.inline_error().is_none());
    }
}

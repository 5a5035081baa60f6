//! Ordered field collection.
//!
//! The collection owns id allocation and keeps positions dense. Every shape
//! change (add, remove) is followed by [`FieldCollection::reindex`], which
//! renumbers positions, regenerates unpinned labels and element metadata.
use tracing::{debug, info};

use crate::error::{FieldError, ValidationError};
use crate::field::{Field, FieldId, FieldKind, FieldValue, SelectOption};
use crate::label::{LabelEffect, LabelEvent};

#[derive(Debug, Clone, Default)]
pub struct FieldCollection {
    fields: Vec<Field>,
    next_id: u64,
}

impl FieldCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field of `kind`. Selects need at least one option, text
    /// fields take none. A rejected field consumes no id.
    pub fn add_field(
        &mut self,
        kind: FieldKind,
        options: Vec<SelectOption>,
    ) -> Result<&Field, FieldError> {
        let value = match kind {
            FieldKind::Text if !options.is_empty() => {
                return Err(FieldError::UnexpectedOptions(kind));
            }
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Select if options.is_empty() => return Err(FieldError::NoOptions),
            FieldKind::Select => FieldValue::Select {
                options,
                selected: 0,
            },
        };

        Ok(self.push(value))
    }

    pub fn add_text(&mut self) -> &Field {
        self.push(FieldValue::Text(String::new()))
    }

    pub fn add_select(&mut self, options: Vec<SelectOption>) -> Result<&Field, FieldError> {
        self.add_field(FieldKind::Select, options)
    }

    /// Remove the field with `id`. Missing ids are ignored.
    pub fn remove_field(&mut self, id: FieldId) -> Option<Field> {
        let index = self.index_of(id)?;
        let removed = self.fields.remove(index);
        debug!(field_id = %id, position = removed.position(), "field removed");
        self.reindex();
        Some(removed)
    }

    /// Renumber positions to `1..=N` in collection order. Calling it again
    /// without a shape change is a no-op.
    pub fn reindex(&mut self) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.move_to(index + 1);
        }
    }

    pub fn size(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| field.id() == id)
    }

    pub fn set_text(&mut self, id: FieldId, text: impl Into<String>) -> Result<(), FieldError> {
        self.field_mut(id)?.set_text(text.into())
    }

    /// Choose the option with `value` on a select field.
    pub fn select(&mut self, id: FieldId, value: &str) -> Result<(), FieldError> {
        self.field_mut(id)?.select(value)
    }

    pub fn label_event(&mut self, id: FieldId, event: LabelEvent) -> Result<LabelEffect, FieldError> {
        Ok(self.field_mut(id)?.handle_label(event))
    }

    /// Attach the validation message to the field that failed. Other fields
    /// are left alone.
    pub fn mark_invalid(&mut self, error: &ValidationError) {
        if let Ok(field) = self.field_mut(error.field) {
            field.set_inline_error(error.user_message());
        }
    }

    /// Drop every field and restart id allocation.
    pub fn clear(&mut self) {
        info!(fields = self.fields.len(), "form reset");
        self.fields.clear();
        self.next_id = 0;
    }

    fn push(&mut self, value: FieldValue) -> &Field {
        self.next_id += 1;
        let id = FieldId::new(self.next_id);
        let position = self.fields.len() + 1;
        debug!(field_id = %id, position, kind = %value.kind(), "field added");
        self.fields.push(Field::new(id, position, value));
        self.reindex();
        &self.fields[position - 1]
    }

    fn index_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id() == id)
    }

    fn field_mut(&mut self, id: FieldId) -> Result<&mut Field, FieldError> {
        self.fields
            .iter_mut()
            .find(|field| field.id() == id)
            .ok_or(FieldError::UnknownField(id))
    }
}

//! Flattened `header → value` records and the submit wire payload.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::collection::FieldCollection;

/// Ordered header/value mapping built at submit time.
///
/// A repeated header keeps the slot where it first appeared and takes the
/// later value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord(IndexMap<String, String>);

impl SubmissionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from the effective header and value of every field,
    /// in position order.
    pub fn from_fields(fields: &FieldCollection) -> Self {
        fields
            .iter()
            .map(|field| {
                (
                    field.effective_header().to_string(),
                    field.effective_value().to_string(),
                )
            })
            .collect()
    }

    /// Returns the value that was overwritten, if any.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(header.into(), value.into())
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.0.get(header).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmissionRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = SubmissionRecord::new();
        for (header, value) in iter {
            record.insert(header, value);
        }
        record
    }
}

/// Body of the submit call: `{"fields": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPayload {
    pub fields: SubmissionRecord,
}

impl SubmitPayload {
    pub fn new(fields: SubmissionRecord) -> Self {
        Self { fields }
    }
}

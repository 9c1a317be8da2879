//! Raw form input (Value Objects)
//!
//! [`RawInput`] is the set of selections made on the form for one
//! submission, keyed by schema field name. It carries human-readable
//! values; turning them into numbers is the encoder's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single form value.
///
/// Deserializes untagged, so a JSON input file can say
/// `{"age": "[50-60)", "pregnant": false, "num_medications": 12}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state
    Flag(bool),
    /// Slider position
    Count(i64),
    /// Label picked from a choice list
    Choice(String),
}

impl FieldValue {
    pub fn choice(label: impl Into<String>) -> Self {
        Self::Choice(label.into())
    }

    /// Short name of the value's shape, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Flag(_) => "flag",
            FieldValue::Count(_) => "count",
            FieldValue::Choice(_) => "choice",
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Flag(v) => write!(f, "{}", if *v { "yes" } else { "no" }),
            FieldValue::Count(v) => write!(f, "{}", v),
            FieldValue::Choice(v) => write!(f, "{}", v),
        }
    }
}

/// Selections from one form submission.
///
/// Ordered by field name so that iteration (and therefore any error
/// reported while walking it) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    values: BTreeMap<String, FieldValue>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.set(field, value);
        self
    }

    /// Set (or replace) the value of a field
    pub fn set(&mut self, field: impl Into<String>, value: FieldValue) {
        self.values.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.values.remove(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for RawInput {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

//! Feature vector value object

use serde::{Deserialize, Serialize};

/// An encoded row, aligned to the classifier's column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
    /// Derived columns the classifier does not know about
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dropped: Vec<String>,
}

impl FeatureVector {
    /// Build a vector from parallel column/value lists.
    ///
    /// # Panics
    /// Panics if the two lists differ in length
    pub fn new(columns: Vec<String>, values: Vec<f64>) -> Self {
        assert_eq!(
            columns.len(),
            values.len(),
            "FeatureVector columns and values must be the same length"
        );
        Self {
            columns,
            values,
            dropped: Vec::new(),
        }
    }

    pub(crate) fn with_dropped(mut self, dropped: Vec<String>) -> Self {
        self.dropped = dropped;
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named column
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

//! Schema-driven feature encoder

use super::error::EncodeError;
use super::feature_vector::FeatureVector;
use crate::form::{FieldValue, RawInput};
use crate::schema::{FeatureSchema, FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// What to do with a derived column the classifier does not expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftPolicy {
    /// Leave the column out and record it on the vector
    #[default]
    Drop,
    /// Fail with [`EncodeError::SchemaDrift`]
    Reject,
}

impl DriftPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriftPolicy::Drop => "drop",
            DriftPolicy::Reject => "reject",
        }
    }
}

impl std::fmt::Display for DriftPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DriftPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(DriftPolicy::Drop),
            "reject" => Ok(DriftPolicy::Reject),
            other => Err(format!(
                "unknown drift policy '{}' (expected drop or reject)",
                other
            )),
        }
    }
}

/// Encodes [`RawInput`] into a [`FeatureVector`] following a [`FeatureSchema`].
///
/// The encoder first derives a sparse set of `(column, value)` cells from
/// the fields that are present, then reindexes them onto the expected
/// column list. Expected columns without a cell are zero.
#[derive(Debug, Clone, Copy)]
pub struct FeatureEncoder<'a> {
    schema: &'a FeatureSchema,
    drift: DriftPolicy,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(schema: &'a FeatureSchema) -> Self {
        Self {
            schema,
            drift: DriftPolicy::default(),
        }
    }

    pub fn with_drift_policy(mut self, drift: DriftPolicy) -> Self {
        self.drift = drift;
        self
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.schema
    }

    /// Encode against an explicit column order
    pub fn encode(
        &self,
        input: &RawInput,
        expected: &[String],
    ) -> Result<FeatureVector, EncodeError> {
        let cells = self.derive_cells(input)?;

        let known: HashSet<&str> = expected.iter().map(String::as_str).collect();
        let mut sparse: HashMap<String, f64> = HashMap::with_capacity(cells.len());
        let mut dropped = Vec::new();

        for (field, column, value) in cells {
            if known.contains(column.as_str()) {
                sparse.insert(column, value);
                continue;
            }
            match self.drift {
                DriftPolicy::Drop => dropped.push(column),
                DriftPolicy::Reject => {
                    return Err(EncodeError::SchemaDrift {
                        field: field.name.clone(),
                        column,
                    });
                }
            }
        }

        let values = expected
            .iter()
            .map(|c| sparse.get(c).copied().unwrap_or(0.0))
            .collect();

        Ok(FeatureVector::new(expected.to_vec(), values).with_dropped(dropped))
    }

    /// Encode against the schema's own column order
    pub fn encode_natural(&self, input: &RawInput) -> Result<FeatureVector, EncodeError> {
        self.encode(input, &self.schema.columns())
    }

    fn derive_cells(
        &self,
        input: &RawInput,
    ) -> Result<Vec<(&'a FieldSpec, String, f64)>, EncodeError> {
        if let Some((name, _)) = input.iter().find(|(name, _)| self.schema.field(name).is_none())
        {
            return Err(EncodeError::UnknownField(name.to_string()));
        }

        let schema = self.schema;
        let mut cells = Vec::new();
        for field in &schema.fields {
            let Some(value) = input.get(&field.name) else {
                continue;
            };
            field.validate(value)?;

            match (&field.kind, value) {
                (FieldKind::Ordinal { choices }, FieldValue::Choice(label)) => {
                    if let Some(choice) = choices.iter().find(|c| &c.label == label) {
                        cells.push((field, field.column().to_string(), choice.code));
                    }
                }
                (FieldKind::OneHot { baseline, .. }, FieldValue::Choice(label)) => {
                    if baseline.as_ref() != Some(label) {
                        cells.push((field, field.indicator_column(label), 1.0));
                    }
                }
                (FieldKind::Flag, FieldValue::Flag(on)) => {
                    cells.push((field, field.column().to_string(), if *on { 1.0 } else { 0.0 }));
                }
                (FieldKind::Count { .. }, FieldValue::Count(n)) => {
                    cells.push((field, field.column().to_string(), *n as f64));
                }
                // validate() has already rejected every other pairing
                _ => {}
            }
        }
        Ok(cells)
    }
}

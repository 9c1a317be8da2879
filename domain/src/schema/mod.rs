//! Declarative feature schema
//!
//! A [`FeatureSchema`] lists the form fields in column order and says how
//! each one is encoded. The encoder is driven entirely by this table, so a
//! new form variant is a new schema rather than a new code path.
//!
//! Schemas deserialize from TOML/JSON:
//!
//! ```toml
//! name = "custom"
//!
//! [[fields]]
//! name = "A1Cresult"
//! prompt = "A1C test result?"
//! type = "one_hot"
//! choices = ["None", "Norm", ">7", ">8"]
//! baseline = "None"
//!
//! [[fields]]
//! name = "num_medications"
//! prompt = "How many medications are you currently on?"
//! type = "count"
//! min = 0
//! max = 50
//! default = 10
//! ```

mod builtin;

pub use builtin::SchemaVariant;

use crate::encoding::EncodeError;
use crate::form::{FieldValue, RawInput};
use serde::{Deserialize, Serialize};

/// A labelled code for ordinal fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalChoice {
    pub label: String,
    pub code: f64,
}

impl OrdinalChoice {
    pub fn new(label: impl Into<String>, code: f64) -> Self {
        Self {
            label: label.into(),
            code,
        }
    }
}

/// How a field turns into columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// One column holding the code of the selected label
    Ordinal { choices: Vec<OrdinalChoice> },
    /// One `{column}_{choice}` indicator per choice except the baseline
    OneHot {
        choices: Vec<String>,
        #[serde(default)]
        baseline: Option<String>,
    },
    /// One 0/1 column
    Flag,
    /// One numeric column, bounded inclusively
    Count { min: i64, max: i64, default: i64 },
}

/// A single form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key in [`RawInput`]
    pub name: String,
    /// Column name (or one-hot prefix); defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Question shown on the form
    #[serde(default)]
    pub prompt: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            column: None,
            prompt: prompt.into(),
            kind,
        }
    }

    pub fn ordinal(name: &str, prompt: &str, choices: &[(&str, f64)]) -> Self {
        Self::new(
            name,
            prompt,
            FieldKind::Ordinal {
                choices: choices
                    .iter()
                    .map(|(label, code)| OrdinalChoice::new(*label, *code))
                    .collect(),
            },
        )
    }

    pub fn one_hot(name: &str, prompt: &str, choices: &[&str], baseline: Option<&str>) -> Self {
        Self::new(
            name,
            prompt,
            FieldKind::OneHot {
                choices: choices.iter().map(|c| c.to_string()).collect(),
                baseline: baseline.map(str::to_string),
            },
        )
    }

    pub fn flag(name: &str, prompt: &str) -> Self {
        Self::new(name, prompt, FieldKind::Flag)
    }

    pub fn count(name: &str, prompt: &str, min: i64, max: i64, default: i64) -> Self {
        Self::new(name, prompt, FieldKind::Count { min, max, default })
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Column name, or prefix for one-hot indicators
    pub fn column(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }

    /// Choice labels, empty for flag and count fields
    pub fn choice_labels(&self) -> Vec<&str> {
        match &self.kind {
            FieldKind::Ordinal { choices } => choices.iter().map(|c| c.label.as_str()).collect(),
            FieldKind::OneHot { choices, .. } => choices.iter().map(String::as_str).collect(),
            FieldKind::Flag | FieldKind::Count { .. } => Vec::new(),
        }
    }

    /// Value the form widget starts at
    pub fn default_value(&self) -> FieldValue {
        match &self.kind {
            FieldKind::Ordinal { .. } | FieldKind::OneHot { .. } => FieldValue::Choice(
                self.choice_labels()
                    .first()
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            ),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Count { default, .. } => FieldValue::Count(*default),
        }
    }

    /// Indicator column for a one-hot choice
    pub fn indicator_column(&self, choice: &str) -> String {
        format!("{}_{}", self.column(), choice)
    }

    /// Every column this field can produce, in order
    pub fn columns(&self) -> Vec<String> {
        match &self.kind {
            FieldKind::OneHot { choices, baseline } => choices
                .iter()
                .filter(|c| baseline.as_deref() != Some(c.as_str()))
                .map(|c| self.indicator_column(c))
                .collect(),
            _ => vec![self.column().to_string()],
        }
    }

    /// Check a value against the field's enumeration or range
    pub fn validate(&self, value: &FieldValue) -> Result<(), EncodeError> {
        match (&self.kind, value) {
            (FieldKind::Ordinal { .. } | FieldKind::OneHot { .. }, FieldValue::Choice(label)) => {
                let labels = self.choice_labels();
                if labels.contains(&label.as_str()) {
                    Ok(())
                } else {
                    Err(EncodeError::UnknownCategory {
                        field: self.name.clone(),
                        value: label.clone(),
                        allowed: labels.iter().map(|s| s.to_string()).collect(),
                    })
                }
            }
            (FieldKind::Flag, FieldValue::Flag(_)) => Ok(()),
            (FieldKind::Count { min, max, .. }, FieldValue::Count(n)) => {
                if (*min..=*max).contains(n) {
                    Ok(())
                } else {
                    Err(EncodeError::OutOfRange {
                        field: self.name.clone(),
                        value: *n,
                        min: *min,
                        max: *max,
                    })
                }
            }
            (_, other) => Err(self.type_mismatch(other.to_string())),
        }
    }

    /// Parse free text typed by a user into a validated value.
    ///
    /// Choice labels match exactly first, then ASCII case-insensitively
    /// when exactly one label matches.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, EncodeError> {
        let raw = raw.trim();
        let value = match &self.kind {
            FieldKind::Ordinal { .. } | FieldKind::OneHot { .. } => {
                let labels = self.choice_labels();
                let matched = if labels.contains(&raw) {
                    Some(raw)
                } else {
                    let folded: Vec<&str> = labels
                        .iter()
                        .copied()
                        .filter(|l| l.eq_ignore_ascii_case(raw))
                        .collect();
                    if folded.len() == 1 {
                        Some(folded[0])
                    } else {
                        None
                    }
                };
                FieldValue::Choice(matched.unwrap_or(raw).to_string())
            }
            FieldKind::Flag => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" | "on" => FieldValue::Flag(true),
                "false" | "no" | "n" | "0" | "off" => FieldValue::Flag(false),
                _ => return Err(self.type_mismatch(raw.to_string())),
            },
            FieldKind::Count { .. } => match raw.parse::<i64>() {
                Ok(n) => FieldValue::Count(n),
                Err(_) => return Err(self.type_mismatch(raw.to_string())),
            },
        };
        self.validate(&value)?;
        Ok(value)
    }

    fn type_mismatch(&self, got: String) -> EncodeError {
        let expected = match self.kind {
            FieldKind::Ordinal { .. } | FieldKind::OneHot { .. } => "choice",
            FieldKind::Flag => "flag",
            FieldKind::Count { .. } => "count",
        };
        EncodeError::TypeMismatch {
            field: self.name.clone(),
            expected,
            got,
        }
    }
}

/// Schema definition problems
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema has no fields")]
    Empty,

    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("Column '{0}' is produced by more than one field")]
    DuplicateColumn(String),

    #[error("Field '{0}' has no choices")]
    NoChoices(String),

    #[error("Baseline '{baseline}' of field '{field}' is not one of its choices")]
    UnknownBaseline { field: String, baseline: String },

    #[error("Field '{field}' has an invalid range {min}..={max} (default {default})")]
    InvalidRange {
        field: String,
        min: i64,
        max: i64,
        default: i64,
    },
}

/// Ordered list of form fields and their encodings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl FeatureSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look a field up by name, falling back to a case-insensitive match
    pub fn find_field(&self, name: &str) -> Option<&FieldSpec> {
        self.field(name).or_else(|| {
            let mut matches = self
                .fields
                .iter()
                .filter(|f| f.name.eq_ignore_ascii_case(name));
            match (matches.next(), matches.next()) {
                (Some(field), None) => Some(field),
                _ => None,
            }
        })
    }

    /// Natural column order: fields in order, indicators in choice order
    pub fn columns(&self) -> Vec<String> {
        self.fields.iter().flat_map(FieldSpec::columns).collect()
    }

    /// Input with every field at its form default
    pub fn default_input(&self) -> RawInput {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default_value()))
            .collect()
    }

    /// Schema columns that are missing from `expected`
    pub fn drift_against(&self, expected: &[String]) -> Vec<String> {
        self.columns()
            .into_iter()
            .filter(|c| !expected.contains(c))
            .collect()
    }

    /// Check the schema is internally consistent
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut names = std::collections::HashSet::new();
        let mut columns = std::collections::HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }

            match &field.kind {
                FieldKind::Ordinal { choices } if choices.is_empty() => {
                    return Err(SchemaError::NoChoices(field.name.clone()));
                }
                FieldKind::OneHot { choices, baseline } => {
                    if choices.is_empty() {
                        return Err(SchemaError::NoChoices(field.name.clone()));
                    }
                    if let Some(baseline) = baseline
                        && !choices.contains(baseline)
                    {
                        return Err(SchemaError::UnknownBaseline {
                            field: field.name.clone(),
                            baseline: baseline.clone(),
                        });
                    }
                }
                FieldKind::Count { min, max, default } => {
                    if min > max || !(*min..=*max).contains(default) {
                        return Err(SchemaError::InvalidRange {
                            field: field.name.clone(),
                            min: *min,
                            max: *max,
                            default: *default,
                        });
                    }
                }
                _ => {}
            }

            for column in field.columns() {
                if !columns.insert(column.clone()) {
                    return Err(SchemaError::DuplicateColumn(column));
                }
            }
        }
        Ok(())
    }
}

//! Form answers given on the command line

use risk_domain::{EncodeError, FeatureSchema, FieldValue, RawInput};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors in user-supplied answers
#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("Expected FIELD=VALUE, got '{0}'")]
    MissingEquals(String),

    #[error("Unknown field '{0}' (use --list-fields to see the form)")]
    UnknownField(String),

    #[error(transparent)]
    Invalid(#[from] EncodeError),

    #[error("Answers must be a JSON object of field names to values: {0}")]
    Json(#[from] serde_json::Error),
}

/// Split `field=value`, trimming both sides
pub fn split_assignment(arg: &str) -> Result<(&str, &str), AnswerError> {
    match arg.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value.trim())),
        _ => Err(AnswerError::MissingEquals(arg.to_string())),
    }
}

/// Resolve a typed field name and value against the schema
pub fn parse_answer(
    schema: &FeatureSchema,
    field: &str,
    value: &str,
) -> Result<(String, FieldValue), AnswerError> {
    let target = schema
        .find_field(field)
        .ok_or_else(|| AnswerError::UnknownField(field.to_string()))?;
    let value = target.parse_value(value)?;
    Ok((target.name.clone(), value))
}

/// Resolve a value that arrived already typed, e.g. from JSON
fn check_answer(
    schema: &FeatureSchema,
    field: &str,
    value: FieldValue,
) -> Result<(String, FieldValue), AnswerError> {
    let target = schema
        .find_field(field)
        .ok_or_else(|| AnswerError::UnknownField(field.to_string()))?;
    let value = match value {
        FieldValue::Choice(label) => target.parse_value(&label)?,
        other => {
            target.validate(&other)?;
            other
        }
    };
    Ok((target.name.clone(), value))
}

/// Build one submission: form defaults, then the JSON answers, then `--set`
pub fn collect_answers(
    schema: &FeatureSchema,
    json: Option<&str>,
    assignments: &[String],
) -> Result<RawInput, AnswerError> {
    let mut input = schema.default_input();

    if let Some(json) = json {
        let answers: BTreeMap<String, FieldValue> = serde_json::from_str(json)?;
        for (field, value) in answers {
            let (name, value) = check_answer(schema, &field, value)?;
            input.set(name, value);
        }
    }

    for arg in assignments {
        let (field, value) = split_assignment(arg)?;
        let (name, value) = parse_answer(schema, field, value)?;
        input.set(name, value);
    }

    Ok(input)
}

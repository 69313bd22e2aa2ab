//! # Submission Validation
//!
//! Checks a raw submission against the fixed survey schema before anything
//! is written. Pure: no I/O, no state. All violations are collected so the
//! form can render every message at once instead of one per round trip.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{models::Answer, schema};

/// One validation failure, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validates a raw key-value submission against the survey schema.
///
/// Scalar fields must be present, strings, and non-empty. List fields must
/// be present as arrays of strings; an empty array is accepted. Unknown
/// keys are dropped, not preserved. Returns either the input restricted to
/// the schema or every violation found.
pub fn validate(raw: &Map<String, Value>) -> Result<BTreeMap<String, Answer>, Vec<FieldError>> {
    let mut answers = BTreeMap::new();
    let mut errors = Vec::new();

    for field in schema::all_fields() {
        if schema::is_list_field(field) {
            match check_list(field, raw.get(field)) {
                Ok(items) => {
                    answers.insert(field.to_string(), Answer::List(items));
                }
                Err(error) => errors.push(error),
            }
        } else {
            match check_scalar(field, raw.get(field)) {
                Ok(value) => {
                    answers.insert(field.to_string(), Answer::Scalar(value));
                }
                Err(error) => errors.push(error),
            }
        }
    }

    if errors.is_empty() {
        Ok(answers)
    } else {
        Err(errors)
    }
}

fn check_scalar(field: &str, value: Option<&Value>) -> Result<String, FieldError> {
    match value {
        None | Some(Value::Null) => Err(FieldError::new(field, format!("\"{field}\" is required"))),
        Some(Value::String(s)) if s.is_empty() => Err(FieldError::new(
            field,
            format!("\"{field}\" is not allowed to be empty"),
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::new(
            field,
            format!("\"{field}\" must be a string"),
        )),
    }
}

fn check_list(field: &str, value: Option<&Value>) -> Result<Vec<String>, FieldError> {
    let items = match value {
        None | Some(Value::Null) => {
            return Err(FieldError::new(field, format!("\"{field}\" is required")));
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(FieldError::new(
                field,
                format!("\"{field}\" must be an array"),
            ));
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(FieldError::new(
                field,
                format!("\"{field}\" must only contain strings"),
            )),
        })
        .collect()
}

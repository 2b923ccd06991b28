//! Purpose: The add/update request model and its embedded JSON Schema.
//! Exports: `AddUpdateRequest`, `Record`, `Action`, `validate`, `ModelError`, `Violation`.
//! Role: Decides whether a parsed document is an acceptable restore payload.
//! Invariants: Schema validation runs before typed deserialization.
//! Invariants: A typed value is only produced for documents the schema accepts.
use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const SCHEMA_JSON: &str = include_str!("../../schemas/add-update-request.schema.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddUpdateRequest {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Update,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: String,
    pub fields: Map<String, Value>,
}

/// A single schema violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

#[derive(Debug)]
pub enum ModelError {
    /// The embedded schema could not be parsed or compiled.
    Schema { reason: String },
    /// The document does not conform to the schema.
    Validation { violations: Vec<Violation> },
    /// The schema accepted the document but typed deserialization failed.
    Shape { reason: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Schema { reason } => write!(f, "schema load error: {reason}"),
            ModelError::Validation { violations } => {
                write!(f, "{} validation error(s):", violations.len())?;
                for violation in violations {
                    writeln!(f)?;
                    write!(f, "{violation}")?;
                }
                Ok(())
            }
            ModelError::Shape { reason } => write!(f, "model shape error: {reason}"),
        }
    }
}

impl StdError for ModelError {}

/// Validate a parsed document and produce the typed request.
///
/// Collects every schema violation rather than stopping at the first, so
/// the caller can report them all in one pass.
pub fn validate(instance: &Value) -> Result<AddUpdateRequest, ModelError> {
    let schema: Value = serde_json::from_str(SCHEMA_JSON).map_err(|err| ModelError::Schema {
        reason: err.to_string(),
    })?;

    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    let validator = opts.build(&schema).map_err(|err| ModelError::Schema {
        reason: err.to_string(),
    })?;

    let violations: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();
    if !violations.is_empty() {
        return Err(ModelError::Validation { violations });
    }

    serde_json::from_value(instance.clone()).map_err(|err| ModelError::Shape {
        reason: err.to_string(),
    })
}

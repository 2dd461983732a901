//! # Schema Validation
//!
//! Drives the `jsonschema` engine over a message's field set. The engine is
//! treated as an opaque collaborator: the schema dialect is auto-detected
//! from the document's `$schema`, and every diagnostic it emits is collected
//! into a structured [`Violation`] list rather than stopping at the first.

use std::fmt;

use idmefv2_core::Fields;
use serde_json::Value;
use thiserror::Error;

use crate::storage::SchemaError;

/// Error raised when a message does not conform to its governing schema,
/// or when the schema itself cannot be used.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The message did not conform to the schema.
    #[error("message failed schema validation:\n{violations}")]
    Nonconforming {
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The schema document could not be compiled by the engine.
    #[error("schema could not be compiled: {reason}")]
    Compile {
        /// Engine diagnostic.
        reason: String,
    },

    /// Schema storage/configuration failure during resolution.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the message.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// The engine's diagnostic for this violation.
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

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Validate a message's field set against a schema document.
///
/// Purely a check — the fields are never mutated, and a conforming
/// message returns nothing.
///
/// # Errors
///
/// Returns [`ValidationError::Nonconforming`] with every violation the
/// engine reports, or [`ValidationError::Compile`] when the schema
/// document itself is unusable.
pub fn validate_fields(fields: &Fields, schema: &Value) -> Result<(), ValidationError> {
    let validator = jsonschema::validator_for(schema).map_err(|e| ValidationError::Compile {
        reason: e.to_string(),
    })?;

    let instance = Value::Object(fields.clone());
    let violations: Vec<Violation> = validator
        .iter_errors(&instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Nonconforming {
            violations: ValidationViolations { violations },
        })
    }
}

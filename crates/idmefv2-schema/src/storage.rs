//! # Schema Storage
//!
//! Schema documents live in a read-only, versioned resource namespace that
//! is queried by sub-version (e.g. `"03"`) or by the literal token
//! [`LATEST`]. The namespace is an injectable capability so tests can
//! substitute in-memory fixtures for the embedded resources.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Namespace of the fallback schema. This resource MUST exist in any
/// usable storage; its absence is a configuration error, not a
/// per-message failure.
pub const LATEST: &str = "latest";

/// Error on the schema storage/configuration side.
///
/// Distinct from [`ValidationError`](crate::ValidationError): a
/// `SchemaError` means the deployment is misconfigured, never that a
/// particular message is malformed.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The `latest` schema resource is absent from storage.
    #[error("schema storage has no 'latest' resource; at least the fallback schema must be present")]
    MissingLatest,

    /// A schema resource exists but could not be loaded or parsed.
    #[error("schema resource '{namespace}' could not be loaded: {reason}")]
    Load {
        /// Storage namespace of the resource.
        namespace: String,
        /// Reason the resource could not be loaded.
        reason: String,
    },
}

/// Read-only, versioned schema resource storage.
pub trait SchemaStorage: Send + Sync {
    /// True if a schema resource exists under the given namespace.
    fn exists(&self, namespace: &str) -> bool;

    /// Load and parse the schema resource under the given namespace.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Load`] if the resource is absent or cannot
    /// be parsed as JSON.
    fn open(&self, namespace: &str) -> Result<Value, SchemaError>;
}

const SCHEMA_03: &str = include_str!("../schemas/03/IDMEFv2.schema");
const SCHEMA_LATEST: &str = include_str!("../schemas/latest/IDMEFv2.schema");

/// The IDMEFv2 draft schema resources compiled into the crate, one
/// document per draft namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSchemas;

impl EmbeddedSchemas {
    fn source(namespace: &str) -> Option<&'static str> {
        match namespace {
            "03" => Some(SCHEMA_03),
            LATEST => Some(SCHEMA_LATEST),
            _ => None,
        }
    }
}

impl SchemaStorage for EmbeddedSchemas {
    fn exists(&self, namespace: &str) -> bool {
        Self::source(namespace).is_some()
    }

    fn open(&self, namespace: &str) -> Result<Value, SchemaError> {
        let source = Self::source(namespace).ok_or_else(|| SchemaError::Load {
            namespace: namespace.to_owned(),
            reason: "no embedded resource under this namespace".to_owned(),
        })?;
        serde_json::from_str(source).map_err(|e| SchemaError::Load {
            namespace: namespace.to_owned(),
            reason: format!("invalid JSON: {e}"),
        })
    }
}

/// In-memory schema storage for tests and embedders that manage their
/// own schema documents.
#[derive(Debug, Clone, Default)]
pub struct MemorySchemas {
    schemas: HashMap<String, Value>,
}

impl MemorySchemas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema document under a namespace, replacing any
    /// previous document there.
    pub fn insert(&mut self, namespace: impl Into<String>, schema: Value) {
        self.schemas.insert(namespace.into(), schema);
    }
}

impl SchemaStorage for MemorySchemas {
    fn exists(&self, namespace: &str) -> bool {
        self.schemas.contains_key(namespace)
    }

    fn open(&self, namespace: &str) -> Result<Value, SchemaError> {
        self.schemas
            .get(namespace)
            .cloned()
            .ok_or_else(|| SchemaError::Load {
                namespace: namespace.to_owned(),
                reason: "no schema under this namespace".to_owned(),
            })
    }
}

//! # Message Envelope Orchestration

use std::ops::Index;
use std::sync::OnceLock;

use idmefv2_codec::{CodecError, CodecRegistry};
use idmefv2_core::{Fields, SerializedMessage};
use idmefv2_schema::{validate_fields, SchemaResolver, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error from a `Message` boundary operation. Validation failures and
/// codec failures stay distinct kinds all the way to the caller.
#[derive(Error, Debug)]
pub enum MessageError {
    /// The message does not conform to its governing schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Codec resolution or execution failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Resolver over the embedded IDMEFv2 schemas, built once per process.
fn default_resolver() -> &'static SchemaResolver {
    static RESOLVER: OnceLock<SchemaResolver> = OnceLock::new();
    RESOLVER.get_or_init(SchemaResolver::embedded)
}

/// An IDMEFv2 message: an ordered mapping from field names to arbitrary
/// JSON values.
///
/// The type enforces no shape of its own — the governing JSON schema,
/// selected from the message's `Version` field, is the source of truth
/// for structure, and conformance is checked only by the explicit
/// [`validate`](Message::validate) operation. A message is created
/// empty, populated directly or in bulk from decoded fields, validated
/// zero or more times, and optionally serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    fields: Fields,
}

impl Message {
    /// An empty, unvalidated message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an unvalidated message from raw decoded fields.
    pub fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    /// Assign a field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    /// The message's current field set.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Mutable access to the field set.
    pub fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    /// Consume the message and return its field set.
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Validate against the embedded schema selected by this message's
    /// current `Version` field.
    ///
    /// Purely a check — the message is not mutated, and resolution is
    /// recomputed on every call, so changing `Version` between calls
    /// changes which schema governs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying the engine's diagnostics
    /// when the field set does not conform.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(default_resolver())
    }

    /// Validate against the schema selected by an injected resolver.
    /// Lets embedders and tests substitute their own schema storage.
    pub fn validate_with(&self, resolver: &SchemaResolver) -> Result<(), ValidationError> {
        let schema = resolver.resolve(&self.fields)?;
        validate_fields(&self.fields, &schema)
    }

    /// Serialize this message with the codec registered for
    /// `content_type`.
    ///
    /// The codec is resolved first, so an unsupported content type fails
    /// immediately; the message is then validated before any codec sees
    /// it.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownContentType`] for an unregistered type,
    /// [`ValidationError`] for a nonconforming message, or
    /// [`CodecError::Serialization`] when the codec cannot represent the
    /// field set.
    pub fn serialize(&self, content_type: &str) -> Result<SerializedMessage, MessageError> {
        let codec = CodecRegistry::global().get(content_type)?;
        self.validate()?;
        let payload = codec.serialize(&self.fields)?;
        Ok(SerializedMessage::new(content_type, payload))
    }

    /// Rebuild a message from a serialized payload, selecting the codec
    /// by the payload's content type.
    ///
    /// A payload that decodes structurally but fails schema validation
    /// is rejected here, never silently returned.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownContentType`] for an unregistered type,
    /// [`CodecError::Deserialization`] for malformed bytes, or
    /// [`ValidationError`] for a decoded message that does not conform.
    pub fn deserialize(payload: &SerializedMessage) -> Result<Self, MessageError> {
        let codec = CodecRegistry::global().get(payload.content_type().as_str())?;
        let fields = codec.deserialize(payload.payload())?;
        let message = Self::from_fields(fields);
        message.validate()?;
        Ok(message)
    }
}

impl Index<&str> for Message {
    type Output = Value;

    /// Field access by name, yielding `Null` for absent keys, matching
    /// `serde_json::Value` indexing.
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(key).unwrap_or(&NULL)
    }
}

impl From<Fields> for Message {
    fn from(fields: Fields) -> Self {
        Self::from_fields(fields)
    }
}

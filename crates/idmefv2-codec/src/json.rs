//! # JSON Codec
//!
//! The built-in codec for `application/json`. Encoding is a direct
//! `serde_json` pass; decoding additionally rejects payloads whose top
//! level is not a JSON object, since a message is an object by
//! construction.

use idmefv2_core::{Fields, APPLICATION_JSON};
use serde_json::Value;

use crate::codec::{Codec, CodecError};

/// Codec for the `application/json` content type.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn content_type(&self) -> &str {
        APPLICATION_JSON
    }

    fn serialize(&self, fields: &Fields) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(fields).map_err(|e| CodecError::serialization(APPLICATION_JSON, e))
    }

    fn deserialize(&self, payload: &[u8]) -> Result<Fields, CodecError> {
        let value: Value = serde_json::from_slice(payload)
            .map_err(|e| CodecError::deserialization(APPLICATION_JSON, e))?;
        match value {
            Value::Object(fields) => Ok(fields),
            other => Err(CodecError::deserialization(
                APPLICATION_JSON,
                format!("payload is not a JSON object (got {})", json_kind(&other)),
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! # Serialized Transport Value
//!
//! `SerializedMessage` is the only artifact that crosses a process or
//! transport boundary: a content-type tag and an opaque byte payload.
//! No framing, no validation — the schema version, if any, travels inside
//! the payload when the payload format can carry it.

use crate::content_type::ContentType;

/// A serialized IDMEFv2 message: content type plus opaque payload bytes.
///
/// Immutable once constructed. The payload has no semantic relationship
/// to any schema at this layer; it is decoded and validated only when a
/// `Message` is rebuilt from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedMessage {
    content_type: ContentType,
    payload: Vec<u8>,
}

impl SerializedMessage {
    /// Pair a content type with a serialized payload.
    pub fn new(content_type: impl Into<ContentType>, payload: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            payload,
        }
    }

    /// The MIME content type associated with the payload.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// The serialized payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consume the value and return the payload bytes.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

impl AsRef<[u8]> for SerializedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_type::APPLICATION_JSON;

    #[test]
    fn test_accessors() {
        let sm = SerializedMessage::new(APPLICATION_JSON, b"{}".to_vec());
        assert_eq!(sm.content_type().as_str(), APPLICATION_JSON);
        assert_eq!(sm.payload(), b"{}");
        assert_eq!(sm.as_ref(), b"{}");
    }

    #[test]
    fn test_into_payload() {
        let sm = SerializedMessage::new(APPLICATION_JSON, vec![1, 2, 3]);
        assert_eq!(sm.into_payload(), vec![1, 2, 3]);
    }
}

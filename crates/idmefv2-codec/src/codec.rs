//! # Codec Contract
//!
//! The boundary any payload format implementation must satisfy. A codec
//! is synchronous, stateless, and deterministic: the same input always
//! produces the same output or the same failure, so no codec error is
//! ever retried.

use idmefv2_core::Fields;
use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error raised by codec resolution or by a codec itself.
#[derive(Error, Debug)]
pub enum CodecError {
    /// No codec is registered for the requested content type. Always a
    /// caller or configuration error, never a transient condition.
    #[error("no codec available for content type '{0}'")]
    UnknownContentType(String),

    /// The codec could not produce payload bytes from the field set.
    #[error("serialization to '{content_type}' failed")]
    Serialization {
        /// Content type of the failing codec.
        content_type: String,
        /// The codec-internal cause.
        #[source]
        source: BoxedCause,
    },

    /// The codec could not decode the payload bytes into a field set.
    #[error("deserialization from '{content_type}' failed")]
    Deserialization {
        /// Content type of the failing codec.
        content_type: String,
        /// The codec-internal cause.
        #[source]
        source: BoxedCause,
    },
}

impl CodecError {
    /// Wrap a codec-internal encode failure, preserving the cause.
    pub fn serialization(
        content_type: impl Into<String>,
        source: impl Into<BoxedCause>,
    ) -> Self {
        Self::Serialization {
            content_type: content_type.into(),
            source: source.into(),
        }
    }

    /// Wrap a codec-internal decode failure, preserving the cause.
    pub fn deserialization(
        content_type: impl Into<String>,
        source: impl Into<BoxedCause>,
    ) -> Self {
        Self::Deserialization {
            content_type: content_type.into(),
            source: source.into(),
        }
    }
}

/// A payload codec for one MIME content type.
///
/// Implementations registering with the [`CodecRegistry`] must
/// self-identify by a unique content-type string; that string is the
/// registry key, matched exactly and case-sensitively.
///
/// [`CodecRegistry`]: crate::registry::CodecRegistry
pub trait Codec: Send + Sync + std::fmt::Debug {
    /// The MIME content type this codec handles.
    fn content_type(&self) -> &str;

    /// Encode a field set into payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Serialization`] when the encoding cannot
    /// represent the field set.
    fn serialize(&self, fields: &Fields) -> Result<Vec<u8>, CodecError>;

    /// Decode payload bytes into a raw field set. No schema validation
    /// happens here; the envelope layer re-validates everything a codec
    /// produces.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Deserialization`] on corrupt, truncated,
    /// or structurally unparseable payloads.
    fn deserialize(&self, payload: &[u8]) -> Result<Fields, CodecError>;
}

//! # idmefv2-message — The IDMEFv2 Message Envelope
//!
//! [`Message`] is an ordered key/value document with three operations:
//!
//! - `validate()` — resolve the governing schema from the message's own
//!   `Version` field and check the current field set against it.
//! - `serialize(content_type)` — resolve a codec, validate, encode, and
//!   wrap the bytes into a [`SerializedMessage`].
//! - `deserialize(payload)` — resolve a codec from the payload's content
//!   type, decode, rebuild a message, and validate it before handing it
//!   to the caller.
//!
//! Codecs are externally supplied and potentially third-party, so the
//! schema check is re-applied on every boundary crossing rather than
//! trusted once: an invalid message is never handed to a codec, and a
//! decoded message is never returned unvalidated.

pub mod message;

pub use idmefv2_core::{ContentType, Fields, SerializedMessage, APPLICATION_JSON};
pub use message::{Message, MessageError};

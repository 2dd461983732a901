//! # idmefv2-codec — Codec Contract & Registry
//!
//! The wire-format side of the envelope: a [`Codec`] turns a message's
//! field set into payload bytes and back, self-identifying by a unique
//! MIME content type. Codecs are an open-ended set — third parties
//! implement the trait and register through [`CodecRegistry::register`]
//! at process start, or are supplied as a [`CodecProvider`] when a
//! registry is built.
//!
//! ## Failure isolation
//!
//! A provider that fails to load is skipped with a warning; one bad
//! provider never prevents the rest from registering. Codec-internal
//! failures are wrapped into [`CodecError::Serialization`] /
//! [`CodecError::Deserialization`] with the original cause preserved.
//!
//! ## Crate Policy
//!
//! - Depends only on `idmefv2-core` internally.
//! - The global registry populates exactly once per process; lookups
//!   after population are read-only.

pub mod codec;
pub mod json;
pub mod registry;

pub use codec::{Codec, CodecError};
pub use json::JsonCodec;
pub use registry::{CodecProvider, CodecRegistry};

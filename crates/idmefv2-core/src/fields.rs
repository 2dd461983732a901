//! # Ordered Field Map
//!
//! The raw content of an IDMEFv2 message: string keys mapped to arbitrary
//! JSON values (strings, numbers, nested objects, arrays). Insertion order
//! is preserved — `serde_json` is built with the `preserve_order` feature,
//! so the map survives encode/decode cycles without reordering keys.
//!
//! Codecs produce and consume `Fields`; the envelope type in
//! `idmefv2-message` owns one and layers validation on top. Nothing at
//! this level constrains the shape of the data — structural conformance
//! is the schema's job, enforced only by explicit validation.

use serde_json::{Map, Value};

/// Ordered mapping from field name to JSON value.
pub type Fields = Map<String, Value>;

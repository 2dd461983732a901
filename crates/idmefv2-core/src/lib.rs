//! # idmefv2-core — Foundational Types for the IDMEFv2 Envelope
//!
//! Defines the primitives shared by every other crate in the workspace:
//!
//! 1. **`ContentType` newtype.** MIME content types are registry keys, not
//!    bare strings. The newtype prevents a payload string or a schema id
//!    from being passed where a content type is expected.
//!
//! 2. **`Fields` ordered map.** An IDMEFv2 message is an *ordered* mapping
//!    from string keys to arbitrary JSON values. No fixed struct shape —
//!    the JSON schema, not the Rust type system, is the source of truth
//!    for structure.
//!
//! 3. **`SerializedMessage`.** The immutable (content type, payload) pair
//!    that crosses process and transport boundaries. A pure carrier: no
//!    validation happens at this layer.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `idmefv2-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod content_type;
pub mod fields;
pub mod serialized;

pub use content_type::{ContentType, APPLICATION_JSON};
pub use fields::Fields;
pub use serialized::SerializedMessage;

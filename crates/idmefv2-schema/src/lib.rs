//! # idmefv2-schema — Schema Resolution & Validation
//!
//! Maps a message's declared `Version` tag to the JSON-schema document that
//! governs it, and drives validation of the message's field set against that
//! document via the `jsonschema` engine.
//!
//! ## Resolution
//!
//! Messages embed a version so old and new schema generations can coexist.
//! [`SchemaResolver::resolve`] extracts the schema sub-version from the tag
//! (e.g. `"2.D.V03"` → namespace `"03"`), looks it up in storage, and falls
//! back to the `latest` namespace whenever the tag is absent, malformed, or
//! unknown. Resolution never rejects a message; rejection, if any, happens
//! later during validation.
//!
//! ## Storage
//!
//! Schema documents live behind the [`SchemaStorage`] capability trait
//! (`exists`/`open`). [`EmbeddedSchemas`] ships the IDMEFv2 draft resources
//! compiled into the crate; [`MemorySchemas`] lets tests and embedders
//! substitute their own fixtures.
//!
//! ## Crate Policy
//!
//! - Depends only on `idmefv2-core` internally.
//! - Validation is a trust boundary: nonconforming documents are rejected
//!   with structured violations carrying the instance path, schema path,
//!   and the engine's diagnostic.

pub mod resolver;
pub mod storage;
pub mod validate;
pub mod version;

pub use resolver::SchemaResolver;
pub use storage::{EmbeddedSchemas, MemorySchemas, SchemaError, SchemaStorage, LATEST};
pub use validate::{validate_fields, ValidationError, ValidationViolations, Violation};
pub use version::{DraftVersionParser, VersionTagParser};

//! # Schema Resolution
//!
//! Selects the schema document governing a message from the message's own
//! `Version` field. Resolution is recomputed from the current field set on
//! every call — a message holds no reference to its schema, so mutating
//! `Version` changes which schema governs subsequent validation.

use idmefv2_core::Fields;
use serde_json::Value;

use crate::storage::{SchemaError, SchemaStorage, LATEST};
use crate::version::{DraftVersionParser, VersionTagParser};

/// Resolves the governing schema for a message's field set.
///
/// A missing, non-string, or malformed `Version` tag never fails
/// resolution; all such messages are governed by the `latest` schema, and
/// any rejection happens later during validation. The only error this
/// type produces is the configuration-level absence of the `latest`
/// resource itself.
pub struct SchemaResolver {
    storage: Box<dyn SchemaStorage>,
    parser: Box<dyn VersionTagParser>,
}

impl SchemaResolver {
    pub fn new(storage: Box<dyn SchemaStorage>, parser: Box<dyn VersionTagParser>) -> Self {
        Self { storage, parser }
    }

    /// Resolver over the embedded IDMEFv2 draft resources with the
    /// standard draft-tag parser.
    pub fn embedded() -> Self {
        Self::new(
            Box::new(crate::storage::EmbeddedSchemas),
            Box::new(DraftVersionParser::new()),
        )
    }

    /// Resolve the schema document governing `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingLatest`] when the fallback resource
    /// is absent, or [`SchemaError::Load`] when a resource exists but
    /// cannot be read. Both are configuration errors.
    pub fn resolve(&self, fields: &Fields) -> Result<Value, SchemaError> {
        if let Some(namespace) = self.declared_namespace(fields) {
            if self.storage.exists(&namespace) {
                return self.storage.open(&namespace);
            }
            tracing::debug!(
                namespace = %namespace,
                "no schema under declared sub-version, falling back to '{LATEST}'"
            );
        }
        if !self.storage.exists(LATEST) {
            return Err(SchemaError::MissingLatest);
        }
        self.storage.open(LATEST)
    }

    /// Sub-version namespace declared by the `Version` field, if the
    /// field is present, a string, and matches the tag format.
    fn declared_namespace(&self, fields: &Fields) -> Option<String> {
        fields
            .get("Version")
            .and_then(Value::as_str)
            .and_then(|tag| self.parser.sub_version(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySchemas;
    use serde_json::json;

    fn fixture_resolver() -> SchemaResolver {
        let mut storage = MemorySchemas::new();
        storage.insert("03", json!({"title": "draft 03"}));
        storage.insert(LATEST, json!({"title": "latest"}));
        SchemaResolver::new(Box::new(storage), Box::new(DraftVersionParser::new()))
    }

    fn fields_with_version(version: Value) -> Fields {
        let mut fields = Fields::new();
        fields.insert("Version".to_owned(), version);
        fields
    }

    #[test]
    fn test_resolves_declared_sub_version() {
        let resolver = fixture_resolver();
        let schema = resolver
            .resolve(&fields_with_version(json!("2.D.V03")))
            .unwrap();
        assert_eq!(schema["title"], "draft 03");
    }

    #[test]
    fn test_unknown_sub_version_falls_back() {
        let resolver = fixture_resolver();
        let schema = resolver
            .resolve(&fields_with_version(json!("2.D.V99")))
            .unwrap();
        assert_eq!(schema["title"], "latest");
    }

    #[test]
    fn test_missing_version_falls_back() {
        let resolver = fixture_resolver();
        let schema = resolver.resolve(&Fields::new()).unwrap();
        assert_eq!(schema["title"], "latest");
    }

    #[test]
    fn test_non_string_version_falls_back() {
        let resolver = fixture_resolver();
        let schema = resolver.resolve(&fields_with_version(json!(2))).unwrap();
        assert_eq!(schema["title"], "latest");
    }

    #[test]
    fn test_malformed_tag_falls_back() {
        let resolver = fixture_resolver();
        let schema = resolver
            .resolve(&fields_with_version(json!("two.dee.vee")))
            .unwrap();
        assert_eq!(schema["title"], "latest");
    }

    #[test]
    fn test_missing_latest_is_configuration_error() {
        let mut storage = MemorySchemas::new();
        storage.insert("03", json!({"title": "draft 03"}));
        let resolver =
            SchemaResolver::new(Box::new(storage), Box::new(DraftVersionParser::new()));

        // The declared version still resolves...
        assert!(resolver
            .resolve(&fields_with_version(json!("2.D.V03")))
            .is_ok());
        // ...but anything needing the fallback surfaces the missing resource.
        assert!(matches!(
            resolver.resolve(&Fields::new()),
            Err(SchemaError::MissingLatest)
        ));
    }

    #[test]
    fn test_embedded_resolver_round_trip() {
        let resolver = SchemaResolver::embedded();
        let schema = resolver
            .resolve(&fields_with_version(json!("2.D.V03")))
            .unwrap();
        assert_eq!(schema["title"], "IDMEFv2 draft 03");

        let fallback = resolver.resolve(&Fields::new()).unwrap();
        assert_eq!(fallback["title"], "IDMEFv2 latest draft");
    }
}

//! # Codec Registry
//!
//! A process-wide table mapping a MIME content type to a codec instance.
//! The global registry populates exactly once, on first use, from the
//! built-in provider list; external codecs register explicitly at process
//! start. A provider that fails to load is skipped with a warning so one
//! bad codec never takes down the rest.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use idmefv2_core::ContentType;

use crate::codec::{Codec, CodecError};
use crate::json::JsonCodec;

/// A registered source of one codec, keyed by the content type it
/// declares. The extension point for codecs bundled into a registry at
/// construction time; `load` failures are isolated per provider.
pub trait CodecProvider: Send + Sync {
    /// Content type the provided codec is expected to register under.
    fn content_type(&self) -> &str;

    /// Instantiate the codec.
    ///
    /// # Errors
    ///
    /// Any error here causes this provider alone to be skipped during
    /// registry population.
    fn load(&self) -> Result<Arc<dyn Codec>, CodecError>;
}

struct JsonCodecProvider;

impl CodecProvider for JsonCodecProvider {
    fn content_type(&self) -> &str {
        idmefv2_core::APPLICATION_JSON
    }

    fn load(&self) -> Result<Arc<dyn Codec>, CodecError> {
        Ok(Arc::new(JsonCodec::new()))
    }
}

/// Providers compiled into this crate.
fn builtin_providers() -> Vec<Box<dyn CodecProvider>> {
    vec![Box::new(JsonCodecProvider)]
}

/// Content-type keyed codec table.
///
/// Codecs are shared `Arc` instances; every lookup for a given content
/// type returns a handle to the same, stateless codec. Registration is
/// last-write-wins: registering under an occupied content type replaces
/// the previous codec and returns it, so callers can detect conflicts.
#[derive(Default)]
pub struct CodecRegistry {
    table: RwLock<HashMap<ContentType, Arc<dyn Codec>>>,
}

impl CodecRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a provider set. A provider whose `load`
    /// fails, or whose codec self-identifies under a different content
    /// type than the provider declares, is skipped with a warning.
    pub fn with_providers(providers: impl IntoIterator<Item = Box<dyn CodecProvider>>) -> Self {
        let registry = Self::new();
        for provider in providers {
            match provider.load() {
                Ok(codec) => {
                    if codec.content_type() != provider.content_type() {
                        tracing::warn!(
                            declared = provider.content_type(),
                            actual = codec.content_type(),
                            "skipping codec provider: declared content type does not match the codec"
                        );
                        continue;
                    }
                    registry.register(codec);
                }
                Err(e) => {
                    tracing::warn!(
                        content_type = provider.content_type(),
                        error = %e,
                        "skipping codec provider that failed to load"
                    );
                }
            }
        }
        registry
    }

    /// The process-wide registry, populated exactly once from the
    /// built-in providers. Concurrent first calls all converge on the
    /// same fully populated table.
    pub fn global() -> &'static CodecRegistry {
        static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| CodecRegistry::with_providers(builtin_providers()))
    }

    /// Register a codec under its self-identified content type.
    /// Returns the codec previously registered there, if any.
    pub fn register(&self, codec: Arc<dyn Codec>) -> Option<Arc<dyn Codec>> {
        let key = ContentType::new(codec.content_type());
        self.write_table().insert(key, codec)
    }

    /// Exact, case-sensitive codec lookup.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownContentType`] naming the requested
    /// type when nothing is registered under it.
    pub fn get(&self, content_type: &str) -> Result<Arc<dyn Codec>, CodecError> {
        self.read_table()
            .get(content_type)
            .cloned()
            .ok_or_else(|| CodecError::UnknownContentType(content_type.to_owned()))
    }

    /// Content types currently registered, sorted.
    pub fn content_types(&self) -> Vec<ContentType> {
        let mut types: Vec<ContentType> = self.read_table().keys().cloned().collect();
        types.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        types
    }

    fn read_table(&self) -> RwLockReadGuard<'_, HashMap<ContentType, Arc<dyn Codec>>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_table(&self) -> RwLockWriteGuard<'_, HashMap<ContentType, Arc<dyn Codec>>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idmefv2_core::{Fields, APPLICATION_JSON};

    #[derive(Debug)]
    struct StubCodec {
        content_type: &'static str,
        marker: u8,
    }

    impl Codec for StubCodec {
        fn content_type(&self) -> &str {
            self.content_type
        }

        fn serialize(&self, _fields: &Fields) -> Result<Vec<u8>, CodecError> {
            Ok(vec![self.marker])
        }

        fn deserialize(&self, _payload: &[u8]) -> Result<Fields, CodecError> {
            Ok(Fields::new())
        }
    }

    struct FailingProvider;

    impl CodecProvider for FailingProvider {
        fn content_type(&self) -> &str {
            "application/x-broken"
        }

        fn load(&self) -> Result<Arc<dyn Codec>, CodecError> {
            Err(CodecError::UnknownContentType(
                "application/x-broken".to_owned(),
            ))
        }
    }

    struct MismatchedProvider;

    impl CodecProvider for MismatchedProvider {
        fn content_type(&self) -> &str {
            "application/x-declared"
        }

        fn load(&self) -> Result<Arc<dyn Codec>, CodecError> {
            Ok(Arc::new(StubCodec {
                content_type: "application/x-actual",
                marker: 0,
            }))
        }
    }

    #[test]
    fn test_global_has_builtin_json_codec() {
        let codec = CodecRegistry::global().get(APPLICATION_JSON).unwrap();
        assert_eq!(codec.content_type(), APPLICATION_JSON);
    }

    #[test]
    fn test_unknown_content_type_names_the_type() {
        let err = CodecRegistry::new().get("text/x-nope").unwrap_err();
        assert!(matches!(&err, CodecError::UnknownContentType(t) if t == "text/x-nope"));
        assert!(err.to_string().contains("text/x-nope"));
    }

    #[test]
    fn test_failing_provider_is_isolated() {
        let registry = CodecRegistry::with_providers([
            Box::new(FailingProvider) as Box<dyn CodecProvider>,
            Box::new(JsonCodecProvider),
        ]);
        // The bad provider is skipped; the rest still register.
        assert!(registry.get("application/x-broken").is_err());
        assert!(registry.get(APPLICATION_JSON).is_ok());
    }

    #[test]
    fn test_mismatched_provider_is_skipped() {
        let registry =
            CodecRegistry::with_providers([Box::new(MismatchedProvider) as Box<dyn CodecProvider>]);
        assert!(registry.get("application/x-declared").is_err());
        assert!(registry.get("application/x-actual").is_err());
    }

    #[test]
    fn test_duplicate_registration_last_write_wins() {
        let registry = CodecRegistry::new();
        let first = registry.register(Arc::new(StubCodec {
            content_type: "application/x-test",
            marker: 1,
        }));
        assert!(first.is_none());

        let displaced = registry
            .register(Arc::new(StubCodec {
                content_type: "application/x-test",
                marker: 2,
            }))
            .unwrap();
        assert_eq!(displaced.serialize(&Fields::new()).unwrap(), vec![1]);

        let current = registry.get("application/x-test").unwrap();
        assert_eq!(current.serialize(&Fields::new()).unwrap(), vec![2]);
    }

    #[test]
    fn test_content_types_sorted() {
        let registry = CodecRegistry::new();
        registry.register(Arc::new(StubCodec {
            content_type: "text/b",
            marker: 0,
        }));
        registry.register(Arc::new(StubCodec {
            content_type: "text/a",
            marker: 0,
        }));
        let types = registry.content_types();
        assert_eq!(types[0].as_str(), "text/a");
        assert_eq!(types[1].as_str(), "text/b");
    }
}

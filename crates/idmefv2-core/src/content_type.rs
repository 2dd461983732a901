//! # MIME Content-Type Identifier
//!
//! Content types identify codecs in the registry and tag serialized
//! payloads. Matching is exact and case-sensitive: `"application/json"`
//! and `"Application/JSON"` are different keys.
//!
//! To promote interoperability, content types SHOULD be registered with
//! IANA. A private type MAY be used when the next processing entity is
//! known to support it, and MUST then follow the IANA naming conventions.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Content type of the built-in JSON codec.
pub const APPLICATION_JSON: &str = "application/json";

/// A MIME content type used as a codec registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentType(String);

impl ContentType {
    /// Wrap a content-type string.
    pub fn new(content_type: impl Into<String>) -> Self {
        Self(content_type.into())
    }

    /// Access the content type as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentType {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ContentType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// Allows `HashMap<ContentType, _>` lookups keyed by `&str`.
impl Borrow<str> for ContentType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ContentType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ContentType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_exact_case_sensitive_equality() {
        assert_eq!(ContentType::new(APPLICATION_JSON), APPLICATION_JSON);
        assert_ne!(
            ContentType::new("Application/JSON"),
            ContentType::new(APPLICATION_JSON)
        );
    }

    #[test]
    fn test_str_lookup_through_borrow() {
        let mut table = HashMap::new();
        table.insert(ContentType::new(APPLICATION_JSON), 1u8);
        assert_eq!(table.get(APPLICATION_JSON), Some(&1));
        assert_eq!(table.get("text/xml"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ContentType::new(APPLICATION_JSON).to_string(), APPLICATION_JSON);
    }
}

//! # Version-Tag Parsing
//!
//! An IDMEFv2 version tag names a major generation and a draft sub-version,
//! e.g. `"2.D.V03"`. Only the sub-version participates in schema resolution:
//! it selects the storage namespace the schema document lives under.
//!
//! The parser is a trait so alternate tag formats can be supported without
//! touching resolution logic.

use regex::Regex;

/// Extracts the schema sub-version from a message's version tag.
pub trait VersionTagParser: Send + Sync {
    /// Returns the sub-version (e.g. `"03"`) when the tag is well formed,
    /// `None` otherwise.
    fn sub_version(&self, tag: &str) -> Option<String>;
}

/// Parser for draft-generation tags of the form `<major>.D.V<digits>`.
///
/// Matching anchors at the start of the tag only: trailing characters after
/// the sub-version are tolerated, and the sub-version is kept verbatim as a
/// string so leading zeros survive into the storage namespace.
#[derive(Debug, Clone)]
pub struct DraftVersionParser {
    pattern: Regex,
}

impl DraftVersionParser {
    pub fn new() -> Self {
        let pattern = Regex::new(r"^[0-9]\.D\.V([0-9]+)").expect("literal pattern compiles");
        Self { pattern }
    }
}

impl Default for DraftVersionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionTagParser for DraftVersionParser {
    fn sub_version(&self, tag: &str) -> Option<String> {
        self.pattern
            .captures(tag)
            .map(|captures| captures[1].to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_tag() {
        let parser = DraftVersionParser::new();
        assert_eq!(parser.sub_version("2.D.V03"), Some("03".to_owned()));
        assert_eq!(parser.sub_version("1.D.V1"), Some("1".to_owned()));
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let parser = DraftVersionParser::new();
        assert_eq!(parser.sub_version("2.D.V007"), Some("007".to_owned()));
    }

    #[test]
    fn test_trailing_characters_tolerated() {
        let parser = DraftVersionParser::new();
        assert_eq!(parser.sub_version("2.D.V03-beta"), Some("03".to_owned()));
    }

    #[test]
    fn test_malformed_tags() {
        let parser = DraftVersionParser::new();
        assert_eq!(parser.sub_version(""), None);
        assert_eq!(parser.sub_version("2.D.V"), None);
        assert_eq!(parser.sub_version("v2.D.V03"), None);
        assert_eq!(parser.sub_version("10.D.V03"), None);
        assert_eq!(parser.sub_version("2-D-V03"), None);
    }
}

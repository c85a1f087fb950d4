//! Parsed content document
//!
//! The content endpoint returns one JSON object keyed by section name. Any
//! subset of sections may be present. Unknown keys are kept so diagnostics
//! can report them, but resolution ignores them. The empty document is valid
//! and resolves every section to its default.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Error;
use crate::section::Section;
use crate::Result;

/// A parsed response from the content endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDocument {
    sections: Map<String, Value>,
}

impl ContentDocument {
    /// Document with no sections. Everything resolves to defaults.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a raw response body. The top level must be a JSON object.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Build a document from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(sections) => Ok(Self { sections }),
            _ => Err(Error::NotAnObject),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Raw value for a section, if the document carries it.
    pub fn section_value(&self, section: Section) -> Option<&Value> {
        self.sections.get(section.as_key())
    }

    /// Deserialize a section into its patch type.
    ///
    /// A present but malformed section is treated as absent, so one bad
    /// section cannot poison its siblings.
    pub fn section_payload<P: DeserializeOwned>(&self, section: Section) -> Option<P> {
        let value = self.section_value(section)?.clone();
        match serde_json::from_value(value) {
            Ok(payload) => Some(payload),
            Err(err) => {
                debug!(
                    section = section.as_key(),
                    error = %err,
                    "section payload malformed, falling back to defaults"
                );
                None
            }
        }
    }

    /// Keys present in the document that match no known section.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.sections
            .keys()
            .filter(|key| Section::from_key(key).is_none())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let doc = ContentDocument::parse(r#"{"hero": {"tagline": "hi"}}"#).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(doc.section_value(Section::Hero).is_some());
        assert!(doc.section_value(Section::Cta).is_none());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            ContentDocument::parse("[1, 2, 3]"),
            Err(Error::NotAnObject)
        ));
        assert!(matches!(
            ContentDocument::parse("\"hello\""),
            Err(Error::NotAnObject)
        ));
        assert!(matches!(
            ContentDocument::parse("not json at all"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        let doc = ContentDocument::empty();
        assert!(doc.is_empty());
        assert!(doc.section_value(Section::Hero).is_none());
    }

    #[test]
    fn test_malformed_section_is_treated_as_absent() {
        let doc = ContentDocument::from_value(json!({ "stats": 42 })).unwrap();
        let payload: Option<Vec<crate::model::Stat>> = doc.section_payload(Section::Stats);
        assert!(payload.is_none());
    }

    #[test]
    fn test_unknown_keys() {
        let doc = ContentDocument::from_value(json!({
            "hero": {},
            "blogPosts": [],
            "theme": "dark"
        }))
        .unwrap();
        let mut unknown = doc.unknown_keys();
        unknown.sort_unstable();
        assert_eq!(unknown, vec!["blogPosts", "theme"]);
    }
}

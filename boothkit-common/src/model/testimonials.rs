//! Client testimonials: a composite section with header and entries.

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultContent;
use crate::document::ContentDocument;
use crate::merge;
use crate::payload::SectionPayload;
use crate::section::Section;

use super::{resolve_record, CollectionHeader, CollectionHeaderPatch, ContentView};

/// One testimonial. `rating` defaults to five stars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub event: String,
    pub text: String,
    pub rating: u8,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            event: String::new(),
            text: String::new(),
            rating: 5,
        }
    }
}

/// Testimonials section: header plus entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub header: CollectionHeader,
    pub items: Vec<Testimonial>,
}

impl TestimonialsContent {
    pub fn merged_with(&self, payload: SectionPayload<CollectionHeaderPatch, Testimonial>) -> Self {
        let normalized = payload.normalize();
        Self {
            header: match normalized.header {
                Some(patch) => self.header.merged_with(patch),
                None => self.header.clone(),
            },
            items: merge::items(normalized.items, &self.items),
        }
    }
}

impl ContentView for TestimonialsContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.testimonials.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Testimonials,
            &defaults.testimonials,
            TestimonialsContent::merged_with,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_defaults_to_five() {
        let t: Testimonial = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(t.rating, 5);
    }

    #[test]
    fn test_explicit_rating_kept() {
        let t: Testimonial = serde_json::from_str(r#"{"name": "Ana", "rating": 4}"#).unwrap();
        assert_eq!(t.rating, 4);
    }
}

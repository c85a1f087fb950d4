//! FAQ categories and their questions.

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultContent;
use crate::document::ContentDocument;
use crate::section::Section;

use super::{resolve_items, ContentView};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqQuestion {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// A named group of questions ("Booking & Availability", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqCategory {
    pub id: String,
    pub category: String,
    pub questions: Vec<FaqQuestion>,
}

impl ContentView for Vec<FaqCategory> {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.faq_categories.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_items(document, Section::FaqCategories, &defaults.faq_categories)
    }
}

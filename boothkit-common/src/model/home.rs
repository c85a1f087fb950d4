//! Landing page sections: hero, about, stats, call to action.

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultContent;
use crate::document::ContentDocument;
use crate::merge;
use crate::section::Section;

use super::{resolve_items, resolve_record, ContentView};

/// Hero banner copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub tagline: String,
    pub title_line1: String,
    pub title_line2: String,
    pub title_line3: String,
    pub description: String,
    pub cta_text: String,
    pub rating: String,
    pub review_count: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroPatch {
    pub tagline: Option<String>,
    pub title_line1: Option<String>,
    pub title_line2: Option<String>,
    pub title_line3: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub rating: Option<String>,
    pub review_count: Option<String>,
}

impl HeroContent {
    pub fn merged_with(&self, patch: HeroPatch) -> Self {
        Self {
            tagline: merge::text(patch.tagline, &self.tagline),
            title_line1: merge::text(patch.title_line1, &self.title_line1),
            title_line2: merge::text(patch.title_line2, &self.title_line2),
            title_line3: merge::text(patch.title_line3, &self.title_line3),
            description: merge::text(patch.description, &self.description),
            cta_text: merge::text(patch.cta_text, &self.cta_text),
            rating: merge::text(patch.rating, &self.rating),
            review_count: merge::text(patch.review_count, &self.review_count),
        }
    }
}

impl ContentView for HeroContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.hero.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Hero,
            &defaults.hero,
            HeroContent::merged_with,
        )
    }
}

/// About blurb on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub section_label: String,
    pub title: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPatch {
    pub section_label: Option<String>,
    pub title: Option<String>,
    pub paragraph1: Option<String>,
    pub paragraph2: Option<String>,
    pub paragraph3: Option<String>,
}

impl AboutContent {
    pub fn merged_with(&self, patch: AboutPatch) -> Self {
        Self {
            section_label: merge::text(patch.section_label, &self.section_label),
            title: merge::text(patch.title, &self.title),
            paragraph1: merge::text(patch.paragraph1, &self.paragraph1),
            paragraph2: merge::text(patch.paragraph2, &self.paragraph2),
            paragraph3: merge::text(patch.paragraph3, &self.paragraph3),
        }
    }
}

impl ContentView for AboutContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.about.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::About,
            &defaults.about,
            AboutContent::merged_with,
        )
    }
}

/// One headline figure ("1,000+ Events Celebrated").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub id: String,
    pub icon: String,
    pub label: String,
    pub value: String,
}

impl ContentView for Vec<Stat> {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.stats.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_items(document, Section::Stats, &defaults.stats)
    }
}

/// Call-to-action band above the footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    pub title_part1: String,
    pub title_part2: String,
    pub title_part3: String,
    pub description: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaPatch {
    pub title_part1: Option<String>,
    pub title_part2: Option<String>,
    pub title_part3: Option<String>,
    /// Legacy single-string title. Accepted on the wire, never consulted;
    /// the three-part title is authoritative.
    pub title: Option<String>,
    pub description: Option<String>,
    pub primary_button_text: Option<String>,
    pub secondary_button_text: Option<String>,
}

impl CtaContent {
    pub fn merged_with(&self, patch: CtaPatch) -> Self {
        Self {
            title_part1: merge::text(patch.title_part1, &self.title_part1),
            title_part2: merge::text(patch.title_part2, &self.title_part2),
            title_part3: merge::text(patch.title_part3, &self.title_part3),
            description: merge::text(patch.description, &self.description),
            primary_button_text: merge::text(patch.primary_button_text, &self.primary_button_text),
            secondary_button_text: merge::text(
                patch.secondary_button_text,
                &self.secondary_button_text,
            ),
        }
    }
}

impl ContentView for CtaContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.cta.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(document, Section::Cta, &defaults.cta, CtaContent::merged_with)
    }
}

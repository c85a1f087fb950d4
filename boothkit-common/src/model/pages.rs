//! Standalone page sections: about page, contact page, service areas, values.

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultContent;
use crate::document::ContentDocument;
use crate::merge;
use crate::section::Section;

use super::{resolve_items, resolve_record, ContentView};

/// Full about-us page copy: intro, story, and mission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPageContent {
    pub section_label: String,
    pub title: String,
    pub intro: String,
    pub story_title: String,
    pub story_paragraph1: String,
    pub story_paragraph2: String,
    pub story_paragraph3: String,
    pub mission_title: String,
    pub mission_statement: String,
    pub mission_paragraph1: String,
    pub mission_paragraph2: String,
    pub mission_paragraph3: String,
    pub service_area_title: String,
    pub service_area_subtitle: String,
    pub service_area_note: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPagePatch {
    pub section_label: Option<String>,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub story_title: Option<String>,
    pub story_paragraph1: Option<String>,
    pub story_paragraph2: Option<String>,
    pub story_paragraph3: Option<String>,
    pub mission_title: Option<String>,
    pub mission_statement: Option<String>,
    pub mission_paragraph1: Option<String>,
    pub mission_paragraph2: Option<String>,
    pub mission_paragraph3: Option<String>,
    pub service_area_title: Option<String>,
    pub service_area_subtitle: Option<String>,
    pub service_area_note: Option<String>,
}

impl AboutPageContent {
    pub fn merged_with(&self, patch: AboutPagePatch) -> Self {
        Self {
            section_label: merge::text(patch.section_label, &self.section_label),
            title: merge::text(patch.title, &self.title),
            intro: merge::text(patch.intro, &self.intro),
            story_title: merge::text(patch.story_title, &self.story_title),
            story_paragraph1: merge::text(patch.story_paragraph1, &self.story_paragraph1),
            story_paragraph2: merge::text(patch.story_paragraph2, &self.story_paragraph2),
            story_paragraph3: merge::text(patch.story_paragraph3, &self.story_paragraph3),
            mission_title: merge::text(patch.mission_title, &self.mission_title),
            mission_statement: merge::text(patch.mission_statement, &self.mission_statement),
            mission_paragraph1: merge::text(patch.mission_paragraph1, &self.mission_paragraph1),
            mission_paragraph2: merge::text(patch.mission_paragraph2, &self.mission_paragraph2),
            mission_paragraph3: merge::text(patch.mission_paragraph3, &self.mission_paragraph3),
            service_area_title: merge::text(patch.service_area_title, &self.service_area_title),
            service_area_subtitle: merge::text(
                patch.service_area_subtitle,
                &self.service_area_subtitle,
            ),
            service_area_note: merge::text(patch.service_area_note, &self.service_area_note),
        }
    }
}

impl ContentView for AboutPageContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.about_page.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::AboutPage,
            &defaults.about_page,
            AboutPageContent::merged_with,
        )
    }
}

/// Contact page header and form copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageContent {
    pub section_label: String,
    pub title: String,
    pub intro: String,
    pub form_title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPagePatch {
    pub section_label: Option<String>,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub form_title: Option<String>,
}

impl ContactPageContent {
    pub fn merged_with(&self, patch: ContactPagePatch) -> Self {
        Self {
            section_label: merge::text(patch.section_label, &self.section_label),
            title: merge::text(patch.title, &self.title),
            intro: merge::text(patch.intro, &self.intro),
            form_title: merge::text(patch.form_title, &self.form_title),
        }
    }
}

impl ContentView for ContactPageContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.contact_page.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::ContactPage,
            &defaults.contact_page,
            ContactPageContent::merged_with,
        )
    }
}

/// One covered region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceArea {
    pub id: String,
    pub region: String,
    pub coverage: String,
}

impl ContentView for Vec<ServiceArea> {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.service_areas.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_items(document, Section::ServiceAreas, &defaults.service_areas)
    }
}

/// One company value card on the about page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueItem {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl ContentView for Vec<ValueItem> {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.values.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_items(document, Section::Values, &defaults.values)
    }
}

//! Offering catalogs: services, photo booths, photography packages.
//!
//! Services and photography are composite sections (optional header plus
//! items) and accept both the legacy bare-array shape and the current headed
//! shape. Photo booths are a plain collection.

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultContent;
use crate::document::ContentDocument;
use crate::merge;
use crate::payload::SectionPayload;
use crate::section::Section;

use super::{resolve_items, resolve_record, ContentView};

/// Header over a card grid: three-part title plus a lead paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHeader {
    pub title_part1: String,
    pub title_part2: String,
    pub title_part3: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHeaderPatch {
    pub title_part1: Option<String>,
    pub title_part2: Option<String>,
    pub title_part3: Option<String>,
    pub description: Option<String>,
}

impl CollectionHeader {
    pub fn merged_with(&self, patch: CollectionHeaderPatch) -> Self {
        Self {
            title_part1: merge::text(patch.title_part1, &self.title_part1),
            title_part2: merge::text(patch.title_part2, &self.title_part2),
            title_part3: merge::text(patch.title_part3, &self.title_part3),
            description: merge::text(patch.description, &self.description),
        }
    }
}

/// One service card. A missing `featured` flag means the card is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub featured: bool,
}

impl Default for ServiceItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            price: String::new(),
            featured: true,
        }
    }
}

/// Services section: header plus cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesContent {
    pub header: CollectionHeader,
    pub items: Vec<ServiceItem>,
}

impl ServicesContent {
    pub fn merged_with(&self, payload: SectionPayload<CollectionHeaderPatch, ServiceItem>) -> Self {
        let normalized = payload.normalize();
        Self {
            header: match normalized.header {
                Some(patch) => self.header.merged_with(patch),
                None => self.header.clone(),
            },
            items: merge::items(normalized.items, &self.items),
        }
    }

    /// Cards with `featured` set, in document order.
    pub fn featured_items(&self) -> impl Iterator<Item = &ServiceItem> {
        self.items.iter().filter(|item| item.featured)
    }
}

impl ContentView for ServicesContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.services.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Services,
            &defaults.services,
            ServicesContent::merged_with,
        )
    }
}

/// One photo booth offering. `inclusions` and `features` are comma-separated
/// lists on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoBooth {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    pub badge: String,
    pub setup_time: String,
    pub capacity: String,
    pub print_time: String,
    pub min_booking: String,
    pub inclusions: String,
    pub features: String,
}

impl PhotoBooth {
    /// Split the comma-separated inclusions into display entries.
    pub fn inclusion_list(&self) -> Vec<&str> {
        split_list(&self.inclusions)
    }

    pub fn feature_list(&self) -> Vec<&str> {
        split_list(&self.features)
    }
}

impl ContentView for Vec<PhotoBooth> {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.photo_booths.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_items(document, Section::PhotoBooths, &defaults.photo_booths)
    }
}

/// Photography header carries a section label on top of the shared shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographyHeader {
    pub section_label: String,
    pub title_part1: String,
    pub title_part2: String,
    pub title_part3: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographyHeaderPatch {
    pub section_label: Option<String>,
    pub title_part1: Option<String>,
    pub title_part2: Option<String>,
    pub title_part3: Option<String>,
    pub description: Option<String>,
}

impl PhotographyHeader {
    pub fn merged_with(&self, patch: PhotographyHeaderPatch) -> Self {
        Self {
            section_label: merge::text(patch.section_label, &self.section_label),
            title_part1: merge::text(patch.title_part1, &self.title_part1),
            title_part2: merge::text(patch.title_part2, &self.title_part2),
            title_part3: merge::text(patch.title_part3, &self.title_part3),
            description: merge::text(patch.description, &self.description),
        }
    }
}

/// One photography package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotographyItem {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    pub badge: String,
    pub duration: String,
    pub delivery_time: String,
    pub min_booking: String,
    pub inclusions: String,
    pub features: String,
}

impl PhotographyItem {
    pub fn inclusion_list(&self) -> Vec<&str> {
        split_list(&self.inclusions)
    }
}

/// Photography section: header plus packages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographyContent {
    pub header: PhotographyHeader,
    pub items: Vec<PhotographyItem>,
}

impl PhotographyContent {
    pub fn merged_with(
        &self,
        payload: SectionPayload<PhotographyHeaderPatch, PhotographyItem>,
    ) -> Self {
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

impl ContentView for PhotographyContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.photography.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Photography,
            &defaults.photography,
            PhotographyContent::merged_with,
        )
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        let booth = PhotoBooth {
            inclusions: "Props, Instant prints , Attendant".into(),
            ..PhotoBooth::default()
        };
        assert_eq!(
            booth.inclusion_list(),
            vec!["Props", "Instant prints", "Attendant"]
        );
    }

    #[test]
    fn test_split_list_empty() {
        let booth = PhotoBooth::default();
        assert!(booth.inclusion_list().is_empty());
        assert!(booth.feature_list().is_empty());
    }

    #[test]
    fn test_service_item_featured_defaults_to_true() {
        let item: ServiceItem = serde_json::from_str(r#"{"id": "x", "name": "X"}"#).unwrap();
        assert!(item.featured);

        let hidden: ServiceItem =
            serde_json::from_str(r#"{"id": "x", "featured": false}"#).unwrap();
        assert!(!hidden.featured);
    }

    #[test]
    fn test_featured_items_filter() {
        let services = ServicesContent {
            header: CollectionHeader {
                title_part1: String::new(),
                title_part2: String::new(),
                title_part3: String::new(),
                description: String::new(),
            },
            items: vec![
                ServiceItem {
                    id: "a".into(),
                    ..ServiceItem::default()
                },
                ServiceItem {
                    id: "b".into(),
                    featured: false,
                    ..ServiceItem::default()
                },
            ],
        };
        let featured: Vec<_> = services.featured_items().map(|i| i.id.as_str()).collect();
        assert_eq!(featured, vec!["a"]);
    }
}

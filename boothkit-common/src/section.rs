//! Section registry
//!
//! The content document is keyed by exactly these sections, camelCase on the
//! wire. Code that needs to walk every section iterates [`Section::ALL`]
//! instead of hardcoding key lists, so the registry stays the single source
//! of truth.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One top-level key of the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Metadata,
    Branding,
    Hero,
    About,
    Stats,
    Services,
    PhotoBooths,
    Photography,
    Cta,
    Testimonials,
    FaqCategories,
    Footer,
    Contact,
    Social,
    AboutPage,
    ContactPage,
    ServiceAreas,
    Values,
}

impl Section {
    /// Every section, in document order.
    pub const ALL: [Section; 18] = [
        Section::Metadata,
        Section::Branding,
        Section::Hero,
        Section::About,
        Section::Stats,
        Section::Services,
        Section::PhotoBooths,
        Section::Photography,
        Section::Cta,
        Section::Testimonials,
        Section::FaqCategories,
        Section::Footer,
        Section::Contact,
        Section::Social,
        Section::AboutPage,
        Section::ContactPage,
        Section::ServiceAreas,
        Section::Values,
    ];

    /// Wire key for this section.
    pub fn as_key(self) -> &'static str {
        match self {
            Section::Metadata => "metadata",
            Section::Branding => "branding",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Stats => "stats",
            Section::Services => "services",
            Section::PhotoBooths => "photoBooths",
            Section::Photography => "photography",
            Section::Cta => "cta",
            Section::Testimonials => "testimonials",
            Section::FaqCategories => "faqCategories",
            Section::Footer => "footer",
            Section::Contact => "contact",
            Section::Social => "social",
            Section::AboutPage => "aboutPage",
            Section::ContactPage => "contactPage",
            Section::ServiceAreas => "serviceAreas",
            Section::Values => "values",
        }
    }

    /// Reverse lookup. `None` for keys the registry does not know.
    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_key() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Section::from_key(s).ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.as_key()), Some(section));
        }
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        assert_eq!(Section::PhotoBooths.as_key(), "photoBooths");
        assert_eq!(Section::FaqCategories.as_key(), "faqCategories");
        assert_eq!(Section::AboutPage.as_key(), "aboutPage");
        assert_eq!(Section::ServiceAreas.as_key(), "serviceAreas");
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Section::from_key("heroes"), None);
        assert!("heroes".parse::<Section>().is_err());
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(Section::Hero.to_string(), "hero");
    }

    #[test]
    fn test_all_has_no_duplicates() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.as_key(), b.as_key());
            }
        }
    }
}

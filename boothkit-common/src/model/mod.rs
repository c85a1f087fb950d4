//! Typed section models
//!
//! Each section has a fully populated content type and a wire patch type in
//! which every field is optional. [`ContentView`] is the seam consumers
//! resolve through; it is implemented for every per-section content type and
//! for the whole-site aggregate, so the same machinery can track one section
//! or the entire site.

mod catalog;
mod faq;
mod home;
mod pages;
mod site;
mod testimonials;

pub use catalog::*;
pub use faq::*;
pub use home::*;
pub use pages::*;
pub use site::*;
pub use testimonials::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::defaults::DefaultContent;
use crate::document::ContentDocument;
use crate::merge;
use crate::section::Section;

/// A resolvable view over content: one section, or the whole site.
pub trait ContentView: Clone {
    /// The compiled default for this view.
    fn fallback(defaults: &DefaultContent) -> Self;

    /// Merge whatever the document carries for this view over the defaults.
    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self;
}

/// Flat-record resolution: deserialize the patch and merge field-by-field.
pub(crate) fn resolve_record<C, P>(
    document: &ContentDocument,
    section: Section,
    default_value: &C,
    merged: impl FnOnce(&C, P) -> C,
) -> C
where
    C: Clone,
    P: DeserializeOwned,
{
    match document.section_payload::<P>(section) {
        Some(patch) => merged(default_value, patch),
        None => default_value.clone(),
    }
}

/// Collection resolution: a non-empty fetched array replaces the default.
pub(crate) fn resolve_items<T>(
    document: &ContentDocument,
    section: Section,
    default_items: &[T],
) -> Vec<T>
where
    T: Clone + DeserializeOwned,
{
    match document.section_payload::<Vec<T>>(section) {
        Some(fetched) => merge::items(fetched, default_items),
        None => default_items.to_vec(),
    }
}

/// Merged value of every section. Serializes with the wire key names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub metadata: MetadataContent,
    pub branding: BrandingContent,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub stats: Vec<Stat>,
    pub services: ServicesContent,
    pub photo_booths: Vec<PhotoBooth>,
    pub photography: PhotographyContent,
    pub cta: CtaContent,
    pub testimonials: TestimonialsContent,
    pub faq_categories: Vec<FaqCategory>,
    pub footer: FooterContent,
    pub contact: ContactContent,
    pub social: SocialContent,
    pub about_page: AboutPageContent,
    pub contact_page: ContactPageContent,
    pub service_areas: Vec<ServiceArea>,
    pub values: Vec<ValueItem>,
}

impl ContentView for SiteContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        Self {
            metadata: MetadataContent::fallback(defaults),
            branding: BrandingContent::fallback(defaults),
            hero: HeroContent::fallback(defaults),
            about: AboutContent::fallback(defaults),
            stats: Vec::<Stat>::fallback(defaults),
            services: ServicesContent::fallback(defaults),
            photo_booths: Vec::<PhotoBooth>::fallback(defaults),
            photography: PhotographyContent::fallback(defaults),
            cta: CtaContent::fallback(defaults),
            testimonials: TestimonialsContent::fallback(defaults),
            faq_categories: Vec::<FaqCategory>::fallback(defaults),
            footer: FooterContent::fallback(defaults),
            contact: ContactContent::fallback(defaults),
            social: SocialContent::fallback(defaults),
            about_page: AboutPageContent::fallback(defaults),
            contact_page: ContactPageContent::fallback(defaults),
            service_areas: Vec::<ServiceArea>::fallback(defaults),
            values: Vec::<ValueItem>::fallback(defaults),
        }
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        Self {
            metadata: MetadataContent::resolve(document, defaults),
            branding: BrandingContent::resolve(document, defaults),
            hero: HeroContent::resolve(document, defaults),
            about: AboutContent::resolve(document, defaults),
            stats: Vec::<Stat>::resolve(document, defaults),
            services: ServicesContent::resolve(document, defaults),
            photo_booths: Vec::<PhotoBooth>::resolve(document, defaults),
            photography: PhotographyContent::resolve(document, defaults),
            cta: CtaContent::resolve(document, defaults),
            testimonials: TestimonialsContent::resolve(document, defaults),
            faq_categories: Vec::<FaqCategory>::resolve(document, defaults),
            footer: FooterContent::resolve(document, defaults),
            contact: ContactContent::resolve(document, defaults),
            social: SocialContent::resolve(document, defaults),
            about_page: AboutPageContent::resolve(document, defaults),
            contact_page: ContactPageContent::resolve(document, defaults),
            service_areas: Vec::<ServiceArea>::resolve(document, defaults),
            values: Vec::<ValueItem>::resolve(document, defaults),
        }
    }
}

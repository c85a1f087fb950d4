//! Site-wide chrome: metadata, branding, contact, social links, footer.

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultContent;
use crate::document::ContentDocument;
use crate::merge;
use crate::section::Section;

use super::{resolve_record, ContentView};

/// Document head / SEO metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataContent {
    pub site_title: String,
    pub site_description: String,
    pub author: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub favicon: String,
    pub theme_color: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataPatch {
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
    pub favicon: Option<String>,
    pub theme_color: Option<String>,
}

impl MetadataContent {
    pub fn merged_with(&self, patch: MetadataPatch) -> Self {
        Self {
            site_title: merge::text(patch.site_title, &self.site_title),
            site_description: merge::text(patch.site_description, &self.site_description),
            author: merge::text(patch.author, &self.author),
            keywords: merge::text(patch.keywords, &self.keywords),
            og_title: merge::text(patch.og_title, &self.og_title),
            og_description: merge::text(patch.og_description, &self.og_description),
            og_image: merge::text(patch.og_image, &self.og_image),
            twitter_card: merge::text(patch.twitter_card, &self.twitter_card),
            favicon: merge::text(patch.favicon, &self.favicon),
            theme_color: merge::text(patch.theme_color, &self.theme_color),
        }
    }
}

impl ContentView for MetadataContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.metadata.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Metadata,
            &defaults.metadata,
            MetadataContent::merged_with,
        )
    }
}

/// Site name and logo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingContent {
    pub site_name: String,
    pub company_name: String,
    pub tagline: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingPatch {
    pub site_name: Option<String>,
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
}

impl BrandingContent {
    pub fn merged_with(&self, patch: BrandingPatch) -> Self {
        Self {
            site_name: merge::text(patch.site_name, &self.site_name),
            company_name: merge::text(patch.company_name, &self.company_name),
            tagline: merge::text(patch.tagline, &self.tagline),
            logo_url: merge::text(patch.logo_url, &self.logo_url),
        }
    }
}

impl ContentView for BrandingContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.branding.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Branding,
            &defaults.branding,
            BrandingContent::merged_with,
        )
    }
}

/// How to reach the business.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub business_hours: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
}

impl ContactContent {
    pub fn merged_with(&self, patch: ContactPatch) -> Self {
        Self {
            email: merge::text(patch.email, &self.email),
            phone: merge::text(patch.phone, &self.phone),
            address: merge::text(patch.address, &self.address),
            business_hours: merge::text(patch.business_hours, &self.business_hours),
        }
    }
}

impl ContentView for ContactContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.contact.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Contact,
            &defaults.contact,
            ContactContent::merged_with,
        )
    }
}

/// Social profile URLs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialContent {
    pub instagram: String,
    pub facebook: String,
    pub tiktok: String,
    pub youtube: String,
    pub pinterest: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPatch {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub pinterest: Option<String>,
}

impl SocialContent {
    pub fn merged_with(&self, patch: SocialPatch) -> Self {
        Self {
            instagram: merge::text(patch.instagram, &self.instagram),
            facebook: merge::text(patch.facebook, &self.facebook),
            tiktok: merge::text(patch.tiktok, &self.tiktok),
            youtube: merge::text(patch.youtube, &self.youtube),
            pinterest: merge::text(patch.pinterest, &self.pinterest),
        }
    }
}

impl ContentView for SocialContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.social.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Social,
            &defaults.social,
            SocialContent::merged_with,
        )
    }
}

/// One link in a footer column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLink {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Footer copy plus its two link columns. The link lists follow the
/// collection rule: non-empty fetched lists replace the defaults wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub description: String,
    pub copyright_text: String,
    pub services: Vec<FooterLink>,
    pub company: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterPatch {
    pub description: Option<String>,
    pub copyright_text: Option<String>,
    pub services: Option<Vec<FooterLink>>,
    pub company: Option<Vec<FooterLink>>,
}

impl FooterContent {
    pub fn merged_with(&self, patch: FooterPatch) -> Self {
        Self {
            description: merge::text(patch.description, &self.description),
            copyright_text: merge::text(patch.copyright_text, &self.copyright_text),
            services: merge::opt_items(patch.services, &self.services),
            company: merge::opt_items(patch.company, &self.company),
        }
    }
}

impl ContentView for FooterContent {
    fn fallback(defaults: &DefaultContent) -> Self {
        defaults.footer.clone()
    }

    fn resolve(document: &ContentDocument, defaults: &DefaultContent) -> Self {
        resolve_record(
            document,
            Section::Footer,
            &defaults.footer,
            FooterContent::merged_with,
        )
    }
}

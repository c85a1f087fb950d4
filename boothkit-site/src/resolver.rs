//! Fetch-and-merge front door
//!
//! Ties the HTTP client to the merge semantics in `boothkit-common`:
//! fetch a document, lay it over the compiled defaults, hand back a
//! fully-populated view. Falls back to pure defaults when the API is
//! unreachable, so callers never branch on fetch success.

use boothkit_common::{defaults, ContentDocument, ContentView, DefaultContent, SiteContent};
use tracing::debug;

use crate::client::ContentClient;

/// Resolves content views against a content API.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    client: ContentClient,
    defaults: &'static DefaultContent,
}

impl ContentResolver {
    /// Resolver over the compiled defaults.
    pub fn new(client: ContentClient) -> Self {
        Self::with_defaults(client, defaults())
    }

    /// Resolver over a caller-supplied default set.
    pub fn with_defaults(client: ContentClient, defaults: &'static DefaultContent) -> Self {
        Self { client, defaults }
    }

    pub fn client(&self) -> &ContentClient {
        &self.client
    }

    pub fn defaults(&self) -> &'static DefaultContent {
        self.defaults
    }

    /// Fetch the current document, empty on any failure.
    pub async fn fetch(&self) -> ContentDocument {
        self.client.fetch_document().await
    }

    /// Fetch and resolve a single view.
    pub async fn resolve<V: ContentView>(&self) -> V {
        let document = self.fetch().await;
        self.resolve_in(&document)
    }

    /// Resolve a view against an already-fetched document.
    ///
    /// Use this to resolve several views from one fetch instead of
    /// hitting the API once per view.
    pub fn resolve_in<V: ContentView>(&self, document: &ContentDocument) -> V {
        V::resolve(document, self.defaults)
    }

    /// The view's compiled default, no fetch involved.
    pub fn fallback<V: ContentView>(&self) -> V {
        V::fallback(self.defaults)
    }

    /// Fetch once and resolve every section of the site.
    pub async fn site(&self) -> SiteContent {
        let document = self.fetch().await;
        debug!(sections = document.len(), "resolving full site content");
        self.resolve_in(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boothkit_common::model::HeroContent;
    use serde_json::json;

    fn resolver() -> ContentResolver {
        ContentResolver::new(ContentClient::new("http://127.0.0.1:1"))
    }

    #[test]
    fn test_fallback_matches_compiled_defaults() {
        let site: SiteContent = resolver().fallback();
        assert_eq!(site, SiteContent::fallback(defaults()));
        assert_eq!(site.hero.tagline, "Magic starts here");
    }

    #[test]
    fn test_resolve_in_merges_without_fetching() {
        let document =
            ContentDocument::from_value(json!({ "hero": { "tagline": "Fresh" } })).unwrap();
        let hero: HeroContent = resolver().resolve_in(&document);
        assert_eq!(hero.tagline, "Fresh");
        assert_eq!(hero.cta_text, defaults().hero.cta_text);
    }

    #[test]
    fn test_resolve_in_empty_document_is_fallback() {
        let document = ContentDocument::default();
        let site: SiteContent = resolver().resolve_in(&document);
        assert_eq!(site, resolver().fallback());
    }
}

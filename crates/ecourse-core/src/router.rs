//! Content Router: menu key to page
//!
//! The router is built once at startup. Every page is parsed and validated
//! up front, so `route` is a pure lookup afterwards.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::catalog::{self, PageSource};
use crate::content::Page;
use crate::error::{Error, Result};
use crate::menu::{self, MenuItem};

/// Immutable mapping from menu key to [`Page`]
#[derive(Debug, Clone)]
pub struct ContentRouter {
    pages: HashMap<String, Page>,
}

impl ContentRouter {
    /// Router over the pages compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_sources(catalog::embedded_sources())
    }

    /// Router over embedded pages, with overrides read from `content_dir`
    pub fn load(content_dir: &Path) -> Result<Self> {
        Self::from_sources(catalog::sources_with_overrides(content_dir)?)
    }

    /// Router over `content_dir` if given, embedded pages otherwise
    pub fn with_overrides(content_dir: Option<&Path>) -> Result<Self> {
        match content_dir {
            Some(dir) => Self::load(dir),
            None => Self::embedded(),
        }
    }

    /// Build from an explicit lookup table
    ///
    /// Fails with [`Error::CatalogMismatch`] unless the table covers exactly
    /// the menu keys.
    pub fn from_sources(sources: Vec<(String, PageSource)>) -> Result<Self> {
        let menu_keys: BTreeSet<&str> = menu::keys().collect();
        let source_keys: BTreeSet<&str> = sources.iter().map(|(key, _)| key.as_str()).collect();

        if source_keys.len() != sources.len() {
            return Err(Error::catalog_mismatch("duplicate page key in catalogue"));
        }

        let missing: Vec<_> = menu_keys.difference(&source_keys).copied().collect();
        if !missing.is_empty() {
            return Err(Error::catalog_mismatch(format!(
                "menu entries without a page: {}",
                missing.join(", ")
            )));
        }

        let orphans: Vec<_> = source_keys.difference(&menu_keys).copied().collect();
        if !orphans.is_empty() {
            return Err(Error::catalog_mismatch(format!(
                "pages without a menu entry: {}",
                orphans.join(", ")
            )));
        }

        let mut pages = HashMap::with_capacity(sources.len());
        for (key, source) in sources {
            let page = source.load(&key)?;
            tracing::debug!("Loaded page '{}' ({} blocks)", key, page.blocks.len());
            pages.insert(key, page);
        }

        tracing::info!("Content router ready with {} pages", pages.len());
        Ok(Self { pages })
    }

    /// Resolve a menu key to its page
    pub fn route(&self, key: &str) -> Result<&Page> {
        self.pages
            .get(key)
            .ok_or_else(|| Error::content_not_found(key))
    }

    /// Resolve a menu key, substituting the placeholder page when it is unknown
    pub fn route_or_fallback(&self, key: &str) -> Cow<'_, Page> {
        match self.route(key) {
            Ok(page) => Cow::Borrowed(page),
            Err(e) => {
                tracing::warn!("{}", e);
                Cow::Owned(Page::unavailable(key))
            }
        }
    }

    /// The navigation menu this router serves
    pub fn menu(&self) -> &'static [MenuItem] {
        menu::MENU
    }

    /// Menu keys in menu order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        menu::keys()
    }

    /// Keys that have a page, sorted
    pub fn page_keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.pages.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CalloutKind, ContentBlock};

    fn router() -> ContentRouter {
        ContentRouter::embedded().unwrap()
    }

    #[test]
    fn test_route_is_deterministic() {
        let router = router();
        for key in router.keys() {
            let first = router.route(key).unwrap();
            let second = router.route(key).unwrap();
            assert_eq!(first, second);
            assert!(std::ptr::eq(first, second));
        }
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let err = router().route("astrology").unwrap_err();
        assert!(matches!(err, Error::ContentNotFound { ref key } if key == "astrology"));
    }

    #[test]
    fn test_fallback_page_for_unknown_key() {
        let router = router();
        let page = router.route_or_fallback("astrology");
        assert!(matches!(page, Cow::Owned(_)));
        assert!(page.blocks.iter().any(|block| matches!(
            block,
            ContentBlock::Callout { kind: CalloutKind::Warning, text, .. }
                if text.contains("not available")
        )));
    }

    #[test]
    fn test_known_key_is_borrowed() {
        let router = router();
        assert!(matches!(router.route_or_fallback("home"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_page_keys_match_menu() {
        let router = router();
        let mut menu_keys: Vec<_> = router.keys().collect();
        menu_keys.sort_unstable();
        assert_eq!(router.page_keys(), menu_keys);
    }

    #[test]
    fn test_missing_page_is_catalog_mismatch() {
        let sources: Vec<_> = catalog::embedded_sources()
            .into_iter()
            .filter(|(key, _)| key != "wavelet")
            .collect();
        let err = ContentRouter::from_sources(sources).unwrap_err();
        assert!(matches!(err, Error::CatalogMismatch { .. }));
        assert!(err.to_string().contains("wavelet"));
    }

    #[test]
    fn test_orphan_page_is_catalog_mismatch() {
        let mut sources = catalog::embedded_sources();
        sources.push((
            "astrology".to_string(),
            PageSource::Embedded("title = \"x\"\n[[blocks]]\ntype = \"divider\"\n"),
        ));
        let err = ContentRouter::from_sources(sources).unwrap_err();
        assert!(err.to_string().contains("astrology"));
    }

    #[test]
    fn test_duplicate_key_is_catalog_mismatch() {
        let mut sources = catalog::embedded_sources();
        sources.push((
            "home".to_string(),
            PageSource::Embedded("title = \"x\"\n[[blocks]]\ntype = \"divider\"\n"),
        ));
        let err = ContentRouter::from_sources(sources).unwrap_err();
        assert!(matches!(err, Error::CatalogMismatch { .. }));
    }

    #[test]
    fn test_router_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ContentRouter>();
    }
}

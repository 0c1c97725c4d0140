//! Content catalogue: page documents keyed by menu key
//!
//! Pages ship inside the binary. An optional override directory can replace
//! individual pages with `<dir>/<key>.toml`.

use std::path::{Path, PathBuf};

use crate::content::Page;
use crate::error::{Error, Result, ResultExt};

/// Raw page document and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    Embedded(&'static str),
    File(PathBuf),
}

impl PageSource {
    /// Read and parse the document for `key`
    pub fn load(&self, key: &str) -> Result<Page> {
        match self {
            PageSource::Embedded(document) => Page::from_toml(key, document),
            PageSource::File(path) => {
                let document = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read page '{}' from {}", key, path.display()))?;
                Page::from_toml(key, &document)
            }
        }
    }
}

/// Page documents compiled into the binary, in menu order
pub const EMBEDDED: &[(&str, &str)] = &[
    ("home", include_str!("../content/home.toml")),
    ("unit-root", include_str!("../content/unit-root.toml")),
    ("cointegration", include_str!("../content/cointegration.toml")),
    ("fourier", include_str!("../content/fourier.toml")),
    ("causality", include_str!("../content/causality.toml")),
    ("nardl", include_str!("../content/nardl.toml")),
    ("wavelet", include_str!("../content/wavelet.toml")),
    ("quantile", include_str!("../content/quantile.toml")),
    ("garch", include_str!("../content/garch.toml")),
    ("hybrid", include_str!("../content/hybrid.toml")),
    ("overview", include_str!("../content/overview.toml")),
];

/// Lookup table of page sources using only embedded documents
pub fn embedded_sources() -> Vec<(String, PageSource)> {
    EMBEDDED
        .iter()
        .map(|(key, document)| (key.to_string(), PageSource::Embedded(document)))
        .collect()
}

/// Lookup table where files in `dir` replace embedded documents
///
/// Files whose stem does not match an embedded key are ignored with a
/// warning. Non-TOML files are skipped silently.
pub fn sources_with_overrides(dir: &Path) -> Result<Vec<(String, PageSource)>> {
    if !dir.is_dir() {
        return Err(Error::ContentDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut sources = embedded_sources();

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .context("Failed to list content directory")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    entries.sort();

    for path in entries {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match sources.iter_mut().find(|(key, _)| key == stem) {
            Some((key, source)) => {
                tracing::info!("Overriding page '{}' from {}", key, path.display());
                *source = PageSource::File(path.clone());
            }
            None => {
                tracing::warn!(
                    "Ignoring {}: no menu entry named '{}'",
                    path.display(),
                    stem
                );
            }
        }
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentBlock;
    use crate::{inline, menu};
    use tempfile::TempDir;

    #[test]
    fn test_embedded_table_follows_menu_order() {
        let keys: Vec<_> = EMBEDDED.iter().map(|(key, _)| *key).collect();
        let menu_keys: Vec<_> = menu::keys().collect();
        assert_eq!(keys, menu_keys);
    }

    #[test]
    fn test_every_embedded_document_parses() {
        for (key, source) in embedded_sources() {
            let page = source.load(&key).unwrap_or_else(|e| panic!("{key}: {e}"));
            assert_eq!(page.key, key);
            assert!(!page.blocks.is_empty());
        }
    }

    /// Text of `block` that goes through inline markup
    fn inline_texts(block: &ContentBlock) -> Vec<&str> {
        match block {
            ContentBlock::Heading { text, .. } | ContentBlock::Paragraph { text } => {
                vec![text.as_str()]
            }
            ContentBlock::List { title, items, .. } => {
                title.iter().chain(items).map(String::as_str).collect()
            }
            ContentBlock::Table {
                caption,
                headers,
                rows,
            } => caption
                .iter()
                .chain(headers)
                .chain(rows.iter().flatten())
                .map(String::as_str)
                .collect(),
            ContentBlock::Collapsible { title, .. } => vec![title.as_str()],
            ContentBlock::Callout { title, text, .. } => {
                title.iter().map(String::as_str).chain([text.as_str()]).collect()
            }
            ContentBlock::Math { .. } | ContentBlock::Columns { .. } | ContentBlock::Divider => {
                Vec::new()
            }
        }
    }

    fn letters_and_digits(text: &str) -> String {
        text.chars().filter(|c| c.is_alphanumeric()).collect()
    }

    #[test]
    fn test_inline_markup_keeps_all_words_in_every_page() {
        for (key, source) in embedded_sources() {
            let page = source.load(&key).unwrap();
            for block in page.walk() {
                for text in inline_texts(block) {
                    assert_eq!(
                        letters_and_digits(&inline::plain_text(text)),
                        letters_and_digits(text),
                        "{key}: text lost from {text:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_numbered_list_items_keep_their_numbers() {
        let (_, source) = embedded_sources()
            .into_iter()
            .find(|(key, _)| key == "nardl")
            .unwrap();
        let page = source.load("nardl").unwrap();
        let numbered: Vec<String> = page
            .walk()
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::List {
                    title: Some(title), ..
                } => Some(inline::plain_text(title)),
                _ => None,
            })
            .filter(|title| title.starts_with(|c: char| c.is_ascii_digit()))
            .collect();
        assert!(!numbered.is_empty());
        assert!(numbered.iter().any(|title| title.starts_with("1. ")));
    }

    #[test]
    fn test_override_replaces_single_page() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("garch.toml"),
            "title = \"Local GARCH\"\n[[blocks]]\ntype = \"paragraph\"\ntext = \"Local notes\"\n",
        )
        .unwrap();

        let sources = sources_with_overrides(dir.path()).unwrap();
        let overridden: Vec<_> = sources
            .iter()
            .filter(|(_, source)| matches!(source, PageSource::File(_)))
            .map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(overridden, vec!["garch"]);

        let (_, source) = sources.iter().find(|(key, _)| key == "garch").unwrap();
        assert_eq!(source.load("garch").unwrap().title, "Local GARCH");
    }

    #[test]
    fn test_unknown_override_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("astrology.toml"), "title = \"x\"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not content").unwrap();

        let sources = sources_with_overrides(dir.path()).unwrap();
        assert_eq!(sources.len(), EMBEDDED.len());
        assert!(sources
            .iter()
            .all(|(_, source)| matches!(source, PageSource::Embedded(_))));
    }

    #[test]
    fn test_missing_override_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = sources_with_overrides(&missing).unwrap_err();
        assert!(matches!(err, Error::ContentDirNotFound { .. }));
    }

    #[test]
    fn test_unreadable_override_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = PageSource::File(dir.path().join("gone.toml"))
            .load("garch")
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_broken_override_reports_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("home.toml");
        std::fs::write(&path, "title = [unterminated").unwrap();

        let err = PageSource::File(path).load("home").unwrap_err();
        assert!(matches!(err, Error::ContentParse { ref key, .. } if key == "home"));
    }
}

//! Shared fixtures for unit tests

use std::sync::Arc;

use ecourse_core::catalog::{embedded_sources, PageSource};
use ecourse_core::ContentRouter;

use crate::config::Settings;
use crate::state::AppState;

/// Home page replacement with nested sections:
/// 0 "Outer" (expanded) > 1 "Inner", then 2 "Second"
pub const NESTED_HOME: &str = r#"
title = "Nested"

[[blocks]]
type = "heading"
text = "Nested sections"

[[blocks]]
type = "collapsible"
title = "Outer"
expanded = true

[[blocks.blocks]]
type = "paragraph"
text = "outer body"

[[blocks.blocks]]
type = "collapsible"
title = "Inner"

[[blocks.blocks.blocks]]
type = "paragraph"
text = "inner body"

[[blocks]]
type = "collapsible"
title = "Second"

[[blocks.blocks]]
type = "paragraph"
text = "second body"
"#;

pub fn embedded_router() -> Arc<ContentRouter> {
    Arc::new(ContentRouter::embedded().unwrap())
}

/// Embedded pages with `home` replaced by [`NESTED_HOME`]
pub fn nested_router() -> Arc<ContentRouter> {
    let sources = embedded_sources()
        .into_iter()
        .map(|(key, source)| {
            if key == "home" {
                (key, PageSource::Embedded(NESTED_HOME))
            } else {
                (key, source)
            }
        })
        .collect();
    Arc::new(ContentRouter::from_sources(sources).unwrap())
}

/// State on the embedded home page
pub fn test_state() -> AppState {
    AppState::new(embedded_router(), Settings::default())
}

/// State on the nested home page
pub fn nested_state() -> AppState {
    AppState::new(nested_router(), Settings::default())
}

//! # ecourse-core - Core Domain Types
//!
//! Foundation crate for the econometrics course browser. Provides the menu,
//! the content model, the content catalogue and router, inline markup and
//! math conversion, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, thiserror, pulldown-cmark, tracing).
//!
//! ## Public API
//!
//! ### Menu (`menu`)
//! - [`MenuItem`] - One selectable entry (key, label, icon, ordinal)
//! - [`MENU`] - The fixed ordered list of course modules
//!
//! ### Content (`content`)
//! - [`Page`] - Ordered blocks shown for one menu selection
//! - [`ContentBlock`] - Heading, paragraph, list, table, math, collapsible, callout, columns
//!
//! ### Routing (`router`, `catalog`)
//! - [`ContentRouter`] - Resolves a menu key to its [`Page`]
//! - [`PageSource`] - Embedded document or override file
//!
//! ### Text (`inline`, `math`)
//! - [`inline::parse()`] - Split text into bold/italic/code runs
//! - [`math::to_unicode()`] - LaTeX to Unicode approximation
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ecourse_core::prelude::*;
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod inline;
pub mod logging;
pub mod math;
pub mod menu;
pub mod router;

/// Prelude for common imports used throughout all course browser crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::PageSource;
pub use content::{Badge, CalloutKind, Column, ContentBlock, Page};
pub use error::{Error, Result, ResultExt};
pub use inline::{InlineRun, InlineStyle};
pub use menu::{MenuItem, HOME_KEY, MENU};
pub use router::ContentRouter;

//! Headless mode - print the menu or a page to stdout
//!
//! Two formats are supported: JSON for scripts (pages keep their raw TeX and
//! markup), and plain text for reading or grepping (markup stripped, math
//! converted to Unicode, every section shown expanded).
//!
//! # Example Output
//!
//! ```json
//! {"key":"garch","label":"GARCH Models","found":true,"page":{"key":"garch","title":"...","blocks":[...]}}
//! ```

mod text;

use std::io::Write;

use clap::ValueEnum;
use ecourse_core::prelude::*;
use ecourse_core::{menu, ContentRouter, MenuItem, Page, MENU};
use serde::Serialize;

pub use text::page_to_text;

/// Output format for headless commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Page lookup result as printed in JSON mode
#[derive(Debug, Serialize)]
struct PageDocument<'a> {
    key: &'a str,
    label: Option<&'a str>,
    /// False when the fallback page was substituted
    found: bool,
    page: &'a Page,
}

/// Print the menu
pub fn print_menu(format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, MENU)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for item in MENU {
                writeln!(out, "{}", menu_line(item))?;
            }
        }
    }
    Ok(())
}

fn menu_line(item: &MenuItem) -> String {
    format!("{:>2}  {:<14} {}", item.ordinal, item.key, item.label)
}

/// Print the page routed for `key`
///
/// Returns `Ok(false)` when the key is unknown and the fallback page was
/// printed instead.
pub fn print_page(
    router: &ContentRouter,
    key: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let found = router.route(key).is_ok();
    let page = router.route_or_fallback(key);
    debug!("Headless page '{}' (found: {})", key, found);

    match format {
        OutputFormat::Json => {
            let document = PageDocument {
                key,
                label: menu::find(key).map(|item| item.label),
                found,
                page: &page,
            };
            serde_json::to_writer_pretty(&mut *out, &document)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            write!(out, "{}", page_to_text(&page))?;
        }
    }
    Ok(found)
}

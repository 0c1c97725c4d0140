//! Plain-text page rendering
//!
//! Sections are always expanded; there is no width limit and no wrapping.

use ecourse_core::{inline, math, Badge, CalloutKind, ContentBlock, Page};
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";

/// Render a page as plain text, one block per paragraph
pub fn page_to_text(page: &Page) -> String {
    let mut writer = TextWriter::default();
    for block in &page.blocks {
        writer.block(block);
    }
    let mut text = writer.lines.join("\n");
    text.truncate(text.trim_end().len());
    text.push('\n');
    text
}

#[derive(Default)]
struct TextWriter {
    lines: Vec<String>,
    depth: usize,
}

impl TextWriter {
    fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
        }
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|line| !line.is_empty()) {
            self.lines.push(String::new());
        }
    }

    fn block(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Heading { text, level, .. } => {
                self.blank();
                let text = inline::plain_text(text);
                let rule = match level {
                    1 => Some('='),
                    2 => Some('-'),
                    _ => None,
                };
                self.line(&text);
                if let Some(ch) = rule {
                    self.line(ch.to_string().repeat(text.width()));
                }
            }
            ContentBlock::Paragraph { text } => {
                self.line(inline::plain_text(text));
                self.blank();
            }
            ContentBlock::List {
                title,
                items,
                ordered,
            } => {
                if let Some(title) = title {
                    self.line(format!("{}:", inline::plain_text(title)));
                }
                for (index, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}.", index + 1)
                    } else {
                        "-".to_string()
                    };
                    self.line(format!("{} {}", marker, inline::plain_text(item)));
                }
                self.blank();
            }
            ContentBlock::Table {
                caption,
                headers,
                rows,
            } => {
                if let Some(caption) = caption {
                    self.line(inline::plain_text(caption));
                }
                self.table(headers, rows);
                self.blank();
            }
            ContentBlock::Math { tex } => {
                self.line(format!("{}{}", INDENT.repeat(2), math::to_unicode(tex)));
                self.blank();
            }
            ContentBlock::Collapsible {
                title,
                badges,
                blocks,
                ..
            } => {
                self.blank();
                let mut header = format!("> {}", inline::plain_text(title));
                for badge in badges {
                    header.push_str(match badge {
                        Badge::New => " [NEW]",
                        Badge::Hot => " [HOT]",
                    });
                }
                self.line(header);
                self.depth += 1;
                for child in blocks {
                    self.block(child);
                }
                self.depth -= 1;
                self.blank();
            }
            ContentBlock::Callout { kind, title, text } => {
                let label = callout_label(*kind);
                match title {
                    Some(title) => self.line(format!("| {}: {}", label, inline::plain_text(title))),
                    None => self.line(format!("| {}", label)),
                }
                self.line(format!("| {}", inline::plain_text(text)));
                self.blank();
            }
            ContentBlock::Columns { columns } => {
                for column in columns {
                    for child in &column.blocks {
                        self.block(child);
                    }
                    self.blank();
                }
            }
            ContentBlock::Divider => {
                self.blank();
                self.line("----");
                self.blank();
            }
        }
    }

    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        let plain_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| inline::plain_text(cell)).collect())
            .collect();
        let headers: Vec<String> = headers.iter().map(|h| inline::plain_text(h)).collect();

        let widths: Vec<usize> = (0..headers.len())
            .map(|col| {
                plain_rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .chain(std::iter::once(&headers[col]))
                    .map(|cell| cell.width())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let format_row = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width - cell.width())))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        self.line(format_row(&headers));
        self.line(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for row in &plain_rows {
            self.line(format_row(row));
        }
    }
}

fn callout_label(kind: CalloutKind) -> &'static str {
    match kind {
        CalloutKind::Info => "Info",
        CalloutKind::Success => "Success",
        CalloutKind::Warning => "Warning",
        CalloutKind::Highlight => "Note",
        CalloutKind::Card => "Card",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
title = "Sample"

[[blocks]]
type = "heading"
text = "GARCH Models"
level = 1

[[blocks]]
type = "paragraph"
text = "Volatility **clusters**."

[[blocks]]
type = "collapsible"
title = "Univariate"
badges = ["hot"]

[[blocks.blocks]]
type = "math"
tex = '\sigma_t^2 = \omega + \alpha \epsilon_{t-1}^2'

[[blocks.blocks]]
type = "list"
items = ["GARCH(1,1)", "`EGARCH`"]
ordered = true

[[blocks]]
type = "table"
headers = ["Model", "Use"]
rows = [["GJR", "Leverage"], ["EGARCH", "Asymmetry"]]

[[blocks]]
type = "callout"
kind = "highlight"
title = "Tip"
text = "Check *residuals*."
"#;

    fn sample_text() -> String {
        page_to_text(&Page::from_toml("sample", SAMPLE).unwrap())
    }

    #[test]
    fn test_heading_and_paragraph() {
        let text = sample_text();
        assert!(text.starts_with("GARCH Models\n============\nVolatility clusters.\n"));
    }

    #[test]
    fn test_collapsible_children_are_indented_and_expanded() {
        let text = sample_text();
        assert!(text.contains("> Univariate [HOT]\n"));
        assert!(text.contains("\n  1. GARCH(1,1)\n  2. EGARCH\n"));
        assert!(text.contains("    σₜ²"));
    }

    #[test]
    fn test_table_is_aligned() {
        let text = sample_text();
        assert!(text.contains("Model  | Use\n-------+----------\nGJR    | Leverage\nEGARCH | Asymmetry\n"));
    }

    #[test]
    fn test_callout_strips_markup() {
        let text = sample_text();
        assert!(text.contains("| Note: Tip\n| Check residuals.\n"));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_single_trailing_newline() {
        let text = sample_text();
        assert!(text.ends_with("residuals.\n"));
        assert!(!text.ends_with("\n\n"));
    }
}

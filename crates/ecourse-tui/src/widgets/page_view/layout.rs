//! Page layout: content blocks to wrapped, styled lines
//!
//! Layout depends on the width and on which sections are expanded, so it is
//! recomputed on every render. Section header positions are recorded so the
//! app layer can scroll a focused section into view.

use ecourse_core::{inline, math, CalloutKind, Column, ContentBlock, Page};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::wrap::{fit, wrap};
use crate::theme::icons::IconSet;
use crate::theme::styles;

/// Columns narrower than this are stacked instead of placed side by side
const MIN_COLUMN_WIDTH: usize = 24;

/// Gap between side-by-side columns
const COLUMN_GAP: usize = 2;

/// Extra indent for children of an expanded section
const SECTION_INDENT: usize = 2;

/// Indent for display math
const MATH_INDENT: usize = 4;

/// Narrowest wrapped last column before a table falls back to records
const MIN_WRAPPED_CELL: usize = 12;

/// Laid-out page
#[derive(Debug, Default)]
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    /// Header line of each section, `None` if hidden inside a collapsed one
    pub section_lines: Vec<Option<usize>>,
}

/// Lay out `page` at `width` columns
///
/// `expansion` holds the expand state of every section in `Page::sections`
/// order; `focused` is highlighted.
pub fn layout_page(
    page: &Page,
    expansion: &[bool],
    focused: Option<usize>,
    width: usize,
    icons: IconSet,
) -> PageLayout {
    let section_count = page.sections().len();
    let mut builder = Builder::new(width, expansion, focused, icons, section_count, 0);
    for block in &page.blocks {
        builder.block(block, 0);
    }
    builder.trim_trailing_blank();

    PageLayout {
        lines: builder.lines,
        section_lines: builder.section_lines,
    }
}

struct Builder<'a> {
    width: usize,
    expansion: &'a [bool],
    focused: Option<usize>,
    icons: IconSet,
    lines: Vec<Line<'static>>,
    section_lines: Vec<Option<usize>>,
    next_section: usize,
}

fn pad(indent: usize) -> Vec<Span<'static>> {
    if indent == 0 {
        Vec::new()
    } else {
        vec![Span::raw(" ".repeat(indent))]
    }
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|span| span.content.width()).sum()
}

/// Inline-markup text as styled segments over `base`
fn runs(text: &str, base: Style) -> Vec<(String, Style)> {
    inline::parse(text)
        .into_iter()
        .map(|run| (run.text, styles::inline(base, run.style)))
        .collect()
}

impl<'a> Builder<'a> {
    fn new(
        width: usize,
        expansion: &'a [bool],
        focused: Option<usize>,
        icons: IconSet,
        section_count: usize,
        next_section: usize,
    ) -> Self {
        Self {
            width,
            expansion,
            focused,
            icons,
            lines: Vec::new(),
            section_lines: vec![None; section_count],
            next_section,
        }
    }

    /// Separate from the previous block with one empty line
    fn blank(&mut self) {
        if self.lines.last().is_some_and(|line| line.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn trim_trailing_blank(&mut self) {
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
    }

    /// Wrap `segments` after a prefix; `first` on the first line, `rest` after
    fn push_wrapped(
        &mut self,
        first: Vec<Span<'static>>,
        rest: Vec<Span<'static>>,
        segments: &[(String, Style)],
    ) {
        let prefix_width = spans_width(&first).max(spans_width(&rest));
        let available = self.width.saturating_sub(prefix_width).max(1);

        for (i, spans) in wrap(segments, available).into_iter().enumerate() {
            let mut line = if i == 0 { first.clone() } else { rest.clone() };
            line.extend(spans);
            self.lines.push(Line::from(line));
        }
    }

    fn block(&mut self, block: &ContentBlock, indent: usize) {
        match block {
            ContentBlock::Heading { text, level, icon } => {
                self.heading(text, *level, icon.as_deref(), indent)
            }
            ContentBlock::Paragraph { text } => {
                self.push_wrapped(pad(indent), pad(indent), &runs(text, styles::text_primary()));
                self.blank();
            }
            ContentBlock::List {
                title,
                items,
                ordered,
            } => self.list(title.as_deref(), items, *ordered, indent),
            ContentBlock::Table {
                caption,
                headers,
                rows,
            } => self.table(caption.as_deref(), headers, rows, indent),
            ContentBlock::Math { tex } => {
                let text = math::to_unicode(tex);
                let prefix = pad(indent + MATH_INDENT);
                self.push_wrapped(prefix.clone(), prefix, &[(text, styles::math())]);
                self.blank();
            }
            ContentBlock::Collapsible { .. } => self.section(block, indent),
            ContentBlock::Callout { kind, title, text } => {
                self.callout(*kind, title.as_deref(), text, indent)
            }
            ContentBlock::Columns { columns } => self.columns(columns, indent),
            ContentBlock::Divider => {
                self.blank();
                let rule = "─".repeat(self.width.saturating_sub(indent));
                let mut spans = pad(indent);
                spans.push(Span::styled(rule, styles::text_muted()));
                self.lines.push(Line::from(spans));
                self.blank();
            }
        }
    }

    fn heading(&mut self, text: &str, level: u8, icon: Option<&str>, indent: usize) {
        self.blank();

        let title = match icon.and_then(|icon| self.icons.content(icon)) {
            Some(icon) => format!("{} {}", icon, text),
            None => text.to_string(),
        };
        let style = styles::heading(level);
        let title_width = title.width();
        self.push_wrapped(pad(indent), pad(indent), &[(title, style)]);

        let rule = match level {
            1 => Some("═"),
            2 => Some("─"),
            _ => None,
        };
        if let Some(rule) = rule {
            let rule_width = title_width.min(self.width.saturating_sub(indent));
            let mut spans = pad(indent);
            spans.push(Span::styled(rule.repeat(rule_width), style));
            self.lines.push(Line::from(spans));
        }
        self.blank();
    }

    fn list(&mut self, title: Option<&str>, items: &[String], ordered: bool, indent: usize) {
        if let Some(title) = title {
            let base = styles::text_primary().add_modifier(Modifier::BOLD);
            self.push_wrapped(pad(indent), pad(indent), &runs(title, base));
        }

        for (i, item) in items.iter().enumerate() {
            let marker = if ordered {
                format!("{}. ", i + 1)
            } else {
                format!("{} ", self.icons.bullet())
            };
            let marker_width = marker.width();

            let mut first = pad(indent);
            first.push(Span::styled(marker, styles::accent()));
            let rest = pad(indent + marker_width);
            self.push_wrapped(first, rest, &runs(item, styles::text_primary()));
        }
        self.blank();
    }

    fn table(
        &mut self,
        caption: Option<&str>,
        headers: &[String],
        rows: &[Vec<String>],
        indent: usize,
    ) {
        if let Some(caption) = caption {
            self.push_wrapped(pad(indent), pad(indent), &runs(caption, styles::accent_bold()));
        }

        let header_cells: Vec<String> = headers.iter().map(|h| inline::plain_text(h)).collect();
        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| inline::plain_text(cell)).collect())
            .collect();

        let columns = header_cells.len();
        if columns == 0 {
            return;
        }

        let mut widths: Vec<usize> = header_cells.iter().map(|h| h.width()).collect();
        for row in &body {
            for (i, cell) in row.iter().enumerate().take(columns) {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let available = self.width.saturating_sub(indent);
        let separators = 3 * (columns - 1);
        let total: usize = widths.iter().sum::<usize>() + separators;

        if total > available {
            let fixed: usize = widths[..columns - 1].iter().sum::<usize>() + separators;
            let last = available.saturating_sub(fixed);
            if columns < 2 || last < MIN_WRAPPED_CELL {
                self.table_records(&header_cells, &body, indent);
                return;
            }
            widths[columns - 1] = last;
        }

        // Header and rule
        let mut header = pad(indent);
        let mut rule = pad(indent);
        for (i, (cell, width)) in header_cells.iter().zip(&widths).enumerate() {
            if i > 0 {
                header.push(Span::styled(" │ ", styles::text_muted()));
                rule.push(Span::styled("─┼─", styles::text_muted()));
            }
            header.push(Span::styled(fit(cell, *width), styles::accent_bold()));
            rule.push(Span::styled("─".repeat(*width), styles::text_muted()));
        }
        self.lines.push(Line::from(header));
        self.lines.push(Line::from(rule));

        // Rows, wrapping only the last column
        let last_width = widths[columns - 1];
        for row in &body {
            let last_cell = row.get(columns - 1).map(String::as_str).unwrap_or("");
            let wrapped = wrap(&[(last_cell.to_string(), styles::text_primary())], last_width);

            for (line_index, last_spans) in wrapped.into_iter().enumerate() {
                let mut spans = pad(indent);
                for (i, width) in widths[..columns - 1].iter().enumerate() {
                    let text = if line_index == 0 {
                        row.get(i).map(String::as_str).unwrap_or("")
                    } else {
                        ""
                    };
                    spans.push(Span::styled(fit(text, *width), styles::text_primary()));
                    spans.push(Span::styled(" │ ", styles::text_muted()));
                }
                spans.extend(last_spans);
                self.lines.push(Line::from(spans));
            }
        }
        self.blank();
    }

    /// Narrow fallback: one `header: value` group per row
    fn table_records(&mut self, headers: &[String], body: &[Vec<String>], indent: usize) {
        for row in body {
            for (header, cell) in headers.iter().zip(row) {
                let mut first = pad(indent);
                first.push(Span::styled(format!("{}: ", header), styles::accent_bold()));
                let rest = pad(indent + SECTION_INDENT);
                self.push_wrapped(first, rest, &[(cell.clone(), styles::text_primary())]);
            }
            self.blank();
        }
    }

    fn section(&mut self, block: &ContentBlock, indent: usize) {
        let ContentBlock::Collapsible {
            title,
            icon,
            badges,
            blocks,
            ..
        } = block
        else {
            return;
        };

        let index = self.next_section;
        self.next_section += 1;
        let expanded = self.expansion.get(index).copied().unwrap_or(false);
        let focused = self.focused == Some(index);

        let mut header = String::from(if expanded {
            self.icons.expanded()
        } else {
            self.icons.collapsed()
        });
        header.push(' ');
        if let Some(icon) = icon.as_deref().and_then(|icon| self.icons.content(icon)) {
            header.push_str(icon);
            header.push(' ');
        }
        header.push_str(title);

        let mut segments = vec![(header, styles::section_title(focused))];
        for badge in badges {
            segments.push((
                format!(" {}", self.icons.badge(*badge)),
                styles::badge(*badge),
            ));
        }

        let line = self.lines.len();
        if let Some(slot) = self.section_lines.get_mut(index) {
            *slot = Some(line);
        }
        self.push_wrapped(pad(indent), pad(indent + SECTION_INDENT), &segments);

        if expanded {
            self.blank();
            for child in blocks {
                self.block(child, indent + SECTION_INDENT);
            }
            self.blank();
        } else {
            // Hidden descendants keep their indices but get no line
            self.next_section += block.nested_section_count();
        }
    }

    fn callout(&mut self, kind: CalloutKind, title: Option<&str>, text: &str, indent: usize) {
        let mut prefix = pad(indent);
        prefix.push(Span::styled(
            format!("{} ", self.icons.callout_bar()),
            styles::callout_bar(kind),
        ));

        if let Some(title) = title {
            let base = styles::text_primary().add_modifier(Modifier::BOLD);
            self.push_wrapped(prefix.clone(), prefix.clone(), &runs(title, base));
        }
        self.push_wrapped(prefix.clone(), prefix, &runs(text, styles::text_primary()));
        self.blank();
    }

    fn columns(&mut self, columns: &[Column], indent: usize) {
        let count = columns.len();
        let available = self.width.saturating_sub(indent);
        let column_width = available.saturating_sub(COLUMN_GAP * count.saturating_sub(1)) / count.max(1);

        if count < 2 || column_width < MIN_COLUMN_WIDTH {
            for column in columns {
                for block in &column.blocks {
                    self.block(block, indent);
                }
            }
            return;
        }

        self.blank();
        let base = self.lines.len();
        let mut rendered: Vec<Vec<Line<'static>>> = Vec::with_capacity(count);

        for column in columns {
            let mut child = Builder::new(
                column_width,
                self.expansion,
                self.focused,
                self.icons,
                self.section_lines.len(),
                self.next_section,
            );
            for block in &column.blocks {
                child.block(block, 0);
            }
            child.trim_trailing_blank();

            for (index, line) in child.section_lines.iter().enumerate() {
                if let Some(line) = line {
                    self.section_lines[index] = Some(base + line);
                }
            }
            self.next_section = child.next_section;
            rendered.push(child.lines);
        }

        let height = rendered.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..height {
            let mut spans = pad(indent);
            for (c, lines) in rendered.iter().enumerate() {
                if c > 0 {
                    spans.push(Span::raw(" ".repeat(COLUMN_GAP)));
                }
                let line = lines.get(row);
                let used = line.map(|line| line.width()).unwrap_or(0);
                if let Some(line) = line {
                    spans.extend(line.spans.iter().cloned());
                }
                if c + 1 < count {
                    spans.push(Span::raw(" ".repeat(column_width.saturating_sub(used))));
                }
            }
            self.lines.push(Line::from(spans));
        }
        self.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecourse_app::config::IconMode;

    const SAMPLE: &str = r#"
title = "Sample"

[[blocks]]
type = "heading"
text = "Stationarity"
level = 1
icon = "📈"

[[blocks]]
type = "paragraph"
text = "A **stationary** series has constant mean."

[[blocks]]
type = "collapsible"
title = "ADF Test"
badges = ["new"]

[[blocks.blocks]]
type = "math"
tex = '\Delta y_t = \alpha + \beta t'

[[blocks.blocks]]
type = "collapsible"
title = "Lag selection"

[[blocks.blocks.blocks]]
type = "paragraph"
text = "Use AIC."

[[blocks]]
type = "collapsible"
title = "KPSS Test"
expanded = true

[[blocks.blocks]]
type = "callout"
kind = "warning"
title = "Null"
text = "Stationarity."

[[blocks]]
type = "table"
headers = ["Test", "Null"]
rows = [["ADF", "Unit root"], ["KPSS", "Stationary"]]
"#;

    fn sample() -> Page {
        Page::from_toml("sample", SAMPLE).unwrap()
    }

    fn text_of(layout: &PageLayout) -> Vec<String> {
        layout
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    fn emoji() -> IconSet {
        IconSet::new(IconMode::Emoji)
    }

    #[test]
    fn test_all_lines_fit_width() {
        let page = sample();
        for width in [20, 40, 80] {
            let layout = layout_page(&page, &page.section_defaults(), None, width, emoji());
            for line in &layout.lines {
                assert!(line.width() <= width, "{:?} wider than {}", line, width);
            }
        }
    }

    #[test]
    fn test_collapsed_section_hides_children() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), None, 60, emoji());
        let text = text_of(&layout).join("\n");

        assert!(text.contains("▶ ADF Test 🆕 NEW"));
        assert!(!text.contains("Δ"));
        assert!(!text.contains("Lag selection"));
        assert!(text.contains("▼ KPSS Test"));
        assert!(text.contains("▌ Null"));
    }

    #[test]
    fn test_section_lines_track_headers() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), None, 60, emoji());
        let text = text_of(&layout);

        assert_eq!(layout.section_lines.len(), 3);
        let adf = layout.section_lines[0].unwrap();
        assert!(text[adf].contains("ADF Test"));
        // Nested inside a collapsed section
        assert_eq!(layout.section_lines[1], None);
        let kpss = layout.section_lines[2].unwrap();
        assert!(text[kpss].contains("KPSS Test"));
    }

    #[test]
    fn test_expanded_section_shows_math_and_nested_header() {
        let page = sample();
        let layout = layout_page(&page, &[true, false, true], None, 60, emoji());
        let text = text_of(&layout);

        let nested = layout.section_lines[1].unwrap();
        assert_eq!(text[nested], "  ▶ Lag selection");
        assert!(text.iter().any(|line| line.contains("Δyₜ = α + βt")));
    }

    #[test]
    fn test_focused_section_is_highlighted() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), Some(2), 60, emoji());
        let line = &layout.lines[layout.section_lines[2].unwrap()];
        assert_eq!(line.spans[0].style, styles::section_title(true));
    }

    #[test]
    fn test_heading_underline_and_icon() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), None, 60, emoji());
        let text = text_of(&layout);
        assert_eq!(text[0], "📈 Stationarity");
        assert_eq!(text[1], "═".repeat("📈 Stationarity".width()));
    }

    #[test]
    fn test_plain_icons_drop_emoji() {
        let page = sample();
        let layout = layout_page(
            &page,
            &page.section_defaults(),
            None,
            60,
            IconSet::new(IconMode::Plain),
        );
        let text = text_of(&layout).join("\n");
        assert!(text.starts_with("Stationarity"));
        assert!(text.contains("+ ADF Test [NEW]"));
        assert!(text.contains("- KPSS Test"));
    }

    #[test]
    fn test_table_aligned_when_wide() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), None, 60, emoji());
        let text = text_of(&layout);
        let header = text.iter().position(|l| l.starts_with("Test")).unwrap();
        assert_eq!(text[header], "Test │ Null      ");
        assert_eq!(text[header + 1], "─────┼───────────");
        assert_eq!(text[header + 2], "ADF  │ Unit root");
        assert_eq!(text[header + 3], "KPSS │ Stationary");
    }

    #[test]
    fn test_table_records_when_narrow() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), None, 16, emoji());
        let text = text_of(&layout);
        assert!(text.iter().any(|l| l == "Test: ADF"));
        assert!(text.iter().any(|l| l == "Null: Unit root"));
        assert!(text.iter().any(|l| l == "Test: KPSS"));
        assert!(!text.iter().any(|l| l.contains('│')));
    }

    #[test]
    fn test_paragraph_styles_bold_run() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), None, 80, emoji());
        let line = layout
            .lines
            .iter()
            .find(|line| line.spans.iter().any(|s| s.content == "stationary"))
            .unwrap();
        let bold = line.spans.iter().find(|s| s.content == "stationary").unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_no_trailing_blank_lines() {
        let page = sample();
        let layout = layout_page(&page, &page.section_defaults(), None, 60, emoji());
        assert!(layout.lines.last().unwrap().width() > 0);
    }

    #[test]
    fn test_columns_side_by_side_when_wide() {
        let page = Page::from_toml(
            "cols",
            r#"
title = "Columns"

[[blocks]]
type = "columns"

[[blocks.columns]]
[[blocks.columns.blocks]]
type = "list"
title = "R Packages"
items = ["rugarch"]

[[blocks.columns]]
[[blocks.columns.blocks]]
type = "list"
title = "Python"
items = ["arch"]
"#,
        )
        .unwrap();

        let wide = text_of(&layout_page(&page, &[], None, 60, emoji()));
        assert_eq!(wide[0], format!("{}  Python", fit("R Packages", 29)));
        assert_eq!(wide[1], format!("{}  • arch", fit("• rugarch", 29)));

        let narrow = text_of(&layout_page(&page, &[], None, 30, emoji()));
        assert_eq!(narrow[0], "R Packages");
        assert_eq!(narrow[1], "• rugarch");
        assert_eq!(narrow[3], "Python");
    }
}

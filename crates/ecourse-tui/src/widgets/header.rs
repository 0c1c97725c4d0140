//! Header bar widget
//!
//! Course title, current module, and the global key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

pub const COURSE_TITLE: &str = "Advanced Econometrics Course";

/// Main header showing the course title and the open module
pub struct MainHeader<'a> {
    module: &'a str,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(module: &'a str, icons: IconSet) -> Self {
        Self { module, icons }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left_spans = vec![Span::raw(" ")];
        let title_icon = self.icons.title();
        if !title_icon.is_empty() {
            left_spans.push(Span::raw(title_icon));
            left_spans.push(Span::raw(" "));
        }
        left_spans.extend([
            Span::styled(COURSE_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.module, styles::text_secondary()),
        ]);
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        let shortcuts = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("?", styles::keybinding()),
            Span::styled("] Help  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled("] Quit ", styles::text_muted()),
        ]);
        let shortcuts_width = shortcuts.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align shortcuts when they fit beside the title
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}

//! Page view widget - scrollable rendering of one course page

mod layout;
mod wrap;


pub use layout::{layout_page, PageLayout};

use ecourse_app::PageViewState;
use ecourse_core::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::theme::{icons::IconSet, palette, styles};

/// Renders a [`Page`] inside a bordered pane
pub struct PageView<'a> {
    page: &'a Page,
    expansion: &'a [bool],
    focused: bool,
    icons: IconSet,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page, expansion: &'a [bool], icons: IconSet) -> Self {
        Self {
            page,
            expansion,
            focused: false,
            icons,
        }
    }

    /// Accent the border when the page pane has focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl StatefulWidget for PageView<'_> {
    type State = PageViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.page.title.clone(), styles::accent_bold()),
            Span::raw(" "),
        ]);
        let block = styles::glass_block(self.focused)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        // One column of padding on the left, one kept clear for the scrollbar
        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let layout = layout_page(
            self.page,
            self.expansion,
            state.focused_section,
            content.width as usize,
            self.icons,
        );
        let total_lines = layout.lines.len();
        let visible_lines = content.height as usize;
        state.update_layout(total_lines, visible_lines, layout.section_lines);

        let lines: Vec<Line> = layout
            .lines
            .into_iter()
            .skip(state.offset)
            .take(visible_lines)
            .collect();
        Paragraph::new(lines).render(content, buf);

        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");

            let mut scrollbar_state = ScrollbarState::new(state.max_offset()).position(state.offset);

            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}

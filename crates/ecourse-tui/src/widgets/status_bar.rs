//! Status bar widget
//!
//! Focused pane, open module, scroll position, and key hints for the pane.

use ecourse_app::{AppState, Focus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Status bar widget showing where the user is
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focus_indicator(&self) -> Span<'static> {
        let label = self.state.focus.label();
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(palette::CONTRAST_FG)
                .bg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    }

    /// Visible line range, e.g. `1-20/143`
    fn position(&self) -> String {
        let view = &self.state.page_view;
        if view.total_lines == 0 {
            "0/0".to_string()
        } else {
            let end = (view.offset + view.visible_lines).min(view.total_lines);
            format!("{}-{}/{}", view.offset + 1, end, view.total_lines)
        }
    }

    fn section_position(&self) -> Option<String> {
        let count = self.state.page_view.section_lines.len();
        if count == 0 {
            return None;
        }
        Some(match self.state.page_view.focused_section {
            Some(index) => format!("§ {}/{}", index + 1, count),
            None => format!("§ -/{}", count),
        })
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.focus {
            Focus::Sidebar => vec![("↑↓", "Select"), ("Enter", "Open"), ("Tab", "Page")],
            Focus::Page => vec![
                ("↑↓", "Scroll"),
                ("n/p", "Section"),
                ("Enter", "Toggle"),
                ("e/c", "All"),
                ("Tab", "Menu"),
            ],
        }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", styles::text_muted());

        let mut segments = vec![
            self.focus_indicator(),
            Span::raw(" "),
            Span::styled(self.state.selected_item().label, styles::text_secondary()),
            separator.clone(),
            Span::styled(self.position(), styles::text_muted()),
        ];

        if let Some(sections) = self.section_position() {
            segments.push(separator.clone());
            segments.push(Span::styled(sections, styles::text_muted()));
        }

        segments.push(separator);
        for (index, (key, action)) in self.hints().into_iter().enumerate() {
            if index > 0 {
                segments.push(Span::raw("  "));
            }
            segments.push(Span::styled(key, styles::keybinding()));
            segments.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.build_segments());
        Paragraph::new(line)
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

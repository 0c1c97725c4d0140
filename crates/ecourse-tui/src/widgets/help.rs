//! Key binding overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

/// (heading, [(keys, action)])
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab / Shift-Tab", "Switch between menu and page"),
            ("← / →", "Focus menu / page"),
            ("1-9, 0", "Open module 1-9, 10"),
            ("n / p", "Next / previous section"),
            ("e / c", "Expand / collapse all sections"),
            ("?", "Toggle this help"),
            ("q / Esc", "Quit"),
        ],
    ),
    (
        "Menu",
        &[
            ("↑↓ / j k", "Move selection"),
            ("g / G", "First / last module"),
            ("Enter / Space", "Read the selected module"),
        ],
    ),
    (
        "Page",
        &[
            ("↑↓ / j k", "Scroll one line"),
            ("PgUp / PgDn", "Scroll one screen"),
            ("g / G", "Top / bottom"),
            ("Enter / Space", "Expand or collapse section"),
        ],
    ),
];

const KEY_COLUMN: usize = 16;
const WIDTH: u16 = 58;

/// Centered overlay listing every key binding
pub struct HelpOverlay;

impl HelpOverlay {
    fn lines() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (index, (heading, bindings)) in BINDINGS.iter().enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*heading, styles::accent_bold())));
            for (keys, action) in bindings.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<width$}", keys, width = KEY_COLUMN), styles::keybinding()),
                    Span::styled(*action, styles::text_primary()),
                ]));
            }
        }
        lines
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = Self::lines();
        let height = lines.len() as u16 + 2;
        let rect = modal_overlay::centered_rect(WIDTH, height, area);

        modal_overlay::dim_background(buf, area);
        Clear.render(rect, buf);
        modal_overlay::render_shadow(buf, rect);

        let block = styles::modal_block(" Key Bindings ");
        let inner = block.inner(rect);
        block.render(rect, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

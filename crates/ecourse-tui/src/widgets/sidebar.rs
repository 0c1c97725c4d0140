//! Sidebar widget - the module menu

use ecourse_core::{MenuItem, MENU};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

const FOOTER_TITLE: &str = "Advanced Econometric Methods";
const FOOTER_SUBTITLE: &str = "Comprehensive Training Program";
const FOOTER_CONTACT: &str = "Contact for more information";

/// Rows taken by the footer, including the blank separator
const FOOTER_HEIGHT: u16 = 4;

/// Digit that selects the item at `index`, if any
fn shortcut(index: usize) -> Option<char> {
    match index {
        1..=9 => char::from_digit(index as u32, 10),
        10 => Some('0'),
        _ => None,
    }
}

/// Module menu with the current selection highlighted
pub struct Sidebar<'a> {
    items: &'a [MenuItem],
    selected: usize,
    focused: bool,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(selected: usize, icons: IconSet) -> Self {
        Self {
            items: MENU,
            selected,
            focused: false,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn item_line(&self, index: usize, item: &MenuItem) -> Line<'static> {
        let selected = index == self.selected;
        let label_style = match (selected, self.focused) {
            (true, true) => styles::focused_selected(),
            (true, false) => styles::selected_highlight(),
            (false, _) => styles::text_primary(),
        };
        let key_style = if selected && self.focused {
            label_style
        } else {
            styles::keybinding()
        };

        let mut spans = vec![Span::styled(
            match shortcut(index) {
                Some(digit) => format!(" {} ", digit),
                None => "   ".to_string(),
            },
            key_style,
        )];
        if let Some(icon) = self.icons.content(item.icon) {
            spans.push(Span::styled(format!("{} ", icon), label_style));
        }
        spans.push(Span::styled(item.label, label_style));
        Line::from(spans)
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let contact_icon = self.icons.contact();
        let lines = [
            Line::from(Span::styled(FOOTER_TITLE, styles::accent_bold())),
            Line::from(Span::styled(FOOTER_SUBTITLE, styles::text_secondary())),
            Line::from(vec![
                Span::raw(contact_icon),
                Span::raw(if contact_icon.is_empty() { "" } else { " " }),
                Span::styled(FOOTER_CONTACT, styles::text_muted()),
            ]),
        ];
        let top = area.y + area.height - lines.len() as u16;
        for (row, line) in lines.iter().enumerate() {
            buf.set_line(area.x + 1, top + row as u16, line, area.width.saturating_sub(1));
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let nav_icon = self.icons.navigation();
        let title = if nav_icon.is_empty() {
            " Course Navigation ".to_string()
        } else {
            format!(" {} Course Navigation ", nav_icon)
        };
        let block = styles::glass_block(self.focused)
            .title(Span::styled(title, styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let item_count = self.items.len() as u16;
        let show_footer = inner.height >= item_count + FOOTER_HEIGHT;
        let list_height = if show_footer {
            inner.height - FOOTER_HEIGHT
        } else {
            inner.height
        } as usize;

        // Keep the selection on screen
        let first = (self.selected + 1).saturating_sub(list_height);

        for (row, (index, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(first)
            .take(list_height)
            .enumerate()
        {
            let y = inner.y + row as u16;
            if index == self.selected && self.focused {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), styles::focused_selected());
            }
            buf.set_line(inner.x, y, &self.item_line(index, item), inner.width);
        }

        if show_footer {
            self.render_footer(inner, buf);
        }
    }
}

//! Semantic style builders.

use ecourse_core::{Badge, CalloutKind, InlineStyle};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection ---

/// Selected item in an unfocused list
pub fn selected_highlight() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - focused+selected items
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Content styles ---

pub fn heading(level: u8) -> Style {
    match level {
        1 => Style::default()
            .fg(palette::HEADING)
            .add_modifier(Modifier::BOLD),
        2 => accent_bold(),
        _ => Style::default()
            .fg(palette::TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD),
    }
}

/// Style for a run of inline text on top of `base`
pub fn inline(base: Style, style: InlineStyle) -> Style {
    let mut out = base;
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.code {
        out = out.fg(palette::CODE);
    }
    out
}

pub fn math() -> Style {
    Style::default()
        .fg(palette::MATH)
        .add_modifier(Modifier::ITALIC)
}

pub fn section_title(focused: bool) -> Style {
    if focused {
        focused_selected()
    } else {
        Style::default()
            .fg(palette::TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD)
    }
}

pub fn callout_bar(kind: CalloutKind) -> Style {
    let color = match kind {
        CalloutKind::Info => palette::STATUS_BLUE,
        CalloutKind::Success => palette::STATUS_GREEN,
        CalloutKind::Warning => palette::STATUS_YELLOW,
        CalloutKind::Highlight => palette::STATUS_INDIGO,
        CalloutKind::Card => palette::HEADING,
    };
    Style::default().fg(color)
}

pub fn badge(badge: Badge) -> Style {
    let color = match badge {
        Badge::New => palette::BADGE_NEW,
        Badge::Hot => palette::BADGE_HOT,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// --- Block builders ---

/// Rounded bordered container, accented when focused
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_style_modifiers() {
        let style = inline(
            text_primary(),
            InlineStyle {
                bold: true,
                italic: true,
                code: false,
            },
        );
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(style.fg, Some(palette::TEXT_PRIMARY));
    }

    #[test]
    fn test_inline_code_changes_color() {
        let style = inline(
            text_primary(),
            InlineStyle {
                code: true,
                ..InlineStyle::PLAIN
            },
        );
        assert_eq!(style.fg, Some(palette::CODE));
    }

    #[test]
    fn test_callout_colors_differ_by_kind() {
        assert_ne!(
            callout_bar(CalloutKind::Info).fg,
            callout_bar(CalloutKind::Warning).fg
        );
    }

    #[test]
    fn test_focused_section_title_is_highlighted() {
        assert_eq!(section_title(true).bg, Some(palette::ACCENT));
        assert_eq!(section_title(false).bg, None);
    }
}

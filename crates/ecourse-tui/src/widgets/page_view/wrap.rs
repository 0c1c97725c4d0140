//! Word wrapping for styled text

use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Styled fragment of one word
type Piece = (String, Style);

/// Split styled segments into words
///
/// Whitespace separates words; a style change inside a word does not.
fn words(segments: &[(String, Style)]) -> Vec<Vec<Piece>> {
    let mut words = Vec::new();
    let mut current: Vec<Piece> = Vec::new();

    for (text, style) in segments {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                continue;
            }
            push_char(&mut current, ch, *style);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn push_char(pieces: &mut Vec<Piece>, ch: char, style: Style) {
    match pieces.last_mut() {
        Some((text, last)) if *last == style => text.push(ch),
        _ => pieces.push((ch.to_string(), style)),
    }
}

fn word_width(word: &[Piece]) -> usize {
    word.iter().map(|(text, _)| text.width()).sum()
}

/// Break a word wider than `width` into chunks that fit
fn split_word(word: Vec<Piece>, width: usize) -> Vec<Vec<Piece>> {
    let mut chunks = Vec::new();
    let mut chunk: Vec<Piece> = Vec::new();
    let mut used = 0;

    for (text, style) in word {
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used > 0 && used + w > width {
                chunks.push(std::mem::take(&mut chunk));
                used = 0;
            }
            push_char(&mut chunk, ch, style);
            used += w;
        }
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Greedy word wrap into lines at most `width` columns wide
///
/// Whitespace runs collapse to a single space. Always returns at least one
/// (possibly empty) line.
pub fn wrap(segments: &[(String, Style)], width: usize) -> Vec<Vec<Span<'static>>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<Span<'static>>> = Vec::new();
    let mut line: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for word in words(segments) {
        let pieces = if word_width(&word) > width {
            split_word(word, width)
        } else {
            vec![word]
        };

        for piece in pieces {
            let w = word_width(&piece);
            if used > 0 && used + 1 + w > width {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            if used > 0 {
                line.push(Span::raw(" "));
                used += 1;
            }
            line.extend(
                piece
                    .into_iter()
                    .map(|(text, style)| Span::styled(text, style)),
            );
            used += w;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pad with spaces or truncate with `…` to exactly `width` columns
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

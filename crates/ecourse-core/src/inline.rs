//! Inline markup for paragraph and list text
//!
//! Supports `**bold**`, `*italic*` and `` `code` ``. Anything else degrades
//! to its plain text. Text is always one inline run: a leading `1.`, `-`,
//! `#` or `>` is kept as written, never read as a list, heading or quote.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

/// Emphasis applied to a run of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl InlineStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        code: false,
    };
}

/// Contiguous text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineRun {
    pub text: String,
    pub style: InlineStyle,
}

impl InlineRun {
    pub fn new(text: impl Into<String>, style: InlineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineStyle::PLAIN)
    }
}

/// Split `text` into styled runs
///
/// Adjacent runs with the same style are merged. Line breaks and
/// indentation collapse into single spaces.
pub fn parse(text: &str) -> Vec<InlineRun> {
    let mut runs: Vec<InlineRun> = Vec::new();
    let mut bold = 0usize;
    let mut italic = 0usize;
    let mut seen_block = false;
    let source = inline_source(text);

    for event in Parser::new(&source) {
        let style = InlineStyle {
            bold: bold > 0,
            italic: italic > 0,
            code: false,
        };
        match event {
            Event::Start(Tag::Strong) => bold += 1,
            Event::End(TagEnd::Strong) => bold = bold.saturating_sub(1),
            Event::Start(Tag::Emphasis) => italic += 1,
            Event::End(TagEnd::Emphasis) => italic = italic.saturating_sub(1),
            Event::Start(Tag::Paragraph | Tag::Item | Tag::Heading { .. }) => {
                if seen_block {
                    push(&mut runs, " ", style);
                }
                seen_block = true;
            }
            Event::Code(code) => push(&mut runs, &code, InlineStyle { code: true, ..style }),
            Event::Text(t) | Event::Html(t) | Event::InlineHtml(t) => push(&mut runs, &t, style),
            Event::SoftBreak | Event::HardBreak => push(&mut runs, " ", style),
            _ => {}
        }
    }

    runs
}

/// Join `text` into one line and escape a leading block marker
fn inline_source(text: &str) -> String {
    let line = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    match block_marker_at(&line) {
        Some(at) => format!("{}\\{}", &line[..at], &line[at..]),
        None => line,
    }
}

/// Byte offset of the punctuation that would open a block, if any
fn block_marker_at(line: &str) -> Option<usize> {
    let first = line.chars().next()?;
    let rest = &line[first.len_utf8()..];
    let spaced = rest.is_empty() || rest.starts_with(char::is_whitespace);

    match first {
        '#' | '>' | '+' | '-' | '=' | '~' | '|' => Some(0),
        // `* item` or a `***` rule; `**bold**` stays emphasis
        '*' | '_' if spaced || is_rule(line, first) => Some(0),
        '`' if line.starts_with("```") => Some(0),
        '[' if line.contains("]:") => Some(0),
        '0'..='9' => {
            let digits = line.chars().take_while(char::is_ascii_digit).count();
            let after = &line[digits..];
            let delimited = [".", ")"].iter().any(|delim| {
                after
                    .strip_prefix(delim)
                    .is_some_and(|tail| tail.is_empty() || tail.starts_with(char::is_whitespace))
            });
            (digits <= 9 && delimited).then_some(digits)
        }
        _ => None,
    }
}

fn is_rule(line: &str, marker: char) -> bool {
    line.chars().all(|c| c == marker || c.is_whitespace())
        && line.chars().filter(|&c| c == marker).count() >= 3
}

fn push(runs: &mut Vec<InlineRun>, text: &str, style: InlineStyle) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => runs.push(InlineRun::new(text, style)),
    }
}

/// Text of `text` with all markup removed
pub fn plain_text(text: &str) -> String {
    parse(text).into_iter().map(|run| run.text).collect()
}

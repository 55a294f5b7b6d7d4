//! Terminal text attributes as SGR escape sequences

use termimad::crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

/// A display attribute applied to a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Dim,
    CrossedOut,
    White,
    Yellow,
    LightYellow,
    Blue,
}

impl Style {
    fn open(self) -> String {
        match self {
            Style::Bold => SetAttribute(Attribute::Bold).to_string(),
            Style::Italic => SetAttribute(Attribute::Italic).to_string(),
            Style::Underline => SetAttribute(Attribute::Underlined).to_string(),
            Style::Dim => SetAttribute(Attribute::Dim).to_string(),
            Style::CrossedOut => SetAttribute(Attribute::CrossedOut).to_string(),
            Style::White => SetForegroundColor(Color::White).to_string(),
            Style::Yellow => SetForegroundColor(Color::DarkYellow).to_string(),
            Style::LightYellow => SetForegroundColor(Color::Yellow).to_string(),
            Style::Blue => SetForegroundColor(Color::DarkBlue).to_string(),
        }
    }

    fn close(self) -> String {
        match self {
            // Bold and dim share the same reset
            Style::Bold | Style::Dim => SetAttribute(Attribute::NormalIntensity).to_string(),
            Style::Italic => SetAttribute(Attribute::NoItalic).to_string(),
            Style::Underline => SetAttribute(Attribute::NoUnderline).to_string(),
            Style::CrossedOut => SetAttribute(Attribute::NotCrossedOut).to_string(),
            Style::White | Style::Yellow | Style::LightYellow | Style::Blue => {
                SetForegroundColor(Color::Reset).to_string()
            }
        }
    }
}

/// Wrap `text` in the open/close sequences of each style, innermost first.
///
/// Calls nest: wherever an inner run closes an attribute that an outer call
/// also sets, the outer attribute is re-opened, so
/// `style(&format!("a {} b", style("x", &[Style::Yellow])), &[Style::Blue])`
/// keeps "b" blue.
pub fn style(text: &str, styles: &[Style]) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = text.to_string();
    for attr in styles {
        let (open, close) = (attr.open(), attr.close());
        let body = out.replace(&close, &format!("{close}{open}"));
        out = format!("{open}{body}{close}");
    }
    out
}

/// Remove CSI escape sequences (`ESC [ ... final`)
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Terminal columns occupied by `s`, ignoring escape sequences
pub fn visible_width(s: &str) -> usize {
    if !s.contains('\x1b') {
        return UnicodeWidthStr::width(s);
    }
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

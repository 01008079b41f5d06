//! Filename sanitization helpers.

const INVALID_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '\r', '\n', '\t'];

/// Full-width solidus, a slash look-alike that is legal in file names.
pub const FULL_WIDTH_SLASH: char = '\u{FF0F}';

/// Make a string safe to use as (part of) a file name.
///
/// Illegal characters become spaces, whitespace runs collapse to one space
/// and the ends are trimmed. Idempotent.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// How `/` in an invoice reference is rendered in a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlashStyle {
    /// `INV／2025／09／0654`
    #[default]
    FullWidth,
    /// `INV-2025-09-0654`
    Hyphen,
}

impl SlashStyle {
    /// Replace every `/` in `value` according to this style.
    pub fn substitute(self, value: &str) -> String {
        match self {
            SlashStyle::FullWidth => value.replace('/', &FULL_WIDTH_SLASH.to_string()),
            SlashStyle::Hyphen => value.replace('/', "-"),
        }
    }
}

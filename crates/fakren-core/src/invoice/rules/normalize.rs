//! Normalization of raw text-layer output before pattern matching.

use super::patterns::{SPACED_SLASH, WHITESPACE_RUN};

/// Collapse whitespace runs to one space and glue slashes to their neighbours.
///
/// `"INV / 2025 /\n09 / 0654"` becomes `"INV/2025/09/0654"`.
pub fn normalize_text(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    SPACED_SLASH.replace_all(&collapsed, "/").into_owned()
}

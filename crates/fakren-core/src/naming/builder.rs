//! Composition of `"{reference} - {serial}.pdf"` file names.

use super::sanitize::{sanitize, SlashStyle};

/// Extension appended to every composed name.
pub const PDF_EXTENSION: &str = ".pdf";

/// Longest base name in bytes. Leaves room for the extension and a
/// collision suffix under the 255-byte file-name limit.
pub const MAX_BASE_BYTES: usize = 240;

const SEPARATOR: &str = " - ";

/// Compose a file name from an invoice reference and serial number.
///
/// Returns `None` unless both fields are present and non-empty after
/// sanitization; a partial name is never produced.
pub fn build_name(reference: Option<&str>, serial: Option<&str>, style: SlashStyle) -> Option<String> {
    let reference = sanitize(&style.substitute(reference?));
    let serial = sanitize(serial?);
    if reference.is_empty() || serial.is_empty() {
        return None;
    }

    // Shorten the reference first so the serial survives, but keep at least
    // half the budget for it.
    let budget = MAX_BASE_BYTES
        .saturating_sub(SEPARATOR.len() + serial.len())
        .max(MAX_BASE_BYTES / 2);
    let reference = truncate_bytes(&reference, budget).trim_end();

    let base = sanitize(&format!("{reference}{SEPARATOR}{serial}"));
    let base = truncate_bytes(&base, MAX_BASE_BYTES).trim_end();
    if base.is_empty() {
        return None;
    }
    Some(format!("{base}{PDF_EXTENSION}"))
}

/// Longest prefix of `s` that fits in `max` bytes, cut on a char boundary.
fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let end = (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    &s[..end]
}

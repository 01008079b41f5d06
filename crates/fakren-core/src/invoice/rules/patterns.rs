//! Common regex patterns for tax invoice extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whitespace runs and slashes with surrounding whitespace
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    pub static ref SPACED_SLASH: Regex = Regex::new(r"\s*/\s*").unwrap();

    // Strict invoice reference: INV/YYYY/MM/NNNN
    pub static ref INVOICE_STRICT: Regex = Regex::new(
        r"(?i)\bINV/\d{4}/\d{2}/\d{4}\b"
    ).unwrap();

    // "(Referensi: ...)" up to the closing paren, line break or end
    pub static ref REFERENCE_LABEL: Regex = Regex::new(
        r"(?i)\(?\s*Referensi\s*:?\s*(?P<ref>[^)\r\n]+)"
    ).unwrap();

    // Tax invoice serial after its label (digits, dots, dashes, spaces)
    pub static ref SERIAL_LABEL: Regex = Regex::new(
        r"(?i)Kode\s+dan\s+Nomor\s+Seri\s+Faktur\s+Pajak\s*:\s*(?P<seri>[\d.\-\s]+)"
    ).unwrap();

    // Anything that is not a digit, dot or dash
    pub static ref SERIAL_NOISE: Regex = Regex::new(r"[^\d.\-]").unwrap();
}

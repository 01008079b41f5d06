//! Tax invoice serial number ("Nomor Seri Faktur Pajak") extraction.

use super::patterns::{SERIAL_LABEL, SERIAL_NOISE};
use super::{ExtractionMatch, FieldExtractor};
use crate::naming::sanitize;

/// Serial number extractor.
///
/// Reads the run of digits, dots, dashes and spaces after the label and
/// keeps only the digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialExtractor;

impl FieldExtractor for SerialExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = SERIAL_LABEL.captures(text)?;
        let raw = caps.name("seri")?;

        let digits = clean_serial(raw.as_str());
        if digits.is_empty() {
            return None;
        }

        let full = caps.get(0)?;
        Some(ExtractionMatch::new(digits, full.as_str()).with_position(full.start(), full.end()))
    }
}

/// Reduce a captured serial to digits only.
///
/// Dots and dashes only delimit groups; they are dropped along with
/// everything else that is not a digit.
pub fn clean_serial(raw: &str) -> String {
    let kept = SERIAL_NOISE.replace_all(raw, "");
    let digits: String = kept.chars().filter(|c| *c != '.' && *c != '-').collect();
    sanitize(&digits)
}

/// Extract the serial number from normalized text.
pub fn extract_serial(text: &str) -> Option<String> {
    SerialExtractor.extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_serial() {
        assert_eq!(clean_serial("123.456-789"), "123456789");
        assert_eq!(clean_serial(" 010.000-25.00000001 "), "0100002500000001");
        assert_eq!(clean_serial(" - . "), "");
    }

    #[test]
    fn test_extract_serial_labeled() {
        let text = "Faktur Pajak Kode dan Nomor Seri Faktur Pajak: 123.456-789 Nama: PT Maju";
        assert_eq!(extract_serial(text), Some("123456789".to_string()));
    }

    #[test]
    fn test_extract_serial_case_insensitive() {
        let text = "KODE DAN NOMOR SERI FAKTUR PAJAK : 040.002-24.12345678";
        assert_eq!(extract_serial(text), Some("0400022412345678".to_string()));
    }

    #[test]
    fn test_space_separated_groups_are_joined() {
        let text = "Kode dan Nomor Seri Faktur Pajak: 123 456";
        assert_eq!(extract_serial(text), Some("123456".to_string()));
    }

    #[test]
    fn test_label_without_digits_is_absent() {
        assert_eq!(extract_serial("Kode dan Nomor Seri Faktur Pajak: Nama PT"), None);
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(extract_serial("Nomor Seri: 123.456"), None);
    }

    #[test]
    fn test_match_position() {
        let text = "x Kode dan Nomor Seri Faktur Pajak: 12";
        let m = SerialExtractor.extract(text).unwrap();
        assert_eq!(m.position, Some((2, text.len())));
    }
}

//! Invoice field extraction module.

pub mod rules;

use tracing::{debug, trace};

use crate::pdf::TextExtraction;
use rules::{normalize_text, FieldExtractor, ReferenceExtractor, SerialExtractor};

/// Fields used to compose a file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFields {
    /// Invoice reference, e.g. `INV/2025/09/0654`.
    pub reference: Option<String>,
    /// Tax invoice serial number, digits only.
    pub serial: Option<String>,
}

impl InvoiceFields {
    /// Fields for a document whose text layer could not be read.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Fields from a text-layer extraction outcome.
    pub fn from_extraction(extraction: &TextExtraction) -> Self {
        match extraction.text() {
            Some(text) => extract_fields(text),
            None => Self::absent(),
        }
    }
}

/// Normalize raw text-layer output and extract both fields.
pub fn extract_fields(raw: &str) -> InvoiceFields {
    let text = normalize_text(raw);

    let serial = SerialExtractor.extract(&text);
    let reference = ReferenceExtractor::new().extract(&text);
    for m in serial.iter().chain(reference.iter()) {
        trace!("Matched {:?} at {:?} from {:?}", m.value, m.position, m.source);
    }

    let serial = serial.map(|m| m.value);
    let reference = reference.map(|m| m.value);

    debug!("Extracted fields: reference={:?}, serial={:?}", reference, serial);
    InvoiceFields { reference, serial }
}

//! Invoice reference extraction.
//!
//! The reference is found by trying an ordered list of tiers; the first tier
//! that produces a value wins:
//!
//! 1. [`ReferenceTier::Strict`]: the canonical `INV/YYYY/MM/NNNN` form anywhere
//!    in the document.
//! 2. [`ReferenceTier::Labeled`]: the free text after a `Referensi` label, used
//!    when no canonical reference exists.

use tracing::debug;

use super::patterns::{INVOICE_STRICT, REFERENCE_LABEL};
use super::{ExtractionMatch, FieldExtractor};
use crate::naming::sanitize;

/// A single reference matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTier {
    Strict,
    Labeled,
}

impl ReferenceTier {
    /// Run this tier against normalized text.
    pub fn apply(self, text: &str) -> Option<ExtractionMatch<String>> {
        match self {
            ReferenceTier::Strict => strict_match(text),
            ReferenceTier::Labeled => labeled_match(text),
        }
    }
}

/// Invoice reference extractor.
#[derive(Debug, Clone)]
pub struct ReferenceExtractor {
    tiers: Vec<ReferenceTier>,
}

impl ReferenceExtractor {
    /// Strict pattern first, labeled phrase as fallback.
    pub fn new() -> Self {
        Self {
            tiers: vec![ReferenceTier::Strict, ReferenceTier::Labeled],
        }
    }

    /// Use a custom tier order.
    pub fn with_tiers(mut self, tiers: Vec<ReferenceTier>) -> Self {
        self.tiers = tiers;
        self
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ReferenceExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.tiers.iter().find_map(|tier| {
            let found = tier.apply(text)?;
            debug!("Reference {:?} found by {:?} tier", found.value, tier);
            Some(found)
        })
    }
}

fn strict_match(text: &str) -> Option<ExtractionMatch<String>> {
    let m = INVOICE_STRICT.find(text)?;
    Some(ExtractionMatch::new(m.as_str().to_uppercase(), m.as_str()).with_position(m.start(), m.end()))
}

fn labeled_match(text: &str) -> Option<ExtractionMatch<String>> {
    let caps = REFERENCE_LABEL.captures(text)?;
    let full = caps.get(0)?;
    let captured = caps.name("ref")?.as_str();

    // A canonical reference inside the label beats the free text around it.
    let value = match INVOICE_STRICT.find(captured) {
        Some(inner) => inner.as_str().to_uppercase(),
        None => sanitize(captured),
    };
    if value.is_empty() {
        return None;
    }

    Some(ExtractionMatch::new(value, full.as_str()).with_position(full.start(), full.end()))
}

/// Canonical `INV/YYYY/MM/NNNN` reference, uppercased.
pub fn strict_reference(text: &str) -> Option<String> {
    strict_match(text).map(|m| m.value)
}

/// Reference taken from a `Referensi` label.
pub fn labeled_reference(text: &str) -> Option<String> {
    labeled_match(text).map(|m| m.value)
}

/// Extract the invoice reference from normalized text using all tiers.
pub fn extract_reference(text: &str) -> Option<String> {
    ReferenceExtractor::new().extract(text).map(|m| m.value)
}

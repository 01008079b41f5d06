//! Batch input/output records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One uploaded file: its original name and raw bytes.
///
/// The original name is used for logging and the extension check only; it is
/// never written out as a final name.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Whether the name carries a `.pdf` extension (case-insensitive).
    pub fn has_pdf_extension(&self) -> bool {
        self.name.to_lowercase().ends_with(".pdf")
    }
}

/// A renamed file ready to be written or archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFile {
    /// Final, collision-free file name.
    pub name: String,
    /// Unmodified PDF bytes.
    pub data: Vec<u8>,
}

/// Which fields could not be found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFields {
    Both,
    Reference,
    Serial,
}

impl MissingFields {
    /// Classify the pair of extraction results; `None` when both are present.
    pub fn classify(reference: Option<&str>, serial: Option<&str>) -> Option<Self> {
        match (reference.is_some(), serial.is_some()) {
            (false, false) => Some(MissingFields::Both),
            (false, true) => Some(MissingFields::Reference),
            (true, false) => Some(MissingFields::Serial),
            (true, true) => None,
        }
    }
}

/// Outcome of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Rejected: the name does not end in `.pdf`.
    NotPdf,
    /// Rejected: zero-length content.
    EmptyFile,
    /// A name was composed and claimed.
    Renamed { final_name: String },
    /// Text was read (or failed to be read) but fields are missing.
    Missing { fields: MissingFields },
}

impl Outcome {
    /// Short machine-readable status.
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::NotPdf | Outcome::EmptyFile => "rejected",
            Outcome::Renamed { .. } => "renamed",
            Outcome::Missing { .. } => "warning",
        }
    }
}

/// Result record for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Original file name as supplied.
    pub original: String,
    pub outcome: Outcome,
    /// Extracted invoice reference, before slash substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Extracted serial number (digits only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    /// Cause of a text-layer failure, if extraction failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<String>,
}

impl BatchEntry {
    pub fn rejected(original: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            original: original.into(),
            outcome,
            reference: None,
            serial: None,
            extraction_error: None,
        }
    }

    /// Human-readable log line.
    pub fn log_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.original;
        match &self.outcome {
            Outcome::NotPdf => write!(f, "❌ Bukan PDF: {name}"),
            Outcome::EmptyFile => write!(f, "❌ File kosong: {name}"),
            Outcome::Renamed { final_name } => write!(f, "✅ {name} → {final_name}"),
            Outcome::Missing { fields: MissingFields::Both } => {
                write!(f, "⚠️ {name}: Referensi & Nomor Seri tidak ditemukan.")
            }
            Outcome::Missing { fields: MissingFields::Reference } => {
                write!(f, "⚠️ {name}: Referensi tidak ditemukan.")
            }
            Outcome::Missing { fields: MissingFields::Serial } => {
                write!(f, "⚠️ {name}: Nomor Seri Faktur Pajak tidak ditemukan.")
            }
        }
    }
}

/// Everything a batch run produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// One entry per input file, in input order.
    pub entries: Vec<BatchEntry>,
    /// Files to hand to the output layer; empty on a dry run.
    #[serde(skip)]
    pub outputs: Vec<RenamedFile>,
    pub dry_run: bool,
}

impl BatchReport {
    /// Log lines, one per input file.
    pub fn log(&self) -> Vec<String> {
        self.entries.iter().map(BatchEntry::log_line).collect()
    }

    pub fn renamed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Renamed { .. }))
            .count()
    }
}

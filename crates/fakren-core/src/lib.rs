//! Core library for renaming tax invoice PDFs.
//!
//! This crate provides:
//! - PDF text-layer extraction (lopdf + pdf-extract)
//! - Text normalization and rule-based field extraction
//!   (invoice reference, tax invoice serial number)
//! - Filename sanitization and name composition
//! - Batch processing with in-batch collision resolution

pub mod error;
pub mod models;
pub mod pdf;
pub mod invoice;
pub mod naming;
pub mod batch;

pub use error::{FakrenError, Result};
pub use models::config::FakrenConfig;
pub use models::document::{BatchEntry, BatchReport, InputFile, Outcome, RenamedFile};
pub use pdf::{PdfExtractor, TextExtraction, TextSource};
pub use invoice::{InvoiceFields, extract_fields};
pub use naming::{SlashStyle, build_name, sanitize};
pub use batch::{BatchProcessor, NameRegistry};

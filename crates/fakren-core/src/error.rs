//! Error types for the fakren-core library.

use thiserror::Error;

/// Main error type for the fakren library.
///
/// PDF failures never surface here; they are carried per file as
/// [`crate::pdf::TextExtraction::Failed`].
#[derive(Error, Debug)]
pub enum FakrenError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF text-layer extraction.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The text extractor panicked on malformed input.
    #[error("text extraction panicked on malformed document")]
    Panicked,
}

/// Result type for the fakren library.
pub type Result<T> = std::result::Result<T, FakrenError>;

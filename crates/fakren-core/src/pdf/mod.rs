//! PDF text-layer module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for text-layer sources.
///
/// Implementations return the text of all pages concatenated in page order.
pub trait TextSource {
    /// Extract the text layer from raw document bytes.
    fn extract_text(&self, data: &[u8]) -> Result<String>;

    /// Run extraction and fold the outcome into a [`TextExtraction`].
    fn read(&self, data: &[u8]) -> TextExtraction {
        match self.extract_text(data) {
            Ok(text) => TextExtraction::Text(text),
            Err(err) => TextExtraction::Failed(err),
        }
    }
}

/// Outcome of reading a document's text layer.
///
/// A failure is an ordinary value: downstream it means "no fields found".
#[derive(Debug)]
pub enum TextExtraction {
    /// Concatenated page text.
    Text(String),
    /// The document could not be read.
    Failed(PdfError),
}

impl TextExtraction {
    /// Text if extraction succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            TextExtraction::Text(text) => Some(text),
            TextExtraction::Failed(_) => None,
        }
    }

    /// Error if extraction failed.
    pub fn error(&self) -> Option<&PdfError> {
        match self {
            TextExtraction::Text(_) => None,
            TextExtraction::Failed(err) => Some(err),
        }
    }
}

//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, trace};

use super::{Result, TextSource};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Text-layer extractor backed by lopdf (loading, decryption) and
/// pdf-extract (per-page text).
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    max_pages: usize,
    page_separator: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor reading every page.
    pub fn new() -> Self {
        Self {
            max_pages: 0,
            page_separator: "\n".to_string(),
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new()
            .with_max_pages(config.max_pages)
            .with_page_separator(config.page_separator.clone())
    }

    /// Limit the number of pages read (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the separator placed between consecutive pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }

    /// Load the document, decrypting PDFs protected with an empty password.
    ///
    /// Returns the bytes pdf-extract should read.
    fn prepare(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        debug!("Loaded PDF with {} pages", page_count);

        if !doc.is_encrypted() {
            return Ok(data.to_vec());
        }

        if doc.decrypt("").is_err() {
            return Err(PdfError::Encrypted);
        }
        debug!("Decrypted PDF with empty password");

        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
        Ok(decrypted)
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        // pdf-extract panics on some malformed documents instead of erroring.
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
            Err(_) => Err(PdfError::Panicked),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSource for PdfExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let bytes = self.prepare(data)?;
        let mut pages = self.extract_pages(&bytes)?;

        if self.max_pages > 0 && pages.len() > self.max_pages {
            trace!("Truncating text layer from {} to {} pages", pages.len(), self.max_pages);
            pages.truncate(self.max_pages);
        }

        let text = pages.join(&self.page_separator);
        debug!("Extracted {} chars from {} pages", text.len(), pages.len());
        Ok(text)
    }
}

//! Batch renaming of uploaded PDF files.

mod registry;

pub use registry::NameRegistry;

use tracing::{debug, info, warn};

use crate::invoice::InvoiceFields;
use crate::models::config::FakrenConfig;
use crate::models::document::{
    BatchEntry, BatchReport, InputFile, MissingFields, Outcome, RenamedFile,
};
use crate::naming::{build_name, SlashStyle};
use crate::pdf::{PdfExtractor, TextSource};

/// Processes a batch of files one after another.
///
/// Every input produces exactly one [`BatchEntry`], in input order. No
/// per-file failure stops the batch.
pub struct BatchProcessor<S = PdfExtractor> {
    source: S,
    slash_style: SlashStyle,
    dry_run: bool,
}

impl BatchProcessor<PdfExtractor> {
    /// Create a processor backed by the PDF text layer, configured from `config`.
    pub fn from_config(config: &FakrenConfig) -> Self {
        BatchProcessor::new(PdfExtractor::from_config(&config.pdf))
            .with_slash_style(config.naming.slash_style())
    }
}

impl<S: TextSource> BatchProcessor<S> {
    /// Create a processor reading text through `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            slash_style: SlashStyle::default(),
            dry_run: false,
        }
    }

    /// Set how slashes in the reference are rendered.
    pub fn with_slash_style(mut self, style: SlashStyle) -> Self {
        self.slash_style = style;
        self
    }

    /// When set, names are computed and logged but no outputs are produced.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every file in order.
    pub fn process<I>(&self, files: I) -> BatchReport
    where
        I: IntoIterator<Item = InputFile>,
    {
        let mut registry = NameRegistry::new();
        let mut report = BatchReport {
            dry_run: self.dry_run,
            ..BatchReport::default()
        };

        for file in files {
            let entry = self.process_file(file, &mut registry, &mut report.outputs);
            info!("{}", entry.log_line());
            report.entries.push(entry);
        }

        debug!(
            "Batch finished: {} files, {} renamed, {} outputs",
            report.entries.len(),
            report.renamed_count(),
            report.outputs.len()
        );
        report
    }

    fn process_file(
        &self,
        file: InputFile,
        registry: &mut NameRegistry,
        outputs: &mut Vec<RenamedFile>,
    ) -> BatchEntry {
        if !file.has_pdf_extension() {
            return BatchEntry::rejected(file.name, Outcome::NotPdf);
        }
        if file.data.is_empty() {
            return BatchEntry::rejected(file.name, Outcome::EmptyFile);
        }

        let extraction = self.source.read(&file.data);
        let extraction_error = extraction.error().map(|e| {
            warn!("Could not read text layer of {}: {}", file.name, e);
            e.to_string()
        });

        let fields = InvoiceFields::from_extraction(&extraction);
        let candidate = build_name(
            fields.reference.as_deref(),
            fields.serial.as_deref(),
            self.slash_style,
        );

        let outcome = match candidate {
            Some(candidate) => {
                // Only names placed in outputs count as taken, so a dry run
                // never suffixes.
                let final_name = if self.dry_run {
                    registry.resolve(&candidate)
                } else {
                    registry.claim(&candidate)
                };
                if final_name != candidate {
                    debug!("Name {:?} taken, using {:?}", candidate, final_name);
                }
                Outcome::Renamed { final_name }
            }
            None => {
                let fields = MissingFields::classify(
                    fields.reference.as_deref(),
                    fields.serial.as_deref(),
                )
                // Both fields present but sanitized to nothing.
                .unwrap_or(MissingFields::Both);
                Outcome::Missing { fields }
            }
        };

        if let (Outcome::Renamed { final_name }, false) = (&outcome, self.dry_run) {
            outputs.push(RenamedFile {
                name: final_name.clone(),
                data: file.data,
            });
        }

        BatchEntry {
            original: file.name,
            outcome,
            reference: fields.reference,
            serial: fields.serial,
            extraction_error,
        }
    }
}

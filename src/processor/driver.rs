// src/processor/driver.rs
use crate::pdf::{PageSource, PdfDocument};
use crate::processor::{process_document, Extraction};
use crate::utils::{error::AppError, text_debug};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds payslip PDFs and merges the records of every document.
pub struct CollectionDriver {
    input_dir: PathBuf,
    subdir: String,
    debug_dir: Option<PathBuf>,
}

impl CollectionDriver {
    pub fn new<P: AsRef<Path>>(input_dir: P, subdir: &str) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
            subdir: subdir.to_string(),
            debug_dir: None,
        }
    }

    /// Enables writing annotated page text and metadata per document.
    pub fn with_debug_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.debug_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Lists `*.pdf` files directly inside `<input_dir>/<subdir>`, sorted by name.
    /// A missing directory yields an empty list.
    pub fn find_pdf_files(&self) -> Vec<PathBuf> {
        let dir = self.input_dir.join(&self.subdir);
        if !dir.is_dir() {
            tracing::debug!("Input directory {} does not exist", dir.display());
            return Vec::new();
        }

        WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| {
                p.extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
            })
            .collect()
    }

    /// Processes every discovered document in order.
    ///
    /// Returns empty collections when no PDF is found. A document that
    /// cannot be read aborts the whole run.
    pub fn run(&self) -> Result<Extraction, AppError> {
        let pdf_files = self.find_pdf_files();

        if pdf_files.is_empty() {
            println!("No PDF files found in {}", self.input_dir.join(&self.subdir).display());
            return Ok(Extraction::default());
        }

        println!("Found {} PDF file(s)\n", pdf_files.len());
        tracing::info!("Processing {} PDF file(s)", pdf_files.len());

        let mut all = Extraction::default();
        for path in &pdf_files {
            let document = PdfDocument::new(path);
            all.extend(self.process_one(&document)?);
        }

        tracing::info!(
            "Processing finished. Payments: {}, Summaries: {}",
            all.payments.len(),
            all.summaries.len()
        );
        if all.payments.is_empty() {
            println!("No payment data extracted!");
        }
        Ok(all)
    }

    fn process_one<D: PageSource>(&self, document: &D) -> Result<Extraction, AppError> {
        println!("Processing: {}", document.name());

        let (extraction, pages) = process_document(document)?;

        println!("  - extracted {} payment record(s)", extraction.payments.len());
        println!("  - extracted {} pay period summary(ies)\n", extraction.summaries.len());

        if let Some(debug_dir) = &self.debug_dir {
            let written = text_debug::write_document_debug(debug_dir, document.name(), &pages, &extraction);
            if let Err(e) = written {
                tracing::warn!("Failed to write debug output for {}: {}", document.name(), e);
            }
        }

        Ok(extraction)
    }
}

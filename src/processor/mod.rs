// src/processor/mod.rs
pub mod driver;

use crate::extractors::{process_page, PageRef, PaymentRecord, SummaryRecord};
use crate::pdf::PageSource;
use crate::utils::error::PdfError;

/// Records extracted from one document (or a whole collection, once merged).
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub payments: Vec<PaymentRecord>,
    pub summaries: Vec<SummaryRecord>,
}

impl Extraction {
    /// Appends another extraction, keeping its records in order after ours.
    pub fn extend(&mut self, other: Extraction) {
        self.payments.extend(other.payments);
        self.summaries.extend(other.summaries);
    }
}

/// Runs the page extractors over every page of a document.
///
/// Pages are numbered from 1 in the order given; pages without text are
/// skipped but still counted, so page numbers match the PDF.
pub fn aggregate_pages<S: AsRef<str>>(pdf_file: &str, pages: &[S]) -> Extraction {
    let mut extraction = Extraction::default();

    for (index, text) in pages.iter().map(AsRef::as_ref).enumerate() {
        let page_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        if text.trim().is_empty() {
            tracing::debug!("Skipping page {} of {}: no text", page_number, pdf_file);
            continue;
        }

        let page = process_page(text, PageRef { pdf_file, page: page_number });
        extraction.payments.extend(page.payments);
        extraction.summaries.push(page.summary);
    }

    extraction
}

/// Reads a document's pages and extracts its records.
pub fn process_document<D: PageSource>(document: &D) -> Result<(Extraction, Vec<String>), PdfError> {
    let pages = document.pages()?;
    let extraction = aggregate_pages(document.name(), &pages);
    Ok((extraction, pages))
}

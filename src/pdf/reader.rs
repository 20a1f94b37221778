// src/pdf/reader.rs
use crate::utils::error::PdfError;
use std::path::{Path, PathBuf};

/// A document that can be split into per-page text.
pub trait PageSource {
    /// File name used to label extracted records.
    fn name(&self) -> &str;

    /// Text of every page, in page order. Pages without text are empty strings.
    fn pages(&self) -> Result<Vec<String>, PdfError>;
}

/// A PDF file on disk, read with `pdf-extract`.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    path: PathBuf,
    name: String,
}

impl PdfDocument {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

impl PageSource for PdfDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn pages(&self) -> Result<Vec<String>, PdfError> {
        let path = self.path.display().to_string();

        let bytes = std::fs::read(&self.path).map_err(|source| PdfError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path);

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            PdfError::Extraction {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        tracing::debug!("Extracted text from {} page(s) of {}", pages.len(), path);

        Ok(pages)
    }
}

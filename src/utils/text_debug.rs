// src/utils/text_debug.rs
use crate::extractors::classify_line;
use crate::processor::Extraction;
use crate::utils::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders page text with each line tagged by the extractor pattern it matched.
pub fn annotate_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut out = String::new();

    for (index, text) in pages.iter().map(AsRef::as_ref).enumerate() {
        out.push_str(&format!("===== Page {} =====\n", index + 1));
        if text.trim().is_empty() {
            out.push_str("(no text)\n");
            continue;
        }
        for line in text.lines() {
            let marker = classify_line(line)
                .map(|label| format!("[{}]", label))
                .unwrap_or_default();
            out.push_str(&format!("{:<16}| {}\n", marker, line));
        }
    }

    out
}

/// Writes `<doc>.annotated.txt` and `<doc>.meta.json` into `debug_dir`.
pub fn write_document_debug<S: AsRef<str>>(
    debug_dir: &Path,
    document_name: &str,
    pages: &[S],
    extraction: &Extraction,
) -> Result<(PathBuf, PathBuf), ExportError> {
    fs::create_dir_all(debug_dir)?;

    let text_path = debug_dir.join(format!("{}.annotated.txt", document_name));
    fs::write(&text_path, annotate_pages(pages))?;

    let metadata = serde_json::json!({
        "pdf_file": document_name,
        "page_count": pages.len(),
        "pages_with_text": pages.iter().filter(|p| !p.as_ref().trim().is_empty()).count(),
        "payment_records": extraction.payments.len(),
        "summary_records": extraction.summaries.len(),
        "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
    });
    let metadata_str = serde_json::to_string_pretty(&metadata)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let meta_path = debug_dir.join(format!("{}.meta.json", document_name));
    fs::write(&meta_path, metadata_str)?;

    tracing::info!("Saved debug output to {} and {}", text_path.display(), meta_path.display());
    Ok((text_path, meta_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::aggregate_pages;

    const PAGE: &str = "Pay Period 01Jul24 to 14Jul24 Paid 18Jul24\n\
                        Payments Hours\n\
                        CAS OrdPay (incCASloading) 7.6 45.50 01Jul24 345.80\n\
                        Gross Pay 345.80 345.80";

    #[test]
    fn test_lines_are_tagged() {
        let annotated = annotate_pages(&[PAGE, ""]);

        assert!(annotated.contains("===== Page 1 ====="));
        assert!(annotated.contains("[pay-period]"));
        assert!(annotated.contains("[payment]"));
        assert!(annotated.contains("[gross]"));
        assert!(annotated.contains("===== Page 2 =====\n(no text)"));
    }

    #[test]
    fn test_debug_files_written() {
        let dir = tempfile::tempdir().unwrap();
        let pages = [PAGE];
        let extraction = aggregate_pages("slip.pdf", &pages);

        let (text_path, meta_path) =
            write_document_debug(&dir.path().join("debug"), "slip.pdf", &pages, &extraction).unwrap();

        assert!(fs::read_to_string(text_path).unwrap().contains("[payment]"));
        let meta: serde_json::Value = serde_json::from_str(&fs::read_to_string(meta_path).unwrap()).unwrap();
        assert_eq!(meta["pdf_file"], "slip.pdf");
        assert_eq!(meta["page_count"], 1);
        assert_eq!(meta["payment_records"], 1);
        assert_eq!(meta["summary_records"], 1);
    }
}

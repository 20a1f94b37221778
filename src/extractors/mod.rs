// src/extractors/mod.rs
pub mod date;
pub mod models;
pub mod page;
pub mod pay_period;
pub mod payment;
pub mod summary;

// Re-export key extraction types for convenience
pub use models::{PageRef, PaymentRecord, SummaryRecord};
pub use page::process_page;

/// Names the extractor pattern a line matches, if any. Used for debug annotation.
pub fn classify_line(line: &str) -> Option<&'static str> {
    if pay_period::is_pay_period_line(line) {
        Some("pay-period")
    } else if payment::is_payment_line(line) {
        Some("payment")
    } else {
        summary::matched_label(line)
    }
}

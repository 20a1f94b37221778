// src/extractors/page.rs
use crate::extractors::models::{PageRef, PaymentRecord, SummaryRecord};
use crate::extractors::{pay_period, payment, summary};

/// Everything extracted from a single page.
#[derive(Debug, Clone)]
pub struct PageExtraction {
    pub payments: Vec<PaymentRecord>,
    pub summary: SummaryRecord,
}

/// Runs the pay period, payment and summary extractors over one page of text.
///
/// The pay period is read once and shared by both record kinds.
pub fn process_page(text: &str, page: PageRef<'_>) -> PageExtraction {
    let lines: Vec<&str> = text.lines().collect();

    let period = pay_period::extract(&lines);
    let payments = payment::extract(&lines, page, &period);
    let summary = summary::extract(&lines, page, &period);

    PageExtraction { payments, summary }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shares_pay_period() {
        let text = "Pay Period 01Jul24 to 14Jul24 Paid 18Jul24\r\n\
                    Payments Hours Rate Reference Amount\r\n\
                    CAS OrdPay (incCASloading) 7.6 45.50 01Jul24 345.80\r\n\
                    Deductions\r\n\
                    \x20 Gross Pay 345.80 345.80\r\n";
        let page = PageRef { pdf_file: "a.pdf", page: 2 };
        let extraction = process_page(text, page);

        assert_eq!(extraction.payments.len(), 1);
        assert_eq!(extraction.payments[0].paid_date.as_deref(), Some("18Jul24"));
        assert_eq!(extraction.summary.pay_period.as_deref(), Some("01Jul24 to 14Jul24"));
        assert_eq!(extraction.summary.paid_date.as_deref(), Some("18Jul24"));
        assert_eq!(extraction.summary.gross_pay, Some(345.80));
        assert_eq!(extraction.summary.page, 2);
    }
}

// src/extractors/summary.rs
use crate::extractors::models::{PageRef, PayPeriodInfo, SummaryRecord};
use once_cell::sync::Lazy;
use regex::Regex;

const DISBURSEMENT_BANK: &str = "Commonwealth Bank of Australia";

static GROSS_PAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Gross Pay\s+([\d.]+)\s+([\d.]+)").expect("Failed to compile GROSS_PAY_RE")
});

static TAX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Tax\s+([\d.]+)\s+([\d.]+)").expect("Failed to compile TAX_RE")
});

static NETT_PAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Nett Pay\s+([\d.]+)\s+([\d.]+)").expect("Failed to compile NETT_PAY_RE")
});

// Bank name, account number, then the transferred amount
static DISBURSEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Commonwealth Bank of Australia\s+\d+\s+([\d.]+)")
        .expect("Failed to compile DISBURSEMENT_RE")
});

/// The summary label a line carries, decided by prefix before any number is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLine {
    GrossPay,
    Tax,
    NettPay,
    Disbursement,
}

impl SummaryLine {
    /// Classifies a raw line. The first rule that applies wins.
    ///
    /// "Tax" only counts when the raw line is indented: a line that itself
    /// begins with "Tax" is a heading, not the current/YTD tax row.
    pub fn classify(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.starts_with("Gross Pay") {
            Some(Self::GrossPay)
        } else if trimmed.starts_with("Tax") && !line.starts_with("Tax") {
            Some(Self::Tax)
        } else if trimmed.starts_with("Nett Pay") {
            Some(Self::NettPay)
        } else if line.contains(DISBURSEMENT_BANK) {
            Some(Self::Disbursement)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GrossPay => "gross",
            Self::Tax => "tax",
            Self::NettPay => "nett",
            Self::Disbursement => "disbursement",
        }
    }
}

/// Current and year-to-date amounts from a two-number summary line.
fn current_and_ytd(re: &Regex, text: &str) -> Option<(f64, f64)> {
    let caps = re.captures(text)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

fn disbursement(line: &str) -> Option<f64> {
    DISBURSEMENT_RE.captures(line)?[1].parse().ok()
}

/// Builds the summary record for one page.
///
/// Every line is examined; when a label appears more than once on a page
/// the last well-formed occurrence wins.
pub fn extract<S: AsRef<str>>(
    lines: &[S],
    page: PageRef<'_>,
    pay_period: &PayPeriodInfo,
) -> SummaryRecord {
    let mut summary = SummaryRecord::for_page(page.pdf_file, page.page, pay_period);

    for line in lines.iter().map(AsRef::as_ref) {
        match SummaryLine::classify(line) {
            Some(SummaryLine::GrossPay) => {
                if let Some((current, ytd)) = current_and_ytd(&GROSS_PAY_RE, line) {
                    summary.gross_pay = Some(current);
                    summary.ytd_gross_pay = Some(ytd);
                }
            }
            Some(SummaryLine::Tax) => {
                if let Some((current, ytd)) = current_and_ytd(&TAX_RE, line.trim()) {
                    summary.tax = Some(current);
                    summary.ytd_tax = Some(ytd);
                }
            }
            Some(SummaryLine::NettPay) => {
                if let Some((current, ytd)) = current_and_ytd(&NETT_PAY_RE, line) {
                    summary.nett_pay = Some(current);
                    summary.ytd_nett_pay = Some(ytd);
                }
            }
            Some(SummaryLine::Disbursement) => {
                if let Some(amount) = disbursement(line) {
                    summary.disbursement_amount = Some(amount);
                }
            }
            None => {}
        }
    }

    summary
}

/// Returns the label for lines that would actually update a summary field.
pub fn matched_label(line: &str) -> Option<&'static str> {
    let kind = SummaryLine::classify(line)?;
    let matched = match kind {
        SummaryLine::GrossPay => GROSS_PAY_RE.is_match(line),
        SummaryLine::Tax => TAX_RE.is_match(line.trim()),
        SummaryLine::NettPay => NETT_PAY_RE.is_match(line),
        SummaryLine::Disbursement => DISBURSEMENT_RE.is_match(line),
    };
    matched.then(|| kind.label())
}

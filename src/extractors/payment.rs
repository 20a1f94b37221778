// src/extractors/payment.rs
use crate::extractors::date::parse_reference_date;
use crate::extractors::models::{PageRef, PayPeriodInfo, PaymentRecord};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Ordinary casual pay line: hours, rate, reference date, amount
static PAYMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^CAS OrdPay \(incCASloading\)\s+([\d.]+)\s+([\d.]+)\s+(\w+)\s+([\d.]+)")
        .expect("Failed to compile PAYMENT_RE")
});

/// Position of the scan relative to the Payments section of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    Outside,
    Inside,
    Terminated,
}

/// True when `line` opens the Payments section. The "Hours" column
/// header may wrap onto the following line.
fn is_section_start(line: &str, next: Option<&str>) -> bool {
    line.trim().starts_with("Payments")
        && (line.contains("Hours") || next.is_some_and(|n| n.contains("Hours")))
}

fn is_section_end(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("Deductions") || trimmed.starts_with("Benefits")
}

/// Returns true when the line has the shape of an ordinary-pay payment line.
pub fn is_payment_line(line: &str) -> bool {
    PAYMENT_RE.is_match(line)
}

/// Parses the numeric captures of a payment line. `None` when a number is malformed (e.g. `1.2.3`).
fn parse_amounts(caps: &Captures) -> Option<(f64, f64, f64)> {
    let hours = caps[1].parse().ok()?;
    let rate = caps[2].parse().ok()?;
    let amount = caps[4].parse().ok()?;
    Some((hours, rate, amount))
}

/// Extracts payment records from the Payments section of one page.
///
/// Only lines between the section header and the first "Deductions" or
/// "Benefits" line are considered. Lines that do not have the exact
/// ordinary-pay shape are skipped.
pub fn extract<S: AsRef<str>>(
    lines: &[S],
    page: PageRef<'_>,
    pay_period: &PayPeriodInfo,
) -> Vec<PaymentRecord> {
    let mut payments = Vec::new();
    let mut state = SectionState::Outside;

    for (i, line) in lines.iter().map(AsRef::as_ref).enumerate() {
        let next = lines.get(i + 1).map(AsRef::as_ref);

        if is_section_start(line, next) {
            tracing::trace!("Entering payments section at line {} of page {}", i, page.page);
            state = SectionState::Inside;
            continue;
        }

        if state != SectionState::Inside {
            continue;
        }

        if is_section_end(line) {
            state = SectionState::Terminated;
            break;
        }

        let Some(caps) = PAYMENT_RE.captures(line) else {
            continue;
        };
        let Some((hours, rate, amount)) = parse_amounts(&caps) else {
            tracing::debug!("Skipping payment line with malformed numbers: '{}'", line);
            continue;
        };

        payments.push(PaymentRecord {
            pdf_file: page.pdf_file.to_string(),
            page: page.page,
            pay_period: pay_period.period.clone(),
            paid_date: pay_period.paid_date.clone(),
            work_date: parse_reference_date(&caps[3]),
            hours,
            rate,
            amount,
        });
    }

    tracing::debug!(
        "Page {} of {}: {} payment line(s), section state {:?}",
        page.page,
        page.pdf_file,
        payments.len(),
        state
    );
    payments
}

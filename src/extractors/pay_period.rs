// src/extractors/pay_period.rs
use crate::extractors::models::PayPeriodInfo;
use once_cell::sync::Lazy;
use regex::Regex;

static PAY_PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Pay Period (.+?) to (.+?) Paid (.+?)$").expect("Failed to compile PAY_PERIOD_RE")
});

/// Returns true when a line looks like the pay period header.
pub fn is_pay_period_line(line: &str) -> bool {
    line.contains("Pay Period") && line.contains("Paid")
}

/// Extracts the pay period and paid date from the first header line that matches.
/// Later header lines on the same page are ignored.
pub fn extract<S: AsRef<str>>(lines: &[S]) -> PayPeriodInfo {
    for line in lines.iter().map(AsRef::as_ref) {
        if !is_pay_period_line(line) {
            continue;
        }
        if let Some(caps) = PAY_PERIOD_RE.captures(line) {
            let info = PayPeriodInfo {
                period: Some(format!("{} to {}", &caps[1], &caps[2])),
                paid_date: Some(caps[3].to_string()),
            };
            tracing::debug!("Found pay period {:?}, paid {:?}", info.period, info.paid_date);
            return info;
        }
        tracing::trace!("Line mentions a pay period but did not match: '{}'", line);
    }

    PayPeriodInfo::default()
}

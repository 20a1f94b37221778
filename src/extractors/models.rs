// src/extractors/models.rs
use serde::Serialize;

/// Pay period and paid date as printed in a page header.
/// Derived fresh for every page; both fields stay `None` when the page has no header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayPeriodInfo {
    pub period: Option<String>,    // e.g. "01Jul24 to 14Jul24"
    pub paid_date: Option<String>, // e.g. "18Jul24"
}

/// One ordinary-pay line from the Payments section of a payslip page.
///
/// Field order and serde names are the column layout of the
/// "Payment Details" sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaymentRecord {
    #[serde(rename = "PDF File")]
    pub pdf_file: String,
    #[serde(rename = "Page")]
    pub page: u32,
    #[serde(rename = "Pay Period")]
    pub pay_period: Option<String>,
    #[serde(rename = "Paid Date")]
    pub paid_date: Option<String>,
    #[serde(rename = "Work Date")]
    pub work_date: String,
    #[serde(rename = "Hours")]
    pub hours: f64,
    #[serde(rename = "Rate")]
    pub rate: f64,
    #[serde(rename = "Amount")]
    pub amount: f64,
}

/// Totals block of one payslip page. Exactly one exists per processed page,
/// even when none of the monetary lines were found.
///
/// Field order and serde names are the column layout of the "Summary" sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryRecord {
    #[serde(rename = "PDF File")]
    pub pdf_file: String,
    #[serde(rename = "Page")]
    pub page: u32,
    #[serde(rename = "Pay Period")]
    pub pay_period: Option<String>,
    #[serde(rename = "Paid Date")]
    pub paid_date: Option<String>,
    #[serde(rename = "Gross Pay")]
    pub gross_pay: Option<f64>,
    #[serde(rename = "Tax")]
    pub tax: Option<f64>,
    #[serde(rename = "Nett Pay")]
    pub nett_pay: Option<f64>,
    #[serde(rename = "YTD Gross Pay")]
    pub ytd_gross_pay: Option<f64>,
    #[serde(rename = "YTD Tax")]
    pub ytd_tax: Option<f64>,
    #[serde(rename = "YTD Nett Pay")]
    pub ytd_nett_pay: Option<f64>,
    #[serde(rename = "Disbursement Amount")]
    pub disbursement_amount: Option<f64>,
}

impl SummaryRecord {
    /// Creates a summary for the given page with identifying fields set
    /// and every monetary field unset.
    pub fn for_page(pdf_file: &str, page: u32, pay_period: &PayPeriodInfo) -> Self {
        Self {
            pdf_file: pdf_file.to_string(),
            page,
            pay_period: pay_period.period.clone(),
            paid_date: pay_period.paid_date.clone(),
            ..Self::default()
        }
    }
}

/// Where a page came from: the document's file name and its 1-based page number.
#[derive(Debug, Clone, Copy)]
pub struct PageRef<'a> {
    pub pdf_file: &'a str,
    pub page: u32,
}

// src/storage/mod.rs
use crate::extractors::{PaymentRecord, SummaryRecord};
use crate::utils::error::ExportError;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub const DEFAULT_OUTPUT_FILE: &str = "payslip_details.xlsx";
pub const PAYMENTS_SHEET: &str = "Payment Details";
pub const SUMMARY_SHEET: &str = "Summary";

/// Writes both record sets to one workbook: a "Payment Details" sheet and a
/// "Summary" sheet, each with a header row followed by one row per record.
pub fn save_to_excel<P: AsRef<Path>>(
    payments: &[PaymentRecord],
    summaries: &[SummaryRecord],
    output_file: P,
) -> Result<(), ExportError> {
    let output_file = output_file.as_ref();
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet().set_name(PAYMENTS_SHEET)?;
    sheet.serialize_headers(0, 0, &PaymentRecord::default())?;
    for payment in payments {
        sheet.serialize(payment)?;
    }

    let sheet = workbook.add_worksheet().set_name(SUMMARY_SHEET)?;
    sheet.serialize_headers(0, 0, &SummaryRecord::default())?;
    for summary in summaries {
        sheet.serialize(summary)?;
    }

    workbook.save(output_file)?;
    tracing::info!(
        "Saved {} payment and {} summary rows to {}",
        payments.len(),
        summaries.len(),
        output_file.display()
    );
    Ok(())
}

/// Aggregate totals over the extracted records. Unset summary fields are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub total_hours: f64,
    pub total_gross: f64,
    pub total_tax: f64,
    pub total_nett: f64,
}

impl Statistics {
    pub fn compute(payments: &[PaymentRecord], summaries: &[SummaryRecord]) -> Self {
        let sum = |field: fn(&SummaryRecord) -> Option<f64>| summaries.iter().filter_map(field).sum::<f64>();
        Self {
            total_hours: payments.iter().map(|p| p.hours).sum(),
            total_gross: sum(|s| s.gross_pay),
            total_tax: sum(|s| s.tax),
            total_nett: sum(|s| s.nett_pay),
        }
    }
}

/// Formats a dollar amount with thousands separators, e.g. `$24,000.00`.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

pub fn print_statistics(payments: &[PaymentRecord], summaries: &[SummaryRecord]) {
    let stats = Statistics::compute(payments, summaries);
    println!("\n=== Statistics ===");
    println!("Total hours worked: {:.2}", stats.total_hours);
    println!("Total gross pay: {}", format_currency(stats.total_gross));
    println!("Total tax: {}", format_currency(stats.total_tax));
    println!("Total nett pay: {}", format_currency(stats.total_nett));
}

#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "PDF File")]
    pdf_file: String,
    #[tabled(rename = "Page")]
    page: u32,
    #[tabled(rename = "Pay Period")]
    pay_period: String,
    #[tabled(rename = "Paid Date")]
    paid_date: String,
    #[tabled(rename = "Work Date")]
    work_date: String,
    #[tabled(rename = "Hours")]
    hours: f64,
    #[tabled(rename = "Rate")]
    rate: f64,
    #[tabled(rename = "Amount")]
    amount: f64,
}

impl From<&PaymentRecord> for PreviewRow {
    fn from(p: &PaymentRecord) -> Self {
        Self {
            pdf_file: p.pdf_file.clone(),
            page: p.page,
            pay_period: p.pay_period.clone().unwrap_or_default(),
            paid_date: p.paid_date.clone().unwrap_or_default(),
            work_date: p.work_date.clone(),
            hours: p.hours,
            rate: p.rate,
            amount: p.amount,
        }
    }
}

/// Renders the first `n` payment records as an aligned text table.
pub fn render_preview(payments: &[PaymentRecord], n: usize) -> String {
    let rows = payments.iter().take(n).map(PreviewRow::from);
    Table::new(rows).with(Style::blank()).to_string()
}

pub fn print_sample_data(payments: &[PaymentRecord], n: usize) {
    println!("\n=== First {} payment records ===", n);
    println!("{}", render_preview(payments, n));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(hours: f64, amount: f64) -> PaymentRecord {
        PaymentRecord {
            pdf_file: "slip.pdf".to_string(),
            page: 1,
            pay_period: Some("01Jul24 to 14Jul24".to_string()),
            paid_date: None,
            work_date: "2024-07-01".to_string(),
            hours,
            rate: 45.5,
            amount,
        }
    }

    fn summary(gross: Option<f64>, tax: Option<f64>, nett: Option<f64>) -> SummaryRecord {
        SummaryRecord {
            gross_pay: gross,
            tax,
            nett_pay: nett,
            ..SummaryRecord::default()
        }
    }

    #[test]
    fn test_statistics_skip_unset_values() {
        let payments = [payment(7.5, 341.25), payment(4.0, 182.0)];
        let summaries = [
            summary(Some(1200.0), Some(250.0), Some(950.0)),
            summary(None, None, None),
            summary(Some(800.0), None, Some(800.0)),
        ];
        let stats = Statistics::compute(&payments, &summaries);

        assert_eq!(stats.total_hours, 11.5);
        assert_eq!(stats.total_gross, 2000.0);
        assert_eq!(stats.total_tax, 250.0);
        assert_eq!(stats.total_nett, 1750.0);
        assert_eq!(Statistics::compute(&[], &[]), Statistics::default());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(950.5), "$950.50");
        assert_eq!(format_currency(1200.0), "$1,200.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-24000.0), "-$24,000.00");
    }

    #[test]
    fn test_preview_limited_to_n_rows() {
        let payments: Vec<_> = (0..5).map(|i| payment(f64::from(i), 10.0)).collect();
        let preview = render_preview(&payments, 2);

        assert!(preview.contains("Work Date"));
        assert!(preview.contains("01Jul24 to 14Jul24"));
        assert_eq!(preview.lines().filter(|l| l.contains("slip.pdf")).count(), 2);
    }

    #[test]
    fn test_workbook_sheets_and_columns() {
        use calamine::{open_workbook, Data, Reader, Xlsx};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT_FILE);
        let summaries = [SummaryRecord {
            pdf_file: "slip.pdf".to_string(),
            page: 1,
            ..summary(Some(1200.0), None, Some(950.0))
        }];

        save_to_excel(&[payment(7.6, 345.8)], &summaries, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![PAYMENTS_SHEET, SUMMARY_SHEET]);

        let header = |row: &[Data]| row.iter().map(|c| c.to_string()).collect::<Vec<_>>();

        let range = workbook.worksheet_range(PAYMENTS_SHEET).unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            header(rows[0]),
            ["PDF File", "Page", "Pay Period", "Paid Date", "Work Date", "Hours", "Rate", "Amount"]
        );
        assert_eq!(rows[1][0], Data::String("slip.pdf".to_string()));
        assert_eq!(rows[1][1], Data::Float(1.0));
        assert_eq!(rows[1][2], Data::String("01Jul24 to 14Jul24".to_string()));
        assert_eq!(rows[1][3], Data::Empty);
        assert_eq!(rows[1][4], Data::String("2024-07-01".to_string()));
        assert_eq!(rows[1][5], Data::Float(7.6));
        assert_eq!(rows[1][7], Data::Float(345.8));

        let range = workbook.worksheet_range(SUMMARY_SHEET).unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            header(rows[0]),
            [
                "PDF File",
                "Page",
                "Pay Period",
                "Paid Date",
                "Gross Pay",
                "Tax",
                "Nett Pay",
                "YTD Gross Pay",
                "YTD Tax",
                "YTD Nett Pay",
                "Disbursement Amount",
            ]
        );
        assert_eq!(rows[1][0], Data::String("slip.pdf".to_string()));
        assert_eq!(rows[1][4], Data::Float(1200.0));
        assert_eq!(rows[1][5], Data::Empty);
        assert_eq!(rows[1][6], Data::Float(950.0));
        assert_eq!(rows[1][10], Data::Empty);
    }
}

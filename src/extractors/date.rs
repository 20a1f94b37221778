// src/extractors/date.rs
use chrono::{Datelike, NaiveDate};

/// Compact reference-date format used on payment lines, e.g. `01Jul24`.
const REFERENCE_DATE_FORMAT: &str = "%d%b%y";
const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono reads `%y` as 20xx up to 69; payslip years pivot at 69 (69–99 are 19xx).
const CHRONO_LAST_21ST_CENTURY_YEAR: i32 = 2069;

/// Converts a compact reference date (`01Jul24`) into ISO form (`2024-07-01`).
///
/// Tokens that do not parse are returned unchanged.
pub fn parse_reference_date(token: &str) -> String {
    match NaiveDate::parse_from_str(token, REFERENCE_DATE_FORMAT) {
        Ok(date) => pivot_century(date).format(OUTPUT_DATE_FORMAT).to_string(),
        Err(e) => {
            tracing::debug!("Keeping unparseable reference date '{}' as-is: {}", token, e);
            token.to_string()
        }
    }
}

fn pivot_century(date: NaiveDate) -> NaiveDate {
    if date.year() != CHRONO_LAST_21ST_CENTURY_YEAR {
        return date;
    }
    // 1969 and 2069 are both non-leap, so every day maps across
    date.with_year(date.year() - 100).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_dates_become_iso() {
        assert_eq!(parse_reference_date("01Jul24"), "2024-07-01");
        assert_eq!(parse_reference_date("31Dec23"), "2023-12-31");
        assert_eq!(parse_reference_date("29Feb24"), "2024-02-29");
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_reference_date("31Dec68"), "2068-12-31");
        assert_eq!(parse_reference_date("01Jan69"), "1969-01-01");
        assert_eq!(parse_reference_date("31Dec69"), "1969-12-31");
        assert_eq!(parse_reference_date("01Jan70"), "1970-01-01");
        assert_eq!(parse_reference_date("15Mar99"), "1999-03-15");
        assert_eq!(parse_reference_date("01Jan00"), "2000-01-01");
    }

    #[test]
    fn test_invalid_tokens_pass_through() {
        for token in ["", "OrdPay", "2024-07-01", "32Jul24", "30Feb24", "01Foo24", "01Jul2024x"] {
            assert_eq!(parse_reference_date(token), token, "token {:?} should be unchanged", token);
        }
    }
}

//! vi-VN presentation of dates, numbers and money
//!
//! Matches what the browser's `vi-VN` locale produces: `d/M/yyyy` dates,
//! `.` as the thousands separator, `,` for decimals, and đồng with no
//! fraction digits followed by a no-break space and `₫`.

use chrono::{Datelike, NaiveDate};

use crate::dates::parse_date;

const MAX_FRACTION_DIGITS: u32 = 3;
const CURRENCY_SYMBOL: &str = "\u{a0}₫";

pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Format a date string from a record. Missing or unreadable values render
/// as an empty cell.
pub fn format_date_str(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    match parse_date(input) {
        Ok(date) => format_date(date),
        Err(e) => {
            tracing::debug!(input = %input, error = %e, "Unformattable date");
            String::new()
        }
    }
}

pub fn format_number(value: f64) -> String {
    format_decimal(value, MAX_FRACTION_DIGITS)
}

pub fn format_currency(amount: f64) -> String {
    let mut out = format_decimal(amount, 0);
    out.push_str(CURRENCY_SYMBOL);
    out
}

fn format_decimal(value: f64, fraction_digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let scale = 10u128.pow(fraction_digits);
    let scaled = value.abs() * scale as f64;

    // Past u128 range f64 carries no fraction digits; print the integer part
    if scaled >= u128::MAX as f64 {
        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&group_thousands(&format!("{:.0}", value.abs())));
        return out;
    }

    // f64::round rounds half away from zero, same as the browser
    let scaled = scaled.round() as u128;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if value < 0.0 && scaled != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer.to_string()));

    if fraction > 0 {
        let digits = format!("{:0width$}", fraction, width = fraction_digits as usize);
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "5/1/2024");
        assert_eq!(format_date_str("2000-06-15"), "15/6/2000");
        assert_eq!(format_date_str(""), "");
        assert_eq!(format_date_str("không rõ"), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1234567.0), "1.234.567");
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(2.34567), "2,346");
        assert_eq!(format_number(-15000.25), "-15.000,25");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.0), "1.234.567\u{a0}₫");
        assert_eq!(format_currency(4680000.0), "4.680.000\u{a0}₫");
        assert_eq!(format_currency(1500.5), "1.501\u{a0}₫");
        assert_eq!(format_currency(0.0), "0\u{a0}₫");
        assert_eq!(format_currency(-250000.0), "-250.000\u{a0}₫");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
    }

    #[test]
    fn test_huge_values_keep_their_digits() {
        let formatted = format_number(1e36);
        assert!(formatted.starts_with("1.000.000.000.000.000.0"));
        assert!(!formatted.contains(','));
        assert_eq!(formatted.len(), 37 + 12);

        assert_eq!(format_number(-1e36), format!("-{formatted}"));
        assert!(format_currency(1e40).starts_with("10.000.000.000"));
    }
}

//! Parsing helpers for menu answers and output format.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format from string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

/// Parse a date (dd/mm/yyyy or YYYY-MM-DD).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid date (expected dd/mm/yyyy or YYYY-MM-DD): {}",
                value
            )
        })
}

/// Parse a whole number.
pub fn parse_int(value: &str) -> anyhow::Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Invalid number: {}", value.trim()))
}

/// Parse a decimal amount, accepting `,` as the decimal separator.
pub fn parse_decimal(value: &str) -> anyhow::Result<Decimal> {
    let normalized = value.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| anyhow::anyhow!("Invalid amount: {}", value.trim()))
}

/// Parse a measurement (height, weight, BMI), accepting `,` as separator.
pub fn parse_f64(value: &str) -> anyhow::Result<f64> {
    let normalized = value.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| anyhow::anyhow!("Invalid number: {}", value.trim()))
}

/// Parse a month number. Range checking happens in the register.
pub fn parse_month(value: &str) -> anyhow::Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| anyhow::anyhow!("Invalid month: {}", value.trim()))
}

/// Accept any text, trimmed.
pub fn parse_text(value: &str) -> anyhow::Result<String> {
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
        assert_eq!(parse_date("15/05/2025").unwrap(), expected);
        assert_eq!(parse_date("2025-05-15").unwrap(), expected);
        assert_eq!(parse_date(" 15/05/2025\n").unwrap(), expected);
        assert!(parse_date("31/02/2025").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_parse_decimal_accepts_comma() {
        assert_eq!(parse_decimal("5,00").unwrap(), dec!(5.00));
        assert_eq!(parse_decimal("8.5").unwrap(), dec!(8.5));
        assert!(parse_decimal("five").is_err());
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_int(" 3 ").unwrap(), 3);
        assert!(parse_int("3.5").is_err());
        assert_eq!(parse_f64("1,75").unwrap(), 1.75);
        assert!(parse_f64("NaN").is_err());
        assert_eq!(parse_month("5").unwrap(), 5);
        assert!(parse_month("-1").is_err());
    }
}

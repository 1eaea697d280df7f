//! Разбор и форматирование дат счёта.
//!
//! Записи счетов приходят из разных источников: ISO-дата, полная
//! RFC 3339 метка времени или короткая форма вида "13 Dec 2019".
//! Наружу дата всегда уходит как `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";
const SHORT_MONTH_FORMAT: &str = "%d %b %Y";

/// Parse an invoice date from any of the accepted textual forms
pub fn parse_invoice_date(input: &str) -> Result<NaiveDate, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Empty date".to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_FORMAT) {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, SHORT_MONTH_FORMAT) {
        return Ok(date);
    }
    Err(format!("Invalid date: {}", trimmed))
}

/// `2024-01-05` (значение для `<input type="date">` и для JSON)
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// `January 5, 2024`
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// serde `with`-модуль для полей с датой счёта
pub mod invoice_date {
    use super::{format_iso, parse_invoice_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_iso(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_invoice_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_invoice_date("2024-01-01"), Ok(date(2024, 1, 1)));
        assert_eq!(parse_invoice_date("  2024-03-15 "), Ok(date(2024, 3, 15)));
    }

    #[test]
    fn test_parse_rfc3339_keeps_date_part() {
        assert_eq!(
            parse_invoice_date("2024-03-15T14:02:26.123Z"),
            Ok(date(2024, 3, 15))
        );
    }

    #[test]
    fn test_parse_short_month() {
        assert_eq!(parse_invoice_date("13 Dec 2019"), Ok(date(2019, 12, 13)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_invoice_date("").is_err());
        assert!(parse_invoice_date("2024-13-01").is_err());
        assert_eq!(
            parse_invoice_date("tomorrow"),
            Err("Invalid date: tomorrow".to_string())
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format_iso(date(2024, 1, 5)), "2024-01-05");
        assert_eq!(format_long(date(2024, 1, 1)), "January 1, 2024");
        assert_eq!(format_long(date(2019, 12, 13)), "December 13, 2019");
    }
}

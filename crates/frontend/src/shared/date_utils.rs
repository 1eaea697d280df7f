/// Utilities for date handling in the invoice form
///
/// `<input type="date">` works with `yyyy-mm-dd` strings, the form state
/// keeps `NaiveDate`.
use chrono::NaiveDate;
use contracts::shared::date_format::parse_invoice_date;

/// Current local date (used when there is no invoice record)
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse the value of a date input. Empty or partial input gives `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    parse_invoice_date(value).ok()
}

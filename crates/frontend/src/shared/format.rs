//! Display formatting for amounts and dates

use chrono::{Datelike, NaiveDate};

/// Two-decimal amount without currency sign. Halves round away from zero,
/// so `0.125` shows as `0.13`.
///
/// # Examples
/// ```
/// use frontend::shared::format::format_amount;
/// assert_eq!(format_amount(12.5), "12.50");
/// ```
pub fn format_amount(value: f64) -> String {
    // `{:.2}` alone rounds exact ties to even
    let cents = (value * 100.0).round() / 100.0;
    format!("{:.2}", cents)
}

/// Dollar amount with two decimals, no thousands separator ("$1234.50")
///
/// # Examples
/// ```
/// use frontend::shared::format::format_money;
/// assert_eq!(format_money(1234.5), "$1234.50");
/// ```
pub fn format_money(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// Optional amount; absent renders as "$0.00"
pub fn format_money_opt(value: Option<f64>) -> String {
    format_money(value.unwrap_or(0.0))
}

/// Short US date as shown to operators, e.g. "3/7/2025"
pub fn format_date_us(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

//! Currency and date display formatting.
//!
//! Both output adapters call these exact functions with the same
//! arguments for a given document, so the interactive preview and the
//! exported file always show byte-identical strings.

use chrono::{DateTime, NaiveDate, Utc};

/// Currency symbol table. Symbols marked `spaced` get a space between
/// symbol and amount ("KSh 1,200.00" vs "$1,200.00").
fn currency_symbol(code: &str) -> Option<(&'static str, bool)> {
    match code {
        "USD" => Some(("$", false)),
        "EUR" => Some(("\u{20ac}", false)),
        "GBP" => Some(("\u{a3}", false)),
        "KES" => Some(("KSh", true)),
        "TZS" => Some(("TSh", true)),
        "UGX" => Some(("USh", true)),
        _ => None,
    }
}

/// Format a monetary amount for display: two decimals, thousands
/// separators, leading minus for negatives.
///
/// Unrecognized currency codes fall back to `"<CODE> <amount>"` rather
/// than failing — no input may abort a render.
pub fn format_currency(amount: f64, code: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let frac = cents % 100;
    let body = format!("{}.{:02}", group_thousands(units), frac);

    match currency_symbol(code) {
        Some((symbol, true)) => format!("{}{} {}", sign, symbol, body),
        Some((symbol, false)) => format!("{}{}{}", sign, symbol, body),
        None => format!("{}{} {}", sign, code, body),
    }
}

/// Insert comma separators into an integer amount: 9600 -> "9,600".
fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a date for display: "Jan 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp by its calendar date (UTC).
pub fn format_datetime(timestamp: DateTime<Utc>) -> String {
    format_date(timestamp.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn usd_attaches_symbol() {
        assert_eq!(format_currency(300.0, "USD"), "$300.00");
        assert_eq!(format_currency(100.0, "USD"), "$100.00");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_currency(9600.0, "USD"), "$9,600.00");
        assert_eq!(format_currency(1234567.89, "USD"), "$1,234,567.89");
    }

    #[test]
    fn spaced_symbol_currencies() {
        assert_eq!(format_currency(500.0, "KES"), "KSh 500.00");
        assert_eq!(format_currency(1200.5, "TZS"), "TSh 1,200.50");
    }

    #[test]
    fn unknown_code_falls_back_to_code_prefix() {
        assert_eq!(format_currency(42.0, "XTS"), "XTS 42.00");
    }

    #[test]
    fn negative_amounts_carry_leading_minus() {
        assert_eq!(format_currency(-1500.25, "USD"), "-$1,500.25");
        assert_eq!(format_currency(-10.0, "KES"), "-KSh 10.00");
    }

    #[test]
    fn fractions_round_to_cents() {
        assert_eq!(format_currency(0.005, "USD"), "$0.01");
        assert_eq!(format_currency(99.999, "USD"), "$100.00");
    }

    #[test]
    fn date_format() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(d), "Jan 5, 2024");
        let d = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_date(d), "Dec 25, 2023");
    }

    #[test]
    fn datetime_uses_calendar_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 23, 15, 0).unwrap();
        assert_eq!(format_datetime(ts), "Mar 9, 2024");
    }
}

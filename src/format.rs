//! Display formatting utilities
//!
//! Pure functions turning raw values into display strings. Nothing here
//! touches storage or fails; malformed inputs fall back to defaults.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::config::settings::{Settings, DEFAULT_DATE_FORMAT};
use crate::models::Money;

/// Render a monetary amount with the configured symbol and digit grouping
///
/// Negative amounts carry the sign before the symbol: "-$1,234.56".
pub fn format_currency(amount: Money, settings: &Settings) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        settings.currency_symbol,
        group_thousands(amount.major().abs()),
        amount.minor()
    )
}

/// Render a timestamp with the configured strftime pattern
///
/// A pattern chrono cannot parse falls back to the default pattern instead
/// of failing.
pub fn format_date(timestamp: DateTime<Utc>, settings: &Settings) -> String {
    let pattern = if pattern_is_valid(&settings.date_format) {
        settings.date_format.as_str()
    } else {
        DEFAULT_DATE_FORMAT
    };

    timestamp.format(pattern).to_string()
}

/// Render a ratio as a whole percentage, rounding half away from zero
pub fn format_percentage(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

fn pattern_is_valid(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        let settings = Settings::default();

        assert_eq!(format_currency(Money::from_cents(123456), &settings), "$1,234.56");
        assert_eq!(format_currency(Money::from_cents(5), &settings), "$0.05");
        assert_eq!(format_currency(Money::zero(), &settings), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let settings = Settings::default();
        assert_eq!(
            format_currency(Money::from_cents(-123456), &settings),
            "-$1,234.56"
        );
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        let settings = Settings {
            currency_symbol: "₹".into(),
            ..Settings::default()
        };
        assert_eq!(format_currency(Money::from_cents(12000), &settings), "₹120.00");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_date_default_pattern() {
        let settings = Settings::default();
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        assert_eq!(format_date(ts, &settings), "2024-01-15");
    }

    #[test]
    fn test_format_date_custom_pattern() {
        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        assert_eq!(format_date(ts, &settings), "15/01/2024");
    }

    #[test]
    fn test_format_date_malformed_pattern_falls_back() {
        let settings = Settings {
            date_format: "%Q-nonsense".into(),
            ..Settings::default()
        };
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        assert_eq!(format_date(ts, &settings), "2024-01-15");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(0.425), "43%");
        assert_eq!(format_percentage(0.5), "50%");
        assert_eq!(format_percentage(1.0), "100%");
        assert_eq!(format_percentage(1.5), "150%");
    }
}

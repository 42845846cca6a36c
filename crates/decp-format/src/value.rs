//! French-locale rendering of scalar values.
//!
//! Every surface that shows a value to a reader (terminal tables,
//! CSV/PDF exports, summaries) goes through these functions so a given
//! record renders identically everywhere.

use chrono::{Datelike, NaiveDate};

/// Thousands separator used by the French locale (narrow no-break space).
const GROUP_SEPARATOR: char = '\u{202f}';

/// No-break space between the amount and the euro sign.
const CURRENCY_SPACE: char = '\u{a0}';

/// Render an amount as French-locale currency text: comma decimal
/// separator, narrow no-break-space grouping, trailing euro sign.
///
/// `1234567.89` renders as `1 234 567,89 €`.
pub fn format_currency(value: f64) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let cents = (value.abs() * 100.0).round() as u128;
    let units = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i).is_multiple_of(3) {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02}{CURRENCY_SPACE}€")
}

/// `Oui` / `Non`.
pub fn format_boolean(value: bool) -> &'static str {
    if value { "Oui" } else { "Non" }
}

/// French numeric date, `dd/mm/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Number of calendar months touched by the span from `from` to `to`,
/// inclusive on both ends: February 2025 through April 2026 is 15.
pub fn duration_in_months(from: NaiveDate, to: NaiveDate) -> i64 {
    let years = i64::from(to.year()) - i64::from(from.year());
    let months = i64::from(to.month()) - i64::from(from.month());
    years * 12 + months + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_and_symbols() {
        assert_eq!(
            format_currency(1_234_567.89),
            "1\u{202f}234\u{202f}567,89\u{a0}€"
        );
        assert_eq!(format_currency(980.0), "980,00\u{a0}€");
        assert_eq!(format_currency(0.5), "0,50\u{a0}€");
        assert_eq!(format_currency(-12_500.0), "-12\u{202f}500,00\u{a0}€");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(format_currency(0.005), format_currency(0.01));
    }

    #[test]
    fn boolean_tokens() {
        assert_eq!(format_boolean(true), "Oui");
        assert_eq!(format_boolean(false), "Non");
    }

    #[test]
    fn date_is_french_numeric() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 7).unwrap();
        assert_eq!(format_date(date), "07/04/2023");
    }

    #[test]
    fn month_spans_are_inclusive() {
        let from = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        assert_eq!(duration_in_months(from, to), 15);

        let same = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        assert_eq!(duration_in_months(from, same), 1);
    }
}

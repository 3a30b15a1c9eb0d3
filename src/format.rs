//! US dollar display formatting.

use crate::amortization::PaymentFrequencies;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Format an amount as US dollars with thousands separators and exactly two decimals.
///
/// Rounding is half away from zero on the shortest decimal form of the value, so `1.005`
/// shows as `$1.01`. Any amount below zero keeps its minus sign, even one that rounds to
/// zero cents (`-0.001` is `-$0.00`); negative zero prints as `$0.00`. Non-finite values
/// render as `$NaN` and `$∞`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}$∞");
    }

    let cents = to_cents(value.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// Non-negative amount rounded to cents, as `"1234.57"`
fn to_cents(amount: f64) -> String {
    match Decimal::from_str(&amount.to_string()) {
        Ok(decimal) => {
            let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        // Beyond the decimal range; float rounding is exact enough at that magnitude.
        Err(_) => format!("{amount:.2}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Display rows for a payment at each frequency, monthly first
pub fn format_payments(payments: &PaymentFrequencies) -> Vec<(&'static str, String)> {
    vec![
        ("Monthly", format_currency(payments.monthly)),
        ("Fortnightly", format_currency(payments.fortnightly)),
        ("Weekly", format_currency(payments.weekly)),
    ]
}

use loanwise::format::format_payments;
use loanwise::{PaymentFrequencies, format_currency};

#[test]
fn test_format_currency_basics() {
    assert_eq!(format_currency(1234.567), "$1,234.57");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(5.0), "$5.00");
    assert_eq!(format_currency(999.9), "$999.90");
    assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    assert_eq!(format_currency(100_000.0), "$100,000.00");
}

#[test]
fn test_format_currency_rounds_half_up() {
    assert_eq!(format_currency(0.125), "$0.13");
    assert_eq!(format_currency(1.005), "$1.01");
    assert_eq!(format_currency(2.675), "$2.68");
    assert_eq!(format_currency(999.995), "$1,000.00");
    assert_eq!(format_currency(0.004), "$0.00");
}

#[test]
fn test_format_currency_negative_and_non_finite() {
    assert_eq!(format_currency(-42.5), "-$42.50");
    assert_eq!(format_currency(-1234.567), "-$1,234.57");
    assert_eq!(format_currency(-0.001), "-$0.00");
    assert_eq!(format_currency(-0.0), "$0.00");
    assert_eq!(format_currency(f64::NAN), "$NaN");
    assert_eq!(format_currency(f64::INFINITY), "$∞");
    assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
}

#[test]
fn test_format_payment_rows() {
    let rows = format_payments(&PaymentFrequencies::from_monthly(1300.0));

    assert_eq!(
        rows,
        vec![
            ("Monthly", "$1,300.00".to_string()),
            ("Fortnightly", "$600.00".to_string()),
            ("Weekly", "$300.00".to_string()),
        ]
    );
}

//! Standard annuity math for single fixed-rate loans.
//!
//! Everything here is closed form and unguarded. A zero-length term gives an infinite
//! payment and NaN totals, and malformed inputs that arrive as NaN stay NaN. Callers
//! check for non-finite values before display.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed month length used for the fractional part of a loan term
pub const DAYS_PER_TERM_MONTH: f64 = 30.0;

/// Round half toward positive infinity, matching a browser's `Math.round`
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Fractional number of months between two dates.
///
/// Whole months come from the calendar fields; the day-of-month difference is added as a
/// fraction of a fixed 30-day month, whatever the real month length.
pub fn term_months(start: NaiveDate, end: NaiveDate) -> f64 {
    let years = f64::from(end.year() - start.year());
    let months = f64::from(end.month()) - f64::from(start.month());
    let days = f64::from(end.day()) - f64::from(start.day());
    years * 12.0 + months + days / DAYS_PER_TERM_MONTH
}

/// Payment figures of a level-payment loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnuityPayment {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Level monthly payment that repays `principal` over `total_months` (may be fractional).
pub fn annuity(principal: f64, annual_rate_percent: f64, total_months: f64) -> AnnuityPayment {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let monthly_payment = if monthly_rate == 0.0 {
        principal / total_months
    } else {
        let growth = (1.0 + monthly_rate).powf(total_months);
        principal * monthly_rate * growth / (growth - 1.0)
    };
    let total_payment = monthly_payment * total_months;

    AnnuityPayment {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    }
}

/// A single fixed-rate loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleLoan {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    /// Whole months; NaN only for an aggregate with nothing to average
    pub loan_term_months: f64,
}

impl LoanResult {
    /// The same monthly payment viewed per week, fortnight and month
    pub fn payment_frequencies(&self) -> PaymentFrequencies {
        PaymentFrequencies::from_monthly(self.monthly_payment)
    }
}

/// Amortize a loan over its date range.
///
/// The payment uses the unrounded fractional term; only the reported term is rounded.
pub fn calculate_loan(loan: &SingleLoan) -> LoanResult {
    let total_months = term_months(loan.start_date, loan.end_date);
    let payment = annuity(loan.principal, loan.annual_rate_percent, total_months);

    LoanResult {
        monthly_payment: payment.monthly_payment,
        total_payment: payment.total_payment,
        total_interest: payment.total_interest,
        loan_term_months: round_half_up(total_months),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    Weekly,
    Fortnightly,
    #[default]
    Monthly,
}

impl PaymentFrequency {
    pub fn periods_per_year(&self) -> f64 {
        match self {
            PaymentFrequency::Weekly => 52.0,
            PaymentFrequency::Fortnightly => 26.0,
            PaymentFrequency::Monthly => 12.0,
        }
    }

    /// Convert a monthly payment to this frequency.
    ///
    /// A display view only; no separate schedule is amortized.
    pub fn from_monthly(&self, monthly_payment: f64) -> f64 {
        match self {
            PaymentFrequency::Monthly => monthly_payment,
            other => monthly_payment / (other.periods_per_year() / 12.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFrequencies {
    pub weekly: f64,
    pub fortnightly: f64,
    pub monthly: f64,
}

impl PaymentFrequencies {
    pub fn from_monthly(monthly_payment: f64) -> Self {
        Self {
            weekly: PaymentFrequency::Weekly.from_monthly(monthly_payment),
            fortnightly: PaymentFrequency::Fortnightly.from_monthly(monthly_payment),
            monthly: monthly_payment,
        }
    }

    pub fn get(&self, frequency: PaymentFrequency) -> f64 {
        match frequency {
            PaymentFrequency::Weekly => self.weekly,
            PaymentFrequency::Fortnightly => self.fortnightly,
            PaymentFrequency::Monthly => self.monthly,
        }
    }
}

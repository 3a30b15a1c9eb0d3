//! Fixed-rate period of an existing loan, analysed from its current balance.
//!
//! Principal comes down in level steps sized from the original loan amount and the
//! original term, while interest is charged on the current balance at the fixed rate.
//! An optional future rate prices whatever is still owed when the fixed period ends.

use crate::amortization::{AnnuityPayment, annuity, round_half_up, term_months};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Remaining term assumed when estimating repayments after the fixed period.
///
/// The real remaining term is not used; hosts should show this as a disclaimer.
pub const ASSUMED_FUTURE_TERM_MONTHS: u32 = 360;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPeriodLoanInput {
    pub loan_amount: f64,
    pub total_term_years: f64,
    pub current_balance: f64,
    /// Fixed annual rate in percent
    pub rate: f64,
    pub loan_start_date: NaiveDate,
    pub fixed_rate_start_date: NaiveDate,
    pub fixed_rate_end_date: NaiveDate,
    pub analysis_start_date: NaiveDate,
    pub analysis_end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    /// 1-based month within the fixed-rate period
    pub month: u32,
    /// Balance at the start of the month
    pub balance: f64,
    pub principal: f64,
    pub interest: f64,
    pub total_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPeriod {
    pub months: u32,
    pub monthly_principal: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_payment: f64,
    pub remaining_balance: f64,
    /// Months from the loan start to the start of the fixed period
    pub elapsed_months: f64,
    pub remaining_term_months: f64,
    pub payment_breakdown: Vec<MonthEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPeriod {
    pub months: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub amount_to_pay: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureEstimate {
    pub rate: f64,
    pub principal: f64,
    pub assumed_term_months: u32,
    #[serde(flatten)]
    pub payment: AnnuityPayment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPeriodResult {
    pub total_period: TotalPeriod,
    pub selected_period: SelectedPeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_estimate: Option<FutureEstimate>,
}

/// Whole months from `from` to `to`, clamped into `0..=limit`
fn month_offset(from: NaiveDate, to: NaiveDate, limit: u32) -> u32 {
    let offset = round_half_up(term_months(from, to));
    if offset.is_nan() || offset <= 0.0 {
        0
    } else {
        offset.min(f64::from(limit)) as u32
    }
}

fn payment_breakdown(
    input: &FixedPeriodLoanInput,
    months: u32,
    monthly_principal: f64,
) -> Vec<MonthEntry> {
    let monthly_rate = input.rate / 100.0 / 12.0;
    (1..=months)
        .map(|month| {
            let balance = input.current_balance - monthly_principal * f64::from(month - 1);
            let interest = balance * monthly_rate;
            MonthEntry {
                month,
                balance,
                principal: monthly_principal,
                interest,
                total_payment: monthly_principal + interest,
            }
        })
        .collect()
}

pub fn calculate_fixed_period_loan(input: &FixedPeriodLoanInput) -> FixedPeriodResult {
    let monthly_principal = input.loan_amount / (input.total_term_years * 12.0);
    let months = month_offset(input.fixed_rate_start_date, input.fixed_rate_end_date, u32::MAX);
    let breakdown = payment_breakdown(input, months, monthly_principal);

    let total_principal: f64 = breakdown.iter().map(|m| m.principal).sum();
    let total_interest: f64 = breakdown.iter().map(|m| m.interest).sum();
    let remaining_balance = input.current_balance - monthly_principal * f64::from(months);
    let elapsed_months =
        round_half_up(term_months(input.loan_start_date, input.fixed_rate_start_date));

    // Analysis window, as month offsets into the fixed period.
    let window_start = month_offset(input.fixed_rate_start_date, input.analysis_start_date, months);
    let window_end = month_offset(input.fixed_rate_start_date, input.analysis_end_date, months);
    let in_window = |m: &&MonthEntry| m.month > window_start && m.month <= window_end;
    let selected_months = breakdown.iter().filter(in_window).count() as u32;
    let principal_paid: f64 = breakdown.iter().filter(in_window).map(|m| m.principal).sum();
    let interest_paid: f64 = breakdown.iter().filter(in_window).map(|m| m.interest).sum();

    let future_estimate = input.future_rate.map(|rate| FutureEstimate {
        rate,
        principal: remaining_balance,
        assumed_term_months: ASSUMED_FUTURE_TERM_MONTHS,
        payment: annuity(remaining_balance, rate, f64::from(ASSUMED_FUTURE_TERM_MONTHS)),
    });

    FixedPeriodResult {
        total_period: TotalPeriod {
            months,
            monthly_principal,
            total_principal,
            total_interest,
            total_payment: total_principal + total_interest,
            remaining_balance,
            elapsed_months,
            remaining_term_months: input.total_term_years * 12.0 - elapsed_months,
            payment_breakdown: breakdown,
        },
        selected_period: SelectedPeriod {
            months: selected_months,
            principal_paid,
            interest_paid,
            amount_to_pay: principal_paid + interest_paid,
        },
        future_estimate,
    }
}

//! Fixed-rate ladders: consecutive fixed-rate periods over the life of one loan.
//!
//! Each period is priced on its own dates. Unless a period carries its own principal it
//! amortizes the full original loan amount; balances are not carried from one period to
//! the next.

use crate::amortization::{LoanResult, SingleLoan, calculate_loan};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Average month length used for coverage figures.
///
/// Deliberately distinct from the 30-day month used for loan terms.
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedRatePeriod {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Balance to amortize in this period; the loan amount when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<f64>,
    pub annual_rate_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPeriodLoanInput {
    pub loan_amount: f64,
    pub loan_start_date: NaiveDate,
    pub loan_end_date: NaiveDate,
    pub periods: Vec<FixedRatePeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResult {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Length of the period on the average-month basis
    pub covered_months: f64,
    #[serde(flatten)]
    pub result: LoanResult,
}

/// Shape problem between two consecutive periods of a ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LadderIssue {
    /// `days` uncovered between the end of `after` and the start of `before`
    Gap { after: String, before: String, days: i64 },
    /// `before` starts `days` before `after` ends
    Overlap { after: String, before: String, days: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderSummary {
    pub total_payment: f64,
    pub total_interest: f64,
    pub total_covered_months: f64,
    pub total_loan_duration_months: f64,
    pub coverage_percentage: f64,
    pub issues: Vec<LadderIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPeriodResult {
    pub periods: Vec<PeriodResult>,
    pub summary: LadderSummary,
}

fn average_months(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / AVERAGE_DAYS_PER_MONTH
}

/// Gaps and overlaps between consecutive periods, in the order given.
///
/// A period starting on the day the previous one ends is contiguous.
pub fn ladder_issues(periods: &[FixedRatePeriod]) -> Vec<LadderIssue> {
    periods
        .windows(2)
        .filter_map(|pair| {
            let (after, before) = (&pair[0], &pair[1]);
            let days = (before.start_date - after.end_date).num_days();
            match days {
                0 => None,
                d if d > 0 => Some(LadderIssue::Gap {
                    after: after.id.clone(),
                    before: before.id.clone(),
                    days: d,
                }),
                d => Some(LadderIssue::Overlap {
                    after: after.id.clone(),
                    before: before.id.clone(),
                    days: -d,
                }),
            }
        })
        .collect()
}

pub fn calculate_multi_period_loan(input: &MultiPeriodLoanInput) -> MultiPeriodResult {
    let periods: Vec<PeriodResult> = input
        .periods
        .iter()
        .map(|period| {
            let principal = period.principal.unwrap_or(input.loan_amount);
            let result = calculate_loan(&SingleLoan {
                principal,
                annual_rate_percent: period.annual_rate_percent,
                start_date: period.start_date,
                end_date: period.end_date,
            });
            PeriodResult {
                id: period.id.clone(),
                label: period.label.clone(),
                principal,
                annual_rate_percent: period.annual_rate_percent,
                start_date: period.start_date,
                end_date: period.end_date,
                covered_months: average_months(period.start_date, period.end_date),
                result,
            }
        })
        .collect();

    let total_covered_months: f64 = periods.iter().map(|p| p.covered_months).sum();
    let total_loan_duration_months = average_months(input.loan_start_date, input.loan_end_date);

    let summary = LadderSummary {
        total_payment: periods.iter().map(|p| p.result.total_payment).sum(),
        total_interest: periods.iter().map(|p| p.result.total_interest).sum(),
        total_covered_months,
        total_loan_duration_months,
        coverage_percentage: total_covered_months / total_loan_duration_months * 100.0,
        issues: ladder_issues(&input.periods),
    };

    MultiPeriodResult { periods, summary }
}

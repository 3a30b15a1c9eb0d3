//! Split loans: one loan made of independently priced tranches.

use crate::amortization::{LoanResult, SingleLoan, calculate_loan, round_half_up};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tranche {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Tranche {
    fn as_loan(&self) -> SingleLoan {
        SingleLoan {
            principal: self.principal,
            annual_rate_percent: self.annual_rate_percent,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrancheResult {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub principal: f64,
    pub annual_rate_percent: f64,
    #[serde(flatten)]
    pub result: LoanResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLoanResult {
    pub combined: LoanResult,
    pub tranches: Vec<TrancheResult>,
    pub total_principal: f64,
}

/// Price every tranche on its own, then aggregate.
///
/// Payments and totals are plain sums. The combined term is the principal-weighted
/// average of the rounded tranche terms, so an empty split reports a NaN term.
pub fn calculate_split_loan(tranches: &[Tranche]) -> SplitLoanResult {
    let results: Vec<TrancheResult> = tranches
        .iter()
        .map(|tranche| TrancheResult {
            id: tranche.id.clone(),
            label: tranche.label.clone(),
            principal: tranche.principal,
            annual_rate_percent: tranche.annual_rate_percent,
            result: calculate_loan(&tranche.as_loan()),
        })
        .collect();

    let total_principal: f64 = results.iter().map(|t| t.principal).sum();
    let weighted_term: f64 = results
        .iter()
        .map(|t| t.result.loan_term_months * t.principal)
        .sum();

    let combined = LoanResult {
        monthly_payment: results.iter().map(|t| t.result.monthly_payment).sum(),
        total_payment: results.iter().map(|t| t.result.total_payment).sum(),
        total_interest: results.iter().map(|t| t.result.total_interest).sum(),
        loan_term_months: round_half_up(weighted_term / total_principal),
    };

    SplitLoanResult {
        combined,
        tranches: results,
        total_principal,
    }
}

//! Raw form payloads, as a front-end submits them: every field a string.
//!
//! Numbers are read leniently and malformed ones become NaN, which then flows through
//! the math untouched. Dates have no NaN, so a required date that does not parse is the
//! one input error reported here.

use crate::amortization::SingleLoan;
use crate::calculator::LoanRequest;
use crate::dates::parse_date;
use crate::error::CalcError;
use crate::fixed_period::FixedPeriodLoanInput;
use crate::multi_period::{FixedRatePeriod, MultiPeriodLoanInput};
use crate::split::Tranche;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read a number field; anything unreadable is NaN
pub fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

fn optional_number(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse_number)
}

fn required_date(field: &str, value: &str) -> Result<NaiveDate, CalcError> {
    parse_date(value).ok_or_else(|| CalcError::invalid_date(field, value))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleLoanForm {
    pub principal: String,
    pub interest_rate: String,
    pub start_date: String,
    pub end_date: String,
}

impl SingleLoanForm {
    pub fn parse(&self) -> Result<SingleLoan, CalcError> {
        Ok(SingleLoan {
            principal: parse_number(&self.principal),
            annual_rate_percent: parse_number(&self.interest_rate),
            start_date: required_date("startDate", &self.start_date)?,
            end_date: required_date("endDate", &self.end_date)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrancheForm {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub principal: String,
    pub interest_rate: String,
    pub start_date: String,
    pub end_date: String,
}

impl TrancheForm {
    pub fn parse(&self) -> Result<Tranche, CalcError> {
        Ok(Tranche {
            id: self.id.clone(),
            label: self.label.clone().filter(|l| !l.trim().is_empty()),
            principal: parse_number(&self.principal),
            annual_rate_percent: parse_number(&self.interest_rate),
            start_date: required_date(
                &format!("tranches[{}].startDate", self.id),
                &self.start_date,
            )?,
            end_date: required_date(
                &format!("tranches[{}].endDate", self.id),
                &self.end_date,
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPeriodForm {
    pub loan_amount: String,
    pub total_term_years: String,
    pub current_balance: String,
    pub rate: String,
    pub loan_start_date: String,
    pub fixed_rate_start_date: String,
    pub fixed_rate_end_date: String,
    pub analysis_start_date: String,
    pub analysis_end_date: String,
    #[serde(default)]
    pub future_rate: Option<String>,
}

impl FixedPeriodForm {
    pub fn parse(&self) -> Result<FixedPeriodLoanInput, CalcError> {
        Ok(FixedPeriodLoanInput {
            loan_amount: parse_number(&self.loan_amount),
            total_term_years: parse_number(&self.total_term_years),
            current_balance: parse_number(&self.current_balance),
            rate: parse_number(&self.rate),
            loan_start_date: required_date("loanStartDate", &self.loan_start_date)?,
            fixed_rate_start_date: required_date(
                "fixedRateStartDate",
                &self.fixed_rate_start_date,
            )?,
            fixed_rate_end_date: required_date("fixedRateEndDate", &self.fixed_rate_end_date)?,
            analysis_start_date: required_date("analysisStartDate", &self.analysis_start_date)?,
            analysis_end_date: required_date("analysisEndDate", &self.analysis_end_date)?,
            future_rate: optional_number(self.future_rate.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedRatePeriodForm {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub principal: Option<String>,
    pub interest_rate: String,
    pub start_date: String,
    pub end_date: String,
}

impl FixedRatePeriodForm {
    pub fn parse(&self) -> Result<FixedRatePeriod, CalcError> {
        Ok(FixedRatePeriod {
            id: self.id.clone(),
            label: self.label.clone().filter(|l| !l.trim().is_empty()),
            principal: optional_number(self.principal.as_deref()),
            annual_rate_percent: parse_number(&self.interest_rate),
            start_date: required_date(
                &format!("periods[{}].startDate", self.id),
                &self.start_date,
            )?,
            end_date: required_date(
                &format!("periods[{}].endDate", self.id),
                &self.end_date,
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiPeriodForm {
    pub loan_amount: String,
    pub loan_start_date: String,
    pub loan_end_date: String,
    pub periods: Vec<FixedRatePeriodForm>,
}

impl MultiPeriodForm {
    pub fn parse(&self) -> Result<MultiPeriodLoanInput, CalcError> {
        Ok(MultiPeriodLoanInput {
            loan_amount: parse_number(&self.loan_amount),
            loan_start_date: required_date("loanStartDate", &self.loan_start_date)?,
            loan_end_date: required_date("loanEndDate", &self.loan_end_date)?,
            periods: self
                .periods
                .iter()
                .map(FixedRatePeriodForm::parse)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Any calculator form, tagged by loan type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LoanForm {
    Single(SingleLoanForm),
    Split { tranches: Vec<TrancheForm> },
    FixedPeriod(FixedPeriodForm),
    FixedRate(MultiPeriodForm),
}

impl LoanForm {
    pub fn parse(&self) -> Result<LoanRequest, CalcError> {
        Ok(match self {
            LoanForm::Single(form) => LoanRequest::Single(form.parse()?),
            LoanForm::Split { tranches } => LoanRequest::Split {
                tranches: tranches.iter().map(TrancheForm::parse).collect::<Result<_, _>>()?,
            },
            LoanForm::FixedPeriod(form) => LoanRequest::FixedPeriod(form.parse()?),
            LoanForm::FixedRate(form) => LoanRequest::FixedRate(form.parse()?),
        })
    }
}

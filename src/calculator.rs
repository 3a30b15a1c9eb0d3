use crate::amortization::{LoanResult, SingleLoan, calculate_loan};
use crate::config::CalculatorConfig;
use crate::error::CalcError;
use crate::fixed_period::{FixedPeriodLoanInput, FixedPeriodResult, calculate_fixed_period_loan};
use crate::form::LoanForm;
use crate::multi_period::{MultiPeriodLoanInput, MultiPeriodResult, calculate_multi_period_loan};
use crate::safe::SafePacer;
use crate::split::{SplitLoanResult, Tranche, calculate_split_loan};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A calculation request, one variant per loan type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LoanRequest {
    Single(SingleLoan),
    Split { tranches: Vec<Tranche> },
    FixedPeriod(FixedPeriodLoanInput),
    FixedRate(MultiPeriodLoanInput),
}

impl LoanRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            LoanRequest::Single(_) => "single",
            LoanRequest::Split { .. } => "split",
            LoanRequest::FixedPeriod(_) => "fixed-period",
            LoanRequest::FixedRate(_) => "fixed-rate",
        }
    }

    /// Compute the result right away, without pacing
    pub fn evaluate(&self) -> LoanOutcome {
        match self {
            LoanRequest::Single(loan) => LoanOutcome::Single(calculate_loan(loan)),
            LoanRequest::Split { tranches } => LoanOutcome::Split(calculate_split_loan(tranches)),
            LoanRequest::FixedPeriod(input) => {
                LoanOutcome::FixedPeriod(calculate_fixed_period_loan(input))
            }
            LoanRequest::FixedRate(input) => {
                LoanOutcome::FixedRate(calculate_multi_period_loan(input))
            }
        }
    }
}

/// Result of a calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LoanOutcome {
    Single(LoanResult),
    Split(SplitLoanResult),
    FixedPeriod(FixedPeriodResult),
    FixedRate(MultiPeriodResult),
}

/// Front-end facing calculator.
///
/// Results are held back for a short delay so a loading state can show. Every call takes
/// a generation ticket; when a newer call or a [`LoanCalculator::reset`] lands while a
/// result is being held, the older result is dropped with [`CalcError::Superseded`]
/// instead of overwriting the newer one.
#[derive(Debug)]
pub struct LoanCalculator {
    pacer: SafePacer,
    delay: Duration,
    generation: AtomicU64,
}

impl LoanCalculator {
    pub fn new(pacer: SafePacer, delay: Duration) -> Self {
        Self {
            pacer,
            delay,
            generation: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(SafePacer::new(config.pacing), config.delay)
    }

    /// Create from `LOANCALC_*` environment variables
    pub fn from_env() -> Self {
        Self::from_config(&CalculatorConfig::from_env())
    }

    pub fn pacer(&self) -> &SafePacer {
        &self.pacer
    }

    /// Ticket of the most recent calculation or reset
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Invalidate every calculation still in flight
    pub fn reset(&self) {
        let latest = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(generation = latest, "calculator reset");
    }

    pub async fn calculate(&self, request: LoanRequest) -> Result<LoanOutcome, CalcError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(ticket, kind = request.kind(), "calculation started");

        self.pacer.pause(self.delay).await;
        let outcome = request.evaluate();

        let latest = self.generation();
        if latest != ticket {
            tracing::debug!(ticket, latest, "stale calculation discarded");
            return Err(CalcError::Superseded { ticket, latest });
        }
        tracing::debug!(ticket, kind = request.kind(), "calculation finished");
        Ok(outcome)
    }

    /// Parse a raw form, then calculate it
    pub async fn calculate_form(&self, form: &LoanForm) -> Result<LoanOutcome, CalcError> {
        let request = form.parse()?;
        self.calculate(request).await
    }
}

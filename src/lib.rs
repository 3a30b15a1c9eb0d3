//! # Loanwise
//!
//! The calculation core behind a loan calculator front-end: a date-range reconciliation
//! state machine for the forms, and closed-form amortization engines for the results.
//!
//! ## Features
//!
//! - **Date-range sync** - start date, end date and period stay consistent as any one is edited
//! - **Single loans** - standard annuity payment over a fractional-month term
//! - **Split loans** - independently priced tranches with a principal-weighted term
//! - **Fixed-rate periods** - level principal from the current balance, plus a future-rate estimate
//! - **Fixed-rate ladders** - consecutive periods with coverage and gap reporting
//! - **Paced async entry point** - a UX delay that is instant in tests, with stale results dropped
//!
//! ## Quick Start
//!
//! ```rust
//! use loanwise::{LoanCalculator, LoanOutcome, LoanRequest, PacingSource, SafePacer, SingleLoan};
//! use chrono::{Duration, NaiveDate};
//!
//! #[tokio::main]
//! async fn main() {
//!     let calculator = LoanCalculator::new(
//!         SafePacer::new(PacingSource::Simulated),
//!         Duration::milliseconds(500),
//!     );
//!
//!     let request = LoanRequest::Single(SingleLoan {
//!         principal: 100_000.0,
//!         annual_rate_percent: 5.5,
//!         start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         end_date: NaiveDate::from_ymd_opt(2029, 12, 31).unwrap(),
//!     });
//!
//!     let Ok(LoanOutcome::Single(result)) = calculator.calculate(request).await else {
//!         panic!("expected a single loan result");
//!     };
//!     assert_eq!(result.loan_term_months, 72.0);
//!     println!("Monthly payment: {}", loanwise::format_currency(result.monthly_payment));
//! }
//! ```
//!
//! ## Date-Range Example
//!
//! ```rust
//! use loanwise::{DateRangeState, DateRangeSync, PeriodUnit};
//!
//! let mut range = DateRangeSync::new(
//!     DateRangeState::new("2024-01-15", "").with_period("6", PeriodUnit::Months),
//! );
//! range.handle_start_date_change("2024-03-01");
//! assert_eq!(range.state().end_date, "2024-09-01");
//!
//! range.handle_end_date_change("2024-02-01");
//! assert!(!range.errors().is_empty());
//! ```

pub mod amortization;
pub mod calculator;
pub mod config;
pub mod control;
pub mod dates;
pub mod error;
pub mod fixed_period;
pub mod form;
pub mod format;
pub mod multi_period;
pub mod provider;
pub mod reconcile;
pub mod safe;
pub mod simulated;
pub mod split;
pub mod system;

// Re-export main types for convenience
pub use amortization::{
    AnnuityPayment, LoanResult, PaymentFrequencies, PaymentFrequency, SingleLoan, annuity,
    calculate_loan, term_months,
};
pub use calculator::{LoanCalculator, LoanOutcome, LoanRequest};
pub use config::{CalculatorConfig, PacingSource};
pub use control::PaceControl;
pub use dates::{
    DateValidationErrors, PeriodUnit, add_period_to_date, calculate_period_between,
    validate_date_range,
};
pub use error::CalcError;
pub use fixed_period::{FixedPeriodLoanInput, FixedPeriodResult, calculate_fixed_period_loan};
pub use form::LoanForm;
pub use format::format_currency;
pub use multi_period::{
    FixedRatePeriod, LadderIssue, MultiPeriodLoanInput, MultiPeriodResult,
    calculate_multi_period_loan,
};
pub use provider::{Pacer, SharedPacer};
pub use reconcile::{DateRangeState, DateRangeSync, Edit, Effect, Transition, reconcile};
pub use safe::SafePacer;
pub use simulated::SimulatedPacer;
pub use split::{SplitLoanResult, Tranche, TrancheResult, calculate_split_loan};
pub use system::SystemPacer;

// Re-export chrono types that are part of our API
pub use chrono::{Duration, NaiveDate};

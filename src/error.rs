use thiserror::Error;

/// Errors surfaced by the calculator boundary.
///
/// The loan math never fails: bad numbers flow through as NaN or infinity. Only inputs that
/// cannot be represented at all, and results that arrive after a newer request, are errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid date for {field}: {value:?}")]
    InvalidDate { field: String, value: String },

    #[error("Calculation {ticket} was superseded by calculation {latest}")]
    Superseded { ticket: u64, latest: u64 },
}

impl CalcError {
    pub(crate) fn invalid_date(field: &str, value: &str) -> Self {
        CalcError::InvalidDate {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

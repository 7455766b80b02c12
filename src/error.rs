use thiserror::Error;

/// Main error type of the crate.
/// Aggregates the errors a host can trigger through its parameters.
#[derive(Error, Debug, PartialEq)]
pub enum RowsToHeaderError {
    #[error("{0}")]
    RangeError(#[from] crate::database::range::RangeError),

    #[error("{0}")]
    ParameterError(#[from] crate::extension::ParameterError),
}

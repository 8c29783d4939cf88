use thiserror::Error;

use crate::portfolio::statement::StatementError;
use crate::quotes::MarketDataError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Statement import failed: {0}")]
    Statement(#[from] StatementError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// Add From implementation for rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_errors_wrap_into_the_root_error() {
        let err: Error = StatementError::Empty.into();
        assert!(matches!(err, Error::Statement(StatementError::Empty)));

        let err: Error = ValidationError::InvalidInput("bad row".to_string()).into();
        assert!(err.to_string().contains("bad row"));

        let err: Error = MarketDataError::NotFound("1120.SR".to_string()).into();
        assert!(matches!(err, Error::MarketData(_)));
    }
}

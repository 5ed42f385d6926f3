//! Error handling for the application

/// Failures raised by the quote calculator and formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("Arithmetic overflow while computing {field}")]
    Overflow { field: &'static str },

    #[error("Invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_error_display() {
        let err = QuoteError::Overflow { field: "base" };
        assert!(err.to_string().contains("base"));

        let err = QuoteError::InvalidCurrency("EU".to_string());
        assert!(err.to_string().contains("\"EU\""));
    }

    #[test]
    fn test_app_error_wraps_quote_error() {
        let err: AppError = QuoteError::InvalidCurrency("??".to_string()).into();
        assert!(matches!(err, AppError::Quote(QuoteError::InvalidCurrency(_))));
        assert!(err.to_string().starts_with("Quote error:"));
    }
}

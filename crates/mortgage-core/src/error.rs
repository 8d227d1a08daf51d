use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    /// A numeric-domain violation rejected by the amortization engine.
    #[error("Invalid argument: {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// A malformed mortgage request rejected before reaching the engine.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MortgageError {
    pub(crate) fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::Serialization(e.to_string())
    }
}

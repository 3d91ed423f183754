use thiserror::Error;

use crate::support::{constraint::ConstraintError, tokens::TokenError};

/// Errors that may occur when building or combining thermo data.
#[derive(Debug, Error)]
pub enum ThermoError {
    /// Construction input is missing fields, has non-numeric fields, or holds
    /// values outside their physical domain.
    #[error("malformed input: {context}")]
    MalformedInput { context: String },

    /// Two definitions that must describe the same species do not.
    #[error("shape mismatch: {context}")]
    ShapeMismatch { context: String },

    /// A record file could not be read.
    #[error("failed to read records")]
    Io(#[from] std::io::Error),

    /// A record file or string is not valid JSON for the expected schema.
    #[error("failed to parse records")]
    Json(#[from] serde_json::Error),
}

impl ThermoError {
    pub(crate) fn malformed(context: impl Into<String>) -> Self {
        Self::MalformedInput {
            context: context.into(),
        }
    }

    pub(crate) fn invalid(field: &str, error: ConstraintError) -> Self {
        Self::malformed(format!("{field}: {error}"))
    }
}

impl From<TokenError> for ThermoError {
    fn from(error: TokenError) -> Self {
        Self::malformed(error.to_string())
    }
}

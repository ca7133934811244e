use thiserror::Error;

/// Top-level error type for path synthesis.
///
/// Every stage validates its own preconditions and fails fast with
/// [`HumanCurveError::InvalidInput`]; no partial results are returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HumanCurveError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl HumanCurveError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Convenience type alias for results using [`HumanCurveError`].
pub type Result<T> = std::result::Result<T, HumanCurveError>;

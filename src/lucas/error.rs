//! Calculation error types

/// Errors produced before the engine runs.
///
/// Once `n` is validated the engine itself cannot fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The payload is missing, unparseable, or `n` is out of domain.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl CalculationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = CalculationError::invalid("n must be non-negative");
        assert_eq!(err.to_string(), "invalid request: n must be non-negative");
    }
}

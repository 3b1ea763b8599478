//! Effect error types

use thiserror::Error;

/// Errors that can occur while building or evaluating effect functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    /// Invalid shape parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Shape name that does not match any known response shape
    #[error("Unknown effect shape: {0}")]
    UnknownShape(String),
}

impl EffectError {
    /// Shorthand for an [`EffectError::InvalidParameter`]
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let error = EffectError::invalid("ramp_period", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'ramp_period': must be positive"
        );
    }

    #[test]
    fn test_unknown_shape_message() {
        let error = EffectError::UnknownShape("sawtooth".to_string());
        assert_eq!(error.to_string(), "Unknown effect shape: sawtooth");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EffectError>();
    }
}

//! Forecast error types

use dataset_spi::DatasetError;
use effect_spi::EffectError;
use thiserror::Error;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Trend must be fitted before prediction
    #[error("Trend must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Indicator with neither observations nor impact links
    #[error("Unknown indicator: {0}")]
    UnknownIndicator(String),

    /// Effect shape could not be built
    #[error(transparent)]
    Effect(#[from] EffectError),

    /// Dataset inconsistency discovered while forecasting
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl ForecastError {
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

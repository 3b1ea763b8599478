//! Trait for confidence interval computation

use dataset_spi::ConfidenceLevel;

use crate::model::ConfidenceInterval;

/// Computes the interval around an event-augmented point estimate
pub trait ConfidenceIntervalComputer: Send + Sync {
    /// Interval around `base_estimate`, given the event adjustment it contains,
    /// the confidence of that adjustment and the trend's prediction error
    fn compute(
        &self,
        base_estimate: f64,
        event_adjustment: f64,
        confidence: ConfidenceLevel,
        trend_std_error: f64,
    ) -> ConfidenceInterval;
}

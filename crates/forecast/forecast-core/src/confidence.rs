//! Confidence interval implementations
//!
//! The interval around an event-augmented estimate has two parts: a relative
//! band around the event adjustment, sized by how much the contributing
//! links are trusted, and the trend's prediction error.

use dataset_spi::ConfidenceLevel;
use forecast_spi::{ComposerConfig, ConfidenceInterval, ConfidenceIntervalComputer, ConfidenceWidths};

/// Interval computer combining event-adjustment uncertainty with trend error
#[derive(Debug, Clone)]
pub struct EventIntervalComputer {
    widths: ConfidenceWidths,
    confidence_level: f64,
    include_trend_error: bool,
}

impl EventIntervalComputer {
    pub fn new(widths: ConfidenceWidths, confidence_level: f64) -> Self {
        Self {
            widths,
            confidence_level,
            include_trend_error: true,
        }
    }

    pub fn from_config(config: &ComposerConfig) -> Self {
        Self {
            widths: config.confidence_widths,
            confidence_level: config.confidence_level,
            include_trend_error: config.include_trend_error,
        }
    }

    /// Ignore the trend's prediction error
    pub fn without_trend_error(mut self) -> Self {
        self.include_trend_error = false;
        self
    }

    /// Half-width of the interval
    pub fn half_width(
        &self,
        event_adjustment: f64,
        confidence: ConfidenceLevel,
        trend_std_error: f64,
    ) -> f64 {
        let event_part = self.widths.for_level(confidence) * event_adjustment.abs();
        let trend_part = if self.include_trend_error {
            z_score(self.confidence_level) * trend_std_error.abs()
        } else {
            0.0
        };
        event_part + trend_part
    }
}

impl Default for EventIntervalComputer {
    fn default() -> Self {
        Self::new(ConfidenceWidths::default(), 0.95)
    }
}

impl ConfidenceIntervalComputer for EventIntervalComputer {
    fn compute(
        &self,
        base_estimate: f64,
        event_adjustment: f64,
        confidence: ConfidenceLevel,
        trend_std_error: f64,
    ) -> ConfidenceInterval {
        let half_width = self.half_width(event_adjustment, confidence, trend_std_error);
        ConfidenceInterval::symmetric(base_estimate, half_width, self.confidence_level)
    }
}

/// Get z-score for a given confidence level
pub fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        _ => 1.96, // default to 95%
    }
}

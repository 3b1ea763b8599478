//! Confidence interval model

use serde::{Deserialize, Serialize};

/// Interval around a single point estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Point estimate the interval surrounds
    pub estimate: f64,
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Symmetric interval of `half_width` around `estimate`
    pub fn symmetric(estimate: f64, half_width: f64, confidence_level: f64) -> Self {
        let half_width = half_width.abs();
        Self {
            estimate,
            low: estimate - half_width,
            high: estimate + half_width,
            confidence_level,
        }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_bounds() {
        let ci = ConfidenceInterval::symmetric(64.0, 5.0, 0.95);
        assert_eq!(ci.low, 59.0);
        assert_eq!(ci.high, 69.0);
        assert_eq!(ci.width(), 10.0);
        assert!(ci.contains(64.0));
        assert!(!ci.contains(70.0));
    }

    #[test]
    fn test_negative_half_width_is_absolute() {
        let ci = ConfidenceInterval::symmetric(10.0, -2.0, 0.9);
        assert!(ci.low <= ci.estimate && ci.estimate <= ci.high);
        assert_eq!(ci.width(), 4.0);
    }
}

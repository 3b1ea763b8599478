//! Fitted trend parameters

use serde::{Deserialize, Serialize};

/// Ordinary least squares line `value = intercept + slope × x`.
///
/// `x` is in decimal years; `mean_x` and `sxx` are kept so the prediction
/// standard error can be computed anywhere along the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    /// Change per year
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n_observations: usize,
    /// Residual standard error with `n - 2` degrees of freedom (0 for two points)
    pub residual_std_error: f64,
    pub mean_x: f64,
    /// Σ (x - mean_x)²
    pub sxx: f64,
}

impl TrendFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Standard error of a new observation at `x`
    pub fn prediction_std_error(&self, x: f64) -> f64 {
        if self.n_observations == 0 || self.sxx <= 0.0 {
            return 0.0;
        }
        let n = self.n_observations as f64;
        let dx = x - self.mean_x;
        self.residual_std_error * (1.0 + 1.0 / n + dx * dx / self.sxx).sqrt()
    }
}

/// Whether an indicator has a usable trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendStatus {
    Fitted(TrendFit),
    /// Too few observations; no numeric trend is reported
    Undefined { observations: usize },
}

impl TrendStatus {
    pub fn fit(&self) -> Option<&TrendFit> {
        match self {
            TrendStatus::Fitted(fit) => Some(fit),
            TrendStatus::Undefined { .. } => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, TrendStatus::Fitted(_))
    }
}

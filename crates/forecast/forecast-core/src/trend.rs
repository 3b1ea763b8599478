//! Linear trend for indicator series
//!
//! Uses ordinary least squares (OLS) over `(decimal year, value)` points.
//! Survey rounds are irregular (2011, 2014, 2017, 2021, 2024), so the time
//! axis is the observation date itself, not a running index.

use dataset_spi::Observation;
use effect_spi::decimal_year;
use forecast_spi::{ForecastError, Result, TrendFit, TrendModel};

/// OLS trend `value = intercept + slope × year`
///
/// # Example
///
/// ```rust
/// use forecast_core::trend::LinearTrend;
/// use forecast_core::TrendModel;
///
/// let points = [(2011.0, 14.0), (2014.0, 22.0), (2017.0, 35.0), (2021.0, 46.0), (2024.0, 49.0)];
/// let mut trend = LinearTrend::new();
/// trend.fit(&points).unwrap();
///
/// let value = trend.predict_at(2025.0).unwrap();
/// assert!((value - 54.8).abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct LinearTrend {
    min_observations: usize,
    fit: Option<TrendFit>,
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearTrend {
    pub fn new() -> Self {
        Self {
            min_observations: 2,
            fit: None,
        }
    }

    /// Require more than two points before a trend is reported
    pub fn with_min_observations(min_observations: usize) -> Self {
        Self {
            min_observations: min_observations.max(2),
            fit: None,
        }
    }

    pub fn slope(&self) -> Option<f64> {
        self.fit.as_ref().map(|f| f.slope)
    }

    pub fn r_squared(&self) -> Option<f64> {
        self.fit.as_ref().map(|f| f.r_squared)
    }

    /// Residuals of the fitted line at `points`
    pub fn residuals(&self, points: &[(f64, f64)]) -> Vec<f64> {
        match &self.fit {
            Some(fit) => points.iter().map(|&(x, y)| y - fit.predict(x)).collect(),
            None => Vec::new(),
        }
    }

    fn fitted(&self) -> Result<&TrendFit> {
        self.fit.as_ref().ok_or(ForecastError::NotFitted)
    }
}

impl TrendModel for LinearTrend {
    fn fit(&mut self, points: &[(f64, f64)]) -> Result<()> {
        self.fit = None;
        if points.len() < self.min_observations {
            return Err(ForecastError::InsufficientData {
                required: self.min_observations,
                actual: points.len(),
            });
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

        // Centered sums keep the normal equations well conditioned for x ~ 2000
        let sxx: f64 = points.iter().map(|&(x, _)| (x - mean_x).powi(2)).sum();
        let sxy: f64 = points
            .iter()
            .map(|&(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        if sxx.abs() < 1e-10 {
            return Err(ForecastError::NumericalError(
                "Singular matrix in regression".to_string(),
            ));
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = points
            .iter()
            .map(|&(x, y)| (y - (intercept + slope * x)).powi(2))
            .sum();

        let r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };
        let residual_std_error = if points.len() > 2 {
            (ss_res / (n - 2.0)).sqrt()
        } else {
            0.0
        };

        self.fit = Some(TrendFit {
            slope,
            intercept,
            r_squared,
            n_observations: points.len(),
            residual_std_error,
            mean_x,
            sxx,
        });
        Ok(())
    }

    fn predict_at(&self, x: f64) -> Result<f64> {
        Ok(self.fitted()?.predict(x))
    }

    fn prediction_std_error(&self, x: f64) -> Result<f64> {
        Ok(self.fitted()?.prediction_std_error(x))
    }

    fn fit_summary(&self) -> Option<&TrendFit> {
        self.fit.as_ref()
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// `(decimal year, value)` points of a series
pub fn observation_points(observations: &[&Observation]) -> Vec<(f64, f64)> {
    observations
        .iter()
        .map(|o| (decimal_year(o.date), o.value))
        .collect()
}

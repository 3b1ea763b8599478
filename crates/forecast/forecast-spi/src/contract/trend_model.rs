//! Trend model trait

use crate::error::Result;
use crate::model::TrendFit;

/// Historical trend fitted over `(time, value)` observations.
///
/// Time is in decimal years.
pub trait TrendModel: Send + Sync {
    /// Fit the trend; fails with `InsufficientData` below the model's minimum
    fn fit(&mut self, points: &[(f64, f64)]) -> Result<()>;

    /// Trend value at time `x`
    fn predict_at(&self, x: f64) -> Result<f64>;

    /// Standard error of a new observation at time `x`
    fn prediction_std_error(&self, x: f64) -> Result<f64>;

    /// Fitted parameters
    fn fit_summary(&self) -> Option<&TrendFit>;

    fn is_fitted(&self) -> bool {
        self.fit_summary().is_some()
    }

    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;

    /// Mock implementation: flat line at the mean
    struct MeanTrend {
        fit: Option<TrendFit>,
    }

    impl TrendModel for MeanTrend {
        fn fit(&mut self, points: &[(f64, f64)]) -> Result<()> {
            if points.is_empty() {
                return Err(ForecastError::InsufficientData {
                    required: 1,
                    actual: 0,
                });
            }
            let mean = points.iter().map(|p| p.1).sum::<f64>() / points.len() as f64;
            self.fit = Some(TrendFit {
                slope: 0.0,
                intercept: mean,
                r_squared: 0.0,
                n_observations: points.len(),
                residual_std_error: 0.0,
                mean_x: 0.0,
                sxx: 0.0,
            });
            Ok(())
        }

        fn predict_at(&self, _x: f64) -> Result<f64> {
            self.fit
                .as_ref()
                .map(|f| f.intercept)
                .ok_or(ForecastError::NotFitted)
        }

        fn prediction_std_error(&self, _x: f64) -> Result<f64> {
            Ok(0.0)
        }

        fn fit_summary(&self) -> Option<&TrendFit> {
            self.fit.as_ref()
        }

        fn name(&self) -> &str {
            "mean"
        }
    }

    #[test]
    fn test_predict_before_fit() {
        let model = MeanTrend { fit: None };
        assert!(!model.is_fitted());
        assert_eq!(model.predict_at(2025.0), Err(ForecastError::NotFitted));
    }

    #[test]
    fn test_trend_model_as_trait_object() {
        let mut model: Box<dyn TrendModel> = Box::new(MeanTrend { fit: None });
        model.fit(&[(2020.0, 10.0), (2021.0, 20.0)]).unwrap();
        assert!(model.is_fitted());
        assert_eq!(model.predict_at(2030.0).unwrap(), 15.0);
        assert_eq!(model.name(), "mean");
    }
}

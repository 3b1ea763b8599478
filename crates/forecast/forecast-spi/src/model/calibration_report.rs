//! Impact link validation result

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationStatus {
    /// Compared against observations on both sides of the onset
    Validated,
    /// No observation on one side of the onset
    Unvalidated,
}

/// Predicted versus observed change for one impact link.
///
/// `adjustment_factor` multiplies the raw magnitude to obtain the refined one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReport {
    pub link_id: String,
    pub event_id: String,
    pub indicator_code: String,
    pub status: CalibrationStatus,
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
    pub predicted_change: Option<f64>,
    pub observed_change: Option<f64>,
    /// `predicted - observed`
    pub error: Option<f64>,
    pub adjustment_factor: f64,
}

impl CalibrationReport {
    pub fn unvalidated(link_id: &str, event_id: &str, indicator_code: &str) -> Self {
        Self {
            link_id: link_id.to_string(),
            event_id: event_id.to_string(),
            indicator_code: indicator_code.to_string(),
            status: CalibrationStatus::Unvalidated,
            window_start: None,
            window_end: None,
            predicted_change: None,
            observed_change: None,
            error: None,
            adjustment_factor: 1.0,
        }
    }

    pub fn is_validated(&self) -> bool {
        self.status == CalibrationStatus::Validated
    }

    /// Magnitude reduction in percent (70.0 means "reduced by 70%")
    pub fn reduction_pct(&self) -> f64 {
        (1.0 - self.adjustment_factor) * 100.0
    }

    pub fn over_predicted(&self) -> bool {
        self.adjustment_factor < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unvalidated_keeps_magnitude() {
        let report = CalibrationReport::unvalidated("IMP_0003", "EVT_0003", "ACC_OWNERSHIP");
        assert!(!report.is_validated());
        assert_eq!(report.adjustment_factor, 1.0);
        assert_eq!(report.reduction_pct(), 0.0);
        assert!(!report.over_predicted());
    }

    #[test]
    fn test_reduction_percentage() {
        let report = CalibrationReport {
            status: CalibrationStatus::Validated,
            predicted_change: Some(15.0),
            observed_change: Some(4.5),
            error: Some(10.5),
            adjustment_factor: 0.3,
            ..CalibrationReport::unvalidated("IMP_0001", "EVT_0001", "ACC_OWNERSHIP")
        };
        assert!(report.over_predicted());
        assert!((report.reduction_pct() - 70.0).abs() < 1e-9);
    }
}

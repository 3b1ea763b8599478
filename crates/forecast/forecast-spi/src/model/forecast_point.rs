//! Forecast point and its per-link breakdown

use std::fmt;

use chrono::NaiveDate;
use dataset_spi::ConfidenceLevel;
use effect_spi::ShapeKind;
use serde::{Deserialize, Serialize};

/// One impact link's share of an event adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContribution {
    pub link_id: String,
    pub event_id: String,
    pub shape: ShapeKind,
    /// Signed shape value before evidence scaling
    pub raw_effect: f64,
    /// Evidence-derived scaling factor
    pub scale: f64,
    /// `raw_effect × scale`
    pub value: f64,
    pub confidence: ConfidenceLevel,
}

/// Forecast scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Pessimistic,
    Base,
    Optimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Pessimistic, Scenario::Base, Scenario::Optimistic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Pessimistic => "pessimistic",
            Scenario::Base => "base",
            Scenario::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast of one indicator at one target date.
///
/// When the trend is undefined only `event_adjustment` and the
/// contributions are reported; every trend-dependent value is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub indicator_code: String,
    pub target_date: NaiveDate,
    pub year: i32,
    pub trend_value: Option<f64>,
    pub event_adjustment: f64,
    pub base_estimate: Option<f64>,
    pub pessimistic: Option<f64>,
    pub optimistic: Option<f64>,
    pub ci_low: Option<f64>,
    pub ci_high: Option<f64>,
    /// Weakest confidence among contributing links
    pub confidence: ConfidenceLevel,
    pub trend_defined: bool,
    /// Set when any reported value was pulled into the configured bounds
    pub clamped: bool,
    pub contributions: Vec<EventContribution>,
}

impl ForecastPoint {
    pub fn scenario_value(&self, scenario: Scenario) -> Option<f64> {
        match scenario {
            Scenario::Pessimistic => self.pessimistic,
            Scenario::Base => self.base_estimate,
            Scenario::Optimistic => self.optimistic,
        }
    }

    /// Contributions that are non-zero at the target date
    pub fn active_contributions(&self) -> impl Iterator<Item = &EventContribution> {
        self.contributions.iter().filter(|c| c.value != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> ForecastPoint {
        ForecastPoint {
            indicator_code: "ACC_OWNERSHIP".to_string(),
            target_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            year: 2025,
            trend_value: Some(54.8),
            event_adjustment: 9.5,
            base_estimate: Some(64.3),
            pessimistic: Some(59.55),
            optimistic: Some(68.1),
            ci_low: Some(53.0),
            ci_high: Some(75.6),
            confidence: ConfidenceLevel::Medium,
            trend_defined: true,
            clamped: false,
            contributions: vec![EventContribution {
                link_id: "IMP_0003".to_string(),
                event_id: "EVT_0003".to_string(),
                shape: ShapeKind::Ramp,
                raw_effect: 0.0,
                scale: 0.3,
                value: 0.0,
                confidence: ConfidenceLevel::Low,
            }],
        }
    }

    #[test]
    fn test_scenario_value_lookup() {
        let point = point();
        assert_eq!(point.scenario_value(Scenario::Base), Some(64.3));
        assert_eq!(point.scenario_value(Scenario::Pessimistic), Some(59.55));
        assert_eq!(point.scenario_value(Scenario::Optimistic), Some(68.1));
    }

    #[test]
    fn test_zero_contributions_are_inactive() {
        assert_eq!(point().active_contributions().count(), 0);
    }

    #[test]
    fn test_scenario_display() {
        let names: Vec<String> = Scenario::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["pessimistic", "base", "optimistic"]);
    }
}

//! Indicator observation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ConfidenceLevel;

/// A measured value of an indicator at a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub record_id: String,
    pub indicator_code: String,
    pub indicator: Option<String>,
    pub pillar: Option<String>,
    pub date: NaiveDate,
    pub value: f64,
    pub source: Option<String>,
    pub confidence: ConfidenceLevel,
    /// Disaggregation; `None` or `all` for the national aggregate
    pub gender: Option<String>,
}

impl Observation {
    /// Whether this is the aggregate series used for trend fitting
    pub fn is_aggregate(&self) -> bool {
        match self.gender.as_deref() {
            None => true,
            Some(g) => g.eq_ignore_ascii_case("all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(gender: Option<&str>) -> Observation {
        Observation {
            record_id: "REC_0001".to_string(),
            indicator_code: "ACC_OWNERSHIP".to_string(),
            indicator: None,
            pillar: Some("ACCESS".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            value: 49.0,
            source: None,
            confidence: ConfidenceLevel::High,
            gender: gender.map(str::to_string),
        }
    }

    #[test]
    fn test_aggregate_detection() {
        assert!(observation(None).is_aggregate());
        assert!(observation(Some("all")).is_aggregate());
        assert!(observation(Some("ALL")).is_aggregate());
        assert!(!observation(Some("female")).is_aggregate());
    }
}

//! Raw row of the unified table, before validation

use serde::{Deserialize, Serialize};

/// One untyped row as it appears in the unified CSV.
///
/// Every column is optional here; [`crate::Record`] is the validated form.
/// Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub record_id: Option<String>,
    pub record_type: Option<String>,
    pub category: Option<String>,
    pub pillar: Option<String>,
    pub indicator: Option<String>,
    pub indicator_code: Option<String>,
    pub value_numeric: Option<f64>,
    pub observation_date: Option<String>,
    pub source_name: Option<String>,
    pub confidence: Option<String>,
    pub gender: Option<String>,
    pub parent_id: Option<String>,
    pub related_indicator: Option<String>,
    pub impact_direction: Option<String>,
    pub impact_magnitude: Option<String>,
    pub impact_estimate: Option<f64>,
    pub refined_estimate: Option<f64>,
    pub lag_months: Option<f64>,
    pub refined_lag_months: Option<f64>,
    pub evidence_basis: Option<String>,
    pub effect_shape: Option<String>,
    pub notes: Option<String>,
}

impl RawRecord {
    /// Start a raw row with its id and type set
    pub fn new(record_id: &str, record_type: &str) -> Self {
        Self {
            record_id: Some(record_id.to_string()),
            record_type: Some(record_type.to_string()),
            ..Self::default()
        }
    }

    /// Trimmed text of an optional column, `None` when blank
    pub fn text(field: &Option<String>) -> Option<&str> {
        field.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_identity() {
        let raw = RawRecord::new("EVT_0001", "event");
        assert_eq!(raw.record_id.as_deref(), Some("EVT_0001"));
        assert_eq!(raw.record_type.as_deref(), Some("event"));
        assert!(raw.pillar.is_none());
    }

    #[test]
    fn test_text_treats_blank_as_missing() {
        assert_eq!(RawRecord::text(&Some("  ".to_string())), None);
        assert_eq!(RawRecord::text(&Some(" ACCESS ".to_string())), Some("ACCESS"));
        assert_eq!(RawRecord::text(&None), None);
    }
}

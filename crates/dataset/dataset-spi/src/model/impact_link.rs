//! Modeled causal edge from an event to an indicator

use effect_spi::ShapeKind;
use serde::{Deserialize, Serialize};

use super::{ConfidenceLevel, Direction, EvidenceBasis, MagnitudeClass};

/// How an event is expected to move one indicator.
///
/// The raw estimate (`magnitude`, `lag_months`) is kept alongside any refined
/// post-validation values so that calibration stays auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactLink {
    pub link_id: String,
    pub event_id: String,
    pub indicator_code: String,
    pub direction: Direction,
    pub magnitude_class: Option<MagnitudeClass>,
    /// Raw estimate in percentage points, unsigned
    pub magnitude: f64,
    pub refined_magnitude: Option<f64>,
    /// Raw lag in months
    pub lag_months: f64,
    pub refined_lag_months: Option<f64>,
    pub evidence_basis: EvidenceBasis,
    pub evidence_source: Option<String>,
    pub confidence: ConfidenceLevel,
    /// Explicit response shape; when absent it is chosen from the event category
    pub shape: Option<ShapeKind>,
}

impl ImpactLink {
    /// Refined magnitude when present, else the raw estimate
    pub fn effective_magnitude(&self) -> f64 {
        self.refined_magnitude.unwrap_or(self.magnitude)
    }

    /// Refined lag when present, else the raw lag
    pub fn effective_lag(&self) -> f64 {
        self.refined_lag_months.unwrap_or(self.lag_months)
    }

    /// Effective magnitude carrying the sign of the direction
    pub fn signed_magnitude(&self) -> f64 {
        self.direction.sign() * self.effective_magnitude()
    }

    /// Raw magnitude carrying the sign of the direction
    pub fn signed_raw_magnitude(&self) -> f64 {
        self.direction.sign() * self.magnitude
    }

    pub fn is_refined(&self) -> bool {
        self.refined_magnitude.is_some() || self.refined_lag_months.is_some()
    }

    /// Relative change of the refined magnitude against the raw one
    /// (`-0.5` means "reduced by 50%")
    pub fn refinement_ratio(&self) -> Option<f64> {
        let refined = self.refined_magnitude?;
        if self.magnitude == 0.0 {
            return None;
        }
        Some(refined / self.magnitude - 1.0)
    }

    /// A copy with refined values set; the raw estimate is left untouched
    pub fn with_refinement(&self, magnitude: f64, lag_months: Option<f64>) -> Self {
        Self {
            refined_magnitude: Some(magnitude),
            refined_lag_months: lag_months.or(self.refined_lag_months),
            ..self.clone()
        }
    }
}

//! Scenario bounds
//!
//! Only the event adjustment is scaled; the trend is the same in every scenario.

use forecast_spi::{Scenario, ScenarioMultipliers};
use serde::{Deserialize, Serialize};

/// Pessimistic, base and optimistic values of one forecast point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioValues {
    pub pessimistic: f64,
    pub base: f64,
    pub optimistic: f64,
}

impl ScenarioValues {
    /// Scenario values around `trend`.
    ///
    /// The pessimistic value takes the smaller of the two scaled adjustments
    /// so a negative net adjustment still yields `pessimistic <= optimistic`.
    pub fn compute(trend: f64, event_adjustment: f64, multipliers: &ScenarioMultipliers) -> Self {
        let low = event_adjustment * multipliers.pessimistic;
        let high = event_adjustment * multipliers.optimistic;
        Self {
            pessimistic: trend + low.min(high),
            base: trend + event_adjustment,
            optimistic: trend + low.max(high),
        }
    }

    pub fn get(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Pessimistic => self.pessimistic,
            Scenario::Base => self.base,
            Scenario::Optimistic => self.optimistic,
        }
    }
}

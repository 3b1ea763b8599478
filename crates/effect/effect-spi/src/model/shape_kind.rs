//! Names of the supported response shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EffectError;

/// A response shape without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Immediate, permanent full effect
    Step,
    /// Linear build-up to full effect
    Ramp,
    /// Shock that decays exponentially to zero
    ImpulseDecay,
    /// Logistic adoption curve
    SCurve,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Step,
        ShapeKind::Ramp,
        ShapeKind::ImpulseDecay,
        ShapeKind::SCurve,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Step => "step",
            ShapeKind::Ramp => "ramp",
            ShapeKind::ImpulseDecay => "impulse_decay",
            ShapeKind::SCurve => "s_curve",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "step" => Ok(ShapeKind::Step),
            "ramp" | "linear" => Ok(ShapeKind::Ramp),
            "impulse_decay" | "impulse" | "decay" => Ok(ShapeKind::ImpulseDecay),
            "s_curve" | "scurve" | "logistic" => Ok(ShapeKind::SCurve),
            _ => Err(EffectError::UnknownShape(s.to_string())),
        }
    }
}

//! Parameterised shape used by configuration and the composer

use effect_spi::{EffectError, EffectFunction, EffectTiming, Result, ShapeKind};
use serde::{Deserialize, Serialize};

use crate::shapes::{impulse_decay, ramp, s_curve, step, ImpulseDecay, Ramp, SCurve};

/// A response shape together with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum EffectShape {
    Step,
    Ramp { ramp_period: f64 },
    ImpulseDecay { decay_rate: f64 },
    SCurve { steepness: f64, midpoint: f64 },
}

impl EffectShape {
    /// Check shape parameters, returning the shape unchanged when valid
    pub fn validated(self) -> Result<Self> {
        match self {
            EffectShape::Step => {}
            EffectShape::Ramp { ramp_period } => {
                Ramp::new(ramp_period)?;
            }
            EffectShape::ImpulseDecay { decay_rate } => {
                ImpulseDecay::new(decay_rate)?;
            }
            EffectShape::SCurve {
                steepness,
                midpoint,
            } => {
                SCurve::new(steepness, midpoint)?;
            }
        }
        Ok(self)
    }

    /// Boxed [`EffectFunction`] for this shape
    pub fn to_function(&self) -> Result<Box<dyn EffectFunction>> {
        Ok(match *self {
            EffectShape::Step => Box::new(crate::shapes::Step),
            EffectShape::Ramp { ramp_period } => Box::new(Ramp::new(ramp_period)?),
            EffectShape::ImpulseDecay { decay_rate } => Box::new(ImpulseDecay::new(decay_rate)?),
            EffectShape::SCurve {
                steepness,
                midpoint,
            } => Box::new(SCurve::new(steepness, midpoint)?),
        })
    }
}

impl From<EffectShape> for ShapeKind {
    fn from(shape: EffectShape) -> Self {
        shape.kind()
    }
}

impl TryFrom<&str> for EffectShape {
    type Error = EffectError;

    /// Only parameterless shapes can be built from a bare name.
    fn try_from(name: &str) -> Result<Self> {
        match name.parse::<ShapeKind>()? {
            ShapeKind::Step => Ok(EffectShape::Step),
            other => Err(EffectError::invalid(
                other.as_str(),
                "shape requires parameters",
            )),
        }
    }
}

impl EffectFunction for EffectShape {
    fn evaluate(&self, t: f64, timing: &EffectTiming) -> f64 {
        let EffectTiming {
            event_time,
            lag,
            magnitude,
        } = *timing;
        match *self {
            EffectShape::Step => step(t, event_time, lag, magnitude),
            EffectShape::Ramp { ramp_period } => ramp(t, event_time, lag, magnitude, ramp_period),
            EffectShape::ImpulseDecay { decay_rate } => {
                impulse_decay(t, event_time, lag, magnitude, decay_rate)
            }
            EffectShape::SCurve {
                steepness,
                midpoint,
            } => s_curve(t, event_time, magnitude, steepness, midpoint),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            EffectShape::Step => ShapeKind::Step,
            EffectShape::Ramp { .. } => ShapeKind::Ramp,
            EffectShape::ImpulseDecay { .. } => ShapeKind::ImpulseDecay,
            EffectShape::SCurve { .. } => ShapeKind::SCurve,
        }
    }

    fn is_transient(&self) -> bool {
        matches!(self, EffectShape::ImpulseDecay { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_rejects_bad_ramp() {
        let err = EffectShape::Ramp { ramp_period: 0.0 }.validated().unwrap_err();
        assert!(matches!(err, EffectError::InvalidParameter { ref name, .. } if name == "ramp_period"));
    }

    #[test]
    fn test_validated_accepts_good_shapes() {
        let shapes = [
            EffectShape::Step,
            EffectShape::Ramp { ramp_period: 24.0 },
            EffectShape::ImpulseDecay { decay_rate: 0.1 },
            EffectShape::SCurve {
                steepness: 0.25,
                midpoint: 18.0,
            },
        ];
        for shape in shapes {
            assert_eq!(shape.validated().unwrap(), shape);
        }
    }

    #[test]
    fn test_enum_matches_boxed_function() {
        let timing = EffectTiming::new(0.0, 3.0, 10.0);
        let shape = EffectShape::ImpulseDecay { decay_rate: 0.3 };
        let boxed = shape.to_function().unwrap();
        for t in [0.0, 3.0, 4.0, 20.0] {
            assert_eq!(shape.evaluate(t, &timing), boxed.evaluate(t, &timing));
        }
        assert!(boxed.is_transient());
        assert_eq!(boxed.kind(), ShapeKind::ImpulseDecay);
    }

    #[test]
    fn test_try_from_name() {
        assert_eq!(EffectShape::try_from("step").unwrap(), EffectShape::Step);
        assert!(EffectShape::try_from("ramp").is_err());
        assert!(EffectShape::try_from("zigzag").is_err());
    }

    #[test]
    fn test_serde_tagged_representation() {
        let shape = EffectShape::SCurve {
            steepness: 0.5,
            midpoint: 12.0,
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, r#"{"shape":"s_curve","steepness":0.5,"midpoint":12.0}"#);
        let back: EffectShape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn test_kind_conversion() {
        let kind: ShapeKind = EffectShape::Ramp { ramp_period: 6.0 }.into();
        assert_eq!(kind, ShapeKind::Ramp);
    }
}

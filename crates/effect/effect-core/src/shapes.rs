//! Response shape implementations
//!
//! Each shape is available as a free function over scalars and as a struct
//! implementing [`EffectFunction`]. None of them clip: a magnitude of `M`
//! never yields more than `M`, but nothing bounds the indicator itself.

use effect_spi::{EffectError, EffectFunction, EffectTiming, Result, ShapeKind};
use serde::{Deserialize, Serialize};

/// `M` for `t >= t0 + lag`, else `0`
pub fn step(t: f64, t0: f64, lag: f64, magnitude: f64) -> f64 {
    if t >= t0 + lag {
        magnitude
    } else {
        0.0
    }
}

/// `M * min(1, (t - t0 - lag) / ramp_period)` for `t >= t0 + lag`, else `0`.
///
/// A non-positive `ramp_period` degenerates to [`step`].
pub fn ramp(t: f64, t0: f64, lag: f64, magnitude: f64, ramp_period: f64) -> f64 {
    let onset = t0 + lag;
    if t < onset {
        return 0.0;
    }
    if ramp_period <= 0.0 {
        return magnitude;
    }
    magnitude * ((t - onset) / ramp_period).min(1.0)
}

/// `M * exp(-decay_rate * (t - t0 - lag))` for `t >= t0 + lag`, else `0`
pub fn impulse_decay(t: f64, t0: f64, lag: f64, magnitude: f64, decay_rate: f64) -> f64 {
    let onset = t0 + lag;
    if t < onset {
        return 0.0;
    }
    magnitude * (-decay_rate * (t - onset)).exp()
}

/// `M / (1 + exp(-steepness * (t - t0 - midpoint)))`, defined for all `t`
pub fn s_curve(t: f64, t0: f64, magnitude: f64, steepness: f64, midpoint: f64) -> f64 {
    magnitude / (1.0 + (-steepness * (t - t0 - midpoint)).exp())
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EffectError::invalid(
            name,
            format!("must be a positive finite number, got {}", value),
        ))
    }
}

/// Regulatory or legal change with immediate full effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Step;

impl EffectFunction for Step {
    fn evaluate(&self, t: f64, timing: &EffectTiming) -> f64 {
        step(t, timing.event_time, timing.lag, timing.magnitude)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Step
    }
}

/// Linear build-up to full effect over `ramp_period` months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    ramp_period: f64,
}

impl Ramp {
    pub fn new(ramp_period: f64) -> Result<Self> {
        require_positive("ramp_period", ramp_period)?;
        Ok(Self { ramp_period })
    }

    pub fn ramp_period(&self) -> f64 {
        self.ramp_period
    }
}

impl EffectFunction for Ramp {
    fn evaluate(&self, t: f64, timing: &EffectTiming) -> f64 {
        ramp(
            t,
            timing.event_time,
            timing.lag,
            timing.magnitude,
            self.ramp_period,
        )
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ramp
    }
}

/// Exponentially decaying shock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpulseDecay {
    decay_rate: f64,
}

impl ImpulseDecay {
    pub fn new(decay_rate: f64) -> Result<Self> {
        require_positive("decay_rate", decay_rate)?;
        Ok(Self { decay_rate })
    }

    /// Decay rate such that the effect halves every `half_life` months
    pub fn from_half_life(half_life: f64) -> Result<Self> {
        require_positive("half_life", half_life)?;
        Self::new(std::f64::consts::LN_2 / half_life)
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    pub fn half_life(&self) -> f64 {
        std::f64::consts::LN_2 / self.decay_rate
    }
}

impl EffectFunction for ImpulseDecay {
    fn evaluate(&self, t: f64, timing: &EffectTiming) -> f64 {
        impulse_decay(
            t,
            timing.event_time,
            timing.lag,
            timing.magnitude,
            self.decay_rate,
        )
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::ImpulseDecay
    }

    fn is_transient(&self) -> bool {
        true
    }
}

/// Logistic adoption curve with its inflection `midpoint` months after the event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SCurve {
    steepness: f64,
    midpoint: f64,
}

impl SCurve {
    pub fn new(steepness: f64, midpoint: f64) -> Result<Self> {
        require_positive("steepness", steepness)?;
        if !midpoint.is_finite() {
            return Err(EffectError::invalid("midpoint", "must be finite"));
        }
        Ok(Self {
            steepness,
            midpoint,
        })
    }

    pub fn steepness(&self) -> f64 {
        self.steepness
    }

    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }
}

impl EffectFunction for SCurve {
    // The lag does not enter the curve; callers gate on the onset.
    fn evaluate(&self, t: f64, timing: &EffectTiming) -> f64 {
        s_curve(
            t,
            timing.event_time,
            timing.magnitude,
            self.steepness,
            self.midpoint,
        )
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::SCurve
    }
}

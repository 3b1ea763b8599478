//! Effect Core
//!
//! Closed-form temporal response shapes used to model how an event moves an
//! indicator over time.

pub mod shape;
pub mod shapes;

// Re-export SPI types for implementations
pub use effect_spi::{
    days_in_month, decimal_year, month_index, EffectError, EffectFunction, EffectTiming, Result,
    ShapeKind,
};

// Re-export main types
pub use shape::EffectShape;
pub use shapes::{impulse_decay, ramp, s_curve, step, ImpulseDecay, Ramp, SCurve, Step};

//! Effect Facade
//!
//! Unified re-exports for the effect function library.
//!
//! - `effect_spi` - the [`EffectFunction`] contract, timing model, calendar helpers
//! - `effect_core` - step, ramp, impulse-decay and S-curve shapes
//!
//! # Example
//!
//! ```rust
//! use effect_facade::{month_index, step};
//! use chrono::NaiveDate;
//!
//! let t0 = month_index(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
//! let t = month_index(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
//! assert_eq!(step(t, t0, 18.0, 20.0), 20.0);
//! ```

// Re-export everything from SPI
pub use effect_spi::*;

// Re-export everything from Core
pub use effect_core::{
    impulse_decay, ramp, s_curve, shape, shapes, step, EffectShape, ImpulseDecay, Ramp, SCurve,
    Step,
};

//! Effect Service Provider Interface
//!
//! Defines the contract for temporal effect functions, the timing model they
//! evaluate against, and the calendar-to-month conversions shared by the
//! forecasting stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::EffectFunction;
pub use error::{EffectError, Result};
pub use model::{days_in_month, decimal_year, month_index, EffectTiming, ShapeKind};

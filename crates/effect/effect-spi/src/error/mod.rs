//! Error module containing error types and result aliases

mod effect_error;

pub use effect_error::EffectError;

/// Result type for effect operations
pub type Result<T> = std::result::Result<T, EffectError>;

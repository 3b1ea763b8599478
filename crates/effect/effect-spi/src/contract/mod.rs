//! Contract module containing trait definitions for effect evaluation

mod effect_function;

pub use effect_function::EffectFunction;

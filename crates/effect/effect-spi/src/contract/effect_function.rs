//! Trait for temporal effect functions

use crate::model::{EffectTiming, ShapeKind};

/// A closed-form temporal response to an event.
///
/// Implementations are pure: the same `t` and timing always give the same
/// contribution. They never clip the result; plausibility bounds belong to
/// the caller.
pub trait EffectFunction: Send + Sync {
    /// Contribution at time `t` (months) for an event with the given timing
    fn evaluate(&self, t: f64, timing: &EffectTiming) -> f64;

    /// Which response shape this is
    fn kind(&self) -> ShapeKind;

    /// Whether the effect fades back to zero instead of persisting
    fn is_transient(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation: constant contribution once the onset is reached
    struct Constant;

    impl EffectFunction for Constant {
        fn evaluate(&self, t: f64, timing: &EffectTiming) -> f64 {
            if timing.is_active(t) {
                timing.magnitude
            } else {
                0.0
            }
        }

        fn kind(&self) -> ShapeKind {
            ShapeKind::Step
        }
    }

    #[test]
    fn test_default_is_not_transient() {
        assert!(!Constant.is_transient());
    }

    #[test]
    fn test_effect_function_as_trait_object() {
        let f: Box<dyn EffectFunction> = Box::new(Constant);
        let timing = EffectTiming::new(10.0, 2.0, 5.0);
        assert_eq!(f.evaluate(11.0, &timing), 0.0);
        assert_eq!(f.evaluate(12.0, &timing), 5.0);
        assert_eq!(f.kind(), ShapeKind::Step);
    }
}

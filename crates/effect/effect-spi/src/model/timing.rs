//! Event timing model

use serde::{Deserialize, Serialize};

/// Where an effect sits in time and how large it is.
///
/// All times are in months (see [`crate::month_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectTiming {
    /// Event time `t0`
    pub event_time: f64,
    /// Lag `L` between the event and the start of its effect
    pub lag: f64,
    /// Magnitude `M`, signed by direction
    pub magnitude: f64,
}

impl EffectTiming {
    pub fn new(event_time: f64, lag: f64, magnitude: f64) -> Self {
        Self {
            event_time,
            lag,
            magnitude,
        }
    }

    /// First time at which the effect may apply (`t0 + L`)
    pub fn onset(&self) -> f64 {
        self.event_time + self.lag
    }

    /// Whether `t` is at or after the onset
    pub fn is_active(&self, t: f64) -> bool {
        t >= self.onset()
    }

    /// Months elapsed since the onset; negative before it
    pub fn elapsed(&self, t: f64) -> f64 {
        t - self.onset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onset() {
        let timing = EffectTiming::new(24240.0, 18.0, 20.0);
        assert_eq!(timing.onset(), 24258.0);
    }

    #[test]
    fn test_is_active_boundary() {
        let timing = EffectTiming::new(100.0, 6.0, 1.0);
        assert!(!timing.is_active(105.999));
        assert!(timing.is_active(106.0));
        assert!(timing.is_active(200.0));
    }

    #[test]
    fn test_elapsed_sign() {
        let timing = EffectTiming::new(100.0, 6.0, 1.0);
        assert_eq!(timing.elapsed(100.0), -6.0);
        assert_eq!(timing.elapsed(110.0), 4.0);
    }
}

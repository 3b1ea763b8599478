//! Dataset Service Provider Interface
//!
//! Typed records of the unified financial-inclusion table: indicator
//! observations, events, policy targets and event-to-indicator impact links.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RecordSource;
pub use error::{DatasetError, Result};
pub use model::{
    ConfidenceLevel, Direction, Event, EvidenceBasis, ImpactLink, MagnitudeClass, Observation,
    RawRecord, Record, RecordType, Target,
};

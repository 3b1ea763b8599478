//! Forecast Service Provider Interface
//!
//! Defines the trend and confidence-interval contracts, the forecast point
//! and table models, composer configuration, and forecasting errors.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ConfidenceIntervalComputer, TrendModel};
pub use error::{ForecastError, Result};
pub use model::{
    CalibrationReport, CalibrationStatus, ComposerConfig, ConfidenceInterval, ConfidenceWidths,
    EventContribution, EvidenceScaling, ForecastPoint, ForecastTable, IndicatorForecast, Scenario,
    ScenarioMultipliers, ScenarioYears, ShapeParameters, TargetAssessment, TargetGap, TrendFit,
    TrendStatus, ValueBounds, YearAnchor,
};

//! Forecast Core
//!
//! Core implementations for event-augmented forecasting: the linear trend,
//! event adjustment, scenario bounds, confidence intervals, calibration of
//! impact links and target assessment.

pub mod adjustment;
pub mod calibration;
pub mod composer;
pub mod confidence;
pub mod scenario;
pub mod targets;
pub mod trend;

// Re-export SPI traits and models for implementations
pub use forecast_spi::{
    CalibrationReport, CalibrationStatus, ComposerConfig, ConfidenceInterval,
    ConfidenceIntervalComputer, ConfidenceWidths, EventContribution, EvidenceScaling,
    ForecastError, ForecastPoint, ForecastTable, IndicatorForecast, Result, Scenario,
    ScenarioMultipliers, ScenarioYears, ShapeParameters, TargetAssessment, TargetGap, TrendFit,
    TrendModel, TrendStatus, ValueBounds, YearAnchor,
};

// Re-export main types
pub use adjustment::{combined_confidence, contribution, event_adjustment, resolve_shape};
pub use calibration::{
    adjustment_factor, apply_calibration, calibrate, refine, refined_links, validate_link,
};
pub use composer::ForecastComposer;
pub use confidence::{z_score, EventIntervalComputer};
pub use scenario::ScenarioValues;
pub use targets::{assess_target, assess_targets};
pub use trend::{observation_points, LinearTrend};

//! Forecast Facade
//!
//! High-level API for event-augmented forecasting. Re-exports all public
//! types from the forecast stack for convenient usage.
//!
//! ```rust
//! use forecast_facade::{ComposerConfigBuilder, ForecastComposer};
//!
//! let config = ComposerConfigBuilder::new().scenarios(0.5, 1.4).build().unwrap();
//! let composer = ForecastComposer::new(config).unwrap();
//! assert_eq!(composer.config().scenarios.optimistic, 1.4);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core functions at root
pub use forecast_core::{
    adjustment_factor, apply_calibration, assess_target, assess_targets, calibrate,
    combined_confidence, contribution, event_adjustment, observation_points, refine,
    refined_links, resolve_shape, validate_link, z_score,
};

// Re-export SPI models
pub use forecast_spi::{
    CalibrationStatus, ConfidenceWidths, EventContribution, EvidenceScaling, IndicatorForecast,
    Scenario, ScenarioMultipliers, ScenarioYears, ShapeParameters, TargetAssessment, TargetGap,
    TrendFit, TrendStatus, ValueBounds, YearAnchor,
};

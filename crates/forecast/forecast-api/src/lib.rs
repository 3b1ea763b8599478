//! Forecast Consumer API
//!
//! Consumer configuration and builder APIs for event-augmented forecasting.
//!
//! This crate provides:
//! - A builder for composer configuration
//! - JSON configuration loading
//! - Re-exports from SPI and core for convenience

pub mod config;

pub use config::{config_to_json, load_config, parse_config, ComposerConfigBuilder};

// Re-export from core
pub use forecast_core::{
    adjustment, calibration, composer, confidence, scenario, targets, trend, EventIntervalComputer,
    ForecastComposer, LinearTrend, ScenarioValues,
};

// Re-export traits and models from SPI
pub use forecast_spi::{
    CalibrationReport, ComposerConfig, ConfidenceInterval, ConfidenceIntervalComputer,
    ForecastError, ForecastPoint, ForecastTable, Result, TrendModel,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{load_config, ComposerConfigBuilder};
    pub use forecast_core::{
        apply_calibration, assess_targets, calibrate, refine, validate_link, ForecastComposer,
        LinearTrend,
    };
    pub use forecast_spi::{
        CalibrationReport, ComposerConfig, ForecastError, ForecastPoint, ForecastTable, Result,
        Scenario, TargetAssessment, TrendModel,
    };
}

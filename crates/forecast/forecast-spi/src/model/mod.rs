//! Model module containing data structures

mod calibration_report;
mod confidence_interval;
mod config;
mod forecast_point;
mod forecast_table;
mod target_assessment;
mod trend_fit;

pub use calibration_report::{CalibrationReport, CalibrationStatus};
pub use confidence_interval::ConfidenceInterval;
pub use config::{
    ComposerConfig, ConfidenceWidths, EvidenceScaling, ScenarioMultipliers, ShapeParameters,
    ValueBounds, YearAnchor,
};
pub use forecast_point::{EventContribution, ForecastPoint, Scenario};
pub use forecast_table::{ForecastTable, IndicatorForecast};
pub use target_assessment::{ScenarioYears, TargetAssessment, TargetGap};
pub use trend_fit::{TrendFit, TrendStatus};

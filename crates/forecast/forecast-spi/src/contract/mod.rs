//! Contract module containing trait definitions for forecast operations

mod confidence_interval_computer;
mod trend_model;

pub use confidence_interval_computer::ConfidenceIntervalComputer;
pub use trend_model::TrendModel;

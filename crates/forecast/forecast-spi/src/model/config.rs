//! Composer configuration

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dataset_spi::{ConfidenceLevel, EvidenceBasis};
use effect_spi::ShapeKind;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Multipliers applied to the event adjustment (never to the trend)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioMultipliers {
    pub pessimistic: f64,
    pub optimistic: f64,
}

impl Default for ScenarioMultipliers {
    fn default() -> Self {
        Self {
            pessimistic: 0.5,
            optimistic: 1.4,
        }
    }
}

/// Relative interval half-width around the event adjustment per confidence level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWidths {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl ConfidenceWidths {
    pub fn for_level(&self, level: ConfidenceLevel) -> f64 {
        match level {
            ConfidenceLevel::High => self.high,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::Low => self.low,
        }
    }
}

impl Default for ConfidenceWidths {
    fn default() -> Self {
        Self {
            high: 0.5,
            medium: 0.75,
            low: 1.0,
        }
    }
}

/// Factor applied to a link's effect according to its evidence basis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceScaling {
    pub validated: f64,
    pub empirical: f64,
    pub comparable: f64,
    pub theoretical: f64,
}

impl EvidenceScaling {
    pub fn factor(&self, basis: EvidenceBasis) -> f64 {
        match basis {
            EvidenceBasis::Validated => self.validated,
            EvidenceBasis::Empirical => self.empirical,
            EvidenceBasis::Comparable => self.comparable,
            EvidenceBasis::Theoretical => self.theoretical,
        }
    }

    /// Every link counted at face value
    pub fn unscaled() -> Self {
        Self {
            validated: 1.0,
            empirical: 1.0,
            comparable: 1.0,
            theoretical: 1.0,
        }
    }
}

impl Default for EvidenceScaling {
    fn default() -> Self {
        Self {
            validated: 1.0,
            empirical: 1.0,
            comparable: 0.5,
            theoretical: 0.3,
        }
    }
}

/// Shape parameters in months, and the category to shape map used when a
/// link names no shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    pub ramp_period: f64,
    /// Per month
    pub decay_rate: f64,
    /// Per month
    pub steepness: f64,
    pub midpoint: f64,
    pub default_shape: ShapeKind,
    /// Keys are normalized categories (lowercase, `_` separated)
    pub category_shapes: BTreeMap<String, ShapeKind>,
}

impl ShapeParameters {
    /// Shape for an event category, falling back to `default_shape`
    pub fn shape_for_category(&self, category: &str) -> ShapeKind {
        self.category_shapes
            .get(&normalize_category(category))
            .copied()
            .unwrap_or(self.default_shape)
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        let category_shapes = [
            ("policy", ShapeKind::Step),
            ("regulation", ShapeKind::Step),
            ("infrastructure", ShapeKind::Ramp),
            ("product_launch", ShapeKind::SCurve),
            ("partnership", ShapeKind::SCurve),
            ("market_entry", ShapeKind::SCurve),
            ("market_shock", ShapeKind::ImpulseDecay),
            ("economic", ShapeKind::ImpulseDecay),
        ]
        .into_iter()
        .map(|(category, shape)| (category.to_string(), shape))
        .collect();

        Self {
            ramp_period: 24.0,
            decay_rate: 0.1,
            steepness: 0.25,
            midpoint: 18.0,
            default_shape: ShapeKind::Ramp,
            category_shapes,
        }
    }
}

fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Inclusive value range for reported estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    pub fn percentage() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }

    /// Clamped value and whether clamping changed it
    pub fn clamp(&self, value: f64) -> (f64, bool) {
        let clamped = value.clamp(self.min, self.max);
        (clamped, clamped != value)
    }
}

/// Calendar date a forecast year is evaluated at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearAnchor {
    StartOfYear,
    MidYear,
    /// December 31, matching year-end survey rounds
    #[default]
    EndOfYear,
}

impl YearAnchor {
    pub fn date_for_year(&self, year: i32) -> Option<NaiveDate> {
        match self {
            YearAnchor::StartOfYear => NaiveDate::from_ymd_opt(year, 1, 1),
            YearAnchor::MidYear => NaiveDate::from_ymd_opt(year, 7, 1),
            YearAnchor::EndOfYear => NaiveDate::from_ymd_opt(year, 12, 31),
        }
    }
}

/// Configuration of the forecast composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub scenarios: ScenarioMultipliers,
    pub confidence_widths: ConfidenceWidths,
    pub evidence_scaling: EvidenceScaling,
    pub shapes: ShapeParameters,
    /// `None` reports raw, unbounded sums
    pub bounds: Option<ValueBounds>,
    /// Confidence level of the trend component of the interval
    pub confidence_level: f64,
    pub min_observations: usize,
    pub year_anchor: YearAnchor,
    /// Add the trend's prediction error to the interval half-width
    pub include_trend_error: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            scenarios: ScenarioMultipliers::default(),
            confidence_widths: ConfidenceWidths::default(),
            evidence_scaling: EvidenceScaling::default(),
            shapes: ShapeParameters::default(),
            bounds: Some(ValueBounds::percentage()),
            confidence_level: 0.95,
            min_observations: 2,
            year_anchor: YearAnchor::EndOfYear,
            include_trend_error: true,
        }
    }
}

impl ComposerConfig {
    pub fn validate(&self) -> Result<()> {
        let scenarios = &self.scenarios;
        if scenarios.pessimistic < 0.0 || scenarios.optimistic < 0.0 {
            return Err(ForecastError::invalid(
                "scenarios",
                "multipliers must be non-negative",
            ));
        }
        if scenarios.pessimistic > scenarios.optimistic {
            return Err(ForecastError::invalid(
                "scenarios",
                format!(
                    "pessimistic multiplier {} exceeds optimistic {}",
                    scenarios.pessimistic, scenarios.optimistic
                ),
            ));
        }

        let widths = &self.confidence_widths;
        if [widths.high, widths.medium, widths.low]
            .iter()
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(ForecastError::invalid(
                "confidence_widths",
                "widths must be finite and non-negative",
            ));
        }

        let scaling = &self.evidence_scaling;
        if [
            scaling.validated,
            scaling.empirical,
            scaling.comparable,
            scaling.theoretical,
        ]
        .iter()
        .any(|f| !f.is_finite() || *f < 0.0)
        {
            return Err(ForecastError::invalid(
                "evidence_scaling",
                "factors must be finite and non-negative",
            ));
        }

        for (name, value) in [
            ("ramp_period", self.shapes.ramp_period),
            ("decay_rate", self.shapes.decay_rate),
            ("steepness", self.shapes.steepness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ForecastError::invalid(name, "must be positive"));
            }
        }
        if !self.shapes.midpoint.is_finite() {
            return Err(ForecastError::invalid("midpoint", "must be finite"));
        }

        if let Some(bounds) = self.bounds {
            if bounds.min.is_nan() || bounds.max.is_nan() || bounds.min >= bounds.max {
                return Err(ForecastError::invalid(
                    "bounds",
                    format!("min {} must be below max {}", bounds.min, bounds.max),
                ));
            }
        }

        let level = self.confidence_level;
        if level.is_nan() || level <= 0.0 || level >= 1.0 {
            return Err(ForecastError::invalid(
                "confidence_level",
                "must be between 0 and 1",
            ));
        }
        if self.min_observations < 2 {
            return Err(ForecastError::invalid(
                "min_observations",
                "a trend line needs at least 2 observations",
            ));
        }
        Ok(())
    }
}

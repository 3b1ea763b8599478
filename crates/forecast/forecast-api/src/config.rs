//! Composer configuration builder and JSON loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use dataset_spi::EvidenceBasis;
use effect_spi::ShapeKind;
use forecast_spi::{
    ComposerConfig, ConfidenceWidths, EvidenceScaling, ForecastError, Result, ScenarioMultipliers,
    ShapeParameters, ValueBounds, YearAnchor,
};

/// Builder for ComposerConfig.
///
/// Unset fields keep their defaults; `build` validates the result.
#[derive(Debug, Default)]
pub struct ComposerConfigBuilder {
    scenarios: Option<ScenarioMultipliers>,
    confidence_widths: Option<ConfidenceWidths>,
    evidence_scaling: Option<EvidenceScaling>,
    shapes: Option<ShapeParameters>,
    category_shapes: BTreeMap<String, ShapeKind>,
    bounds: Option<Option<ValueBounds>>,
    confidence_level: Option<f64>,
    min_observations: Option<usize>,
    year_anchor: Option<YearAnchor>,
    include_trend_error: Option<bool>,
}

impl ComposerConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pessimistic and optimistic multipliers.
    pub fn scenarios(mut self, pessimistic: f64, optimistic: f64) -> Self {
        self.scenarios = Some(ScenarioMultipliers {
            pessimistic,
            optimistic,
        });
        self
    }

    /// Set the relative interval widths per confidence level.
    pub fn confidence_widths(mut self, high: f64, medium: f64, low: f64) -> Self {
        self.confidence_widths = Some(ConfidenceWidths { high, medium, low });
        self
    }

    /// Set the evidence scaling table.
    pub fn evidence_scaling(mut self, scaling: EvidenceScaling) -> Self {
        self.evidence_scaling = Some(scaling);
        self
    }

    /// Set one evidence scaling factor.
    pub fn evidence_factor(mut self, basis: EvidenceBasis, factor: f64) -> Self {
        let mut scaling = self.evidence_scaling.unwrap_or_default();
        match basis {
            EvidenceBasis::Validated => scaling.validated = factor,
            EvidenceBasis::Empirical => scaling.empirical = factor,
            EvidenceBasis::Comparable => scaling.comparable = factor,
            EvidenceBasis::Theoretical => scaling.theoretical = factor,
        }
        self.evidence_scaling = Some(scaling);
        self
    }

    /// Set all shape parameters.
    pub fn shapes(mut self, shapes: ShapeParameters) -> Self {
        self.shapes = Some(shapes);
        self
    }

    /// Map an event category to a shape.
    pub fn category_shape(mut self, category: &str, shape: ShapeKind) -> Self {
        self.category_shapes
            .insert(category.trim().to_lowercase().replace([' ', '-'], "_"), shape);
        self
    }

    /// Clamp reported values into `[min, max]`.
    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some(Some(ValueBounds { min, max }));
        self
    }

    /// Report raw sums without clamping.
    pub fn unbounded(mut self) -> Self {
        self.bounds = Some(None);
        self
    }

    /// Set the confidence level of the trend component.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Set the minimum number of observations for a trend.
    pub fn min_observations(mut self, n: usize) -> Self {
        self.min_observations = Some(n);
        self
    }

    /// Set the date each forecast year is evaluated at.
    pub fn year_anchor(mut self, anchor: YearAnchor) -> Self {
        self.year_anchor = Some(anchor);
        self
    }

    /// Include or drop the trend's prediction error from intervals.
    pub fn include_trend_error(mut self, include: bool) -> Self {
        self.include_trend_error = Some(include);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ComposerConfig> {
        let defaults = ComposerConfig::default();
        let mut shapes = self.shapes.unwrap_or(defaults.shapes);
        shapes.category_shapes.extend(self.category_shapes);

        let config = ComposerConfig {
            scenarios: self.scenarios.unwrap_or(defaults.scenarios),
            confidence_widths: self.confidence_widths.unwrap_or(defaults.confidence_widths),
            evidence_scaling: self.evidence_scaling.unwrap_or(defaults.evidence_scaling),
            shapes,
            bounds: self.bounds.unwrap_or(defaults.bounds),
            confidence_level: self.confidence_level.unwrap_or(defaults.confidence_level),
            min_observations: self.min_observations.unwrap_or(defaults.min_observations),
            year_anchor: self.year_anchor.unwrap_or(defaults.year_anchor),
            include_trend_error: self
                .include_trend_error
                .unwrap_or(defaults.include_trend_error),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse and validate a JSON configuration; absent fields take defaults.
pub fn parse_config(json: &str) -> Result<ComposerConfig> {
    let config: ComposerConfig =
        serde_json::from_str(json).map_err(|e| ForecastError::invalid("config", e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a JSON configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<ComposerConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| ForecastError::invalid("config", format!("{}: {}", path.display(), e)))?;
    parse_config(&json)
}

/// Pretty JSON of a configuration, suitable for `load_config`.
pub fn config_to_json(config: &ComposerConfig) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| ForecastError::invalid("config", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ComposerConfigBuilder::new().build().unwrap();
        assert_eq!(config, ComposerConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ComposerConfigBuilder::new()
            .scenarios(0.6, 1.5)
            .confidence_widths(0.4, 0.6, 0.9)
            .evidence_factor(EvidenceBasis::Theoretical, 0.2)
            .category_shape("Mobile Money", ShapeKind::SCurve)
            .unbounded()
            .confidence_level(0.9)
            .year_anchor(YearAnchor::MidYear)
            .include_trend_error(false)
            .build()
            .unwrap();

        assert_eq!(config.scenarios.optimistic, 1.5);
        assert_eq!(config.confidence_widths.low, 0.9);
        assert_eq!(config.evidence_scaling.theoretical, 0.2);
        assert_eq!(config.evidence_scaling.comparable, 0.5);
        assert_eq!(
            config.shapes.shape_for_category("mobile money"),
            ShapeKind::SCurve
        );
        assert_eq!(config.shapes.shape_for_category("policy"), ShapeKind::Step);
        assert_eq!(config.bounds, None);
        assert_eq!(config.year_anchor, YearAnchor::MidYear);
        assert!(!config.include_trend_error);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        assert!(ComposerConfigBuilder::new().scenarios(1.5, 0.5).build().is_err());
        assert!(ComposerConfigBuilder::new().bounds(10.0, 0.0).build().is_err());
        assert!(ComposerConfigBuilder::new().min_observations(1).build().is_err());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(r#"{"evidence_scaling": {"theoretical": 0.25}}"#).unwrap();
        assert_eq!(config.evidence_scaling.theoretical, 0.25);
        assert_eq!(config.evidence_scaling.comparable, 0.5);
        assert_eq!(config.bounds, Some(ValueBounds::percentage()));
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        assert!(parse_config(r#"{"confidence_level": 1.5}"#).is_err());
        assert!(parse_config("not json").is_err());
    }

    #[test]
    fn test_load_config_file_round_trip() {
        let config = ComposerConfigBuilder::new().scenarios(0.4, 1.6).build().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config_to_json(&config).unwrap().as_bytes()).unwrap();

        let loaded = load_config(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/composer.json");
        assert!(matches!(result, Err(ForecastError::InvalidParameter { .. })));
    }
}

//! Tests for the composer building blocks through the facade

use forecast_facade::{
    adjustment_factor, z_score, ComposerConfig, ComposerConfigBuilder, ConfidenceInterval,
    ConfidenceIntervalComputer, EventIntervalComputer, ForecastComposer, ForecastError,
    LinearTrend, ScenarioMultipliers, ScenarioValues, TrendModel, ValueBounds,
};
use dataset_facade::ConfidenceLevel;

#[test]
fn test_findex_trend_reproduces_2025_value() {
    let mut trend = LinearTrend::new();
    trend
        .fit(&[
            (2011.0, 14.0),
            (2014.0, 22.0),
            (2017.0, 35.0),
            (2021.0, 46.0),
            (2024.0, 49.0),
        ])
        .unwrap();

    let value = trend.predict_at(2025.0).unwrap();
    assert!((value - 54.8).abs() < 0.05, "trend 2025 was {}", value);
}

#[test]
fn test_single_point_is_insufficient() {
    let mut trend = LinearTrend::new();
    assert_eq!(
        trend.fit(&[(2024.0, 9.45)]),
        Err(ForecastError::InsufficientData {
            required: 2,
            actual: 1
        })
    );
}

#[test]
fn test_scenarios_scale_adjustment_only() {
    let values = ScenarioValues::compute(50.0, 10.0, &ScenarioMultipliers::default());
    assert_eq!(values.base, 60.0);
    assert_eq!(values.pessimistic, 55.0);
    assert!((values.optimistic - 64.0).abs() < 1e-10);
}

#[test]
fn test_custom_interval_computer() {
    struct Fixed;
    impl ConfidenceIntervalComputer for Fixed {
        fn compute(
            &self,
            base_estimate: f64,
            _event_adjustment: f64,
            _confidence: ConfidenceLevel,
            _trend_std_error: f64,
        ) -> ConfidenceInterval {
            ConfidenceInterval::symmetric(base_estimate, 1.0, 0.5)
        }
    }

    let composer = ForecastComposer::default().with_interval_computer(Fixed);
    assert_eq!(composer.config(), &ComposerConfig::default());
}

#[test]
fn test_interval_computer_from_config() {
    let config = ComposerConfigBuilder::new()
        .confidence_widths(0.5, 0.75, 1.0)
        .include_trend_error(false)
        .build()
        .unwrap();
    let computer = EventIntervalComputer::from_config(&config);
    let ci = computer.compute(60.0, 10.0, ConfidenceLevel::Low, 5.0);
    assert_eq!(ci.low, 50.0);
    assert_eq!(ci.high, 70.0);
}

#[test]
fn test_adjustment_factor_never_amplifies() {
    assert_eq!(adjustment_factor(5.0, 20.0), 1.0);
    assert!((adjustment_factor(15.0, 3.0) - 0.2).abs() < 1e-12);
    assert_eq!(z_score(0.95), 1.96);
}

#[test]
fn test_builder_bounds() {
    let config = ComposerConfigBuilder::new().bounds(0.0, 80.0).build().unwrap();
    assert_eq!(config.bounds, Some(ValueBounds { min: 0.0, max: 80.0 }));
}

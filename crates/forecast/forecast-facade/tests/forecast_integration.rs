//! Integration tests: unified CSV through ingestion, composer, calibration and targets

use dataset_facade::{ConfidenceLevel, CsvSource, Dataset};
use effect_facade::ShapeKind;
use forecast_facade::{
    assess_targets, calibrate, CalibrationStatus, ComposerConfigBuilder, ForecastComposer,
    Scenario, ShapeParameters, TrendStatus,
};
use std::path::Path;

fn fixture() -> Dataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ethiopia_fi_unified_sample.csv");
    let mut source = CsvSource::from_path(&path).unwrap();
    Dataset::from_source(&mut source).unwrap()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-3
}

#[test]
fn test_fixture_loads() {
    let summary = fixture().summary();
    assert_eq!(summary.observations, 11);
    assert_eq!(summary.events, 5);
    assert_eq!(summary.targets, 1);
    assert_eq!(summary.impact_links, 7);
    assert_eq!(summary.indicators, 3);
}

#[test]
fn test_account_ownership_gender_gap() {
    let dataset = fixture();
    let gaps = dataset.gender_gaps("ACC_OWNERSHIP");
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].male, 56.0);
    assert_eq!(gaps[0].female, 36.0);
    assert_eq!(gaps[0].gap(), 20.0);
    assert!(dataset.gender_gaps("USG_DIGITAL_PAYMENT").is_empty());
}

#[test]
fn test_account_ownership_2025() {
    let composer = ForecastComposer::default();
    let forecast = composer
        .forecast_years(&fixture(), "ACC_OWNERSHIP", &[2025])
        .unwrap();
    let point = &forecast.points[0];

    // Gender-disaggregated rows stay out of the trend
    assert_eq!(forecast.trend.fit().unwrap().n_observations, 5);

    assert!(close(point.trend_value.unwrap(), 54.81685));
    // Telebirr refined 4.5 + M-Pesa 10 × 0.5; Fayda not yet past its lag
    assert!(close(point.event_adjustment, 9.5));
    assert_eq!(point.contributions.len(), 2);
    assert_eq!(point.confidence, ConfidenceLevel::Medium);

    assert!(close(point.base_estimate.unwrap(), 64.31685));
    assert!(close(point.pessimistic.unwrap(), 59.56685));
    assert!(close(point.optimistic.unwrap(), 68.11685));

    let half = 0.75 * 9.5 + 1.96 * 3.97041;
    assert!(close(point.ci_low.unwrap(), 64.31685 - half));
    assert!(close(point.ci_high.unwrap(), 64.31685 + half));
    assert!(!point.clamped);
}

#[test]
fn test_ramp_enters_after_lag() {
    let composer = ForecastComposer::default();
    let forecast = composer
        .forecast_years(&fixture(), "ACC_OWNERSHIP", &[2025, 2026, 2027])
        .unwrap();

    let fayda = |year: i32| {
        forecast
            .point_for_year(year)
            .unwrap()
            .contributions
            .iter()
            .find(|c| c.link_id == "IMP_0003")
            .map(|c| c.value)
    };
    assert_eq!(fayda(2025), None);
    // medium class default 10, ramp over 24 months, theoretical × 0.3
    assert!(close(fayda(2026).unwrap(), 10.0 * (11.0 + 30.0 / 31.0) / 24.0 * 0.3));
    assert!(close(fayda(2027).unwrap(), 10.0 * (23.0 + 30.0 / 31.0) / 24.0 * 0.3));

    let point_2026 = forecast.point_for_year(2026).unwrap();
    assert_eq!(point_2026.confidence, ConfidenceLevel::Low);
    let shape = point_2026
        .contributions
        .iter()
        .find(|c| c.link_id == "IMP_0003")
        .map(|c| c.shape);
    assert_eq!(shape, Some(ShapeKind::Ramp));
}

#[test]
fn test_digital_payment_2025() {
    let composer = ForecastComposer::default();
    let point = composer
        .forecast_years(&fixture(), "USG_DIGITAL_PAYMENT", &[2025])
        .unwrap()
        .points
        .remove(0);

    assert!((point.trend_value.unwrap() - 48.6).abs() < 0.05);
    // FX liberalization step plus the decayed Telebirr impulse; interoperability not yet live
    assert!(close(point.event_adjustment, 20.13963));
    assert!(point.contributions.iter().all(|c| c.link_id != "IMP_0005"));
    assert!(close(point.base_estimate.unwrap(), 68.72071));
}

#[test]
fn test_mobile_money_has_no_trend() {
    let composer = ForecastComposer::default();
    let forecast = composer
        .forecast_years(&fixture(), "ACC_MM_ACCOUNT", &[2025, 2026])
        .unwrap();

    assert_eq!(forecast.trend, TrendStatus::Undefined { observations: 1 });
    for point in &forecast.points {
        assert!(!point.trend_defined);
        assert!(point.trend_value.is_none());
        assert!(point.base_estimate.is_none());
        assert!(point.pessimistic.is_none());
        assert!(point.optimistic.is_none());
        assert_eq!(point.event_adjustment, 8.0);
    }
}

#[test]
fn test_table_covers_every_indicator() {
    let table = ForecastComposer::default()
        .forecast_table(&fixture(), &[2025, 2026, 2027])
        .unwrap();

    assert_eq!(table.len(), 9);
    assert!(table.get("USG_DIGITAL_PAYMENT", 2027).is_some());
    for point in table.iter().filter(|p| p.trend_defined) {
        assert!(point.pessimistic <= point.base_estimate);
        assert!(point.base_estimate <= point.optimistic);
    }
}

#[test]
fn test_tight_bounds_clamp() {
    let config = ComposerConfigBuilder::new().bounds(0.0, 65.0).build().unwrap();
    let point = ForecastComposer::new(config)
        .unwrap()
        .forecast_years(&fixture(), "USG_DIGITAL_PAYMENT", &[2025])
        .unwrap()
        .points
        .remove(0);

    assert!(point.clamped);
    assert_eq!(point.base_estimate, Some(65.0));
    assert_eq!(point.optimistic, Some(65.0));
    assert!(close(point.event_adjustment, 20.13963));
}

#[test]
fn test_calibration_reports() {
    let reports = calibrate(&fixture(), &ShapeParameters::default()).unwrap();
    assert_eq!(reports.len(), 7);

    let report = |id: &str| reports.iter().find(|r| r.link_id == id).unwrap();

    let telebirr = report("IMP_0001");
    assert_eq!(telebirr.status, CalibrationStatus::Validated);
    assert_eq!(telebirr.observed_change, Some(3.0));
    assert_eq!(telebirr.predicted_change, Some(15.0));
    assert!((telebirr.adjustment_factor - 0.2).abs() < 1e-12);
    assert!((telebirr.reduction_pct() - 80.0).abs() < 1e-9);

    assert!((report("IMP_0002").adjustment_factor - 0.3).abs() < 1e-12);
    assert_eq!(report("IMP_0003").status, CalibrationStatus::Unvalidated);
    assert_eq!(report("IMP_0004").status, CalibrationStatus::Unvalidated);
    assert_eq!(report("IMP_0007").status, CalibrationStatus::Unvalidated);

    let impulse = report("IMP_0006");
    assert!(impulse.is_validated());
    assert_eq!(impulse.adjustment_factor, 1.0);
    assert!(!impulse.over_predicted());
}

#[test]
fn test_target_gaps() {
    let dataset = fixture();
    let table = ForecastComposer::default()
        .forecast_table(&dataset, &[2025, 2026, 2027])
        .unwrap();
    let assessments = assess_targets(&dataset, &table);

    assert_eq!(assessments.len(), 1);
    let nfis = &assessments[0];
    assert_eq!(nfis.target_value, 70.0);
    assert!(close(nfis.gap_for_year(2025).unwrap().base_gap.unwrap(), 70.0 - 64.31685));
    assert_eq!(nfis.first_year_met.get(Scenario::Base), Some(2027));
    assert_eq!(nfis.first_year_met.get(Scenario::Optimistic), Some(2026));
    assert_eq!(nfis.first_year_met.get(Scenario::Pessimistic), None);
    assert!(!nfis.met_on_time(Scenario::Optimistic));
}

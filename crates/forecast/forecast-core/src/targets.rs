//! Target assessment against forecast scenarios

use dataset_core::Dataset;
use dataset_spi::Target;
use forecast_spi::{
    ForecastPoint, ForecastTable, Scenario, ScenarioYears, TargetAssessment, TargetGap,
};
use tracing::info;

/// Gaps between a target and an indicator's forecast points.
///
/// Points of other indicators are ignored. Points without a defined trend
/// give `None` gaps and never meet the target.
pub fn assess_target(target: &Target, points: &[&ForecastPoint]) -> TargetAssessment {
    let mut points: Vec<&ForecastPoint> = points
        .iter()
        .copied()
        .filter(|p| p.indicator_code == target.indicator_code)
        .collect();
    points.sort_by_key(|p| p.year);

    let gap = |value: Option<f64>| value.map(|v| target.value - v);
    let gaps = points
        .iter()
        .map(|p| TargetGap {
            year: p.year,
            base_gap: gap(p.base_estimate),
            pessimistic_gap: gap(p.pessimistic),
            optimistic_gap: gap(p.optimistic),
        })
        .collect();

    let mut first_year_met = ScenarioYears::default();
    for scenario in Scenario::ALL {
        let year = points
            .iter()
            .find(|p| p.scenario_value(scenario).is_some_and(|v| v >= target.value))
            .map(|p| p.year);
        first_year_met.set(scenario, year);
    }

    TargetAssessment {
        indicator_code: target.indicator_code.clone(),
        target_id: target.record_id.clone(),
        target_value: target.value,
        target_date: target.date,
        gaps,
        first_year_met,
    }
}

/// Assess every dataset target whose indicator appears in `table`
pub fn assess_targets(dataset: &Dataset, table: &ForecastTable) -> Vec<TargetAssessment> {
    let points: Vec<&ForecastPoint> = table.iter().collect();
    let assessments: Vec<TargetAssessment> = dataset
        .targets()
        .iter()
        .filter(|t| table.indicators().contains(t.indicator_code.as_str()))
        .map(|t| assess_target(t, &points))
        .collect();
    info!(targets = assessments.len(), "targets assessed");
    assessments
}

//! Impact link calibration
//!
//! A link is checked against the observed change across its onset: the last
//! observation before the onset and the first at or after it. Over-predicting
//! links get an adjustment factor below one; the raw estimate is kept.

use dataset_core::Dataset;
use dataset_spi::{DatasetError, Event, EvidenceBasis, ImpactLink, Observation};
use effect_spi::{month_index, EffectFunction, EffectTiming};
use forecast_spi::{
    CalibrationReport, CalibrationStatus, ForecastError, Result, ShapeParameters,
};
use tracing::{debug, info, warn};

use crate::adjustment::resolve_shape;

const PREDICTED_EPSILON: f64 = 1e-9;

/// Compare a link's raw prediction with the observed change across its onset.
///
/// `observations` must belong to the link's indicator; they need not be sorted.
pub fn validate_link(
    link: &ImpactLink,
    event: &Event,
    observations: &[&Observation],
    shapes: &ShapeParameters,
) -> CalibrationReport {
    let timing = EffectTiming::new(
        month_index(event.date),
        link.lag_months,
        link.signed_raw_magnitude(),
    );
    let onset = timing.onset();

    let before = observations
        .iter()
        .filter(|o| month_index(o.date) < onset)
        .max_by_key(|o| o.date);
    let after = observations
        .iter()
        .filter(|o| month_index(o.date) >= onset)
        .min_by_key(|o| o.date);

    let (Some(before), Some(after)) = (before, after) else {
        debug!(link = %link.link_id, "no observations on both sides of onset, unvalidated");
        return CalibrationReport::unvalidated(&link.link_id, &link.event_id, &link.indicator_code);
    };

    // Same onset gate as the composer: nothing applies before event + lag
    let shape = resolve_shape(link, event, shapes);
    let effect_at = |date| {
        let t = month_index(date);
        if timing.is_active(t) {
            shape.evaluate(t, &timing)
        } else {
            0.0
        }
    };
    let predicted = effect_at(after.date) - effect_at(before.date);
    let observed = after.value - before.value;
    let factor = adjustment_factor(predicted, observed);

    let report = CalibrationReport {
        link_id: link.link_id.clone(),
        event_id: link.event_id.clone(),
        indicator_code: link.indicator_code.clone(),
        status: CalibrationStatus::Validated,
        window_start: Some(before.date),
        window_end: Some(after.date),
        predicted_change: Some(predicted),
        observed_change: Some(observed),
        error: Some(predicted - observed),
        adjustment_factor: factor,
    };

    if report.over_predicted() {
        warn!(
            link = %link.link_id,
            predicted,
            observed,
            factor,
            "impact link over-predicts observed change"
        );
    } else {
        debug!(link = %link.link_id, predicted, observed, "impact link consistent with data");
    }
    report
}

/// `clamp(observed / predicted, 0, 1)`; `1` when nothing was predicted
pub fn adjustment_factor(predicted: f64, observed: f64) -> f64 {
    if predicted.abs() < PREDICTED_EPSILON {
        return 1.0;
    }
    (observed / predicted).clamp(0.0, 1.0)
}

/// Link with its refined magnitude set to `raw × factor`.
///
/// Unvalidated reports leave the link unchanged.
pub fn refine(link: &ImpactLink, report: &CalibrationReport) -> ImpactLink {
    if !report.is_validated() {
        return link.clone();
    }
    let mut refined = link.with_refinement(link.magnitude * report.adjustment_factor, None);
    refined.evidence_basis = EvidenceBasis::Validated;
    refined
}

/// Validate every impact link of a dataset
pub fn calibrate(dataset: &Dataset, shapes: &ShapeParameters) -> Result<Vec<CalibrationReport>> {
    let reports = dataset
        .impact_links()
        .iter()
        .map(|link| {
            let event = dataset.event(&link.event_id).ok_or_else(|| {
                ForecastError::from(DatasetError::UnknownEvent {
                    link_id: link.link_id.clone(),
                    event_id: link.event_id.clone(),
                })
            })?;
            let observations = dataset.observations_for(&link.indicator_code);
            Ok(validate_link(link, event, &observations, shapes))
        })
        .collect::<Result<Vec<_>>>()?;

    let validated = reports.iter().filter(|r| r.is_validated()).count();
    let over = reports.iter().filter(|r| r.over_predicted()).count();
    info!(
        links = reports.len(),
        validated,
        over_predicted = over,
        "calibration complete"
    );
    Ok(reports)
}

/// Impact links of `dataset` refined by `reports`, matched on link id
pub fn refined_links(dataset: &Dataset, reports: &[CalibrationReport]) -> Vec<ImpactLink> {
    dataset
        .impact_links()
        .iter()
        .map(|link| {
            match reports.iter().find(|r| r.link_id == link.link_id) {
                Some(report) => refine(link, report),
                None => link.clone(),
            }
        })
        .collect()
}

/// Dataset whose impact links carry the refinements of `reports`.
///
/// Forecasting from the result uses the calibrated magnitudes; the raw
/// estimates stay on every link.
pub fn apply_calibration(dataset: &Dataset, reports: &[CalibrationReport]) -> Result<Dataset> {
    let refined = refined_links(dataset, reports);
    Ok(dataset.with_refined_links(&refined)?)
}

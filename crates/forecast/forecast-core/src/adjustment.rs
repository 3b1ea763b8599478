//! Event adjustment: the signed, evidence-scaled sum of link effects

use dataset_spi::{ConfidenceLevel, Event, ImpactLink};
use effect_core::EffectShape;
use effect_spi::{month_index, EffectFunction, EffectTiming, ShapeKind};
use forecast_spi::{ComposerConfig, EventContribution, Result, ShapeParameters};
use tracing::trace;

/// Parameterised shape for a shape name
pub fn effect_shape(kind: ShapeKind, shapes: &ShapeParameters) -> EffectShape {
    match kind {
        ShapeKind::Step => EffectShape::Step,
        ShapeKind::Ramp => EffectShape::Ramp {
            ramp_period: shapes.ramp_period,
        },
        ShapeKind::ImpulseDecay => EffectShape::ImpulseDecay {
            decay_rate: shapes.decay_rate,
        },
        ShapeKind::SCurve => EffectShape::SCurve {
            steepness: shapes.steepness,
            midpoint: shapes.midpoint,
        },
    }
}

/// Shape of a link: its explicit shape, else the one mapped from the event category
pub fn resolve_shape(link: &ImpactLink, event: &Event, shapes: &ShapeParameters) -> EffectShape {
    let kind = link
        .shape
        .unwrap_or_else(|| shapes.shape_for_category(&event.category));
    effect_shape(kind, shapes)
}

/// Timing of a link using its effective (refined, else raw) magnitude and lag
pub fn link_timing(link: &ImpactLink, event: &Event) -> EffectTiming {
    EffectTiming::new(
        month_index(event.date),
        link.effective_lag(),
        link.signed_magnitude(),
    )
}

/// Contribution of one link at month `t`.
///
/// `None` when the link's onset is after `t`: effects never apply
/// retroactively, whatever the shape.
pub fn contribution(
    link: &ImpactLink,
    event: &Event,
    t: f64,
    config: &ComposerConfig,
) -> Result<Option<EventContribution>> {
    let timing = link_timing(link, event);
    if !timing.is_active(t) {
        trace!(link = %link.link_id, onset = timing.onset(), t, "link not yet active");
        return Ok(None);
    }

    let shape = resolve_shape(link, event, &config.shapes).validated()?;
    let raw_effect = shape.evaluate(t, &timing);
    let scale = config.evidence_scaling.factor(link.evidence_basis);

    Ok(Some(EventContribution {
        link_id: link.link_id.clone(),
        event_id: link.event_id.clone(),
        shape: shape.kind(),
        raw_effect,
        scale,
        value: raw_effect * scale,
        confidence: link.confidence,
    }))
}

/// Sum of contribution values
pub fn event_adjustment(contributions: &[EventContribution]) -> f64 {
    contributions.iter().map(|c| c.value).sum()
}

/// Weakest confidence among contributions; `High` when there are none
pub fn combined_confidence(contributions: &[EventContribution]) -> ConfidenceLevel {
    contributions
        .iter()
        .map(|c| c.confidence)
        .min()
        .unwrap_or(ConfidenceLevel::High)
}

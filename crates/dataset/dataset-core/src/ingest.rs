//! Schema validation of raw rows
//!
//! Violations are rejected here, at ingestion, so the forecasting code can
//! trust every record it sees.

use chrono::NaiveDate;
use dataset_spi::{
    ConfidenceLevel, DatasetError, Direction, Event, EvidenceBasis, ImpactLink, MagnitudeClass,
    Observation, RawRecord, Record, RecordType, Result, Target,
};
use effect_spi::ShapeKind;

/// Parse a date in one of the layouts found in the unified table:
/// `YYYY-MM-DD`, `MM/DD/YYYY`, `YYYY-MM` or a bare `YYYY`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%m/%d/%Y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d") {
        return Some(date);
    }
    if value.len() == 4 {
        if let Ok(year) = value.parse::<i32>() {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }
    None
}

/// Validate one raw row into a typed [`Record`]
pub fn parse_record(raw: &RawRecord) -> Result<Record> {
    let id = RawRecord::text(&raw.record_id)
        .ok_or_else(|| DatasetError::violation("<missing>", "record_id is required"))?;
    let record_type = RawRecord::text(&raw.record_type)
        .ok_or_else(|| DatasetError::violation(id, "record_type is required"))?
        .parse::<RecordType>()
        .map_err(|e| DatasetError::violation(id, e.to_string()))?;

    match record_type {
        RecordType::Observation => parse_observation(id, raw).map(Record::Observation),
        RecordType::Event => parse_event(id, raw).map(Record::Event),
        RecordType::Target => parse_target(id, raw).map(Record::Target),
        RecordType::ImpactLink => parse_impact_link(id, raw).map(Record::ImpactLink),
    }
}

fn required<'a>(id: &str, field: &'a Option<String>, name: &str) -> Result<&'a str> {
    RawRecord::text(field)
        .ok_or_else(|| DatasetError::violation(id, format!("{} is required", name)))
}

fn required_date(id: &str, raw: &RawRecord) -> Result<NaiveDate> {
    let text = required(id, &raw.observation_date, "observation_date")?;
    parse_date(text)
        .ok_or_else(|| DatasetError::violation(id, format!("unparseable date '{}'", text)))
}

fn required_value(id: &str, raw: &RawRecord) -> Result<f64> {
    match raw.value_numeric {
        Some(v) if v.is_finite() => Ok(v),
        Some(v) => Err(DatasetError::violation(id, format!("value_numeric is not finite: {}", v))),
        None => Err(DatasetError::violation(id, "value_numeric is required")),
    }
}

fn optional_text(field: &Option<String>) -> Option<String> {
    RawRecord::text(field).map(str::to_string)
}

fn parse_optional<T>(id: &str, field: &Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    RawRecord::text(field)
        .map(|text| text.parse::<T>())
        .transpose()
        .map_err(|e| DatasetError::violation(id, e.to_string()))
}

fn forbid_category(id: &str, raw: &RawRecord, kind: &str) -> Result<()> {
    if RawRecord::text(&raw.category).is_some() {
        return Err(DatasetError::violation(
            id,
            format!("{} records must not carry a category", kind),
        ));
    }
    Ok(())
}

fn parse_observation(id: &str, raw: &RawRecord) -> Result<Observation> {
    forbid_category(id, raw, "observation")?;
    Ok(Observation {
        record_id: id.to_string(),
        indicator_code: required(id, &raw.indicator_code, "indicator_code")?.to_string(),
        indicator: optional_text(&raw.indicator),
        pillar: optional_text(&raw.pillar).map(|p| p.to_ascii_uppercase()),
        date: required_date(id, raw)?,
        value: required_value(id, raw)?,
        source: optional_text(&raw.source_name),
        confidence: parse_optional::<ConfidenceLevel>(id, &raw.confidence)?.unwrap_or_default(),
        gender: optional_text(&raw.gender),
    })
}

fn parse_event(id: &str, raw: &RawRecord) -> Result<Event> {
    if RawRecord::text(&raw.pillar).is_some() {
        return Err(DatasetError::violation(
            id,
            "events must not carry a pillar; link them to indicators instead",
        ));
    }
    let description = RawRecord::text(&raw.indicator)
        .or_else(|| RawRecord::text(&raw.notes))
        .unwrap_or(id)
        .to_string();
    Ok(Event {
        event_id: id.to_string(),
        category: required(id, &raw.category, "category")?.to_ascii_lowercase(),
        date: required_date(id, raw)?,
        description,
        source: optional_text(&raw.source_name),
    })
}

fn parse_target(id: &str, raw: &RawRecord) -> Result<Target> {
    forbid_category(id, raw, "target")?;
    Ok(Target {
        record_id: id.to_string(),
        indicator_code: required(id, &raw.indicator_code, "indicator_code")?.to_string(),
        date: required_date(id, raw)?,
        value: required_value(id, raw)?,
        source: optional_text(&raw.source_name),
    })
}

fn non_negative(id: &str, name: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(DatasetError::violation(
            id,
            format!("{} must be a non-negative number, got {}", name, v),
        )),
        other => Ok(other),
    }
}

fn parse_impact_link(id: &str, raw: &RawRecord) -> Result<ImpactLink> {
    forbid_category(id, raw, "impact_link")?;
    let event_id = required(id, &raw.parent_id, "parent_id")?.to_string();
    let indicator_code = RawRecord::text(&raw.related_indicator)
        .or_else(|| RawRecord::text(&raw.indicator_code))
        .ok_or_else(|| DatasetError::violation(id, "related_indicator is required"))?
        .to_string();
    let direction = required(id, &raw.impact_direction, "impact_direction")?
        .parse::<Direction>()
        .map_err(|e| DatasetError::violation(id, e.to_string()))?;
    let magnitude_class = parse_optional::<MagnitudeClass>(id, &raw.impact_magnitude)?;

    // Magnitudes are unsigned; the direction carries the sign.
    let estimate = non_negative(id, "impact_estimate", raw.impact_estimate)?;
    let magnitude = match (estimate, magnitude_class) {
        (Some(value), _) => value,
        (None, Some(class)) => class.default_percentage(),
        (None, None) => {
            return Err(DatasetError::violation(
                id,
                "either impact_estimate or impact_magnitude is required",
            ))
        }
    };

    let shape = parse_optional::<ShapeKind>(id, &raw.effect_shape)?;

    Ok(ImpactLink {
        link_id: id.to_string(),
        event_id,
        indicator_code,
        direction,
        magnitude_class,
        magnitude,
        refined_magnitude: non_negative(id, "refined_estimate", raw.refined_estimate)?,
        lag_months: non_negative(id, "lag_months", raw.lag_months)?.unwrap_or(0.0),
        refined_lag_months: non_negative(id, "refined_lag_months", raw.refined_lag_months)?,
        evidence_basis: parse_optional::<EvidenceBasis>(id, &raw.evidence_basis)?
            .unwrap_or(EvidenceBasis::Theoretical),
        evidence_source: optional_text(&raw.source_name),
        confidence: parse_optional::<ConfidenceLevel>(id, &raw.confidence)?.unwrap_or_default(),
        shape,
    })
}

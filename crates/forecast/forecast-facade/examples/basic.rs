//! Basic example: forecast account ownership from the sample unified table
//!
//! Run with: cargo run --example basic -p forecast-facade

use dataset_facade::{CsvSource, Dataset};
use forecast_facade::{assess_targets, ForecastComposer};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/ethiopia_fi_unified_sample.csv");
    let mut source = CsvSource::from_path(&path)?;
    let dataset = Dataset::from_source(&mut source)?;

    let composer = ForecastComposer::default();
    let table = composer.forecast_table(&dataset, &[2025, 2026, 2027])?;

    for point in &table {
        match point.base_estimate {
            Some(base) => println!(
                "{} {}: trend {:.1} + events {:.1} = {:.1} [{:.1}, {:.1}]",
                point.indicator_code,
                point.year,
                point.trend_value.unwrap_or_default(),
                point.event_adjustment,
                base,
                point.pessimistic.unwrap_or_default(),
                point.optimistic.unwrap_or_default(),
            ),
            None => println!(
                "{} {}: no trend, events {:.1}",
                point.indicator_code, point.year, point.event_adjustment
            ),
        }
    }

    for assessment in assess_targets(&dataset, &table) {
        println!(
            "{} target {:.0}: base first met in {:?}",
            assessment.indicator_code, assessment.target_value, assessment.first_year_met.base
        );
    }
    Ok(())
}

//! Rendering of forecast, contribution, calibration and target results

use std::io::Write;

use dataset_facade::ImpactLink;
use forecast_facade::{CalibrationReport, ForecastPoint, ForecastTable, TargetAssessment};
use serde::Serialize;

use crate::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Flat forecast row for CSV output
#[derive(Debug, Serialize)]
struct ForecastRow<'a> {
    indicator_code: &'a str,
    year: i32,
    target_date: String,
    trend_value: Option<f64>,
    event_adjustment: f64,
    base_estimate: Option<f64>,
    pessimistic: Option<f64>,
    optimistic: Option<f64>,
    ci_low: Option<f64>,
    ci_high: Option<f64>,
    confidence: &'a str,
    clamped: bool,
}

impl<'a> From<&'a ForecastPoint> for ForecastRow<'a> {
    fn from(p: &'a ForecastPoint) -> Self {
        Self {
            indicator_code: &p.indicator_code,
            year: p.year,
            target_date: p.target_date.to_string(),
            trend_value: p.trend_value,
            event_adjustment: p.event_adjustment,
            base_estimate: p.base_estimate,
            pessimistic: p.pessimistic,
            optimistic: p.optimistic,
            ci_low: p.ci_low,
            ci_high: p.ci_high,
            confidence: p.confidence.as_str(),
            clamped: p.clamped,
        }
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

fn year_cell(value: Option<i32>) -> String {
    value.map_or_else(|| "not met".to_string(), |y| y.to_string())
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    writeln!(out).map_err(|e| e.to_string())
}

pub fn write_forecast(
    out: &mut dyn Write,
    table: &ForecastTable,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, table),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for point in table {
                writer
                    .serialize(ForecastRow::from(point))
                    .map_err(|e| format!("Failed to write CSV: {}", e))?;
            }
            writer.flush().map_err(|e| e.to_string())
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<22} {:>4} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}  {}",
                "indicator", "year", "trend", "events", "base", "pess", "opt", "ci_low", "ci_high", "confidence"
            )
            .map_err(|e| e.to_string())?;
            for p in table {
                let flag = if p.clamped { " (clamped)" } else { "" };
                writeln!(
                    out,
                    "{:<22} {:>4} {:>8} {:>8.2} {:>8} {:>8} {:>8} {:>8} {:>8}  {}{}",
                    p.indicator_code,
                    p.year,
                    cell(p.trend_value),
                    p.event_adjustment,
                    cell(p.base_estimate),
                    cell(p.pessimistic),
                    cell(p.optimistic),
                    cell(p.ci_low),
                    cell(p.ci_high),
                    p.confidence,
                    flag
                )
                .map_err(|e| e.to_string())?;
            }
            Ok(())
        }
    }
}

pub fn write_contributions(
    out: &mut dyn Write,
    point: &ForecastPoint,
    links: &[&ImpactLink],
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, point);
    }
    let err = |e: std::io::Error| e.to_string();
    writeln!(
        out,
        "{} at {}: event adjustment {:.2} ({} confidence)",
        point.indicator_code, point.target_date, point.event_adjustment, point.confidence
    )
    .map_err(err)?;
    writeln!(
        out,
        "{:<10} {:<10} {:<14} {:>8} {:>6} {:>8}",
        "link", "event", "shape", "raw", "scale", "value"
    )
    .map_err(err)?;
    for c in &point.contributions {
        writeln!(
            out,
            "{:<10} {:<10} {:<14} {:>8.2} {:>6.2} {:>8.2}",
            c.link_id,
            c.event_id,
            c.shape.as_str(),
            c.raw_effect,
            c.scale,
            c.value
        )
        .map_err(err)?;
    }
    let pending: Vec<&str> = links
        .iter()
        .filter(|l| point.contributions.iter().all(|c| c.link_id != l.link_id))
        .map(|l| l.link_id.as_str())
        .collect();
    if !pending.is_empty() {
        writeln!(out, "not yet active: {}", pending.join(", ")).map_err(err)?;
    }
    Ok(())
}

pub fn write_calibration(
    out: &mut dyn Write,
    reports: &[CalibrationReport],
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, reports);
    }
    let err = |e: std::io::Error| e.to_string();
    writeln!(
        out,
        "{:<10} {:<22} {:<12} {:>9} {:>9} {:>7} {:>7}",
        "link", "indicator", "status", "predicted", "observed", "factor", "cut %"
    )
    .map_err(err)?;
    for r in reports {
        let status = if r.is_validated() { "validated" } else { "unvalidated" };
        writeln!(
            out,
            "{:<10} {:<22} {:<12} {:>9} {:>9} {:>7.2} {:>7.1}",
            r.link_id,
            r.indicator_code,
            status,
            cell(r.predicted_change),
            cell(r.observed_change),
            r.adjustment_factor,
            r.reduction_pct()
        )
        .map_err(err)?;
    }
    Ok(())
}

pub fn write_targets(
    out: &mut dyn Write,
    assessments: &[TargetAssessment],
    format: OutputFormat,
) -> CliResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, assessments);
    }
    let err = |e: std::io::Error| e.to_string();
    for a in assessments {
        writeln!(
            out,
            "{} target {:.1} by {} ({})",
            a.indicator_code, a.target_value, a.target_date, a.target_id
        )
        .map_err(err)?;
        writeln!(out, "  {:>4} {:>8} {:>8} {:>8}", "year", "base", "pess", "opt").map_err(err)?;
        for g in &a.gaps {
            writeln!(
                out,
                "  {:>4} {:>8} {:>8} {:>8}",
                g.year,
                cell(g.base_gap),
                cell(g.pessimistic_gap),
                cell(g.optimistic_gap)
            )
            .map_err(err)?;
        }
        writeln!(
            out,
            "  first year met: base {}, pessimistic {}, optimistic {}",
            year_cell(a.first_year_met.base),
            year_cell(a.first_year_met.pessimistic),
            year_cell(a.first_year_met.optimistic)
        )
        .map_err(err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dataset_facade::ConfidenceLevel;

    fn point(trend: Option<f64>) -> ForecastPoint {
        ForecastPoint {
            indicator_code: "ACC_OWNERSHIP".to_string(),
            target_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            year: 2025,
            trend_value: trend,
            event_adjustment: 9.5,
            base_estimate: trend.map(|t| t + 9.5),
            pessimistic: None,
            optimistic: None,
            ci_low: None,
            ci_high: None,
            confidence: ConfidenceLevel::Medium,
            trend_defined: trend.is_some(),
            clamped: false,
            contributions: Vec::new(),
        }
    }

    fn render(table: &ForecastTable, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_forecast(&mut buf, table, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_leaves_undefined_values_empty() {
        let mut table = ForecastTable::new();
        table.push(point(None));
        let csv = render(&table, OutputFormat::Csv);
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("indicator_code,year,target_date"));
        assert_eq!(
            lines.next().unwrap(),
            "ACC_OWNERSHIP,2025,2025-12-31,,9.5,,,,,,medium,false"
        );
    }

    #[test]
    fn test_table_marks_missing_values() {
        let mut table = ForecastTable::new();
        table.push(point(Some(54.8)));
        let text = render(&table, OutputFormat::Table);
        assert!(text.contains("54.80"));
        assert!(text.contains("64.30"));
        assert!(text.contains(" - "));
    }

    #[test]
    fn test_json_is_parseable() {
        let mut table = ForecastTable::new();
        table.push(point(Some(54.8)));
        let json = render(&table, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rows"][0]["year"], 2025);
    }
}

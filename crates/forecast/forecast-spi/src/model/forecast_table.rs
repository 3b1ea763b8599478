//! Forecast table keyed by indicator and year

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{ForecastPoint, TrendStatus};

/// All forecast points of one indicator with the trend they rest on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorForecast {
    pub indicator_code: String,
    pub trend: TrendStatus,
    pub points: Vec<ForecastPoint>,
}

impl IndicatorForecast {
    pub fn point_for_year(&self, year: i32) -> Option<&ForecastPoint> {
        self.points.iter().find(|p| p.year == year)
    }
}

/// Rows of `(indicator_code, year)` forecasts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastTable {
    pub rows: Vec<ForecastPoint>,
}

impl ForecastTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: ForecastPoint) {
        self.rows.push(point);
    }

    pub fn extend_from(&mut self, forecast: IndicatorForecast) {
        self.rows.extend(forecast.points);
    }

    pub fn get(&self, indicator_code: &str, year: i32) -> Option<&ForecastPoint> {
        self.rows
            .iter()
            .find(|p| p.indicator_code == indicator_code && p.year == year)
    }

    pub fn indicators(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|p| p.indicator_code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastPoint> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a ForecastTable {
    type Item = &'a ForecastPoint;
    type IntoIter = std::slice::Iter<'a, ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

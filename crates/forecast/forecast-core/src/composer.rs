//! Forecast composer
//!
//! `base = trend + Σ scaled link effects`, with scenario bounds and a
//! confidence interval around the base estimate.

use chrono::{Datelike, NaiveDate};
use dataset_core::Dataset;
use dataset_spi::{DatasetError, Event, ImpactLink, Observation};
use effect_spi::{decimal_year, month_index};
use forecast_spi::{
    ComposerConfig, ConfidenceIntervalComputer, EventContribution, ForecastError, ForecastPoint,
    ForecastTable, IndicatorForecast, Result, TrendModel, TrendStatus,
};
use tracing::{debug, info, warn};

use crate::adjustment::{combined_confidence, contribution, event_adjustment};
use crate::confidence::EventIntervalComputer;
use crate::scenario::ScenarioValues;
use crate::trend::{observation_points, LinearTrend};

/// Composes trend and event effects into forecast points
pub struct ForecastComposer {
    config: ComposerConfig,
    interval: Box<dyn ConfidenceIntervalComputer>,
}

impl ForecastComposer {
    /// Create a composer, rejecting invalid configuration
    pub fn new(config: ComposerConfig) -> Result<Self> {
        config.validate()?;
        let interval = Box::new(EventIntervalComputer::from_config(&config));
        Ok(Self { config, interval })
    }

    /// Replace the confidence interval computer
    pub fn with_interval_computer(
        mut self,
        interval: impl ConfidenceIntervalComputer + 'static,
    ) -> Self {
        self.interval = Box::new(interval);
        self
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Fit the trend over an indicator's observations
    pub fn fit_trend(&self, observations: &[&Observation]) -> Result<LinearTrend> {
        let mut trend = LinearTrend::with_min_observations(self.config.min_observations);
        trend.fit(&observation_points(observations))?;
        Ok(trend)
    }

    /// Trend of an indicator, or `None` when there are too few observations
    fn indicator_trend(&self, dataset: &Dataset, indicator_code: &str) -> Result<Option<LinearTrend>> {
        let observations = dataset.observations_for(indicator_code);
        match self.fit_trend(&observations) {
            Ok(trend) => Ok(Some(trend)),
            Err(ForecastError::InsufficientData { required, actual }) => {
                warn!(
                    indicator = indicator_code,
                    required, actual, "trend undefined, reporting event adjustments only"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Impact links of an indicator paired with their events
    fn linked_events<'a>(
        &self,
        dataset: &'a Dataset,
        indicator_code: &str,
    ) -> Result<Vec<(&'a ImpactLink, &'a Event)>> {
        dataset
            .links_for(indicator_code)
            .into_iter()
            .map(|link| {
                dataset
                    .event(&link.event_id)
                    .map(|event| (link, event))
                    .ok_or_else(|| {
                        ForecastError::from(DatasetError::UnknownEvent {
                            link_id: link.link_id.clone(),
                            event_id: link.event_id.clone(),
                        })
                    })
            })
            .collect()
    }

    fn contributions_at(
        &self,
        links: &[(&ImpactLink, &Event)],
        date: NaiveDate,
    ) -> Result<Vec<EventContribution>> {
        let t = month_index(date);
        let mut contributions = Vec::new();
        for (link, event) in links {
            if let Some(c) = contribution(link, event, t, &self.config)? {
                contributions.push(c);
            }
        }
        Ok(contributions)
    }

    /// Per-link contributions to an indicator at `date`, links not yet active omitted
    pub fn contributions(
        &self,
        dataset: &Dataset,
        indicator_code: &str,
        date: NaiveDate,
    ) -> Result<Vec<EventContribution>> {
        let links = self.linked_events(dataset, indicator_code)?;
        self.contributions_at(&links, date)
    }

    fn compose_point(
        &self,
        indicator_code: &str,
        date: NaiveDate,
        trend: Option<&LinearTrend>,
        links: &[(&ImpactLink, &Event)],
    ) -> Result<ForecastPoint> {
        let contributions = self.contributions_at(links, date)?;
        let adjustment = event_adjustment(&contributions);
        let confidence = combined_confidence(&contributions);

        let mut point = ForecastPoint {
            indicator_code: indicator_code.to_string(),
            target_date: date,
            year: date.year(),
            trend_value: None,
            event_adjustment: adjustment,
            base_estimate: None,
            pessimistic: None,
            optimistic: None,
            ci_low: None,
            ci_high: None,
            confidence,
            trend_defined: false,
            clamped: false,
            contributions,
        };

        let Some(trend) = trend else {
            return Ok(point);
        };

        let x = decimal_year(date);
        let trend_value = trend.predict_at(x)?;
        let trend_error = trend.prediction_std_error(x)?;
        let values = ScenarioValues::compute(trend_value, adjustment, &self.config.scenarios);
        let interval = self
            .interval
            .compute(values.base, adjustment, confidence, trend_error);

        let mut clamped = false;
        let mut bound = |value: f64| match self.config.bounds {
            Some(bounds) => {
                let (v, changed) = bounds.clamp(value);
                clamped |= changed;
                v
            }
            None => value,
        };
        point.base_estimate = Some(bound(values.base));
        point.pessimistic = Some(bound(values.pessimistic));
        point.optimistic = Some(bound(values.optimistic));
        point.ci_low = Some(bound(interval.low));
        point.ci_high = Some(bound(interval.high));
        point.trend_value = Some(trend_value);
        point.trend_defined = true;
        point.clamped = clamped;

        debug!(
            indicator = indicator_code,
            %date,
            trend = trend_value,
            adjustment,
            base = values.base,
            clamped,
            "composed forecast point"
        );
        Ok(point)
    }

    /// Forecast of one indicator at one date
    pub fn forecast_at(
        &self,
        dataset: &Dataset,
        indicator_code: &str,
        date: NaiveDate,
    ) -> Result<ForecastPoint> {
        let forecast = self.forecast_indicator(dataset, indicator_code, &[date])?;
        forecast
            .points
            .into_iter()
            .next()
            .ok_or_else(|| ForecastError::UnknownIndicator(indicator_code.to_string()))
    }

    /// Forecast of one indicator at each date
    pub fn forecast_indicator(
        &self,
        dataset: &Dataset,
        indicator_code: &str,
        dates: &[NaiveDate],
    ) -> Result<IndicatorForecast> {
        let links = self.linked_events(dataset, indicator_code)?;
        let observations = dataset.observations_for(indicator_code);
        if observations.is_empty() && links.is_empty() {
            return Err(ForecastError::UnknownIndicator(indicator_code.to_string()));
        }

        let trend = self.indicator_trend(dataset, indicator_code)?;
        let status = match trend.as_ref().and_then(|t| t.fit_summary()) {
            Some(fit) => TrendStatus::Fitted(fit.clone()),
            None => TrendStatus::Undefined {
                observations: observations.len(),
            },
        };

        let points = dates
            .iter()
            .map(|&date| self.compose_point(indicator_code, date, trend.as_ref(), &links))
            .collect::<Result<Vec<_>>>()?;

        Ok(IndicatorForecast {
            indicator_code: indicator_code.to_string(),
            trend: status,
            points,
        })
    }

    /// Forecast of one indicator at each year, anchored per configuration
    pub fn forecast_years(
        &self,
        dataset: &Dataset,
        indicator_code: &str,
        years: &[i32],
    ) -> Result<IndicatorForecast> {
        let dates = self.year_dates(years)?;
        self.forecast_indicator(dataset, indicator_code, &dates)
    }

    /// Forecast table over the given indicators
    pub fn forecast_indicators(
        &self,
        dataset: &Dataset,
        indicator_codes: &[String],
        years: &[i32],
    ) -> Result<ForecastTable> {
        let mut table = ForecastTable::new();
        for code in indicator_codes {
            table.extend_from(self.forecast_years(dataset, code, years)?);
        }
        info!(
            indicators = indicator_codes.len(),
            rows = table.len(),
            "forecast table composed"
        );
        Ok(table)
    }

    /// Forecast table over every indicator in the dataset
    pub fn forecast_table(&self, dataset: &Dataset, years: &[i32]) -> Result<ForecastTable> {
        let codes: Vec<String> = dataset.indicators().into_iter().collect();
        self.forecast_indicators(dataset, &codes, years)
    }

    fn year_dates(&self, years: &[i32]) -> Result<Vec<NaiveDate>> {
        years
            .iter()
            .map(|&year| {
                self.config
                    .year_anchor
                    .date_for_year(year)
                    .ok_or_else(|| ForecastError::invalid("year", format!("{} is out of range", year)))
            })
            .collect()
    }
}

impl Default for ForecastComposer {
    fn default() -> Self {
        let config = ComposerConfig::default();
        let interval = Box::new(EventIntervalComputer::from_config(&config));
        Self { config, interval }
    }
}

//! Append-only in-memory dataset

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use dataset_spi::{
    DatasetError, Event, ImpactLink, Observation, RawRecord, Record, RecordSource, Result, Target,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ingest::parse_record;

/// Record counts of a dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub observations: usize,
    pub events: usize,
    pub targets: usize,
    pub impact_links: usize,
    pub indicators: usize,
}

/// Male and female values of an indicator at one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderGap {
    pub indicator_code: String,
    pub date: NaiveDate,
    pub male: f64,
    pub female: f64,
}

impl GenderGap {
    /// Male minus female, in percentage points
    pub fn gap(&self) -> f64 {
        self.male - self.female
    }
}

/// Validated records of the unified table.
///
/// Records are only ever added, through [`Dataset::append`]; nothing already
/// ingested is modified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    observations: Vec<Observation>,
    events: Vec<Event>,
    targets: Vec<Target>,
    impact_links: Vec<ImpactLink>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and ingest a first batch of raw rows
    pub fn from_raw(raw: &[RawRecord]) -> Result<Self> {
        let mut dataset = Self::new();
        dataset.append_raw(raw)?;
        Ok(dataset)
    }

    /// Read every row of a source and ingest it
    pub fn from_source(source: &mut dyn RecordSource) -> Result<Self> {
        let raw = source.read_records()?;
        info!(source = source.name(), rows = raw.len(), "loaded raw records");
        Self::from_raw(&raw)
    }

    /// Validate and append a batch of raw rows (an enrichment pass)
    pub fn append_raw(&mut self, raw: &[RawRecord]) -> Result<()> {
        let records = raw.iter().map(parse_record).collect::<Result<Vec<_>>>()?;
        self.append(records)
    }

    /// Append already-typed records.
    ///
    /// The whole batch is rejected if any record id is already present or
    /// any impact link points at an event that exists in neither the dataset
    /// nor the batch.
    pub fn append(&mut self, records: Vec<Record>) -> Result<()> {
        let mut seen: HashSet<&str> = self.ids().collect();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DatasetError::DuplicateRecord(record.id().to_string()));
            }
        }

        let known_events: HashSet<&str> = self
            .events
            .iter()
            .map(|e| e.event_id.as_str())
            .chain(records.iter().filter_map(|r| match r {
                Record::Event(e) => Some(e.event_id.as_str()),
                _ => None,
            }))
            .collect();
        for record in &records {
            if let Record::ImpactLink(link) = record {
                if !known_events.contains(link.event_id.as_str()) {
                    return Err(DatasetError::UnknownEvent {
                        link_id: link.link_id.clone(),
                        event_id: link.event_id.clone(),
                    });
                }
            }
        }

        let batch = records.len();
        for record in records {
            match record {
                Record::Observation(o) => self.observations.push(o),
                Record::Event(e) => self.events.push(e),
                Record::Target(t) => self.targets.push(t),
                Record::ImpactLink(l) => self.impact_links.push(l),
            }
        }
        debug!(batch, total = self.len(), "appended records");
        Ok(())
    }

    /// A copy whose impact links are replaced by their refined versions.
    ///
    /// Links are matched on id and must keep the event, indicator, direction
    /// and raw estimate of the link they replace. Links not in `refined` are
    /// carried over unchanged; `self` is left as is.
    pub fn with_refined_links(&self, refined: &[ImpactLink]) -> Result<Self> {
        let mut dataset = self.clone();
        for link in refined {
            let slot = dataset
                .impact_links
                .iter_mut()
                .find(|l| l.link_id == link.link_id)
                .ok_or_else(|| DatasetError::violation(&link.link_id, "no impact link to refine"))?;
            if slot.event_id != link.event_id
                || slot.indicator_code != link.indicator_code
                || slot.direction != link.direction
                || slot.magnitude != link.magnitude
                || slot.lag_months != link.lag_months
            {
                return Err(DatasetError::violation(
                    &link.link_id,
                    "refinement must keep the raw link",
                ));
            }
            *slot = link.clone();
        }
        debug!(refined = refined.len(), "applied refined impact links");
        Ok(dataset)
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.observations
            .iter()
            .map(|o| o.record_id.as_str())
            .chain(self.events.iter().map(|e| e.event_id.as_str()))
            .chain(self.targets.iter().map(|t| t.record_id.as_str()))
            .chain(self.impact_links.iter().map(|l| l.link_id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.observations.len() + self.events.len() + self.targets.len() + self.impact_links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn impact_links(&self) -> &[ImpactLink] {
        &self.impact_links
    }

    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.event_id == event_id)
    }

    /// Aggregate observations of an indicator, oldest first
    pub fn observations_for(&self, indicator_code: &str) -> Vec<&Observation> {
        let mut series: Vec<&Observation> = self
            .observations
            .iter()
            .filter(|o| o.indicator_code == indicator_code && o.is_aggregate())
            .collect();
        series.sort_by_key(|o| o.date);
        series
    }

    /// Gender gaps of an indicator, oldest first, for every date that has
    /// both a male and a female observation
    pub fn gender_gaps(&self, indicator_code: &str) -> Vec<GenderGap> {
        let value_for = |date: NaiveDate, gender: &str| {
            self.observations
                .iter()
                .find(|o| {
                    o.indicator_code == indicator_code
                        && o.date == date
                        && o.gender
                            .as_deref()
                            .is_some_and(|g| g.eq_ignore_ascii_case(gender))
                })
                .map(|o| o.value)
        };

        let dates: BTreeSet<NaiveDate> = self
            .observations
            .iter()
            .filter(|o| o.indicator_code == indicator_code && !o.is_aggregate())
            .map(|o| o.date)
            .collect();
        dates
            .into_iter()
            .filter_map(|date| {
                Some(GenderGap {
                    indicator_code: indicator_code.to_string(),
                    date,
                    male: value_for(date, "male")?,
                    female: value_for(date, "female")?,
                })
            })
            .collect()
    }

    pub fn links_for(&self, indicator_code: &str) -> Vec<&ImpactLink> {
        self.impact_links
            .iter()
            .filter(|l| l.indicator_code == indicator_code)
            .collect()
    }

    /// Targets of an indicator, earliest first
    pub fn targets_for(&self, indicator_code: &str) -> Vec<&Target> {
        let mut targets: Vec<&Target> = self
            .targets
            .iter()
            .filter(|t| t.indicator_code == indicator_code)
            .collect();
        targets.sort_by_key(|t| t.date);
        targets
    }

    /// Every indicator code that has observations or impact links
    pub fn indicators(&self) -> BTreeSet<String> {
        self.observations
            .iter()
            .map(|o| o.indicator_code.clone())
            .chain(self.impact_links.iter().map(|l| l.indicator_code.clone()))
            .collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            observations: self.observations.len(),
            events: self.events.len(),
            targets: self.targets.len(),
            impact_links: self.impact_links.len(),
            indicators: self.indicators().len(),
        }
    }
}

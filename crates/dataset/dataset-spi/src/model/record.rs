//! Validated record

use serde::{Deserialize, Serialize};

use super::{Event, ImpactLink, Observation, RecordType, Target};

/// A row of the unified table after schema validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum Record {
    Observation(Observation),
    Event(Event),
    Target(Target),
    ImpactLink(ImpactLink),
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Observation(o) => &o.record_id,
            Record::Event(e) => &e.event_id,
            Record::Target(t) => &t.record_id,
            Record::ImpactLink(l) => &l.link_id,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Observation(_) => RecordType::Observation,
            Record::Event(_) => RecordType::Event,
            Record::Target(_) => RecordType::Target,
            Record::ImpactLink(_) => RecordType::ImpactLink,
        }
    }
}

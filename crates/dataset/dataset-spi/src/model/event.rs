//! Dated event

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Something that happened (launch, policy, investment) and may move indicators.
///
/// Events carry a category, never a pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub source: Option<String>,
}

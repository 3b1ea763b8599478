//! Official policy target

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Target value for an indicator by a date (e.g. NFIS-II)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub record_id: String,
    pub indicator_code: String,
    pub date: NaiveDate,
    pub value: f64,
    pub source: Option<String>,
}

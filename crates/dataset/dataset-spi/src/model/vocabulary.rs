//! Controlled vocabularies of the unified schema

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Kind of row in the unified table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Observation,
    Event,
    Target,
    ImpactLink,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Observation => "observation",
            RecordType::Event => "event",
            RecordType::Target => "target",
            RecordType::ImpactLink => "impact_link",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "observation" => Ok(RecordType::Observation),
            "event" => Ok(RecordType::Event),
            "target" => Ok(RecordType::Target),
            "impact_link" | "impact" => Ok(RecordType::ImpactLink),
            _ => Err(DatasetError::invalid_value("record_type", s)),
        }
    }
}

/// Direction an event pushes an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    /// `+1.0` for increases, `-1.0` for decreases
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "increase" | "positive" | "up" => Ok(Direction::Increase),
            "decrease" | "negative" | "down" => Ok(Direction::Decrease),
            _ => Err(DatasetError::invalid_value("impact_direction", s)),
        }
    }
}

/// Coarse size of an impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeClass {
    Low,
    Medium,
    High,
}

impl MagnitudeClass {
    /// Percentage points assumed when no numeric estimate is recorded
    pub fn default_percentage(&self) -> f64 {
        match self {
            MagnitudeClass::Low => 5.0,
            MagnitudeClass::Medium => 10.0,
            MagnitudeClass::High => 20.0,
        }
    }
}

impl FromStr for MagnitudeClass {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" | "small" => Ok(MagnitudeClass::Low),
            "medium" | "moderate" => Ok(MagnitudeClass::Medium),
            "high" | "large" => Ok(MagnitudeClass::High),
            _ => Err(DatasetError::invalid_value("impact_magnitude", s)),
        }
    }
}

/// Confidence attached to a record.
///
/// Ordered `Low < Medium < High` so the weakest of a set is its minimum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(ConfidenceLevel::Low),
            "medium" | "moderate" => Ok(ConfidenceLevel::Medium),
            "high" => Ok(ConfidenceLevel::High),
            _ => Err(DatasetError::invalid_value("confidence", s)),
        }
    }
}

/// What an impact estimate rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceBasis {
    /// Checked against observed data
    Validated,
    /// Measured in the local data
    Empirical,
    /// Borrowed from a comparable country
    Comparable,
    /// Reasoned without direct evidence
    Theoretical,
}

impl EvidenceBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceBasis::Validated => "validated",
            EvidenceBasis::Empirical => "empirical",
            EvidenceBasis::Comparable => "comparable",
            EvidenceBasis::Theoretical => "theoretical",
        }
    }
}

impl fmt::Display for EvidenceBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvidenceBasis {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "validated" => Ok(EvidenceBasis::Validated),
            "empirical" | "observed" => Ok(EvidenceBasis::Empirical),
            "comparable" | "comparable_country" | "literature" => Ok(EvidenceBasis::Comparable),
            "theoretical" | "expert" | "assumption" => Ok(EvidenceBasis::Theoretical),
            _ => Err(DatasetError::invalid_value("evidence_basis", s)),
        }
    }
}

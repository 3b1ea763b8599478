//! Gaps between forecast scenarios and a policy target

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Scenario;

/// `target - estimate` per scenario for one forecast year; positive means short of target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetGap {
    pub year: i32,
    pub base_gap: Option<f64>,
    pub pessimistic_gap: Option<f64>,
    pub optimistic_gap: Option<f64>,
}

impl TargetGap {
    pub fn gap(&self, scenario: Scenario) -> Option<f64> {
        match scenario {
            Scenario::Pessimistic => self.pessimistic_gap,
            Scenario::Base => self.base_gap,
            Scenario::Optimistic => self.optimistic_gap,
        }
    }
}

/// First forecast year per scenario, `None` when never reached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioYears {
    pub pessimistic: Option<i32>,
    pub base: Option<i32>,
    pub optimistic: Option<i32>,
}

impl ScenarioYears {
    pub fn get(&self, scenario: Scenario) -> Option<i32> {
        match scenario {
            Scenario::Pessimistic => self.pessimistic,
            Scenario::Base => self.base,
            Scenario::Optimistic => self.optimistic,
        }
    }

    pub fn set(&mut self, scenario: Scenario, year: Option<i32>) {
        match scenario {
            Scenario::Pessimistic => self.pessimistic = year,
            Scenario::Base => self.base = year,
            Scenario::Optimistic => self.optimistic = year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetAssessment {
    pub indicator_code: String,
    pub target_id: String,
    pub target_value: f64,
    pub target_date: NaiveDate,
    pub gaps: Vec<TargetGap>,
    pub first_year_met: ScenarioYears,
}

impl TargetAssessment {
    pub fn gap_for_year(&self, year: i32) -> Option<&TargetGap> {
        self.gaps.iter().find(|g| g.year == year)
    }

    /// Whether the scenario meets the target by the target's own year
    pub fn met_on_time(&self, scenario: Scenario) -> bool {
        use chrono::Datelike;
        self.first_year_met
            .get(scenario)
            .is_some_and(|year| year <= self.target_date.year())
    }
}

//! Descriptive page content: statistics, program offerings, and course
//! materials. These records carry no behavior; page-level code supplies them
//! and the presentational components render them verbatim.

use serde::{Deserialize, Serialize};

/// One entry in a statistics band. Identity is array position only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    /// SVG path descriptor for the item's pictogram.
    pub icon: String,
    /// Display value, already formatted ("480+", "98%").
    pub stat: String,
    /// Label shown under the value.
    pub name: String,
}

/// Full description of a program offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    pub name: String,
    pub description: String,
    pub levels: Vec<ProgramLevel>,
    pub schedule: ProgramSchedule,
    pub tuition: Tuition,
    pub features: Vec<ProgramFeature>,
    pub materials: Vec<CourseMaterial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramLevel {
    pub name: String,
    pub description: String,
}

/// Weekly schedule. `days` and `times` are parallel sequences; equal
/// cardinality is expected but not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramSchedule {
    pub days: Vec<String>,
    pub times: Vec<String>,
}

impl ProgramSchedule {
    /// Pairs of (day, time), zipped positionally. Surplus entries on either
    /// side are dropped, mirroring how the schedule is displayed.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &str)> {
        self.days.iter().zip(&self.times).map(|(d, t)| (d.as_str(), t.as_str()))
    }
}

/// Tuition price tag. `amount` is expected to be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuition {
    pub amount: f64,
    pub currency: String,
    /// Billing period label ("month", "term").
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramFeature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseMaterial {
    pub title: String,
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_slots_zip_positionally() {
        let schedule = ProgramSchedule {
            days: vec!["Monday".into(), "Wednesday".into(), "Friday".into()],
            times: vec!["16:00".into(), "16:00".into()],
        };

        let slots: Vec<_> = schedule.slots().collect();
        assert_eq!(slots, vec![("Monday", "16:00"), ("Wednesday", "16:00")]);
    }
}

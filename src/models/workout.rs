use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub const TOTAL_WEEKS: u8 = 12;

/// A single exercise prescription within a training day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Rep target as a range string, e.g. "10-12" or "30-60s hold".
    pub reps: String,
    /// Rest between sets, e.g. "90s".
    pub rest: String,
    /// What to load the movement with, e.g. "Bodyweight" or empty for
    /// barbell work where the trainee picks the weight.
    pub equipment_hint: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    pub day_number: u8,
    pub name: String,
    pub target_muscles: String,
    pub estimated_time: String,
    pub warmup: Vec<String>,
    pub exercises: Vec<Exercise>,
    pub cooldown: Vec<String>,
    pub notes: String,
}

/// A four-week block of the program. Only phase 1 carries day-level
/// detail; later phases stay locked until the trainee reaches them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    pub phase_number: u8,
    pub name: String,
    /// Inclusive week range, e.g. (1, 4).
    pub week_range: (u8, u8),
    pub focus: String,
    pub description: String,
    pub unlocked: bool,
    /// Week label ("week1".."week4") to the ordered day list. Empty for
    /// locked phases.
    #[serde(default)]
    pub weekly_detail: BTreeMap<String, Vec<Day>>,
}

impl Phase {
    /// Inclusive week range for a phase number (1-based).
    pub fn week_range_for(phase_number: u8) -> (u8, u8) {
        let start = (phase_number - 1) * 4 + 1;
        (start, start + 3)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub total_weeks: u8,
    pub phases: Vec<Phase>,
}

impl WorkoutPlan {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            total_weeks: TOTAL_WEEKS,
            phases,
        }
    }

    /// The phase covering a given week (1..=12).
    pub fn phase_for_week(&self, week: u8) -> Option<&Phase> {
        self.phases
            .iter()
            .find(|p| p.week_range.0 <= week && week <= p.week_range.1)
    }
}

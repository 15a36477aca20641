#![allow(dead_code)]

use athenix::db::Database;
use athenix::models::profile::{
    DaysPerWeek, FitnessHistory, Gender, Goal, UserProfile, WorkoutLocation,
};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// A complete questionnaire snapshot; tests tweak the fields they care
/// about. Matches the worked example: 150 lb female, age 25, three days
/// per week, fat-loss goal, bodyweight only.
pub fn base_profile() -> UserProfile {
    UserProfile {
        name: "Jordan".to_string(),
        age: 25,
        gender: Gender::Female,
        height_inches: 65.0,
        weight_lbs: 150.0,
        primary_goal: Goal::LoseFat,
        motivation: "Feel stronger day to day".to_string(),
        timeline_weeks: 12,
        fitness_history: FitnessHistory::Sporadic,
        exercise_types_tried: vec!["Running".to_string(), "Yoga".to_string()],
        days_per_week: DaysPerWeek::Three,
        workout_length_minutes: 45,
        preferred_time: "Morning".to_string(),
        job_type: "Desk job".to_string(),
        sleep_hours_band: "6-7".to_string(),
        stress_level_band: "Moderate".to_string(),
        workout_location: WorkoutLocation::Home,
        equipment: vec!["Just bodyweight".to_string()],
        dietary_restrictions: vec!["None".to_string()],
        nutrition_challenge: "Snacking at night".to_string(),
        injuries: None,
    }
}

use std::collections::BTreeMap;

use crate::core::error::PlanError;
use crate::models::profile::UserProfile;
use crate::models::workout::{Day, Exercise, Phase, WorkoutPlan};

/// One slot of a weekly split: day name plus the muscle groups it hits.
struct SplitDay {
    name: &'static str,
    target_muscles: &'static str,
}

/// Up to three training days: rotating full-body sessions.
const FULL_BODY_SPLIT: &[SplitDay] = &[
    SplitDay {
        name: "Full Body A",
        target_muscles: "Chest, Back, Legs, Arms",
    },
    SplitDay {
        name: "Full Body B",
        target_muscles: "Shoulders, Back, Legs, Core",
    },
    SplitDay {
        name: "Full Body C",
        target_muscles: "Full Body",
    },
];

/// Exactly four training days: alternating upper/lower.
const UPPER_LOWER_SPLIT: &[SplitDay] = &[
    SplitDay {
        name: "Upper Body",
        target_muscles: "Chest, Back, Shoulders, Arms",
    },
    SplitDay {
        name: "Lower Body",
        target_muscles: "Quads, Hamstrings, Glutes, Calves",
    },
    SplitDay {
        name: "Upper Body",
        target_muscles: "Chest, Back, Shoulders, Arms",
    },
    SplitDay {
        name: "Lower Body",
        target_muscles: "Quads, Hamstrings, Glutes, Calves",
    },
];

/// Five or more training days: push/pull/legs rotation with upper, lower
/// and full-body days filling the back half of the week.
const PPL_SPLIT: &[SplitDay] = &[
    SplitDay {
        name: "Push",
        target_muscles: "Chest, Shoulders, Triceps",
    },
    SplitDay {
        name: "Pull",
        target_muscles: "Back, Biceps",
    },
    SplitDay {
        name: "Legs",
        target_muscles: "Quads, Hamstrings, Glutes",
    },
    SplitDay {
        name: "Upper Body",
        target_muscles: "Upper Body",
    },
    SplitDay {
        name: "Lower Body",
        target_muscles: "Lower Body",
    },
    SplitDay {
        name: "Full Body",
        target_muscles: "Full Body",
    },
];

struct ExerciseSpec {
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
    equipment_hint: &'static str,
    notes: &'static str,
}

/// Barbell/dumbbell selection, used when any equipment tag implies gym or
/// free-weight access.
const GYM_EXERCISES: &[ExerciseSpec] = &[
    ExerciseSpec {
        name: "Barbell Squat",
        sets: 3,
        reps: "10-12",
        rest: "90s",
        equipment_hint: "",
        notes: "Core lower body exercise",
    },
    ExerciseSpec {
        name: "Bench Press",
        sets: 3,
        reps: "10-12",
        rest: "90s",
        equipment_hint: "",
        notes: "Primary chest builder",
    },
    ExerciseSpec {
        name: "Bent-Over Row",
        sets: 3,
        reps: "10-12",
        rest: "90s",
        equipment_hint: "",
        notes: "Back thickness",
    },
    ExerciseSpec {
        name: "Overhead Press",
        sets: 3,
        reps: "8-10",
        rest: "90s",
        equipment_hint: "",
        notes: "Shoulder development",
    },
    ExerciseSpec {
        name: "Romanian Deadlift",
        sets: 3,
        reps: "10-12",
        rest: "90s",
        equipment_hint: "",
        notes: "Hamstrings and glutes",
    },
    ExerciseSpec {
        name: "Plank",
        sets: 3,
        reps: "30-60s hold",
        rest: "60s",
        equipment_hint: "Bodyweight",
        notes: "Core stability",
    },
];

/// Bodyweight-only selection for trainees without gym or weight access.
const BODYWEIGHT_EXERCISES: &[ExerciseSpec] = &[
    ExerciseSpec {
        name: "Push-ups",
        sets: 3,
        reps: "10-15",
        rest: "60s",
        equipment_hint: "Bodyweight",
        notes: "Chest, shoulders, triceps",
    },
    ExerciseSpec {
        name: "Bodyweight Squats",
        sets: 3,
        reps: "15-20",
        rest: "60s",
        equipment_hint: "Bodyweight",
        notes: "Legs and glutes",
    },
    ExerciseSpec {
        name: "Inverted Rows",
        sets: 3,
        reps: "12-15",
        rest: "60s",
        equipment_hint: "Bodyweight",
        notes: "Back and biceps",
    },
    ExerciseSpec {
        name: "Lunges",
        sets: 3,
        reps: "10-12 each leg",
        rest: "60s",
        equipment_hint: "Bodyweight",
        notes: "Legs and balance",
    },
    ExerciseSpec {
        name: "Plank",
        sets: 3,
        reps: "30-60s hold",
        rest: "60s",
        equipment_hint: "Bodyweight",
        notes: "Core",
    },
    ExerciseSpec {
        name: "Glute Bridges",
        sets: 3,
        reps: "15-20",
        rest: "60s",
        equipment_hint: "Bodyweight",
        notes: "Glutes and hamstrings",
    },
];

const WARMUP: &[&str] = &[
    "5-10 min light cardio (walk, bike, or row)",
    "Dynamic stretches: arm circles, leg swings, torso twists",
    "Light activation exercises for target muscles",
];

const COOLDOWN: &[&str] = &[
    "5 min light cardio cooldown",
    "Static stretches for worked muscles (hold 30 sec each)",
    "Deep breathing exercises",
];

const WEEK2_NOTE: &str = "Increase weight by 5-10% if exercises felt easy last week.";
const WEEK3_NOTE: &str = "Continue progressive overload. Focus on mind-muscle connection.";
const WEEK4_NOTE: &str =
    "Deload week - reduce weight by 20% to recover and prepare for Phase 2.";

/// Generate the full 12-week workout plan for a profile. Pure except for
/// the plan id and timestamp; equal profiles yield semantically equal
/// plans.
pub fn generate_workout_plan(profile: &UserProfile) -> Result<WorkoutPlan, PlanError> {
    validate_for_workout(profile)?;

    let day_count = profile.days_per_week.resolved_count();
    let week1 = build_week(profile, day_count);

    let mut weekly_detail = BTreeMap::new();
    weekly_detail.insert("week1".to_string(), week1.clone());
    for (label, note) in [
        ("week2", WEEK2_NOTE),
        ("week3", WEEK3_NOTE),
        ("week4", WEEK4_NOTE),
    ] {
        let days = week1
            .iter()
            .map(|d| Day {
                notes: note.to_string(),
                ..d.clone()
            })
            .collect();
        weekly_detail.insert(label.to_string(), days);
    }

    let phases = vec![
        Phase {
            phase_number: 1,
            name: "Foundation Building".to_string(),
            week_range: Phase::week_range_for(1),
            focus: "Learning proper form, building base strength, establishing consistency"
                .to_string(),
            description: "This phase focuses on mastering fundamental movement patterns and \
                          building a solid foundation. We'll progressively increase volume \
                          while ensuring you're comfortable with each exercise."
                .to_string(),
            unlocked: true,
            weekly_detail,
        },
        Phase {
            phase_number: 2,
            name: "Progressive Overload".to_string(),
            week_range: Phase::week_range_for(2),
            focus: "Increasing intensity, building muscle, improving work capacity".to_string(),
            description: "Now that you've built a foundation, we'll progressively increase \
                          weights and introduce advanced techniques like supersets and drop \
                          sets. This phase is where you'll see significant strength and \
                          muscle gains."
                .to_string(),
            unlocked: false,
            weekly_detail: BTreeMap::new(),
        },
        Phase {
            phase_number: 3,
            name: "Peak Performance".to_string(),
            week_range: Phase::week_range_for(3),
            focus: "Maximizing results, fine-tuning physique, peak conditioning".to_string(),
            description: "The final phase focuses on maximizing your results with advanced \
                          training techniques, higher intensity, and strategic deloads. This \
                          is where your transformation becomes undeniable."
                .to_string(),
            unlocked: false,
            weekly_detail: BTreeMap::new(),
        },
    ];

    Ok(WorkoutPlan::new(phases))
}

// Unrecognized days-per-week bands are rejected earlier, at profile
// ingestion; by this point the band always resolves to 2-6 days.
fn validate_for_workout(profile: &UserProfile) -> Result<(), PlanError> {
    if profile.equipment.is_empty() {
        return Err(PlanError::InvalidProfile(
            "equipment list is empty".to_string(),
        ));
    }
    Ok(())
}

fn build_week(profile: &UserProfile, day_count: u8) -> Vec<Day> {
    let split = split_for(day_count);
    let exercises = if profile.has_weights() {
        GYM_EXERCISES
    } else {
        BODYWEIGHT_EXERCISES
    };

    let mut base_note =
        "Focus on form over weight. Rest 60-90 seconds between sets.".to_string();
    if profile.injuries.as_deref().is_some_and(|s| !s.is_empty()) {
        base_note.push_str(" Note: Modify exercises as needed for your limitations.");
    }

    (1..=day_count)
        .map(|day| {
            let slot = &split[(day as usize - 1) % split.len()];
            Day {
                day_number: day,
                name: slot.name.to_string(),
                target_muscles: slot.target_muscles.to_string(),
                estimated_time: format!("{} min", profile.workout_length_minutes),
                warmup: WARMUP.iter().map(|s| s.to_string()).collect(),
                exercises: exercises.iter().map(to_exercise).collect(),
                cooldown: COOLDOWN.iter().map(|s| s.to_string()).collect(),
                notes: base_note.clone(),
            }
        })
        .collect()
}

/// Split lookup keyed by resolved day count. Day slots beyond the split
/// length wrap around (1-indexed modulo).
fn split_for(day_count: u8) -> &'static [SplitDay] {
    match day_count {
        0..=3 => FULL_BODY_SPLIT,
        4 => UPPER_LOWER_SPLIT,
        _ => PPL_SPLIT,
    }
}

fn to_exercise(spec: &ExerciseSpec) -> Exercise {
    Exercise {
        name: spec.name.to_string(),
        sets: spec.sets,
        reps: spec.reps.to_string(),
        rest: spec.rest.to_string(),
        equipment_hint: spec.equipment_hint.to_string(),
        notes: spec.notes.to_string(),
    }
}

mod common;

use athenix::core::PlanError;
use athenix::core::workout::generate_workout_plan;
use athenix::models::profile::DaysPerWeek;
use athenix::models::workout::Phase;

// ── phase structure ─────────────────────────────────────────────────────────

#[test]
fn test_phases_partition_twelve_weeks() {
    let plan = generate_workout_plan(&common::base_profile()).unwrap();

    assert_eq!(plan.total_weeks, 12);
    assert_eq!(plan.phases.len(), 3);
    assert_eq!(plan.phases[0].week_range, (1, 4));
    assert_eq!(plan.phases[1].week_range, (5, 8));
    assert_eq!(plan.phases[2].week_range, (9, 12));
    for (i, phase) in plan.phases.iter().enumerate() {
        assert_eq!(phase.phase_number as usize, i + 1);
    }
}

#[test]
fn test_only_phase_one_is_unlocked_with_detail() {
    let plan = generate_workout_plan(&common::base_profile()).unwrap();

    assert!(plan.phases[0].unlocked);
    assert_eq!(plan.phases[0].weekly_detail.len(), 4);
    for phase in &plan.phases[1..] {
        assert!(!phase.unlocked);
        assert!(phase.weekly_detail.is_empty());
        assert!(!phase.name.is_empty());
        assert!(!phase.focus.is_empty());
        assert!(!phase.description.is_empty());
    }
}

#[test]
fn test_week_range_helper() {
    assert_eq!(Phase::week_range_for(1), (1, 4));
    assert_eq!(Phase::week_range_for(2), (5, 8));
    assert_eq!(Phase::week_range_for(3), (9, 12));
}

#[test]
fn test_phase_for_week_lookup() {
    let plan = generate_workout_plan(&common::base_profile()).unwrap();

    assert_eq!(plan.phase_for_week(1).unwrap().phase_number, 1);
    assert_eq!(plan.phase_for_week(4).unwrap().phase_number, 1);
    assert_eq!(plan.phase_for_week(5).unwrap().phase_number, 2);
    assert_eq!(plan.phase_for_week(12).unwrap().phase_number, 3);
    assert!(plan.phase_for_week(13).is_none());
}

// ── splits ──────────────────────────────────────────────────────────────────

#[test]
fn test_three_day_split_is_full_body() {
    let plan = generate_workout_plan(&common::base_profile()).unwrap();
    let week1 = &plan.phases[0].weekly_detail["week1"];

    assert_eq!(week1.len(), 3);
    let names: Vec<&str> = week1.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Full Body A", "Full Body B", "Full Body C"]);
}

#[test]
fn test_two_day_split_truncates_full_body_rotation() {
    let mut profile = common::base_profile();
    profile.days_per_week = DaysPerWeek::Two;

    let plan = generate_workout_plan(&profile).unwrap();
    let week1 = &plan.phases[0].weekly_detail["week1"];

    assert_eq!(week1.len(), 2);
    assert_eq!(week1[0].name, "Full Body A");
    assert_eq!(week1[1].name, "Full Body B");
}

#[test]
fn test_four_five_band_resolves_to_upper_lower() {
    let mut profile = common::base_profile();
    profile.days_per_week = DaysPerWeek::FourToFive;

    let plan = generate_workout_plan(&profile).unwrap();
    let week1 = &plan.phases[0].weekly_detail["week1"];

    assert_eq!(week1.len(), 4);
    let names: Vec<&str> = week1.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Upper Body", "Lower Body", "Upper Body", "Lower Body"]
    );
    assert_eq!(week1[0].target_muscles, "Chest, Back, Shoulders, Arms");
    assert_eq!(week1[1].target_muscles, "Quads, Hamstrings, Glutes, Calves");
}

#[test]
fn test_six_plus_band_resolves_to_ppl_rotation() {
    let mut profile = common::base_profile();
    profile.days_per_week = DaysPerWeek::SixPlus;

    let plan = generate_workout_plan(&profile).unwrap();
    let week1 = &plan.phases[0].weekly_detail["week1"];

    assert_eq!(week1.len(), 6);
    let names: Vec<&str> = week1.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Push", "Pull", "Legs", "Upper Body", "Lower Body", "Full Body"]
    );
}

#[test]
fn test_day_numbers_are_sequential() {
    let mut profile = common::base_profile();
    profile.days_per_week = DaysPerWeek::SixPlus;

    let plan = generate_workout_plan(&profile).unwrap();
    let week1 = &plan.phases[0].weekly_detail["week1"];
    for (i, day) in week1.iter().enumerate() {
        assert_eq!(day.day_number as usize, i + 1);
    }
}

// ── equipment gating ────────────────────────────────────────────────────────

#[test]
fn test_bodyweight_profile_gets_only_bodyweight_exercises() {
    let plan = generate_workout_plan(&common::base_profile()).unwrap();
    let week1 = &plan.phases[0].weekly_detail["week1"];

    for day in week1 {
        assert!(!day.exercises.is_empty());
        for ex in &day.exercises {
            assert_eq!(ex.equipment_hint, "Bodyweight", "exercise: {}", ex.name);
        }
    }
}

#[test]
fn test_gym_membership_selects_barbell_work() {
    let mut profile = common::base_profile();
    profile.equipment = vec!["Full gym membership".to_string()];

    let plan = generate_workout_plan(&profile).unwrap();
    let week1 = &plan.phases[0].weekly_detail["week1"];
    let names: Vec<&str> = week1[0].exercises.iter().map(|e| e.name.as_str()).collect();

    assert!(names.contains(&"Barbell Squat"));
    assert!(names.contains(&"Bench Press"));
}

#[test]
fn test_home_gym_with_weights_also_gates_to_gym_set() {
    let mut profile = common::base_profile();
    profile.equipment = vec!["Home gym with weights".to_string()];

    let plan = generate_workout_plan(&profile).unwrap();
    let names: Vec<String> = plan.phases[0].weekly_detail["week1"][0]
        .exercises
        .iter()
        .map(|e| e.name.clone())
        .collect();
    assert!(names.contains(&"Barbell Squat".to_string()));
}

#[test]
fn test_every_training_day_gets_the_full_exercise_list() {
    let mut profile = common::base_profile();
    profile.equipment = vec!["Full gym membership".to_string()];
    profile.days_per_week = DaysPerWeek::FourToFive;

    let plan = generate_workout_plan(&profile).unwrap();
    for day in &plan.phases[0].weekly_detail["week1"] {
        assert_eq!(day.exercises.len(), 6, "day {}", day.day_number);
    }
}

// ── weekly notes ────────────────────────────────────────────────────────────

#[test]
fn test_weeks_two_to_four_reuse_exercises_with_new_notes() {
    let plan = generate_workout_plan(&common::base_profile()).unwrap();
    let detail = &plan.phases[0].weekly_detail;

    let week1 = &detail["week1"];
    for label in ["week2", "week3", "week4"] {
        let week = &detail[label];
        assert_eq!(week.len(), week1.len());
        for (a, b) in week1.iter().zip(week.iter()) {
            assert_eq!(a.exercises, b.exercises);
            assert_eq!(a.name, b.name);
            assert_ne!(a.notes, b.notes);
        }
    }
    assert!(detail["week2"][0].notes.contains("5-10%"));
    assert!(detail["week3"][0].notes.contains("mind-muscle"));
    assert!(detail["week4"][0].notes.contains("Deload"));
}

#[test]
fn test_injury_note_is_appended_when_present() {
    let mut profile = common::base_profile();
    profile.injuries = Some("bad left knee".to_string());

    let plan = generate_workout_plan(&profile).unwrap();
    let notes = &plan.phases[0].weekly_detail["week1"][0].notes;
    assert!(notes.contains("Modify exercises"));

    let plan = generate_workout_plan(&common::base_profile()).unwrap();
    let notes = &plan.phases[0].weekly_detail["week1"][0].notes;
    assert!(!notes.contains("Modify exercises"));
}

#[test]
fn test_estimated_time_comes_from_profile() {
    let mut profile = common::base_profile();
    profile.workout_length_minutes = 60;

    let plan = generate_workout_plan(&profile).unwrap();
    assert_eq!(
        plan.phases[0].weekly_detail["week1"][0].estimated_time,
        "60 min"
    );
}

// ── determinism and validation ──────────────────────────────────────────────

#[test]
fn test_generation_is_deterministic_modulo_id_and_timestamp() {
    let profile = common::base_profile();
    let a = generate_workout_plan(&profile).unwrap();
    let b = generate_workout_plan(&profile).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(a.phases, b.phases);
    assert_eq!(a.total_weeks, b.total_weeks);
}

#[test]
fn test_empty_equipment_is_rejected() {
    let mut profile = common::base_profile();
    profile.equipment.clear();

    let err = generate_workout_plan(&profile).unwrap_err();
    assert!(matches!(err, PlanError::InvalidProfile(_)));
}

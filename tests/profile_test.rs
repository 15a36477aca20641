mod common;

use athenix::models::profile::{
    DaysPerWeek, DietClass, FitnessHistory, Goal, UserProfile,
};

// ── goal resolution ─────────────────────────────────────────────────────────

#[test]
fn test_goal_resolves_from_questionnaire_labels() {
    let cases = [
        ("Lose fat and see muscle definition", Goal::LoseFat),
        ("Build noticeable muscle mass", Goal::BuildMuscle),
        ("Get stronger", Goal::Strength),
        ("Improve athletic performance", Goal::AthleticPerformance),
        ("Feel more confident", Goal::GeneralFitness),
        ("Have more energy", Goal::GeneralFitness),
        ("Get back in shape after break", Goal::GeneralFitness),
        ("Maintain fitness efficiently", Goal::GeneralFitness),
    ];
    for (label, expected) in cases {
        assert_eq!(label.parse::<Goal>().unwrap(), expected, "label: {}", label);
    }
}

#[test]
fn test_goal_resolves_from_snake_case_tags() {
    assert_eq!("lose_fat".parse::<Goal>().unwrap(), Goal::LoseFat);
    assert_eq!("build_muscle".parse::<Goal>().unwrap(), Goal::BuildMuscle);
    assert!("".parse::<Goal>().is_err());
}

#[test]
fn test_goal_multiplier_table() {
    assert_eq!(Goal::LoseFat.calorie_multiplier(), 0.85);
    assert_eq!(Goal::BuildMuscle.calorie_multiplier(), 1.10);
    assert_eq!(Goal::Strength.calorie_multiplier(), 1.00);
    assert_eq!(Goal::GeneralFitness.calorie_multiplier(), 1.00);
}

// ── days-per-week bands ─────────────────────────────────────────────────────

#[test]
fn test_days_per_week_band_parsing() {
    assert_eq!("2".parse::<DaysPerWeek>().unwrap(), DaysPerWeek::Two);
    assert_eq!("3".parse::<DaysPerWeek>().unwrap(), DaysPerWeek::Three);
    assert_eq!("4-5".parse::<DaysPerWeek>().unwrap(), DaysPerWeek::FourToFive);
    assert_eq!("6+".parse::<DaysPerWeek>().unwrap(), DaysPerWeek::SixPlus);
    assert!("5".parse::<DaysPerWeek>().is_err());
    assert!("four".parse::<DaysPerWeek>().is_err());
}

#[test]
fn test_band_resolution_table() {
    assert_eq!(DaysPerWeek::Two.resolved_count(), 2);
    assert_eq!(DaysPerWeek::Three.resolved_count(), 3);
    assert_eq!(DaysPerWeek::FourToFive.resolved_count(), 4);
    assert_eq!(DaysPerWeek::SixPlus.resolved_count(), 6);
}

#[test]
fn test_activity_multiplier_bands() {
    assert_eq!(DaysPerWeek::Two.activity_multiplier(), 1.375);
    assert_eq!(DaysPerWeek::Three.activity_multiplier(), 1.55);
    assert_eq!(DaysPerWeek::FourToFive.activity_multiplier(), 1.725);
    assert_eq!(DaysPerWeek::SixPlus.activity_multiplier(), 1.725);
}

// ── fitness history ordering ────────────────────────────────────────────────

#[test]
fn test_fitness_history_is_ordinal() {
    assert!(FitnessHistory::CompleteBeginner < FitnessHistory::Sporadic);
    assert!(FitnessHistory::Regular < FitnessHistory::VeryExperienced);
}

#[test]
fn test_fitness_history_resolves_from_labels() {
    assert_eq!(
        "Complete beginner".parse::<FitnessHistory>().unwrap(),
        FitnessHistory::CompleteBeginner
    );
    assert_eq!(
        "Used to be fit (6+ months break)"
            .parse::<FitnessHistory>()
            .unwrap(),
        FitnessHistory::ReturningAfterBreak
    );
    assert_eq!(
        "Regular (3+ times/week, 6+ months)"
            .parse::<FitnessHistory>()
            .unwrap(),
        FitnessHistory::Regular
    );
    assert_eq!(
        "Very experienced (years of training)"
            .parse::<FitnessHistory>()
            .unwrap(),
        FitnessHistory::VeryExperienced
    );
}

// ── derived profile predicates ──────────────────────────────────────────────

#[test]
fn test_has_weights_matches_gym_and_weights_tags() {
    let mut profile = common::base_profile();
    for (tags, expected) in [
        (vec!["Just bodyweight"], false),
        (vec!["Outdoor spaces (park, track)"], false),
        (vec!["Full gym membership"], true),
        (vec!["Home gym with weights"], true),
        (vec!["Just bodyweight", "Full gym membership"], true),
    ] {
        profile.equipment = tags.iter().map(|s| s.to_string()).collect();
        assert_eq!(profile.has_weights(), expected, "tags: {:?}", tags);
    }
}

#[test]
fn test_diet_class_resolution_prefers_vegan() {
    let mut profile = common::base_profile();
    profile.dietary_restrictions = vec!["Vegetarian".to_string(), "Vegan".to_string()];
    assert_eq!(profile.diet_class(), DietClass::Vegan);

    profile.dietary_restrictions = vec!["Vegetarian".to_string()];
    assert_eq!(profile.diet_class(), DietClass::Vegetarian);

    profile.dietary_restrictions = vec!["Gluten-free".to_string()];
    assert_eq!(profile.diet_class(), DietClass::Omnivore);
}

// ── serde ───────────────────────────────────────────────────────────────────

#[test]
fn test_profile_json_round_trip() {
    let profile = common::base_profile();
    let json = serde_json::to_string(&profile).unwrap();
    let back: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back.primary_goal, profile.primary_goal);
    assert_eq!(back.days_per_week, profile.days_per_week);
    assert_eq!(back.weight_lbs, profile.weight_lbs);
    assert_eq!(back.equipment, profile.equipment);
}

#[test]
fn test_profile_deserializes_questionnaire_labels() {
    let json = r#"{
        "name": "Sam",
        "age": 31,
        "gender": "male",
        "height_inches": 70.0,
        "weight_lbs": 180.0,
        "primary_goal": "Build noticeable muscle mass",
        "timeline_weeks": 12,
        "fitness_history": "Fairly consistent (1-2x/week, few months)",
        "days_per_week": "4-5",
        "workout_length_minutes": 60,
        "workout_location": "gym",
        "equipment": ["Full gym membership"]
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.primary_goal, Goal::BuildMuscle);
    assert_eq!(profile.days_per_week, DaysPerWeek::FourToFive);
    assert_eq!(profile.fitness_history, FitnessHistory::FairlyConsistent);
    assert!(profile.injuries.is_none());
    assert!(profile.dietary_restrictions.is_empty());
}

#[test]
fn test_days_per_week_serializes_as_band_label() {
    let json = serde_json::to_string(&DaysPerWeek::FourToFive).unwrap();
    assert_eq!(json, "\"4-5\"");
    let json = serde_json::to_string(&DaysPerWeek::SixPlus).unwrap();
    assert_eq!(json, "\"6+\"");
}

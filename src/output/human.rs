use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::db::Progress;
use crate::models::nutrition::NutritionPlan;
use crate::models::profile::UserProfile;
use crate::models::workout::{Day, Phase, WorkoutPlan};

/// Render the workout plan: phase headers, then per-day exercise tables
/// for the unlocked phase's first week.
pub fn format_workout_plan(plan: &WorkoutPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} weeks, generated {})\n",
        "Workout Plan".bold(),
        plan.total_weeks,
        plan.generated_at.format("%Y-%m-%d")
    ));

    for phase in &plan.phases {
        out.push('\n');
        out.push_str(&format_phase_header(phase));
        if !phase.unlocked {
            continue;
        }
        if let Some(week1) = phase.weekly_detail.get("week1") {
            for day in week1 {
                out.push('\n');
                out.push_str(&format_day(day));
            }
        }
    }
    out
}

fn format_phase_header(phase: &Phase) -> String {
    let lock = if phase.unlocked {
        "unlocked".green()
    } else {
        "locked".dimmed()
    };
    format!(
        "{} — weeks {}-{} [{}]\n  {}\n",
        format!("Phase {}: {}", phase.phase_number, phase.name).cyan().bold(),
        phase.week_range.0,
        phase.week_range.1,
        lock,
        phase.focus
    )
}

fn format_day(day: &Day) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Exercise", "Sets", "Reps", "Rest", "Equipment"]);
    for ex in &day.exercises {
        table.add_row(vec![
            ex.name.clone(),
            ex.sets.to_string(),
            ex.reps.clone(),
            ex.rest.clone(),
            ex.equipment_hint.clone(),
        ]);
    }
    format!(
        "Day {}: {} ({}, ~{})\n{}\n  {}\n",
        day.day_number,
        day.name.bold(),
        day.target_muscles,
        day.estimated_time,
        table,
        day.notes.dimmed()
    )
}

/// Render the nutrition plan: macro summary line plus the meal table.
pub fn format_nutrition_plan(plan: &NutritionPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {} kcal | {}g protein | {}g carbs | {}g fat | {} glasses water\n\n",
        "Daily Targets".bold(),
        plan.daily_calories,
        plan.protein_g,
        plan.carb_g,
        plan.fat_g,
        plan.water_goal_glasses
    ));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Meal", "Time", "kcal", "P", "C", "F", "Foods"]);
    for meal in &plan.meals {
        table.add_row(vec![
            meal.name.clone(),
            meal.time.clone(),
            meal.calories.to_string(),
            format!("{}g", meal.protein_g),
            format!("{}g", meal.carb_g),
            format!("{}g", meal.fat_g),
            meal.foods.join(", "),
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    out.push_str(&format!("\n{}\n", "Guidelines".bold()));
    for g in &plan.guidelines {
        out.push_str(&format!("  - {}\n", g));
    }
    out
}

pub fn format_profile(profile: &UserProfile) -> String {
    format!(
        "{} ({}, age {})\n  goal: {} | {} days/week | {} min sessions\n  equipment: {}\n  restrictions: {}\n",
        profile.name.bold(),
        profile.gender,
        profile.age,
        profile.primary_goal,
        profile.days_per_week,
        profile.workout_length_minutes,
        profile.equipment.join(", "),
        if profile.dietary_restrictions.is_empty() {
            "none".to_string()
        } else {
            profile.dietary_restrictions.join(", ")
        }
    )
}

pub fn format_progress(p: &Progress) -> String {
    format!(
        "Week {} of 12 (phase {}) | started {} at {} lbs | {} workouts completed\n",
        p.current_week.to_string().bold(),
        p.current_phase,
        p.start_date.format("%Y-%m-%d"),
        p.start_weight_lbs,
        p.workouts_completed
    )
}

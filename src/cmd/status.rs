use anyhow::{Result, anyhow};
use serde_json::json;

use athenix::db::Database;
use athenix::models::config::Config;
use athenix::output;
use athenix::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let progress = db
        .load_progress()?
        .ok_or_else(|| anyhow!("no program in progress; run `athenix generate` first"))?;
    let workout = db.latest_workout_plan()?;
    let nutrition = db.latest_nutrition_plan()?;

    if human_flag {
        println!("{}", human::format_progress(&progress));
        if let Some(plan) = &workout
            && let Some(phase) = plan.phase_for_week(progress.current_week)
        {
            println!("Current phase: {} — {}", phase.name, phase.focus);
        }
        if let Some(plan) = &nutrition {
            println!(
                "Daily targets: {} kcal | {}g protein | {}g carbs | {}g fat",
                plan.daily_calories, plan.protein_g, plan.carb_g, plan.fat_g
            );
        }
    } else {
        let out = output::success(
            "status",
            json!({
                "progress": progress,
                "workout_plan_id": workout.as_ref().map(|p| p.id.clone()),
                "nutrition_plan_id": nutrition.as_ref().map(|p| p.id.clone()),
                "daily_calories": nutrition.as_ref().map(|p| p.daily_calories),
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

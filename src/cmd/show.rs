use anyhow::{Result, anyhow};
use serde_json::json;

use athenix::db::Database;
use athenix::models::config::Config;
use athenix::output;
use athenix::output::human;

use crate::cli::ShowTarget;

pub fn run(target: ShowTarget, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;

    match target {
        ShowTarget::Plan => {
            let plan = db
                .latest_workout_plan()?
                .ok_or_else(|| anyhow!("no workout plan; run `athenix generate` first"))?;
            if human_flag {
                println!("{}", human::format_workout_plan(&plan));
            } else {
                let out = output::success("show", json!({ "workout_plan": plan }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        ShowTarget::Nutrition => {
            let plan = db
                .latest_nutrition_plan()?
                .ok_or_else(|| anyhow!("no nutrition plan; run `athenix generate` first"))?;
            if human_flag {
                println!("{}", human::format_nutrition_plan(&plan));
            } else {
                let out = output::success("show", json!({ "nutrition_plan": plan }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
        ShowTarget::Profile => {
            let profile = db
                .latest_profile()?
                .ok_or_else(|| anyhow!("no stored profile; run `athenix onboard` first"))?;
            if human_flag {
                println!("{}", human::format_profile(&profile));
            } else {
                let out = output::success("show", json!({ "profile": profile }));
                println!("{}", serde_json::to_string(&out)?);
            }
        }
    }
    Ok(())
}

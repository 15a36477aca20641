use std::path::Path;

use anyhow::{Result, anyhow};
use serde_json::json;

use athenix::core::{nutrition, workout};
use athenix::db::{Database, Progress};
use athenix::models::config::Config;
use athenix::output;
use athenix::output::human;

use super::onboard::load_profile;

pub fn run(file: Option<&Path>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let profile = match file {
        Some(path) => {
            let p = load_profile(path)?;
            db.insert_profile(&p)?;
            p
        }
        None => db
            .latest_profile()?
            .ok_or_else(|| anyhow!("no stored profile; run `athenix onboard` first"))?,
    };

    let workout_plan = workout::generate_workout_plan(&profile)?;
    let nutrition_plan = nutrition::generate_nutrition_plan(&profile, &config.generator)?;

    db.insert_workout_plan(&workout_plan)?;
    db.insert_nutrition_plan(&nutrition_plan)?;
    db.save_progress(&Progress::start(profile.weight_lbs))?;

    if human_flag {
        println!("{}", human::format_workout_plan(&workout_plan));
        println!("{}", human::format_nutrition_plan(&nutrition_plan));
    } else {
        let out = output::success(
            "generate",
            json!({
                "workout_plan": workout_plan,
                "nutrition_plan": nutrition_plan
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use athenix::db::Database;
use athenix::models::config::Config;
use athenix::models::profile::UserProfile;
use athenix::output;

pub fn run(file: &Path, human: bool) -> Result<()> {
    let profile = load_profile(file)?;
    let db = Database::open(&Config::db_path())?;
    let id = db.insert_profile(&profile)?;

    if human {
        println!("Stored profile for {} (id {})", profile.name, id);
    } else {
        let out = output::success(
            "onboard",
            json!({ "id": id, "name": profile.name, "goal": profile.primary_goal }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn load_profile(file: &Path) -> Result<UserProfile> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read profile file {}", file.display()))?;
    let profile: UserProfile = serde_json::from_str(&contents)
        .with_context(|| format!("invalid profile in {}", file.display()))?;
    Ok(profile)
}

use anyhow::{Result, anyhow};
use serde_json::json;

use athenix::db::Database;
use athenix::models::config::Config;
use athenix::output;

pub fn run(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let mut progress = db
        .load_progress()?
        .ok_or_else(|| anyhow!("no program in progress; run `athenix generate` first"))?;

    progress.advance_week();
    db.save_progress(&progress)?;

    if human_flag {
        println!(
            "Advanced to week {} (phase {})",
            progress.current_week, progress.current_phase
        );
    } else {
        let out = output::success("advance", json!({ "progress": progress }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

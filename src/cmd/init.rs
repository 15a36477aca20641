use anyhow::Result;

use athenix::db::Database;
use athenix::models::config::Config;

pub fn run() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    config.save()?;
    Database::open(&Config::db_path())?;
    println!("Config initialized at {:?}", Config::path());
    Ok(())
}

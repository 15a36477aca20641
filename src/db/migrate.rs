use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS profiles (
            id         TEXT PRIMARY KEY,
            created_at TEXT NOT NULL,
            snapshot   TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_profiles_created ON profiles(created_at);

        CREATE TABLE IF NOT EXISTS plans (
            id           TEXT PRIMARY KEY,
            kind         TEXT NOT NULL,
            generated_at TEXT NOT NULL,
            body         TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_plans_kind_ts ON plans(kind, generated_at);

        CREATE TABLE IF NOT EXISTS progress (
            id                 INTEGER PRIMARY KEY CHECK (id = 1),
            current_week       INTEGER NOT NULL,
            current_phase      INTEGER NOT NULL,
            start_weight_lbs   REAL NOT NULL,
            start_date         TEXT NOT NULL,
            workouts_completed INTEGER NOT NULL DEFAULT 0
        );",
    )?;
    Ok(())
}

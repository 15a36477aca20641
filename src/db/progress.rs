use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};
use serde::Serialize;

use crate::models::workout::TOTAL_WEEKS;

use super::Database;

/// Program position and baseline stats, a single row reset on every
/// (re)generation.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub current_week: u8,
    pub current_phase: u8,
    pub start_weight_lbs: f64,
    pub start_date: DateTime<Utc>,
    pub workouts_completed: u32,
}

impl Progress {
    pub fn start(start_weight_lbs: f64) -> Self {
        Self {
            current_week: 1,
            current_phase: 1,
            start_weight_lbs,
            start_date: Utc::now(),
            workouts_completed: 0,
        }
    }

    /// Move to the next week, rolling the phase at weeks 5 and 9 and
    /// clamping at week 12.
    pub fn advance_week(&mut self) {
        if self.current_week < TOTAL_WEEKS {
            self.current_week += 1;
            self.current_phase = (self.current_week - 1) / 4 + 1;
        }
    }
}

impl Database {
    pub fn save_progress(&self, p: &Progress) -> Result<()> {
        self.conn.execute(
            "INSERT INTO progress
                 (id, current_week, current_phase, start_weight_lbs, start_date, workouts_completed)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                 current_week = excluded.current_week,
                 current_phase = excluded.current_phase,
                 start_weight_lbs = excluded.start_weight_lbs,
                 start_date = excluded.start_date,
                 workouts_completed = excluded.workouts_completed",
            params![
                p.current_week,
                p.current_phase,
                p.start_weight_lbs,
                p.start_date.to_rfc3339(),
                p.workouts_completed,
            ],
        )?;
        Ok(())
    }

    pub fn load_progress(&self) -> Result<Option<Progress>> {
        let row = self
            .conn
            .query_row(
                "SELECT current_week, current_phase, start_weight_lbs, start_date,
                        workouts_completed
                 FROM progress WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, u8>(0)?,
                        row.get::<_, u8>(1)?,
                        row.get::<_, f64>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, u32>(4)?,
                    ))
                },
            )
            .optional()?;
        match row {
            Some((current_week, current_phase, start_weight_lbs, start_date, workouts_completed)) => {
                let start_date = DateTime::parse_from_rfc3339(&start_date)?.with_timezone(&Utc);
                Ok(Some(Progress {
                    current_week,
                    current_phase,
                    start_weight_lbs,
                    start_date,
                    workouts_completed,
                }))
            }
            None => Ok(None),
        }
    }
}

use anyhow::Result;
use rusqlite::{OptionalExtension, params};

use crate::models::nutrition::NutritionPlan;
use crate::models::workout::WorkoutPlan;

use super::Database;

const KIND_WORKOUT: &str = "workout";
const KIND_NUTRITION: &str = "nutrition";

impl Database {
    pub fn insert_workout_plan(&self, plan: &WorkoutPlan) -> Result<()> {
        self.insert_plan(
            &plan.id,
            KIND_WORKOUT,
            &plan.generated_at.to_rfc3339(),
            &serde_json::to_string(plan)?,
        )
    }

    pub fn insert_nutrition_plan(&self, plan: &NutritionPlan) -> Result<()> {
        self.insert_plan(
            &plan.id,
            KIND_NUTRITION,
            &plan.generated_at.to_rfc3339(),
            &serde_json::to_string(plan)?,
        )
    }

    pub fn latest_workout_plan(&self) -> Result<Option<WorkoutPlan>> {
        match self.latest_body(KIND_WORKOUT)? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    pub fn latest_nutrition_plan(&self) -> Result<Option<NutritionPlan>> {
        match self.latest_body(KIND_NUTRITION)? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    fn insert_plan(&self, id: &str, kind: &str, generated_at: &str, body: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO plans (id, kind, generated_at, body) VALUES (?1, ?2, ?3, ?4)",
            params![id, kind, generated_at, body],
        )?;
        Ok(())
    }

    fn latest_body(&self, kind: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT body FROM plans WHERE kind = ?1
                 ORDER BY generated_at DESC, id DESC LIMIT 1",
                params![kind],
                |row| row.get(0),
            )
            .optional()?)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const WATER_GOAL_GLASSES: u8 = 8;

/// One meal slot of the daily template. Per-meal macros are independently
/// rounded shares of the plan totals, so they approximate rather than
/// exactly partition them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub name: String,
    pub time: String,
    pub calories: i64,
    pub protein_g: i64,
    pub carb_g: i64,
    pub fat_g: i64,
    pub foods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub daily_calories: i64,
    pub protein_g: i64,
    pub carb_g: i64,
    pub fat_g: i64,
    pub water_goal_glasses: u8,
    pub meals: Vec<Meal>,
    pub guidelines: Vec<String>,
}

impl NutritionPlan {
    pub fn new(
        daily_calories: i64,
        protein_g: i64,
        carb_g: i64,
        fat_g: i64,
        meals: Vec<Meal>,
        guidelines: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            daily_calories,
            protein_g,
            carb_g,
            fat_g,
            water_goal_glasses: WATER_GOAL_GLASSES,
            meals,
            guidelines,
        }
    }
}

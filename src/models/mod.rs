pub mod config;
pub mod nutrition;
pub mod profile;
pub mod workout;

pub use nutrition::{Meal, NutritionPlan};
pub use profile::UserProfile;
pub use workout::{Day, Exercise, Phase, WorkoutPlan};

pub mod error;
pub mod meals;
pub mod nutrition;
pub mod workout;

pub use error::PlanError;

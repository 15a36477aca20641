use thiserror::Error;

/// Failure modes of the plan generators. Generation either returns a
/// complete, internally consistent plan or one of these; there are no
/// partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// A required profile field is missing or out of its domain range.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// The derived carbohydrate grams would be negative given the
    /// protein/fat allocations at the computed calorie target.
    #[error("macro targets infeasible: {0}")]
    MacroInfeasible(String),
}

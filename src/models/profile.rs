use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Primary training goal, resolved once from the questionnaire label.
/// Downstream code keys on this enum and never re-matches label text.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    BuildMuscle,
    Strength,
    AthleticPerformance,
    GeneralFitness,
}

impl Goal {
    /// Calorie adjustment applied to TDEE for this goal.
    pub fn calorie_multiplier(&self) -> f64 {
        match self {
            Self::LoseFat => 0.85,
            Self::BuildMuscle => 1.10,
            _ => 1.00,
        }
    }

    /// Short phrase used in coaching text.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::LoseFat => "lose fat and see muscle definition",
            Self::BuildMuscle => "build noticeable muscle mass",
            Self::Strength => "get stronger",
            Self::AthleticPerformance => "improve athletic performance",
            Self::GeneralFitness => "improve overall fitness",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoseFat => write!(f, "lose_fat"),
            Self::BuildMuscle => write!(f, "build_muscle"),
            Self::Strength => write!(f, "strength"),
            Self::AthleticPerformance => write!(f, "athletic_performance"),
            Self::GeneralFitness => write!(f, "general_fitness"),
        }
    }
}

impl FromStr for Goal {
    type Err = anyhow::Error;
    /// Accepts either the snake_case tag or a full questionnaire label
    /// (e.g. "Lose fat and see muscle definition").
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "lose_fat" => return Ok(Self::LoseFat),
            "build_muscle" => return Ok(Self::BuildMuscle),
            "strength" => return Ok(Self::Strength),
            "athletic_performance" => return Ok(Self::AthleticPerformance),
            "general_fitness" => return Ok(Self::GeneralFitness),
            _ => {}
        }
        if lower.contains("lose fat") {
            Ok(Self::LoseFat)
        } else if lower.contains("muscle mass") || lower.contains("build muscle") {
            Ok(Self::BuildMuscle)
        } else if lower.contains("stronger") {
            Ok(Self::Strength)
        } else if lower.contains("athletic") {
            Ok(Self::AthleticPerformance)
        } else if !lower.is_empty() {
            Ok(Self::GeneralFitness)
        } else {
            anyhow::bail!("empty goal label")
        }
    }
}

impl<'de> Deserialize<'de> for Goal {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Weekly availability band from the questionnaire. The "4-5" and "6+"
/// bands never carried a concrete count in the onboarding data, so each
/// band maps to a fixed representative day count (lower bound).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DaysPerWeek {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4-5")]
    FourToFive,
    #[serde(rename = "6+")]
    SixPlus,
}

impl DaysPerWeek {
    /// Concrete training-day count used to lay out the split.
    pub fn resolved_count(&self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::FourToFive => 4,
            Self::SixPlus => 6,
        }
    }

    /// Activity multiplier band for TDEE. Anything above three days per
    /// week lands in the top band; there is no interpolation.
    pub fn activity_multiplier(&self) -> f64 {
        match self {
            Self::Two => 1.375,
            Self::Three => 1.55,
            Self::FourToFive | Self::SixPlus => 1.725,
        }
    }
}

impl std::fmt::Display for DaysPerWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Two => write!(f, "2"),
            Self::Three => write!(f, "3"),
            Self::FourToFive => write!(f, "4-5"),
            Self::SixPlus => write!(f, "6+"),
        }
    }
}

impl FromStr for DaysPerWeek {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4-5" => Ok(Self::FourToFive),
            "6+" => Ok(Self::SixPlus),
            _ => anyhow::bail!("invalid days-per-week band: {} (expected 2/3/4-5/6+)", s),
        }
    }
}

impl<'de> Deserialize<'de> for DaysPerWeek {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Training background, ordered from least to most experienced.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FitnessHistory {
    CompleteBeginner,
    ReturningAfterBreak,
    Sporadic,
    FairlyConsistent,
    Regular,
    VeryExperienced,
}

impl FromStr for FitnessHistory {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "complete_beginner" => return Ok(Self::CompleteBeginner),
            "returning_after_break" => return Ok(Self::ReturningAfterBreak),
            "sporadic" => return Ok(Self::Sporadic),
            "fairly_consistent" => return Ok(Self::FairlyConsistent),
            "regular" => return Ok(Self::Regular),
            "very_experienced" => return Ok(Self::VeryExperienced),
            _ => {}
        }
        if lower.contains("beginner") {
            Ok(Self::CompleteBeginner)
        } else if lower.contains("used to be") {
            Ok(Self::ReturningAfterBreak)
        } else if lower.contains("sporadic") {
            Ok(Self::Sporadic)
        } else if lower.contains("fairly consistent") {
            Ok(Self::FairlyConsistent)
        } else if lower.contains("very experienced") || lower.contains("years") {
            Ok(Self::VeryExperienced)
        } else if lower.contains("regular") {
            Ok(Self::Regular)
        } else {
            anyhow::bail!("unrecognized fitness history: {}", s)
        }
    }
}

impl<'de> Deserialize<'de> for FitnessHistory {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutLocation {
    Gym,
    Home,
    Outdoors,
    Mixed,
}

/// Dietary class resolved from the restriction tags. Vegan satisfies
/// vegetarian-gated food slots as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietClass {
    Vegan,
    Vegetarian,
    Omnivore,
}

/// Onboarding questionnaire snapshot. Constructed by the onboarding
/// collaborator; the generators treat it as read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub height_inches: f64,
    pub weight_lbs: f64,
    pub primary_goal: Goal,
    #[serde(default)]
    pub motivation: String,
    pub timeline_weeks: u8,
    pub fitness_history: FitnessHistory,
    #[serde(default)]
    pub exercise_types_tried: Vec<String>,
    pub days_per_week: DaysPerWeek,
    pub workout_length_minutes: u16,
    #[serde(default)]
    pub preferred_time: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub sleep_hours_band: String,
    #[serde(default)]
    pub stress_level_band: String,
    pub workout_location: WorkoutLocation,
    pub equipment: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub nutrition_challenge: String,
    #[serde(default)]
    pub injuries: Option<String>,
}

impl UserProfile {
    /// True when any equipment tag implies access to a gym or free weights.
    /// A binary gate: it selects the barbell/dumbbell exercise list over the
    /// bodyweight list and nothing else.
    pub fn has_weights(&self) -> bool {
        self.equipment
            .iter()
            .any(|e| {
                let lower = e.to_lowercase();
                lower.contains("gym") || lower.contains("weights")
            })
    }

    pub fn diet_class(&self) -> DietClass {
        let has = |needle: &str| {
            self.dietary_restrictions
                .iter()
                .any(|t| t.to_lowercase().contains(needle))
        };
        if has("vegan") {
            DietClass::Vegan
        } else if has("vegetarian") {
            DietClass::Vegetarian
        } else {
            DietClass::Omnivore
        }
    }
}

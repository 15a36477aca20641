use crate::core::error::PlanError;
use crate::core::meals::generate_meal_plan;
use crate::models::config::{BmrHeight, GeneratorConfig};
use crate::models::nutrition::NutritionPlan;
use crate::models::profile::{DietClass, Gender, Goal, UserProfile};

const LBS_TO_KG: f64 = 0.453592;
const IN_TO_CM: f64 = 2.54;

/// Assumed heights used by the original calculator, which captured the
/// profile height but never fed it into the BMR.
const ASSUMED_HEIGHT_MALE_CM: f64 = 175.0;
const ASSUMED_HEIGHT_OTHER_CM: f64 = 165.0;

/// Grams of protein per pound of bodyweight.
const PROTEIN_PER_LB: f64 = 0.8;
/// Share of daily calories allocated to fat.
const FAT_CALORIE_SHARE: f64 = 0.25;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily calorie and macro targets before the meal template is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub calories: i64,
    pub protein_g: i64,
    pub carb_g: i64,
    pub fat_g: i64,
}

/// Generate the full nutrition plan for a profile. Pure except for the
/// plan id and timestamp.
pub fn generate_nutrition_plan(
    profile: &UserProfile,
    config: &GeneratorConfig,
) -> Result<NutritionPlan, PlanError> {
    let targets = macro_targets(profile, config)?;
    let meals = generate_meal_plan(&targets, profile.diet_class(), config.meal_split);
    let guidelines = guidelines_for(profile, &targets);
    Ok(NutritionPlan::new(
        targets.calories,
        targets.protein_g,
        targets.carb_g,
        targets.fat_g,
        meals,
        guidelines,
    ))
}

/// Compute calorie and macro targets: Mifflin-St Jeor BMR, a banded
/// activity multiplier, an enum-keyed goal adjustment, then the fixed
/// protein/fat allocations with carbs as the remainder.
pub fn macro_targets(
    profile: &UserProfile,
    config: &GeneratorConfig,
) -> Result<MacroTargets, PlanError> {
    if !(profile.weight_lbs > 0.0) {
        return Err(PlanError::InvalidProfile(format!(
            "weight must be positive, got {} lbs",
            profile.weight_lbs
        )));
    }
    if profile.age == 0 {
        return Err(PlanError::InvalidProfile("age is zero".to_string()));
    }

    let bmr = mifflin_st_jeor(profile, config.bmr_height);
    let tdee = (bmr * profile.days_per_week.activity_multiplier()).round();
    let calories = (tdee * profile.primary_goal.calorie_multiplier()).round() as i64;

    let protein_g = (profile.weight_lbs * PROTEIN_PER_LB).round() as i64;
    let fat_g = ((calories as f64 * FAT_CALORIE_SHARE) / KCAL_PER_G_FAT).round() as i64;
    let carb_kcal = calories as f64
        - protein_g as f64 * KCAL_PER_G_PROTEIN
        - fat_g as f64 * KCAL_PER_G_FAT;
    let carb_g = (carb_kcal / KCAL_PER_G_CARB).round() as i64;
    if carb_g < 0 {
        return Err(PlanError::MacroInfeasible(format!(
            "protein ({}g) and fat ({}g) exceed the {} kcal target",
            protein_g, fat_g, calories
        )));
    }

    Ok(MacroTargets {
        calories,
        protein_g,
        carb_g,
        fat_g,
    })
}

/// Mifflin-St Jeor basal metabolic rate. Height comes from the profile or
/// from the original's fixed assumptions depending on the configured mode;
/// non-male profiles use the female constants, matching the source's
/// binary branch.
fn mifflin_st_jeor(profile: &UserProfile, height_mode: BmrHeight) -> f64 {
    let weight_kg = profile.weight_lbs * LBS_TO_KG;
    let height_cm = match height_mode {
        BmrHeight::Actual => profile.height_inches * IN_TO_CM,
        BmrHeight::Assumed => match profile.gender {
            Gender::Male => ASSUMED_HEIGHT_MALE_CM,
            _ => ASSUMED_HEIGHT_OTHER_CM,
        },
    };
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        _ => base - 161.0,
    }
}

/// Coaching guidelines conditioned on goal, protein target, dietary tags
/// and the reported nutrition challenge.
fn guidelines_for(profile: &UserProfile, targets: &MacroTargets) -> Vec<String> {
    let mut out = vec![
        format!(
            "Your daily calorie target is {} calories to support your goal: {}",
            targets.calories,
            profile.primary_goal.describe()
        ),
        format!(
            "Aim for {}g protein daily to support muscle recovery and growth",
            targets.protein_g
        ),
        "Spread meals throughout the day to maintain energy and support metabolism".to_string(),
        "Drink at least 8 glasses of water daily, more on workout days".to_string(),
    ];
    if profile.nutrition_challenge.to_lowercase().contains("time") {
        out.push("Meal prep on weekends to save time during the week".to_string());
    }
    if matches!(
        profile.diet_class(),
        DietClass::Vegetarian | DietClass::Vegan
    ) {
        out.push(
            "Include protein-rich plant sources like legumes, tofu, and quinoa".to_string(),
        );
    }
    if profile.primary_goal == Goal::LoseFat {
        out.push(
            "Favor high-volume, low-calorie foods like vegetables to stay full in a deficit"
                .to_string(),
        );
    }
    out
}

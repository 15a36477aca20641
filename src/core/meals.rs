use crate::core::nutrition::MacroTargets;
use crate::models::config::MealSplit;
use crate::models::nutrition::Meal;
use crate::models::profile::DietClass;

/// One slot of the five-meal daily template. Percentages are shares of
/// the plan-level daily totals. Food lists are fixed per slot; a slot
/// without a vegetarian or vegan list falls back toward the default.
struct MealSlot {
    name: &'static str,
    time: &'static str,
    calorie_pct: u32,
    protein_pct: u32,
    carb_pct: u32,
    fat_pct: u32,
    foods: &'static [&'static str],
    foods_vegetarian: Option<&'static [&'static str]>,
    foods_vegan: Option<&'static [&'static str]>,
}

/// Source percentage tables. Calories, carbs and fat each sum to 100
/// across the five slots; protein sums to 110, an over-allocation carried
/// over from the source data and handled per the configured split mode.
const MEAL_SLOTS: &[MealSlot] = &[
    MealSlot {
        name: "Breakfast",
        time: "7:00 AM",
        calorie_pct: 25,
        protein_pct: 25,
        carb_pct: 30,
        fat_pct: 25,
        foods: &[
            "Scrambled eggs (3 whole)",
            "Whole grain toast",
            "Avocado",
            "Greek yogurt with berries",
        ],
        foods_vegetarian: None,
        foods_vegan: Some(&[
            "Oatmeal with banana and almond butter",
            "Chia seeds",
            "Plant-based protein shake",
            "Mixed berries",
        ]),
    },
    MealSlot {
        name: "Mid-Morning Snack",
        time: "10:00 AM",
        calorie_pct: 10,
        protein_pct: 15,
        carb_pct: 10,
        fat_pct: 15,
        foods: &["Protein bar or shake", "Apple or banana", "Handful of almonds"],
        foods_vegetarian: None,
        foods_vegan: None,
    },
    MealSlot {
        name: "Lunch",
        time: "12:30 PM",
        calorie_pct: 30,
        protein_pct: 30,
        carb_pct: 30,
        fat_pct: 25,
        foods: &[
            "Grilled chicken breast (6oz)",
            "Brown rice (1 cup)",
            "Steamed broccoli",
            "Mixed greens salad",
        ],
        foods_vegetarian: Some(&[
            "Quinoa bowl with chickpeas",
            "Mixed vegetables",
            "Tahini dressing",
            "Side salad",
        ]),
        foods_vegan: None,
    },
    MealSlot {
        name: "Pre-Workout Snack",
        time: "3:00 PM",
        calorie_pct: 10,
        protein_pct: 10,
        carb_pct: 15,
        fat_pct: 5,
        foods: &["Banana", "Rice cakes with almond butter", "Small protein shake"],
        foods_vegetarian: None,
        foods_vegan: None,
    },
    MealSlot {
        name: "Dinner",
        time: "6:30 PM",
        calorie_pct: 25,
        protein_pct: 30,
        carb_pct: 15,
        fat_pct: 30,
        foods: &[
            "Salmon or lean beef (6oz)",
            "Sweet potato",
            "Asparagus",
            "Olive oil drizzle",
        ],
        foods_vegetarian: None,
        foods_vegan: Some(&[
            "Tofu stir-fry with vegetables",
            "Quinoa or brown rice",
            "Mixed nuts",
            "Leafy greens",
        ]),
    },
];

/// Build the five-meal daily template from the plan-level targets.
pub fn generate_meal_plan(
    targets: &MacroTargets,
    diet: DietClass,
    split: MealSplit,
) -> Vec<Meal> {
    let protein_denom = match split {
        MealSplit::Faithful => 100,
        MealSplit::Normalized => MEAL_SLOTS.iter().map(|s| s.protein_pct).sum(),
    };

    MEAL_SLOTS
        .iter()
        .map(|slot| Meal {
            name: slot.name.to_string(),
            time: slot.time.to_string(),
            calories: share(targets.calories, slot.calorie_pct, 100),
            protein_g: share(targets.protein_g, slot.protein_pct, protein_denom),
            carb_g: share(targets.carb_g, slot.carb_pct, 100),
            fat_g: share(targets.fat_g, slot.fat_pct, 100),
            foods: foods_for(slot, diet).iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

fn share(total: i64, pct: u32, denom: u32) -> i64 {
    (total as f64 * pct as f64 / denom as f64).round() as i64
}

fn foods_for(slot: &MealSlot, diet: DietClass) -> &'static [&'static str] {
    match diet {
        DietClass::Vegan => slot
            .foods_vegan
            .or(slot.foods_vegetarian)
            .unwrap_or(slot.foods),
        DietClass::Vegetarian => slot.foods_vegetarian.unwrap_or(slot.foods),
        DietClass::Omnivore => slot.foods,
    }
}

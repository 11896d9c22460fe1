use tracing::{debug, instrument};

use crate::models::{
    BodyType, FitnessGoal, MacroGrams, MacroPercentages, Meal, NutritionGoal, NutritionReport,
    NutritionRequest, PlanNutrition,
};

use super::metabolic_service::{nutrition_tdee, BodyMetrics};

/// Share of plan calories assigned to carbohydrates and fats. Protein is set
/// per kilogram of body weight instead, so the three shares need not add up.
const PLAN_CARB_SHARE: f64 = 0.4;
const PLAN_FAT_SHARE: f64 = 0.3;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

fn protein_per_kg(goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::LoseWeight => 2.2,
        FitnessGoal::BuildMuscle => 2.5,
        FitnessGoal::Strength => 2.3,
        FitnessGoal::Endurance => 1.8,
        FitnessGoal::Other => 1.6,
    }
}

/// Calorie target on the plan path: a fixed deficit or surplus around TDEE.
pub fn plan_calorie_target(goal: FitnessGoal, tdee: i64) -> i64 {
    match goal {
        FitnessGoal::LoseWeight => tdee.saturating_sub(500),
        FitnessGoal::BuildMuscle => tdee.saturating_add(250),
        _ => tdee,
    }
}

/// Carbohydrate and fat grams for a calorie target. Independent of protein.
pub fn plan_carbs_and_fats(calories: i64) -> (i64, i64) {
    let calories = calories as f64;
    (
        (calories * PLAN_CARB_SHARE / KCAL_PER_GRAM_CARB).round() as i64,
        (calories * PLAN_FAT_SHARE / KCAL_PER_GRAM_FAT).round() as i64,
    )
}

/// Nutrition block attached to a generated workout plan.
pub fn plan_nutrition(goal: FitnessGoal, weight_kg: f64, tdee: i64) -> PlanNutrition {
    let daily_calories = plan_calorie_target(goal, tdee);
    let protein = (protein_per_kg(goal) * weight_kg).round() as i64;
    let (carbohydrates, fats) = plan_carbs_and_fats(daily_calories);

    let protein_share = if daily_calories > 0 {
        (protein as f64 * KCAL_PER_GRAM_PROTEIN * 100.0 / daily_calories as f64).round() as i64
    } else {
        0
    };

    PlanNutrition {
        daily_calories,
        macronutrients: MacroGrams {
            protein,
            carbohydrates,
            fats,
        },
        macro_percentages: MacroPercentages {
            protein: protein_share,
            carbs: (PLAN_CARB_SHARE * 100.0) as i64,
            fats: (PLAN_FAT_SHARE * 100.0) as i64,
        },
        meal_frequency: "5-6 small meals per day".to_string(),
        hydration: "3-4 liters of water daily".to_string(),
    }
}

/// Protein/carb/fat percentage split for a body type.
pub fn macro_split(body_type: BodyType) -> (u32, u32, u32) {
    match body_type {
        BodyType::Ectomorph => (25, 50, 25),
        BodyType::Mesomorph => (30, 40, 30),
        BodyType::Endomorph => (35, 30, 35),
    }
}

fn meal_items(body_type: BodyType, meal_index: usize) -> &'static [&'static str] {
    const ECTOMORPH: [&[&str]; 4] = [
        &["Oatmeal with banana and nuts", "Protein shake"],
        &["Grilled chicken with rice", "Vegetables"],
        &["Salmon with sweet potato", "Green salad"],
        &["Greek yogurt", "Handful of almonds"],
    ];
    const MESOMORPH: [&[&str]; 4] = [
        &["Scrambled eggs with whole wheat toast", "Avocado"],
        &["Lean beef with quinoa", "Steamed vegetables"],
        &["Grilled fish with brown rice", "Roasted veggies"],
        &["Cottage cheese", "Protein bar"],
    ];
    const ENDOMORPH: [&[&str]; 4] = [
        &["Vegetable omelette", "Small portion of berries"],
        &["Grilled chicken salad with olive oil", "Quinoa"],
        &["Lean protein with steamed vegetables", "Small portion of healthy fats"],
        &["Handful of nuts", "Protein shake"],
    ];

    let templates = match body_type {
        BodyType::Ectomorph => &ECTOMORPH,
        BodyType::Mesomorph => &MESOMORPH,
        BodyType::Endomorph => &ENDOMORPH,
    };
    templates[meal_index]
}

fn meal_plan(body_type: BodyType, calories: f64) -> Vec<Meal> {
    const MEAL_TIMES: [(&str, &str); 4] = [
        ("Breakfast", "Energizing Start"),
        ("Lunch", "Balanced Meal"),
        ("Dinner", "Light Finish"),
        ("Snacks", "Nutrition Boost"),
    ];

    MEAL_TIMES
        .iter()
        .enumerate()
        .map(|(index, (time, name))| {
            // Main meals take 30% of the day each, snacks 10%.
            let share = if index == 3 { 0.1 } else { 0.3 };
            Meal {
                time: time.to_string(),
                name: name.to_string(),
                items: meal_items(body_type, index).iter().map(|s| s.to_string()).collect(),
                calories: (calories * share).round() as i64,
            }
        })
        .collect()
}

fn nutrition_tips(body_type: BodyType, goal: NutritionGoal) -> Vec<String> {
    let body_tips: [&str; 4] = match body_type {
        BodyType::Ectomorph => [
            "Focus on calorie-dense foods to meet your high energy needs",
            "Include healthy fats like nuts, seeds, and avocados",
            "Eat frequent meals to maintain energy levels",
            "Combine proteins with carbs for optimal muscle recovery",
        ],
        BodyType::Mesomorph => [
            "Maintain balanced macronutrients for your versatile metabolism",
            "Time your carbs around workouts for energy and recovery",
            "Keep protein intake consistent throughout the day",
            "Vary your workouts to continue seeing progress",
        ],
        BodyType::Endomorph => [
            "Focus on portion control and meal timing",
            "Choose complex carbs over simple sugars",
            "Include plenty of fiber to help with satiety",
            "Consider intermittent fasting if it suits your lifestyle",
        ],
    };
    let goal_tips: [&str; 4] = match goal {
        NutritionGoal::WeightLoss => [
            "Create a moderate calorie deficit (300-500 kcal)",
            "Prioritize protein to preserve muscle mass",
            "Stay hydrated to support metabolism",
            "Include strength training to maintain muscle",
        ],
        NutritionGoal::Maintenance => [
            "Monitor your weight and adjust as needed",
            "Maintain consistent eating patterns",
            "Focus on food quality for optimal health",
            "Stay active to support your metabolism",
        ],
        NutritionGoal::MuscleGain => [
            "Ensure adequate protein intake (1.6-2.2g per kg of body weight)",
            "Time your nutrition around workouts",
            "Progressively increase calories as you gain",
            "Prioritize recovery with quality sleep",
        ],
    };

    body_tips
        .iter()
        .chain(goal_tips.iter())
        .map(|tip| tip.to_string())
        .collect()
}

/// Standalone nutrition calculator: Harris-Benedict TDEE scaled by a goal
/// multiplier, split into macros by body type.
#[derive(Debug, Clone, Default)]
pub struct NutritionService;

impl NutritionService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    pub fn calculate(&self, request: &NutritionRequest) -> NutritionReport {
        let body = BodyMetrics {
            age: request.age,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            gender: request.gender,
        };
        let tdee = nutrition_tdee(&body, request.activity_level);
        let calorie_target = tdee * request.goal.calorie_multiplier();
        debug!(tdee, calorie_target, "Computed nutrition targets");

        let (protein_pct, carbs_pct, fats_pct) = macro_split(request.body_type);
        let grams = |pct: u32, kcal_per_gram: f64| {
            (calorie_target * (pct as f64 / 100.0) / kcal_per_gram).round() as i64
        };

        NutritionReport {
            calories: calorie_target.round() as i64,
            protein: grams(protein_pct, KCAL_PER_GRAM_PROTEIN),
            protein_percentage: protein_pct,
            carbs: grams(carbs_pct, KCAL_PER_GRAM_CARB),
            carbs_percentage: carbs_pct,
            fats: grams(fats_pct, KCAL_PER_GRAM_FAT),
            fats_percentage: fats_pct,
            meals: meal_plan(request.body_type, calorie_target),
            tips: nutrition_tips(request.body_type, request.goal),
        }
    }
}

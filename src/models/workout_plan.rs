use serde::Serialize;
use std::fmt;

/// Length of every generated program, in weeks.
pub const PROGRAM_WEEKS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkoutType {
    #[serde(rename = "HIIT")]
    Hiit,
    Strength,
    Cardio,
    #[serde(rename = "Upper Body")]
    UpperBody,
    #[serde(rename = "Lower Body")]
    LowerBody,
}

impl WorkoutType {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Strength => "Strength",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::UpperBody => "Upper Body",
            WorkoutType::LowerBody => "Lower Body",
        }
    }

    pub fn focus_areas(&self) -> &'static [&'static str] {
        match self {
            WorkoutType::UpperBody => &["Chest", "Back", "Shoulders", "Arms"],
            WorkoutType::LowerBody => &["Quads", "Hamstrings", "Glutes", "Calves"],
            WorkoutType::Hiit => &["Full Body", "Cardio"],
            WorkoutType::Cardio => &["Cardiovascular"],
            WorkoutType::Strength => &["Compound Movements"],
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePrescription {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest_period: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day_number: u32,
    pub day_name: String,
    pub workout_type: WorkoutType,
    pub focus_areas: Vec<String>,
    pub duration_minutes: u32,
    pub exercises: Vec<ExercisePrescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub bmi: f64,
    pub bmi_category: String,
    pub tdee: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDetails {
    pub goal: String,
    /// Program length in weeks.
    pub duration: u32,
    pub days_per_week: u32,
    pub session_duration: u32,
    pub equipment: String,
    pub fitness_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroGrams {
    pub protein: i64,
    pub carbohydrates: i64,
    pub fats: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroPercentages {
    pub protein: i64,
    pub carbs: i64,
    pub fats: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanNutrition {
    pub daily_calories: i64,
    pub macronutrients: MacroGrams,
    pub macro_percentages: MacroPercentages,
    pub meal_frequency: String,
    pub hydration: String,
}

/// Full response of a plan request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub user_profile: ProfileSummary,
    pub plan_details: PlanDetails,
    pub weekly_schedule: Vec<DaySchedule>,
    pub nutrition: PlanNutrition,
    pub recommendations: Vec<String>,
}

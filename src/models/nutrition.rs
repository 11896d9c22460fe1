use serde::Serialize;
use validator::Validate;

use super::user_profile::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl BodyType {
    /// Unrecognised body types fall back to the mesomorph preset.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "ectomorph" => BodyType::Ectomorph,
            "endomorph" => BodyType::Endomorph,
            _ => BodyType::Mesomorph,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionGoal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl NutritionGoal {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "weight_loss" => Some(NutritionGoal::WeightLoss),
            "maintenance" => Some(NutritionGoal::Maintenance),
            "muscle_gain" => Some(NutritionGoal::MuscleGain),
            _ => None,
        }
    }

    pub fn calorie_multiplier(&self) -> f64 {
        match self {
            NutritionGoal::WeightLoss => 0.85,
            NutritionGoal::Maintenance => 1.0,
            NutritionGoal::MuscleGain => 1.15,
        }
    }
}

/// Validated input of the standalone nutrition calculator.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NutritionRequest {
    #[validate(range(max = 150.0, message = "age must be at most 150"))]
    pub age: f64,
    #[validate(range(max = 700.0, message = "weight must be at most 700"))]
    pub weight_kg: f64,
    #[validate(range(max = 300.0, message = "height must be at most 300"))]
    pub height_cm: f64,
    pub body_type: BodyType,
    pub activity_level: ActivityLevel,
    pub gender: Gender,
    pub goal: NutritionGoal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub time: String,
    pub name: String,
    pub items: Vec<String>,
    pub calories: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionReport {
    pub calories: i64,
    pub protein: i64,
    pub protein_percentage: u32,
    pub carbs: i64,
    pub carbs_percentage: u32,
    pub fats: i64,
    pub fats_percentage: u32,
    pub meals: Vec<Meal>,
    pub tips: Vec<String>,
}

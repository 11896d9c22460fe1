//! Basal metabolic rate and energy expenditure.
//!
//! Two BMR formulas are kept side by side. Plan generation uses
//! Mifflin-St Jeor with the fitness level standing in for activity; the
//! standalone nutrition calculator uses Harris-Benedict with five activity
//! tiers. They produce different numbers and are not interchangeable.

use crate::models::{ActivityLevel, FitnessLevel, Gender};

/// Body measurements shared by both formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
}

pub trait BmrFormula {
    /// Basal metabolic rate in kcal/day.
    fn bmr(&self, body: &BodyMetrics) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MifflinStJeor;

impl BmrFormula for MifflinStJeor {
    fn bmr(&self, body: &BodyMetrics) -> f64 {
        let base = 10.0 * body.weight_kg + 6.25 * body.height_cm - 5.0 * body.age;
        match body.gender {
            Gender::Male => base + 5.0,
            Gender::Other => base - 161.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HarrisBenedict;

impl BmrFormula for HarrisBenedict {
    fn bmr(&self, body: &BodyMetrics) -> f64 {
        match body.gender {
            Gender::Male => {
                88.362 + 13.397 * body.weight_kg + 4.799 * body.height_cm - 5.677 * body.age
            }
            Gender::Other => {
                447.593 + 9.247 * body.weight_kg + 3.098 * body.height_cm - 4.330 * body.age
            }
        }
    }
}

/// Activity multiplier used on the plan path. An unrecognized level counts
/// as sedentary.
pub fn level_activity_factor(level: FitnessLevel) -> f64 {
    match level {
        FitnessLevel::Intermediate => 1.375,
        FitnessLevel::Advanced => 1.55,
        FitnessLevel::Beginner | FitnessLevel::Unrecognized => 1.2,
    }
}

/// TDEE for plan generation, rounded to whole kcal.
pub fn plan_tdee(body: &BodyMetrics, level: FitnessLevel) -> i64 {
    (MifflinStJeor.bmr(body) * level_activity_factor(level)).round() as i64
}

/// Unrounded TDEE for the standalone nutrition calculator.
pub fn nutrition_tdee(body: &BodyMetrics, activity: ActivityLevel) -> f64 {
    HarrisBenedict.bmr(body) * activity.factor()
}

/// Body mass index rounded to one decimal place.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / (height_m * height_m) * 10.0).round() / 10.0
}

pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

use super::nutrition::{ActivityLevel, BodyType, NutritionGoal, NutritionRequest};
use super::progress::{ProgressMetrics, ProgressMetricsInput};
use super::user_profile::{
    EquipmentAccess, FitnessGoal, FitnessLevel, Gender, PlanRequest, UserProfile,
    WorkoutPreferences, DEFAULT_DAYS_PER_WEEK, DEFAULT_SESSION_MINUTES,
};

const PLAN_REQUIRED_FIELDS: [&str; 6] = ["age", "height", "weight", "gender", "goal", "fitnessLevel"];
const PLAN_NUMERIC_FIELDS: [&str; 3] = ["age", "height", "weight"];
const NUTRITION_REQUIRED_FIELDS: [&str; 7] = [
    "age",
    "weight",
    "height",
    "bodyType",
    "activityLevel",
    "gender",
    "goals",
];

/// Interpret a JSON number or numeric string as a finite float.
pub fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Interpret a JSON number or numeric string as an integer, truncating any
/// fractional part.
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| numeric_value(value).map(|f| f.trunc() as i64)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| numeric_value(value).map(|f| f.trunc() as i64)),
        _ => None,
    }
}

fn as_object<'a>(body: &'a Value) -> Result<&'a Map<String, Value>, AppError> {
    body.as_object().ok_or_else(|| {
        AppError::validation(
            "Invalid request body",
            vec!["request body must be a JSON object".to_string()],
        )
    })
}

fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|v| !v.is_null())
}

fn string_field(fields: &Map<String, Value>, name: &str, errors: &mut Vec<String>) -> String {
    match present(fields, name) {
        Some(Value::String(s)) => s.clone(),
        _ => {
            errors.push(format!("{} must be a string", name));
            String::new()
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn count_field(
    fields: &Map<String, Value>,
    names: &[&str],
    default: u32,
    errors: &mut Vec<String>,
) -> u32 {
    let Some((name, value)) = names
        .iter()
        .find_map(|name| present(fields, name).map(|value| (*name, value)))
    else {
        return default;
    };

    match numeric_value(value) {
        Some(n) if n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64 => n as u32,
        _ => {
            errors.push(format!("{} must be a whole number", name));
            default
        }
    }
}

fn range_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is out of range", field))
            })
        })
        .collect();
    details.sort();
    details
}

/// Validate a plan request body and convert it into typed input.
pub fn parse_plan_request(body: &Value) -> Result<PlanRequest, AppError> {
    let fields = as_object(body)?;

    let missing: Vec<String> = PLAN_REQUIRED_FIELDS
        .iter()
        .filter(|name| present(fields, name).is_none())
        .map(|name| format!("{} is required", name))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::validation("Missing required fields", missing));
    }

    let mut type_errors = Vec::new();
    let mut numbers = [0.0f64; 3];
    for (slot, name) in numbers.iter_mut().zip(PLAN_NUMERIC_FIELDS) {
        match present(fields, name).and_then(numeric_value) {
            Some(n) => *slot = n,
            None => type_errors.push(format!("{} must be a number", name)),
        }
    }
    let gender_label = string_field(fields, "gender", &mut type_errors);
    let goal_label = string_field(fields, "goal", &mut type_errors);
    let level_label = string_field(fields, "fitnessLevel", &mut type_errors);
    if !type_errors.is_empty() {
        return Err(AppError::validation("Invalid data types", type_errors));
    }
    let [age, height_cm, weight_kg] = numbers;

    let mut value_errors = Vec::new();
    for (name, value) in PLAN_NUMERIC_FIELDS.iter().zip(numbers) {
        if value <= 0.0 {
            value_errors.push(format!("{} must be greater than zero", name));
        }
    }

    let equipment_label = match present(fields, "equipment") {
        None => WorkoutPreferences::default().equipment_label,
        Some(Value::String(label)) => label.clone(),
        Some(other) => other.to_string(),
    };

    let preferences = WorkoutPreferences {
        days_per_week: count_field(
            fields,
            &["daysPerWeek", "workoutDays"],
            DEFAULT_DAYS_PER_WEEK,
            &mut value_errors,
        ),
        session_minutes: count_field(
            fields,
            &["sessionMinutes", "workoutDuration"],
            DEFAULT_SESSION_MINUTES,
            &mut value_errors,
        ),
        equipment: EquipmentAccess::from_label(&equipment_label),
        equipment_label,
        injuries: string_list(fields.get("injuries")),
        preferences: string_list(fields.get("preferences")),
    };

    let profile = UserProfile {
        age,
        height_cm,
        weight_kg,
        gender: Gender::from_label(&gender_label),
        gender_label,
        goal: FitnessGoal::from_label(&goal_label),
        goal_label,
        fitness_level: FitnessLevel::from_label(&level_label),
        fitness_level_label: level_label,
    };

    if let Err(errors) = profile.validate() {
        value_errors.extend(range_errors(&errors));
    }
    if let Err(errors) = preferences.validate() {
        value_errors.extend(range_errors(&errors));
    }
    if !value_errors.is_empty() {
        return Err(AppError::validation("Invalid field values", value_errors));
    }

    Ok(PlanRequest {
        profile,
        preferences,
    })
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}

/// Validate a standalone nutrition request. Every field is required.
pub fn parse_nutrition_request(body: &Value) -> Result<NutritionRequest, AppError> {
    let fields = as_object(body)?;

    let missing: Vec<String> = NUTRITION_REQUIRED_FIELDS
        .iter()
        .filter(|name| fields.get(**name).map_or(true, is_blank))
        .map(|name| format!("{} is required", name))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::validation("All fields are required", missing));
    }

    let mut errors = Vec::new();
    let number = |name: &str, errors: &mut Vec<String>| match fields.get(name).and_then(numeric_value) {
        Some(n) if n > 0.0 => n,
        Some(_) => {
            errors.push(format!("{} must be greater than zero", name));
            0.0
        }
        None => {
            errors.push(format!("{} must be a number", name));
            0.0
        }
    };
    let age = number("age", &mut errors);
    let weight_kg = number("weight", &mut errors);
    let height_cm = number("height", &mut errors);

    let body_type = string_field(fields, "bodyType", &mut errors);
    let gender = string_field(fields, "gender", &mut errors);
    let activity = string_field(fields, "activityLevel", &mut errors);
    let goal = string_field(fields, "goals", &mut errors);

    let activity_level = ActivityLevel::from_label(&activity);
    if activity_level.is_none() && !activity.is_empty() {
        errors.push(
            "activityLevel must be one of sedentary, light, moderate, active, very_active".to_string(),
        );
    }
    let nutrition_goal = NutritionGoal::from_label(&goal);
    if nutrition_goal.is_none() && !goal.is_empty() {
        errors.push("goals must be one of weight_loss, maintenance, muscle_gain".to_string());
    }

    let request = match (activity_level, nutrition_goal) {
        (Some(activity_level), Some(goal)) if errors.is_empty() => NutritionRequest {
            age,
            weight_kg,
            height_cm,
            body_type: BodyType::from_label(&body_type),
            activity_level,
            gender: Gender::from_label(&gender),
            goal,
        },
        _ => return Err(AppError::validation("Invalid field values", errors)),
    };

    match request.validate() {
        Ok(()) => Ok(request),
        Err(range) => Err(AppError::validation("Invalid field values", range_errors(&range))),
    }
}

/// Validate the body of an equipment suggestion request.
pub fn parse_equipment_request(body: &Value) -> Result<Vec<String>, AppError> {
    let invalid = || AppError::validation("Invalid equipment list", vec!["equipment must be an array of strings".to_string()]);

    let items = body
        .get("equipment")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;

    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}

/// Coerce submitted progress metrics. Values that are absent or cannot be
/// read as numbers become `None`; workout performance outside 0..=10 is
/// treated as unreadable.
pub fn coerce_progress_metrics(input: &ProgressMetricsInput) -> ProgressMetrics {
    let float = |value: &Option<Value>| value.as_ref().and_then(numeric_value);

    ProgressMetrics {
        weight: float(&input.weight),
        body_fat: float(&input.body_fat),
        muscle_mass: float(&input.muscle_mass),
        waist: float(&input.waist),
        hips: float(&input.hips),
        workout_performance: input
            .workout_performance
            .as_ref()
            .and_then(integer_value)
            .filter(|score| (0..=10).contains(score)),
    }
}

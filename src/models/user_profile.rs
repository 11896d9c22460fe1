use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Other,
}

impl Gender {
    /// Anything other than "male" (case-insensitive) selects the non-male formula.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessGoal {
    LoseWeight,
    BuildMuscle,
    Strength,
    Endurance,
    Other,
}

impl FitnessGoal {
    /// Goal labels are matched case-insensitively and treat spaces and
    /// underscores alike, so "lose weight" and "lose_weight" are the same goal.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace('_', " ");
        match normalized.as_str() {
            "lose weight" => FitnessGoal::LoseWeight,
            "build muscle" => FitnessGoal::BuildMuscle,
            "strength" => FitnessGoal::Strength,
            "endurance" => FitnessGoal::Endurance,
            _ => FitnessGoal::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    /// Any other label. Treated like an advanced athlete for volume, but
    /// without the advanced activity factor.
    Unrecognized,
}

impl FitnessLevel {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "beginner" => FitnessLevel::Beginner,
            "intermediate" => FitnessLevel::Intermediate,
            "advanced" => FitnessLevel::Advanced,
            _ => FitnessLevel::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
            FitnessLevel::Unrecognized => "unrecognized",
        }
    }

    /// Upper bound on exercises per session for this level.
    pub fn exercise_cap(&self) -> usize {
        match self {
            FitnessLevel::Beginner => 5,
            FitnessLevel::Intermediate => 6,
            FitnessLevel::Advanced | FitnessLevel::Unrecognized => 7,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EquipmentAccess {
    #[default]
    None,
    Basic,
    Full,
    /// A label other than none/basic/full. No exercise is filtered out.
    Unrecognized,
}

impl EquipmentAccess {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "none" => EquipmentAccess::None,
            "basic" => EquipmentAccess::Basic,
            "full" => EquipmentAccess::Full,
            _ => EquipmentAccess::Unrecognized,
        }
    }
}

/// Biometrics and goal supplied with a plan request.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UserProfile {
    #[validate(range(max = 150.0, message = "age must be at most 150"))]
    pub age: f64,
    #[validate(range(max = 300.0, message = "height must be at most 300"))]
    pub height_cm: f64,
    #[validate(range(max = 700.0, message = "weight must be at most 700"))]
    pub weight_kg: f64,
    pub gender: Gender,
    /// Raw gender label, echoed back in the response.
    pub gender_label: String,
    pub goal: FitnessGoal,
    /// Raw goal label, echoed back in the response.
    pub goal_label: String,
    pub fitness_level: FitnessLevel,
    /// Raw fitness level label, echoed back in the response.
    pub fitness_level_label: String,
}

pub const DEFAULT_DAYS_PER_WEEK: u32 = 3;
pub const DEFAULT_SESSION_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct WorkoutPreferences {
    #[validate(range(min = 1, max = 7, message = "daysPerWeek must be between 1 and 7"))]
    pub days_per_week: u32,
    #[validate(range(min = 1, message = "sessionMinutes must be a positive integer"))]
    pub session_minutes: u32,
    pub equipment: EquipmentAccess,
    /// Raw equipment label, echoed back in the response.
    pub equipment_label: String,
    pub injuries: Vec<String>,
    pub preferences: Vec<String>,
}

impl Default for WorkoutPreferences {
    fn default() -> Self {
        Self {
            days_per_week: DEFAULT_DAYS_PER_WEEK,
            session_minutes: DEFAULT_SESSION_MINUTES,
            equipment: EquipmentAccess::None,
            equipment_label: "none".to_string(),
            injuries: Vec::new(),
            preferences: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub profile: UserProfile,
    pub preferences: WorkoutPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_labels() {
        assert_eq!(FitnessGoal::from_label("lose weight"), FitnessGoal::LoseWeight);
        assert_eq!(FitnessGoal::from_label("Lose_Weight"), FitnessGoal::LoseWeight);
        assert_eq!(FitnessGoal::from_label("build muscle"), FitnessGoal::BuildMuscle);
        assert_eq!(FitnessGoal::from_label("ENDURANCE"), FitnessGoal::Endurance);
        assert_eq!(FitnessGoal::from_label("flexibility"), FitnessGoal::Other);
    }

    #[test]
    fn test_fitness_level_caps() {
        assert_eq!(FitnessLevel::Beginner.exercise_cap(), 5);
        assert_eq!(FitnessLevel::Intermediate.exercise_cap(), 6);
        assert_eq!(FitnessLevel::Advanced.exercise_cap(), 7);
        assert_eq!(FitnessLevel::Unrecognized.exercise_cap(), 7);
        assert_eq!(FitnessLevel::from_label("Advanced"), FitnessLevel::Advanced);
        assert_eq!(FitnessLevel::from_label("elite"), FitnessLevel::Unrecognized);
    }

    #[test]
    fn test_equipment_labels() {
        assert_eq!(EquipmentAccess::from_label("Basic"), EquipmentAccess::Basic);
        assert_eq!(EquipmentAccess::from_label("none"), EquipmentAccess::None);
        assert_eq!(EquipmentAccess::from_label("dumbbells"), EquipmentAccess::Unrecognized);
    }

    #[test]
    fn test_profile_upper_bounds() {
        let profile = |age: f64, height_cm: f64, weight_kg: f64| UserProfile {
            age,
            height_cm,
            weight_kg,
            gender: Gender::Male,
            gender_label: "male".to_string(),
            goal: FitnessGoal::LoseWeight,
            goal_label: "lose weight".to_string(),
            fitness_level: FitnessLevel::Beginner,
            fitness_level_label: "beginner".to_string(),
        };
        assert!(profile(150.0, 300.0, 700.0).validate().is_ok());
        assert!(profile(150.5, 175.0, 80.0).validate().is_err());
        assert!(profile(30.0, 301.0, 80.0).validate().is_err());
        assert!(profile(30.0, 175.0, 1e300).validate().is_err());
    }

    #[test]
    fn test_preferences_range_rules() {
        assert!(WorkoutPreferences::default().validate().is_ok());

        let too_many_days = WorkoutPreferences {
            days_per_week: 8,
            ..Default::default()
        };
        assert!(too_many_days.validate().is_err());

        let zero_minutes = WorkoutPreferences {
            session_minutes: 0,
            ..Default::default()
        };
        assert!(zero_minutes.validate().is_err());
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::from_label("Male"), Gender::Male);
        assert_eq!(Gender::from_label("female"), Gender::Other);
    }
}

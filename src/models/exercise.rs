use serde::Serialize;

/// Category tags of the plan-generation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Cardio,
    Hiit,
    Strength,
    Hypertrophy,
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExercise {
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub muscle_group: &'static str,
    pub description: &'static str,
    pub difficulty: &'static str,
}

/// A record of the equipment suggestion table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSuggestion {
    pub name: &'static str,
    pub description: &'static str,
    pub muscle_group: &'static str,
    pub difficulty: &'static str,
}

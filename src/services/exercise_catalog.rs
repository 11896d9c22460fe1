//! Static exercise reference data.
//!
//! Two independent tables live here: the category catalog consumed by plan
//! generation, and the equipment table consumed by the equipment advisor.
//! Both are read-only.

use crate::models::{CatalogExercise, ExerciseCategory, ExerciseSuggestion};
use crate::models::ExerciseCategory::{Cardio, Hiit, Home, Hypertrophy, Strength};

/// Equipment tag whose suggestions double as the bodyweight fallback.
pub const BODYWEIGHT_TAG: &str = "none";

const fn entry(
    name: &'static str,
    category: ExerciseCategory,
    muscle_group: &'static str,
    description: &'static str,
    difficulty: &'static str,
) -> CatalogExercise {
    CatalogExercise {
        name,
        category,
        muscle_group,
        description,
        difficulty,
    }
}

const fn suggestion(
    name: &'static str,
    description: &'static str,
    muscle_group: &'static str,
    difficulty: &'static str,
) -> ExerciseSuggestion {
    ExerciseSuggestion {
        name,
        description,
        muscle_group,
        difficulty,
    }
}

static CARDIO: [CatalogExercise; 5] = [
    entry("Running", Cardio, "Legs", "Steady-state or tempo running.", "Beginner"),
    entry("Cycling", Cardio, "Legs", "Road or stationary cycling at a sustainable pace.", "Beginner"),
    entry("Jump Rope", Cardio, "Full Body", "Continuous skipping with light, quick contacts.", "Beginner"),
    entry("Swimming", Cardio, "Full Body", "Freestyle laps with relaxed breathing.", "Intermediate"),
    entry("Rowing", Cardio, "Full Body", "Drive with the legs, finish with the arms.", "Intermediate"),
];

static HIIT: [CatalogExercise; 5] = [
    entry("Burpees", Hiit, "Full Body", "Squat, kick back to plank, return and jump.", "Intermediate"),
    entry("Mountain Climbers", Hiit, "Core", "Drive knees to chest from a high plank.", "Beginner"),
    entry("Jump Squats", Hiit, "Legs", "Explode upward from a bodyweight squat.", "Intermediate"),
    entry("High Knees", Hiit, "Legs", "Run in place bringing knees to hip height.", "Beginner"),
    entry("Box Jumps", Hiit, "Legs", "Jump onto a box and land softly.", "Advanced"),
];

static STRENGTH: [CatalogExercise; 5] = [
    entry("Squats", Strength, "Legs", "Barbell back squat to parallel.", "Intermediate"),
    entry("Deadlifts", Strength, "Posterior Chain", "Hinge and lift the bar from the floor.", "Advanced"),
    entry("Bench Press", Strength, "Chest", "Lower the bar to mid-chest and press.", "Intermediate"),
    entry("Pull-ups", Strength, "Back", "Pull chin over the bar from a dead hang.", "Advanced"),
    entry("Overhead Press", Strength, "Shoulders", "Press the bar from shoulders to lockout.", "Intermediate"),
];

static HYPERTROPHY: [CatalogExercise; 4] = [
    entry("Dumbbell Curls", Hypertrophy, "Biceps", "Curl with controlled eccentrics.", "Beginner"),
    entry("Tricep Extensions", Hypertrophy, "Triceps", "Extend overhead keeping elbows fixed.", "Beginner"),
    entry("Lateral Raises", Hypertrophy, "Shoulders", "Raise dumbbells to shoulder height.", "Beginner"),
    entry("Leg Press", Hypertrophy, "Legs", "Push the platform away with a flat back.", "Beginner"),
];

static HOME: [CatalogExercise; 5] = [
    entry("Push-ups", Home, "Chest", "Lower until elbows reach 90 degrees.", "Beginner"),
    entry("Bodyweight Squats", Home, "Legs", "Squat until thighs are parallel.", "Beginner"),
    entry("Lunges", Home, "Legs", "Step forward and lower the back knee.", "Beginner"),
    entry("Plank", Home, "Core", "Hold a straight line from head to heels.", "Beginner"),
    entry("Burpees", Home, "Full Body", "Squat, kick back to plank, return and jump.", "Intermediate"),
];

/// Exercises of a catalog category, in table order.
pub fn category_exercises(category: ExerciseCategory) -> &'static [CatalogExercise] {
    match category {
        ExerciseCategory::Cardio => &CARDIO,
        ExerciseCategory::Hiit => &HIIT,
        ExerciseCategory::Strength => &STRENGTH,
        ExerciseCategory::Hypertrophy => &HYPERTROPHY,
        ExerciseCategory::Home => &HOME,
    }
}

/// Whether `name` can be done at home without equipment.
pub fn is_home_exercise(name: &str) -> bool {
    HOME.iter().any(|exercise| exercise.name == name)
}

static EQUIPMENT_TABLE: &[(&str, &[ExerciseSuggestion])] = &[
    // No equipment / bodyweight
    (
        BODYWEIGHT_TAG,
        &[
            suggestion("Push-ups", "Targets chest, shoulders, and triceps. Keep your body straight and lower until elbows are at 90°.", "Upper Body", "Beginner"),
            suggestion("Bodyweight Squats", "Strengthens legs and glutes. Lower until thighs are parallel to the ground.", "Lower Body", "Beginner"),
            suggestion("Plank", "Core stabilization exercise. Hold a straight-arm or forearm position.", "Core", "Beginner"),
            suggestion("Burpees", "Full-body exercise combining squat, plank, and jump.", "Full Body", "Intermediate"),
        ],
    ),
    // Home equipment
    (
        "dumbbells",
        &[
            suggestion("Dumbbell Rows", "Bend at waist, pull dumbbell to hip to target upper back.", "Back", "Beginner"),
            suggestion("Goblet Squats", "Hold dumbbell at chest while squatting for added resistance.", "Legs", "Intermediate"),
        ],
    ),
    (
        "resistance-bands",
        &[
            suggestion("Band Rows", "Anchor band and pull toward waist to engage back muscles.", "Back", "Beginner"),
            suggestion("Band Lateral Walks", "Place band around thighs and step sideways to activate glutes.", "Hips", "Beginner"),
        ],
    ),
    ("yoga-mat", &[suggestion("Yoga Flow", "Sun salutations to improve flexibility and mobility.", "Full Body", "Beginner")]),
    ("kettlebells", &[suggestion("Kettlebell Swings", "Hip-hinging movement to build explosive power.", "Posterior Chain", "Intermediate")]),
    ("pull-up-bar", &[suggestion("Pull-ups", "Grip bar wider than shoulders, pull chin over bar.", "Back", "Advanced")]),
    ("jump-rope", &[suggestion("Jump Rope Intervals", "30s fast jumps followed by 30s rest for cardio.", "Cardio", "Beginner")]),
    ("stability-ball", &[suggestion("Ball Hamstring Curls", "Lie on back, roll ball in/out with feet to target hamstrings.", "Legs", "Intermediate")]),
    // Gym equipment
    ("full-gym", &[suggestion("Custom Split Routine", "Combine machines and free weights for full-body training.", "Full Body", "All Levels")]),
    ("barbell", &[suggestion("Bench Press", "Classic chest exercise. Lower bar to mid-chest and press up.", "Chest", "Intermediate")]),
    ("weight-plates", &[suggestion("Plate Front Raises", "Hold plate with both hands and raise to shoulder height.", "Shoulders", "Beginner")]),
    ("bench", &[suggestion("Incline Dumbbell Press", "Adjust bench to 45° to target upper chest.", "Chest", "Intermediate")]),
    ("cable-machine", &[suggestion("Cable Flys", "Isolated chest movement with constant tension.", "Chest", "Intermediate")]),
    ("leg-press", &[suggestion("Leg Press", "Push platform away with legs while keeping back flat.", "Legs", "Beginner")]),
    ("treadmill", &[suggestion("Incline Walk", "12% incline at 3mph for glute activation.", "Cardio/Legs", "Beginner")]),
    ("elliptical", &[suggestion("Reverse Stride", "Pedal backward to target different leg muscles.", "Cardio/Legs", "Beginner")]),
    ("rowing-machine", &[suggestion("500m Sprints", "Powerful full-body cardio intervals.", "Full Body", "Advanced")]),
    // Specialized equipment
    ("trx", &[suggestion("TRX Rows", "Lean back and pull yourself up using straps.", "Back", "Intermediate")]),
    ("battle-ropes", &[suggestion("Wave Slams", "Alternate arm waves for upper-body endurance.", "Arms/Shoulders", "Intermediate")]),
    ("medicine-ball", &[suggestion("Wall Throws", "Explosive throws to build power.", "Core/Shoulders", "Intermediate")]),
    ("plyo-box", &[suggestion("Box Jumps", "Explosive jumps onto box, land softly.", "Legs", "Advanced")]),
    ("sandbag", &[suggestion("Sandbag Shouldering", "Lift bag from ground to shoulder alternately.", "Full Body", "Advanced")]),
    ("sliders", &[suggestion("Slider Mountain Climbers", "Add instability to core exercise.", "Core", "Intermediate")]),
];

/// Suggestions registered for an equipment tag. Tags are matched exactly.
pub fn equipment_suggestions(tag: &str) -> Option<&'static [ExerciseSuggestion]> {
    EQUIPMENT_TABLE
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, suggestions)| *suggestions)
}

/// The bodyweight list used when no equipment tag matches.
pub fn bodyweight_suggestions() -> &'static [ExerciseSuggestion] {
    equipment_suggestions(BODYWEIGHT_TAG).unwrap_or(&[])
}

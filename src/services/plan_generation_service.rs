use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::models::{
    DaySchedule, EquipmentAccess, ExerciseCategory, ExercisePrescription, FitnessGoal,
    FitnessLevel, PlanDetails, PlanRequest, ProfileSummary, WorkoutPlan, WorkoutType,
    PROGRAM_WEEKS,
};

use super::exercise_catalog::{category_exercises, is_home_exercise};
use super::metabolic_service::{bmi, bmi_category, plan_tdee, BodyMetrics};
use super::nutrition_service::plan_nutrition;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Dropped from the pool when only basic equipment is available.
const BASIC_EQUIPMENT_EXCLUSIONS: [&str; 2] = ["Deadlifts", "Bench Press"];
const UPPER_BODY_EXCLUSIONS: [&str; 4] = ["Squats", "Deadlifts", "Leg Press", "Lunges"];
const LOWER_BODY_EXCLUSIONS: [&str; 4] = ["Push-ups", "Pull-ups", "Bench Press", "Overhead Press"];

/// Catalog categories drawn from for a goal, in priority order.
pub fn categories_for_goal(goal: FitnessGoal) -> &'static [ExerciseCategory] {
    use crate::models::ExerciseCategory::*;
    match goal {
        FitnessGoal::LoseWeight => &[Cardio, Hiit, Strength],
        FitnessGoal::BuildMuscle => &[Strength, Hypertrophy],
        FitnessGoal::Strength => &[Strength],
        FitnessGoal::Endurance => &[Cardio, Hiit],
        FitnessGoal::Other => &[Strength, Cardio],
    }
}

/// Candidate exercise names for the goal's categories, deduplicated in
/// first-seen order and filtered by available equipment.
pub fn exercise_pool(goal: FitnessGoal, equipment: EquipmentAccess) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = Vec::new();
    for category in categories_for_goal(goal) {
        for exercise in category_exercises(*category) {
            if !pool.contains(&exercise.name) {
                pool.push(exercise.name);
            }
        }
    }

    match equipment {
        EquipmentAccess::None => pool.retain(|name| is_home_exercise(name)),
        EquipmentAccess::Basic => pool.retain(|name| !BASIC_EQUIPMENT_EXCLUSIONS.contains(name)),
        EquipmentAccess::Full | EquipmentAccess::Unrecognized => {}
    }
    pool
}

/// Workout type for a 1-based day number.
pub fn workout_type_for_day(day: u32, goal: FitnessGoal) -> WorkoutType {
    let even = day % 2 == 0;
    match goal {
        FitnessGoal::LoseWeight if even => WorkoutType::Hiit,
        FitnessGoal::LoseWeight => WorkoutType::Strength,
        FitnessGoal::Endurance if even => WorkoutType::Cardio,
        FitnessGoal::Endurance => WorkoutType::Hiit,
        _ if even => WorkoutType::UpperBody,
        _ => WorkoutType::LowerBody,
    }
}

pub fn day_name(day: u32) -> &'static str {
    WEEKDAYS[(day.saturating_sub(1) % 7) as usize]
}

/// Exercises per session: one per ten minutes, capped by fitness level.
pub fn exercise_count(session_minutes: u32, level: FitnessLevel) -> usize {
    ((session_minutes / 10) as usize).min(level.exercise_cap())
}

fn filter_for_workout(pool: &[&'static str], workout_type: WorkoutType) -> Vec<&'static str> {
    let excluded: &[&str] = match workout_type {
        WorkoutType::UpperBody => &UPPER_BODY_EXCLUSIONS,
        WorkoutType::LowerBody => &LOWER_BODY_EXCLUSIONS,
        _ => &[],
    };
    pool.iter()
        .copied()
        .filter(|name| !excluded.contains(name))
        .collect()
}

fn sets_for(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Beginner => "3",
        FitnessLevel::Intermediate => "3-4",
        FitnessLevel::Advanced | FitnessLevel::Unrecognized => "4-5",
    }
}

fn reps_for(goal: FitnessGoal, level: FitnessLevel) -> &'static str {
    match (goal, level) {
        (FitnessGoal::BuildMuscle, _) => "8-12",
        (FitnessGoal::Strength, _) => "4-6",
        (_, FitnessLevel::Beginner) => "10-12",
        _ => "12-15",
    }
}

fn rest_for(goal: FitnessGoal, level: FitnessLevel) -> &'static str {
    match (goal, level) {
        (FitnessGoal::Strength, _) => "2-3 minutes",
        (_, FitnessLevel::Beginner) => "30-60 seconds",
        _ => "60-90 seconds",
    }
}

fn notes_for(exercise: &str, level: FitnessLevel) -> &'static str {
    match exercise {
        "Deadlifts" => "Maintain straight back, engage core",
        "Squats" => "Keep knees behind toes, chest up",
        "Bench Press" => "Retract shoulder blades, arch back slightly",
        "Pull-ups" => "Start with assisted if needed, focus on full range",
        _ if level == FitnessLevel::Beginner => "Start with light weight, focus on form",
        _ => "Adjust weight to challenge yourself",
    }
}

fn frequency_recommendation(days: u32) -> &'static str {
    if days < 3 {
        "Consider increasing to at least 3 days per week for better results"
    } else if days > 5 {
        "Make sure to include rest days for recovery"
    } else {
        "Good workout frequency for your level"
    }
}

fn equipment_recommendation(equipment: EquipmentAccess) -> &'static str {
    match equipment {
        EquipmentAccess::None => "Consider investing in resistance bands for more exercise variety",
        _ => "",
    }
}

/// Builds weekly workout plans. Exercise selection is random: the identity
/// of the exercises picked for a day is not stable across calls, only their
/// count and constraints are.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerationService;

impl PlanGenerationService {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_plan(&self, request: &PlanRequest) -> WorkoutPlan {
        self.generate_plan_with_rng(request, &mut rand::thread_rng())
    }

    /// Same as [`generate_plan`](Self::generate_plan) but drawing from the
    /// supplied random source, so seeded callers get reproducible plans.
    #[instrument(skip(self, request, rng), fields(goal = %request.profile.goal_label))]
    pub fn generate_plan_with_rng<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> WorkoutPlan {
        let profile = &request.profile;
        let preferences = &request.preferences;

        let body = BodyMetrics {
            age: profile.age,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            gender: profile.gender,
        };
        let tdee = plan_tdee(&body, profile.fitness_level);
        let bmi = bmi(profile.weight_kg, profile.height_cm);
        let bmi_category = bmi_category(bmi);
        debug!(tdee, bmi, "Computed body metrics");

        let weekly_schedule = self.weekly_schedule(request, rng);
        info!(
            days = weekly_schedule.len(),
            "Generated weekly schedule for {} plan",
            profile.fitness_level
        );

        let injury_line = if preferences.injuries.is_empty() {
            "No injury considerations".to_string()
        } else {
            format!("Injury considerations: {}", preferences.injuries.join(", "))
        };
        let recommendations = [
            format!("Your BMI is {:.1} ({})", bmi, bmi_category),
            injury_line,
            frequency_recommendation(preferences.days_per_week).to_string(),
            equipment_recommendation(preferences.equipment).to_string(),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();

        WorkoutPlan {
            user_profile: ProfileSummary {
                age: profile.age,
                height: profile.height_cm,
                weight: profile.weight_kg,
                gender: profile.gender_label.clone(),
                bmi,
                bmi_category: bmi_category.to_string(),
                tdee,
            },
            plan_details: PlanDetails {
                goal: profile.goal_label.clone(),
                duration: PROGRAM_WEEKS,
                days_per_week: preferences.days_per_week,
                session_duration: preferences.session_minutes,
                equipment: preferences.equipment_label.clone(),
                fitness_level: profile.fitness_level_label.clone(),
            },
            weekly_schedule,
            nutrition: plan_nutrition(profile.goal, profile.weight_kg, tdee),
            recommendations,
        }
    }

    fn weekly_schedule<R: Rng + ?Sized>(&self, request: &PlanRequest, rng: &mut R) -> Vec<DaySchedule> {
        let goal = request.profile.goal;
        let level = request.profile.fitness_level;
        let minutes = request.preferences.session_minutes;

        let pool = exercise_pool(goal, request.preferences.equipment);
        let count = exercise_count(minutes, level);
        debug!(pool_size = pool.len(), count, "Prepared exercise pool");

        (1..=request.preferences.days_per_week)
            .map(|day| {
                let workout_type = workout_type_for_day(day, goal);
                let mut candidates = filter_for_workout(&pool, workout_type);
                candidates.shuffle(rng);
                candidates.truncate(count);

                DaySchedule {
                    day_number: day,
                    day_name: day_name(day).to_string(),
                    workout_type,
                    focus_areas: workout_type
                        .focus_areas()
                        .iter()
                        .map(|area| area.to_string())
                        .collect(),
                    duration_minutes: minutes,
                    exercises: candidates
                        .into_iter()
                        .map(|name| ExercisePrescription {
                            name: name.to_string(),
                            sets: sets_for(level).to_string(),
                            reps: reps_for(goal, level).to_string(),
                            rest_period: rest_for(goal, level).to_string(),
                            notes: notes_for(name, level).to_string(),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}

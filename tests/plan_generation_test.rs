mod common;

use axum::http::{Method, StatusCode};
use fitness_planner::models::parse_plan_request;
use fitness_planner::services::PlanGenerationService;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};

use common::{json_request, send, test_app};

fn lose_weight_profile() -> Value {
    json!({
        "age": 30,
        "height": 175,
        "weight": 80,
        "gender": "male",
        "goal": "lose weight",
        "fitnessLevel": "beginner"
    })
}

#[tokio::test]
async fn test_default_plan_end_to_end() {
    let app = test_app();
    let (status, plan) = send(&app, json_request(Method::POST, "/plan", &lose_weight_profile())).await;

    assert_eq!(status, StatusCode::OK);

    let details = &plan["planDetails"];
    assert_eq!(details["daysPerWeek"], 3);
    assert_eq!(details["sessionDuration"], 30);
    assert_eq!(details["duration"], 8);
    assert_eq!(details["goal"], "lose weight");
    assert_eq!(details["equipment"], "none");
    assert_eq!(details["fitnessLevel"], "beginner");

    let schedule = plan["weeklySchedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 3);
    for day in schedule {
        let exercises = day["exercises"].as_array().unwrap();
        assert!(exercises.len() <= 3, "day has {} exercises", exercises.len());
    }
    assert_eq!(schedule[0]["dayName"], "Monday");
    assert_eq!(schedule[0]["workoutType"], "Strength");
    assert_eq!(schedule[1]["workoutType"], "HIIT");

    let profile = &plan["userProfile"];
    let tdee = profile["tdee"].as_i64().unwrap();
    // 1748.75 kcal BMR at the sedentary factor, rounded.
    assert!((2098..=2099).contains(&tdee), "tdee was {}", tdee);
    assert_eq!(plan["nutrition"]["dailyCalories"].as_i64().unwrap(), tdee - 500);
    assert_eq!(plan["nutrition"]["mealFrequency"], "5-6 small meals per day");
    assert_eq!(profile["bmi"], 26.1);
    assert_eq!(profile["bmiCategory"], "Overweight");

    let recommendations = plan["recommendations"].as_array().unwrap();
    assert!(recommendations
        .iter()
        .all(|line| !line.as_str().unwrap().is_empty()));
    assert!(recommendations
        .iter()
        .any(|line| line == "Consider investing in resistance bands for more exercise variety"));
}

#[tokio::test]
async fn test_legacy_workout_path_accepts_aliases() {
    let app = test_app();
    let mut body = lose_weight_profile();
    body["goal"] = json!("build_muscle");
    body["fitnessLevel"] = json!("advanced");
    body["equipment"] = json!("full");
    body["workoutDays"] = json!(6);
    body["workoutDuration"] = json!("60");

    let (status, plan) = send(&app, json_request(Method::POST, "/api/workout", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["planDetails"]["daysPerWeek"], 6);
    assert_eq!(plan["planDetails"]["sessionDuration"], 60);
    assert_eq!(plan["planDetails"]["goal"], "build_muscle");

    let schedule = plan["weeklySchedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 6);
    for day in schedule {
        assert!(day["exercises"].as_array().unwrap().len() <= 6);
    }
    assert!(plan["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .any(|line| line == "Make sure to include rest days for recovery"));
}

#[tokio::test]
async fn test_out_of_range_days_rejected() {
    let app = test_app();
    let mut body = lose_weight_profile();
    body["daysPerWeek"] = json!(9);

    let (status, response) = send(&app, json_request(Method::POST, "/plan", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid field values");
    assert_eq!(response["details"], json!(["daysPerWeek must be between 1 and 7"]));
}

#[test]
fn test_seeded_plans_are_reproducible() {
    let request = assert_ok!(parse_plan_request(&lose_weight_profile()));
    let service = PlanGenerationService::new();

    let first = service.generate_plan_with_rng(&request, &mut StdRng::seed_from_u64(42));
    let second = service.generate_plan_with_rng(&request, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_level_and_equipment_fall_back() {
    let app = test_app();
    let mut body = lose_weight_profile();
    body["goal"] = json!("strength");
    body["fitnessLevel"] = json!("elite");
    body["equipment"] = json!("dumbbells");
    body["sessionMinutes"] = json!(120);

    let (status, plan) = send(&app, json_request(Method::POST, "/plan", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["planDetails"]["fitnessLevel"], "elite");
    assert_eq!(plan["planDetails"]["equipment"], "dumbbells");
    // Same body as the beginner example, so the same sedentary factor applies.
    let tdee = plan["userProfile"]["tdee"].as_i64().unwrap();
    assert!((2098..=2099).contains(&tdee), "tdee was {}", tdee);

    let schedule = plan["weeklySchedule"].as_array().unwrap();
    // No equipment filter: the full strength table is available.
    let names: Vec<&str> = schedule
        .iter()
        .flat_map(|day| day["exercises"].as_array().unwrap())
        .map(|exercise| exercise["name"].as_str().unwrap())
        .collect();
    assert!(names.iter().any(|name| *name != "Burpees"));
    for day in schedule {
        let exercises = day["exercises"].as_array().unwrap();
        assert!(exercises.len() <= 7);
        for exercise in exercises {
            assert_eq!(exercise["sets"], "4-5");
            assert_eq!(exercise["reps"], "4-6");
        }
    }
    assert!(plan["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .all(|line| line != "Consider investing in resistance bands for more exercise variety"));
}

#[tokio::test]
async fn test_implausible_measurements_rejected() {
    let app = test_app();
    for (field, value) in [("age", json!(1e300)), ("weight", json!(1e300)), ("height", json!(301))] {
        let mut body = lose_weight_profile();
        body[field] = value;
        let (status, response) = send(&app, json_request(Method::POST, "/plan", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} accepted", field);
        assert_eq!(response["error"], "Invalid field values");
    }

    let mut upper_edge = lose_weight_profile();
    upper_edge["goal"] = json!("build muscle");
    upper_edge["age"] = json!(150);
    upper_edge["height"] = json!(300);
    upper_edge["weight"] = json!(700);
    let (status, plan) = send(&app, json_request(Method::POST, "/plan", &upper_edge)).await;
    assert_eq!(status, StatusCode::OK);
    let tdee = plan["userProfile"]["tdee"].as_i64().unwrap();
    assert_eq!(plan["nutrition"]["dailyCalories"].as_i64().unwrap(), tdee + 250);
}

#[test]
fn test_implausible_age_fails_parsing() {
    let mut body = lose_weight_profile();
    body["age"] = json!(151);
    assert_err!(parse_plan_request(&body));
}

use anyhow::Context;
use axum::{extract::State, response::Json};
use axum_extra::extract::WithRejection;
use serde_json::Value;

use super::routes::AppState;
use crate::error::AppError;
use crate::models::{parse_plan_request, WorkoutPlan};

/// Build an 8-week workout and nutrition plan from a profile and optional
/// scheduling preferences.
pub async fn generate_plan(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, AppError>,
) -> Result<Json<WorkoutPlan>, AppError> {
    let request = parse_plan_request(&body)?;

    let service = state.plan_service.clone();
    let plan = tokio::task::spawn_blocking(move || service.generate_plan(&request))
        .await
        .context("Failed to generate workout plan")?;

    Ok(Json(plan))
}

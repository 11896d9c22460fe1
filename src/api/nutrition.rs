use anyhow::Context;
use axum::{extract::State, response::Json};
use axum_extra::extract::WithRejection;
use serde_json::Value;

use super::routes::AppState;
use crate::error::AppError;
use crate::models::{parse_nutrition_request, NutritionReport};

pub async fn calculate_nutrition(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, AppError>,
) -> Result<Json<NutritionReport>, AppError> {
    let request = parse_nutrition_request(&body)?;

    let service = state.nutrition_service.clone();
    let report = tokio::task::spawn_blocking(move || service.calculate(&request))
        .await
        .context("Failed to calculate nutrition")?;

    Ok(Json(report))
}

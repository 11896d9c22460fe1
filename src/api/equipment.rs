use axum::{extract::State, response::Json};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use super::routes::AppState;
use crate::error::AppError;
use crate::models::parse_equipment_request;

pub async fn suggest_exercises(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, AppError>,
) -> Result<Json<Value>, AppError> {
    let equipment = parse_equipment_request(&body)?;
    let exercises = state.equipment_advisor.suggest(&equipment);
    tracing::debug!(tags = equipment.len(), returned = exercises.len(), "Equipment suggestions");

    Ok(Json(json!({
        "success": true,
        "exercises": exercises
    })))
}

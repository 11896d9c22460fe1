use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};

use super::routes::AppState;
use crate::error::AppError;
use crate::models::{coerce_progress_metrics, ProgressEntry, ProgressMetricsInput, ProgressQuery, TimeRange};

/// List progress entries, newest first, optionally limited to `week`,
/// `month` or `year`.
pub async fn get_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Json<Vec<ProgressEntry>> {
    let range = TimeRange::from_query(query.range.as_deref());
    Json(state.progress_store.list(range).await)
}

pub async fn record_progress(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<ProgressMetricsInput>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let metrics = coerce_progress_metrics(&input);
    let entry = state.progress_store.append(metrics).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn reset_progress(State(state): State<AppState>) -> Json<Value> {
    state.progress_store.reset().await;
    Json(json!({ "message": "Progress data reset" }))
}

/// Replace the log with a month of generated sample data.
pub async fn generate_demo(State(state): State<AppState>) -> Json<Value> {
    let count = state.progress_store.generate_demo().await;
    Json(json!({
        "message": "Demo data generated",
        "count": count
    }))
}

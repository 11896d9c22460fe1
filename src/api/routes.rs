use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::equipment::suggest_exercises;
use super::health::health_check;
use super::middleware::cors_layer;
use super::nutrition::calculate_nutrition;
use super::plan_generation::generate_plan;
use super::progress::{generate_demo, get_progress, record_progress, reset_progress};
use crate::services::{EquipmentAdvisor, NutritionService, PlanGenerationService, ProgressStore};

/// Shared handler state. The progress store is the only mutable part; every
/// clone of the state points at the same log.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub plan_service: PlanGenerationService,
    pub nutrition_service: NutritionService,
    pub progress_store: ProgressStore,
    pub equipment_advisor: EquipmentAdvisor,
}

fn core_routes() -> Router<AppState> {
    Router::new()
        .route("/plan", post(generate_plan))
        .route("/nutrition", post(calculate_nutrition))
        .route("/progress", get(get_progress).post(record_progress))
        .route("/progress/reset", delete(reset_progress))
        .route("/progress/demo", post(generate_demo))
        .route("/equipment-suggestions", post(suggest_exercises))
}

pub fn create_routes(state: AppState) -> Router {
    // Older clients only know these paths.
    let api = core_routes()
        .route("/workout", post(generate_plan))
        .route("/nutrition/calculate", post(calculate_nutrition))
        .route("/workout-suggestions", post(suggest_exercises));

    Router::new()
        .route("/health", get(health_check))
        .merge(core_routes())
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}

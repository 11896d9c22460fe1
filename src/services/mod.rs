// Business logic services

pub mod exercise_catalog;
pub mod metabolic_service;
pub mod nutrition_service;
pub mod plan_generation_service;
pub mod progress_service;
pub mod equipment_service;

pub use equipment_service::EquipmentAdvisor;
pub use metabolic_service::{BmrFormula, BodyMetrics, HarrisBenedict, MifflinStJeor};
pub use nutrition_service::NutritionService;
pub use plan_generation_service::PlanGenerationService;
pub use progress_service::ProgressStore;

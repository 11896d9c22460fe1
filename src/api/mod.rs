// HTTP surface: routers and handlers

pub mod health;
pub mod middleware;
pub mod routes;
pub mod plan_generation;
pub mod nutrition;
pub mod progress;
pub mod equipment;

pub use routes::{create_routes, AppState};

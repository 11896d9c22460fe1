// Request/response types and boundary validation

pub mod user_profile;
pub mod exercise;
pub mod workout_plan;
pub mod nutrition;
pub mod progress;
pub mod validation;

pub use user_profile::*;
pub use exercise::*;
pub use workout_plan::*;
pub use nutrition::*;
pub use progress::*;
pub use validation::*;

// Application configuration

pub mod app;

pub use app::AppConfig;

use std::sync::OnceLock;

static INTERNAL_ERROR_DETAILS: OnceLock<bool> = OnceLock::new();

impl AppConfig {
    /// Record whether 500 responses may carry the underlying error message.
    /// Only the first call takes effect.
    pub fn install_error_policy(&self) {
        let _ = INTERNAL_ERROR_DETAILS.set(!self.is_production());
    }
}

/// Whether internal error messages may be echoed to clients. Hidden unless a
/// non-production configuration has been installed.
pub fn expose_internal_errors() -> bool {
    INTERNAL_ERROR_DETAILS.get().copied().unwrap_or(false)
}

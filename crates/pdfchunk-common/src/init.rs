//! Process-wide initialization

use std::sync::Once;

static INIT: Once = Once::new();

/// Load `.env` into the process environment
///
/// Runs once per process; later calls are no-ops. A missing `.env` file is
/// not an error.
pub fn initialize_environment() {
    INIT.call_once(|| {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded environment file");
        }
    });
}

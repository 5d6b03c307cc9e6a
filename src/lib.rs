pub mod authorization;
pub mod config;
pub mod db;
pub mod models;
pub mod workflow;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding application. Safe to call more than
/// once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

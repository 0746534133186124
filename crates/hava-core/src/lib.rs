pub mod app;
pub mod config;
pub mod error;
pub mod op_state;

pub use app::App;
pub use config::{Config, LocationConfig, UiConfig, ValidationResult};
pub use error::{AppError, ConfigError, LocationFailure};
pub use op_state::OpState;

use anyhow::Result;

/// Initialize logging. Safe to call more than once; later calls are no-ops.
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    tracing::info!("Hava core initialized");
    Ok(())
}

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::{Config, ConfigError};

/// Application lifecycle: owns the validated configuration shared by the
/// screen and the location services
pub struct App {
    config: Arc<Config>,
}

impl App {
    /// Create a new application instance from the user config file
    pub fn new() -> Result<Self> {
        let (config, _) = Config::load_validated()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Create an application instance from an explicit config file
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_config(Config::load_from(path)?)
    }

    /// Wrap an already-loaded configuration, rejecting invalid ones
    pub fn from_config(config: Config) -> Result<Self> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }
        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        tracing::info!("Application initialized (config dir: {})", config.config_dir.display());
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_accepts_default() {
        let app = App::from_config(Config::default()).unwrap();
        assert_eq!(app.config().ui.default_city, "İstanbul");
    }

    #[test]
    fn from_config_rejects_invalid() {
        let mut config = Config::default();
        config.location.geocode_timeout_secs = 0;
        let err = App::from_config(config).err().unwrap();
        assert!(err.to_string().contains("geocode_timeout_secs"));
    }

    #[test]
    fn from_path_creates_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::from_path(&path).unwrap();
        assert!(path.exists());
        app.shutdown().unwrap();
    }
}

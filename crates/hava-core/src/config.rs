use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_USER_AGENT: &str = "Hava/0.1.0";
pub const DEFAULT_CITY: &str = "İstanbul";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Device location and reverse geocoding
    #[serde(default)]
    pub location: LocationConfig,

    /// Screen preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Whether the foreground location permission is granted.
    /// Desktop builds have no OS prompt, so the answer lives here.
    #[serde(default = "default_permission_granted")]
    pub permission_granted: bool,

    /// Fixed device position. Leaving either coordinate unset makes the
    /// position unavailable.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Reverse geocoding endpoint (Nominatim compatible)
    #[serde(default = "default_geocoder_url")]
    pub geocoder_url: String,

    /// User-Agent sent to the geocoder; Nominatim rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on position acquisition
    #[serde(default = "default_position_timeout")]
    pub position_timeout_secs: u64,

    /// Upper bound on reverse geocoding
    #[serde(default = "default_geocode_timeout")]
    pub geocode_timeout_secs: u64,
}

fn default_permission_granted() -> bool {
    true
}

fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_position_timeout() -> u64 {
    5
}

fn default_geocode_timeout() -> u64 {
    10
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            permission_granted: default_permission_granted(),
            latitude: Some(41.0082),
            longitude: Some(28.9784),
            geocoder_url: default_geocoder_url(),
            user_agent: default_user_agent(),
            position_timeout_secs: default_position_timeout(),
            geocode_timeout_secs: default_geocode_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// City shown before any search or location lookup
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_city: default_city(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hava");

        Self {
            config_dir,
            location: LocationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, creating the
    /// default file if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating the default file
    /// there if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let mut config = Self::default();
            if let Some(parent) = config_path.parent() {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        let loc = &self.location;

        self.validate_url(&loc.geocoder_url, "location.geocoder_url", &mut result);

        if let Some(lat) = loc.latitude {
            if !(-90.0..=90.0).contains(&lat) {
                result.add_error("location.latitude", "Latitude must be within -90..90");
            }
        }
        if let Some(lon) = loc.longitude {
            if !(-180.0..=180.0).contains(&lon) {
                result.add_error("location.longitude", "Longitude must be within -180..180");
            }
        }
        if loc.latitude.is_some() != loc.longitude.is_some() {
            result.add_warning(
                "location",
                "Only one coordinate is set; device position will be unavailable",
            );
        }

        for (field, secs) in [
            ("location.position_timeout_secs", loc.position_timeout_secs),
            ("location.geocode_timeout_secs", loc.geocode_timeout_secs),
        ] {
            if secs == 0 {
                result.add_error(field, "Timeout must be greater than 0");
            } else if secs > 60 {
                result.add_warning(field, "Timeout is unusually long (>60s)");
            }
        }

        if loc.user_agent.trim().is_empty() {
            result.add_warning(
                "location.user_agent",
                "Empty User-Agent; public geocoders may refuse requests",
            );
        }

        if self.ui.default_city.trim().is_empty() {
            result.add_error("ui.default_city", "Default city must not be blank");
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("hava");

        Ok(config_dir.join("config.toml"))
    }
}

//! Handles settings for the application. Configuration is read from
//! `settings.toml` (or the file given with `--config`) and overridden by
//! `WIPGAUGE__*` environment variables, e.g. `WIPGAUGE__APP__LEVEL=debug`.
//!
//! ```toml
//! [app]
//! level = "info"
//!
//! [[rates]]
//! role = "PARTNER"
//! hourly_rate = 450.0
//! effective_from = "2025-01-01T00:00:00Z"
//! ```
use chrono::{DateTime, Utc};
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use engine::{Dollars, Rate, Role};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_SETTINGS_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateSetting {
    pub role: String,
    pub hourly_rate: f64,
    pub effective_from: DateTime<Utc>,
}

impl RateSetting {
    pub fn to_rate(&self) -> Result<Rate> {
        let role = Role::try_from(self.role.as_str())?;
        Ok(Rate::new(
            role,
            Dollars::new(self.hourly_rate),
            self.effective_from,
        )?)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub rates: Vec<RateSetting>,
}

impl Settings {
    /// Load settings from `path` (the default file is optional).
    pub fn new(path: Option<&str>) -> std::result::Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name(DEFAULT_SETTINGS_PATH).required(false),
        };
        Self::from_builder(Config::builder().add_source(file))
    }

    fn from_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> std::result::Result<Self, ConfigError> {
        builder
            .add_source(Environment::with_prefix("WIPGAUGE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// The configured rate card entries, validated.
    pub fn rates(&self) -> Result<Vec<Rate>> {
        self.rates.iter().map(RateSetting::to_rate).collect()
    }
}

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::registry::{BoroughRegistry, LONDON_BOROUGHS};
use crate::error::Result;
use crate::models::ReferencePoint;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineSettings,
    /// Borough display names; the London boroughs when absent
    #[serde(default)]
    pub boroughs: Option<Vec<String>>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_reference_latitude")]
    pub reference_latitude: f64,
    #[serde(default = "default_reference_longitude")]
    pub reference_longitude: f64,
    #[serde(default = "default_attraction_radius_km")]
    pub attraction_radius_km: f64,
    #[serde(default = "default_garden_terms")]
    pub garden_terms: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            reference_latitude: default_reference_latitude(),
            reference_longitude: default_reference_longitude(),
            attraction_radius_km: default_attraction_radius_km(),
            garden_terms: default_garden_terms(),
        }
    }
}

impl EngineSettings {
    pub fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::new(self.reference_latitude, self.reference_longitude)
    }
}

fn default_reference_latitude() -> f64 { ReferencePoint::CENTRAL_LONDON.latitude }
fn default_reference_longitude() -> f64 { ReferencePoint::CENTRAL_LONDON.longitude }
fn default_attraction_radius_km() -> f64 { 1.0 }
fn default_garden_terms() -> Vec<String> {
    vec!["garden".to_string(), "terrace".to_string(), "balcony".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LISTINGS__)
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LISTINGS__ENGINE__ATTRACTION_RADIUS_KM -> engine.attraction_radius_km
            .add_source(
                Environment::with_prefix("LISTINGS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("LISTINGS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse settings from an in-memory TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Build the borough registry the store is constructed with
    pub fn borough_registry(&self) -> BoroughRegistry {
        match &self.boroughs {
            Some(names) => BoroughRegistry::from_names(names.iter().map(String::as_str)),
            None => BoroughRegistry::from_names(LONDON_BOROUGHS.iter().copied()),
        }
    }
}

use crate::error::{FreightError, Result};
use crate::models::MatchOrder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

pub const DEFAULT_RECORDS_PATH: &str = "today_data.json";
pub const DEFAULT_ORIGIN: &str = "Khorgos";
pub const DEFAULT_TODAY_WEIGHT: u32 = 3;
pub const DEFAULT_MIN_VEHICLE_ROWS: u32 = 3;

/// Layered configuration for the pricing engine
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub records_path: ConfigValue<PathBuf>,
    pub history_path: ConfigValue<Option<PathBuf>>,
    pub cities_path: ConfigValue<Option<PathBuf>>,
    pub default_origin: ConfigValue<String>,
    pub today_weight: ConfigValue<u32>,
    pub min_vehicle_rows: ConfigValue<u32>,
    pub city_match_order: ConfigValue<MatchOrder>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            records_path: ConfigValue::new(
                PathBuf::from(DEFAULT_RECORDS_PATH),
                ConfigSource::Default,
            ),
            history_path: ConfigValue::new(None, ConfigSource::Default),
            cities_path: ConfigValue::new(None, ConfigSource::Default),
            default_origin: ConfigValue::new(DEFAULT_ORIGIN.to_string(), ConfigSource::Default),
            today_weight: ConfigValue::new(DEFAULT_TODAY_WEIGHT, ConfigSource::Default),
            min_vehicle_rows: ConfigValue::new(DEFAULT_MIN_VEHICLE_ROWS, ConfigSource::Default),
            city_match_order: ConfigValue::new(MatchOrder::Declaration, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| FreightError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FreightError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(records_path) = file_config.records_path {
            self.records_path.update(records_path, ConfigSource::File);
        }

        if let Some(history_path) = file_config.history_path {
            self.history_path.update(Some(history_path), ConfigSource::File);
        }

        if let Some(cities_path) = file_config.cities_path {
            self.cities_path.update(Some(cities_path), ConfigSource::File);
        }

        if let Some(origin) = file_config.default_origin {
            self.default_origin.update(origin, ConfigSource::File);
        }

        if let Some(weight) = file_config.today_weight {
            self.today_weight.update(positive("today_weight", weight)?, ConfigSource::File);
        }

        if let Some(rows) = file_config.min_vehicle_rows {
            self.min_vehicle_rows.update(positive("min_vehicle_rows", rows)?, ConfigSource::File);
        }

        if let Some(order) = file_config.city_match_order {
            self.city_match_order.update(order, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(path) = env::var("FREIGHTCAST_RECORDS_PATH") {
            self.records_path.update(PathBuf::from(path), ConfigSource::Environment);
        }

        if let Ok(path) = env::var("FREIGHTCAST_HISTORY_PATH") {
            self.history_path.update(Some(PathBuf::from(path)), ConfigSource::Environment);
        }

        if let Ok(path) = env::var("FREIGHTCAST_CITIES_PATH") {
            self.cities_path.update(Some(PathBuf::from(path)), ConfigSource::Environment);
        }

        if let Ok(origin) = env::var("FREIGHTCAST_DEFAULT_ORIGIN") {
            self.default_origin.update(origin, ConfigSource::Environment);
        }

        if let Ok(weight_str) = env::var("FREIGHTCAST_TODAY_WEIGHT") {
            match parse_positive("today_weight", &weight_str) {
                Ok(weight) => self.today_weight.update(weight, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FREIGHTCAST_TODAY_WEIGHT value '{}': expected positive integer",
                    weight_str
                ),
            }
        }

        if let Ok(rows_str) = env::var("FREIGHTCAST_MIN_VEHICLE_ROWS") {
            match parse_positive("min_vehicle_rows", &rows_str) {
                Ok(rows) => self.min_vehicle_rows.update(rows, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FREIGHTCAST_MIN_VEHICLE_ROWS value '{}': expected positive integer",
                    rows_str
                ),
            }
        }

        if let Ok(order_str) = env::var("FREIGHTCAST_CITY_MATCH_ORDER") {
            match parse_match_order(&order_str) {
                Ok(order) => self.city_match_order.update(order, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FREIGHTCAST_CITY_MATCH_ORDER value '{}': expected declaration or longest_first",
                    order_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(records_path) = overrides.records_path {
            self.records_path.update(records_path, ConfigSource::Cli);
        }

        if let Some(history_path) = overrides.history_path {
            self.history_path.update(Some(history_path), ConfigSource::Cli);
        }

        if let Some(cities_path) = overrides.cities_path {
            self.cities_path.update(Some(cities_path), ConfigSource::Cli);
        }

        if let Some(origin) = overrides.default_origin {
            self.default_origin.update(origin, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "records_path".to_string(),
            (self.records_path.value.display().to_string(), self.records_path.source),
        );

        map.insert(
            "history_path".to_string(),
            (display_optional(&self.history_path.value, "(none)"), self.history_path.source),
        );

        map.insert(
            "cities_path".to_string(),
            (display_optional(&self.cities_path.value, "(built-in)"), self.cities_path.source),
        );

        map.insert(
            "default_origin".to_string(),
            (self.default_origin.value.clone(), self.default_origin.source),
        );

        map.insert(
            "today_weight".to_string(),
            (self.today_weight.value.to_string(), self.today_weight.source),
        );

        map.insert(
            "min_vehicle_rows".to_string(),
            (self.min_vehicle_rows.value.to_string(), self.min_vehicle_rows.source),
        );

        map.insert(
            "city_match_order".to_string(),
            (format!("{:?}", self.city_match_order.value), self.city_match_order.source),
        );

        map
    }
}

/// Display form of an optional path, with `unset` standing in for none
fn display_optional(path: &Option<PathBuf>, unset: &str) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| unset.to_string())
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    records_path: Option<PathBuf>,
    history_path: Option<PathBuf>,
    cities_path: Option<PathBuf>,
    default_origin: Option<String>,
    today_weight: Option<u32>,
    min_vehicle_rows: Option<u32>,
    city_match_order: Option<MatchOrder>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub records_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    pub cities_path: Option<PathBuf>,
    pub default_origin: Option<String>,
}

fn positive(key: &str, value: u32) -> Result<u32> {
    if value == 0 {
        return Err(FreightError::ConfigInvalid {
            key: key.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}

/// Parse a positive integer setting
pub fn parse_positive(key: &str, s: &str) -> Result<u32> {
    let value = s.trim().parse::<u32>().map_err(|_| FreightError::ConfigInvalid {
        key: key.to_string(),
        reason: format!("'{}' is not a positive integer", s),
    })?;
    positive(key, value)
}

/// Parse city match order from string
pub fn parse_match_order(s: &str) -> Result<MatchOrder> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "declaration" | "table" => Ok(MatchOrder::Declaration),
        "longest_first" | "longest" => Ok(MatchOrder::LongestFirst),
        _ => Err(FreightError::ConfigInvalid {
            key: "city_match_order".to_string(),
            reason: format!("Invalid match order: {}. Use declaration or longest_first", s),
        }),
    }
}

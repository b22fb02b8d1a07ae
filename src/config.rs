use crate::error::{FarmCastError, Result};
use crate::logic::locations::known_cities;
use crate::models::{FarmingType, ReportRequest};
use dialoguer::{Input, Password, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub weatherapi: Option<WeatherApiConfig>,
    pub farm: FarmConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct WeatherApiConfig {
    pub api_key: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl WeatherApiConfig {
    /// False for an empty key or a `${VAR}` placeholder whose variable was unset
    fn has_key(&self) -> bool {
        !self.api_key.is_empty()
            && !env_var_pattern().is_some_and(|re| re.is_match(&self.api_key))
    }
}

fn env_var_pattern() -> Option<regex_lite::Regex> {
    regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").ok()
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub location: String,
    #[serde(default)]
    pub farming_type: FarmingType,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u32,
}

fn default_forecast_days() -> u32 {
    3
}

/// Which optional report sections are requested from the weather provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_enabled")]
    pub include_air_quality: bool,
    #[serde(default = "default_enabled")]
    pub include_pollen: bool,
    #[serde(default = "default_enabled")]
    pub include_astronomy: bool,
    #[serde(default = "default_enabled")]
    pub include_alerts: bool,
    #[serde(default)]
    pub include_hourly: bool,
    #[serde(default)]
    pub include_marine: bool,
    #[serde(default)]
    pub include_tides: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_air_quality: true,
            include_pollen: true,
            include_astronomy: true,
            include_alerts: true,
            include_hourly: false,
            include_marine: false,
            include_tides: false,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(FarmCastError::Config(format!(
                "Config file not found at {:?}. Run `farmcast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FarmCastError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_yaml(&config_str)?;
        config.apply_env_api_key();

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Load the config file if one exists, otherwise fall back to defaults.
    /// An explicit `--config` path that is missing is still an error.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_some() || Self::exists(None) {
            return Self::load(config_override);
        }

        tracing::info!("No config file found - using defaults");
        let mut config = Self::default();
        config.apply_env_api_key();
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| FarmCastError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Use `WEATHER_API_KEY` when the config carries no key of its own
    fn apply_env_api_key(&mut self) {
        let has_key = self
            .weatherapi
            .as_ref()
            .map(WeatherApiConfig::has_key)
            .unwrap_or(false);
        if has_key {
            return;
        }

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                let enabled = self.weatherapi.as_ref().map(|w| w.enabled).unwrap_or(true);
                self.weatherapi = Some(WeatherApiConfig {
                    api_key: key,
                    enabled,
                });
            }
        }
    }

    /// Report request for the configured farm
    pub fn report_request(&self) -> ReportRequest {
        ReportRequest {
            location: self.farm.location.clone(),
            days: self.farm.forecast_days,
            include_air_quality: self.report.include_air_quality,
            include_pollen: self.report.include_pollen,
            include_astronomy: self.report.include_astronomy,
            include_alerts: self.report.include_alerts,
            include_hourly: self.report.include_hourly,
            include_marine: self.report.include_marine,
            include_tides: self.report.include_tides,
            farming_type: self.farm.farming_type,
        }
    }

    /// The API key to use, if the provider is configured and enabled
    pub fn api_key(&self) -> Option<&str> {
        self.weatherapi
            .as_ref()
            .filter(|w| w.enabled && w.has_key())
            .map(|w| w.api_key.as_str())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("farmcast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/farmcast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FarmCastError::Config("Cannot determine config directory".into()))?
            .join("farmcast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up FarmCast!");
        println!();

        // --- Farm ---
        println!("Farm");
        println!("  Known cities: {}", known_cities().join(", "));
        let location: String = Input::new()
            .with_prompt("  City (e.g. Lagos, Abuja, Kano)")
            .default("Lagos".into())
            .interact_text()
            .map_err(|e| FarmCastError::Config(format!("Input error: {}", e)))?;

        let labels: Vec<&str> = FarmingType::ALL.iter().map(|t| t.as_str()).collect();
        let default_index = FarmingType::ALL
            .iter()
            .position(|t| *t == FarmingType::default())
            .unwrap_or(0);
        let selection = Select::new()
            .with_prompt("  Farming type")
            .items(&labels)
            .default(default_index)
            .interact()
            .map_err(|e| FarmCastError::Config(format!("Input error: {}", e)))?;
        let farming_type = FarmingType::ALL[selection];

        let forecast_days: u32 = Input::new()
            .with_prompt("  Forecast days (1-14)")
            .default(3)
            .interact_text()
            .map_err(|e| FarmCastError::Config(format!("Input error: {}", e)))?;

        println!();

        // --- WeatherAPI (optional) ---
        println!("WeatherAPI.com (leave blank to use ${{{}}} or offline fallback)", API_KEY_ENV);
        let api_key: String = Password::new()
            .with_prompt("  API key")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| FarmCastError::Config(format!("Input error: {}", e)))?;

        let weatherapi = if api_key.is_empty() {
            None
        } else {
            Some(WeatherApiConfig {
                api_key,
                enabled: true,
            })
        };

        println!();

        let config = Config {
            weatherapi,
            farm: FarmConfig {
                location,
                farming_type,
                forecast_days: forecast_days.clamp(1, 14),
            },
            report: ReportConfig::default(),
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| FarmCastError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# FarmCast Configuration\n# Generated by `farmcast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let Some(re) = env_var_pattern() else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weatherapi: None,
            farm: FarmConfig {
                location: "Lagos".into(),
                farming_type: FarmingType::Mixed,
                forecast_days: default_forecast_days(),
            },
            report: ReportConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_yaml_with_defaults() {
        let config = Config::from_yaml("farm:\n  location: Kano\n").unwrap();
        assert_eq!(config.farm.location, "Kano");
        assert_eq!(config.farm.farming_type, FarmingType::Mixed);
        assert_eq!(config.farm.forecast_days, 3);
        assert!(config.report.include_air_quality);
        assert!(!config.report.include_hourly);
        assert!(config.weatherapi.is_none());
    }

    #[test]
    fn parses_full_yaml() {
        let yaml = r#"
weatherapi:
  api_key: abc123
  enabled: false
farm:
  location: Port Harcourt
  farming_type: aquaculture
  forecast_days: 7
report:
  include_marine: true
  include_tides: true
  include_pollen: false
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.farm.farming_type, FarmingType::Aquaculture);
        assert_eq!(config.farm.forecast_days, 7);
        assert!(config.report.include_marine);
        assert!(config.report.include_tides);
        assert!(!config.report.include_pollen);
        assert!(config.report.include_alerts);
        // Disabled provider yields no key
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn report_request_follows_config() {
        let yaml = "farm:\n  location: Sokoto\n  farming_type: animals\n  forecast_days: 5\nreport:\n  include_hourly: true\n";
        let req = Config::from_yaml(yaml).unwrap().report_request();
        assert_eq!(req.location, "Sokoto");
        assert_eq!(req.farming_type, FarmingType::Animals);
        assert_eq!(req.days, 5);
        assert!(req.include_hourly);
        assert!(req.include_air_quality);
    }

    #[test]
    fn rejects_unknown_farming_type() {
        let yaml = "farm:\n  location: Jos\n  farming_type: orchard\n";
        assert!(matches!(
            Config::from_yaml(yaml),
            Err(FarmCastError::Config(_))
        ));
    }

    #[test]
    fn substitutes_env_vars() {
        std::env::set_var("FARMCAST_TEST_CITY", "Calabar");
        let config = Config::from_yaml("farm:\n  location: ${FARMCAST_TEST_CITY}\n").unwrap();
        assert_eq!(config.farm.location, "Calabar");
    }

    #[test]
    fn api_key_requires_enabled_and_non_empty() {
        let mut config = Config::default();
        assert_eq!(config.api_key(), None);

        config.weatherapi = Some(WeatherApiConfig {
            api_key: String::new(),
            enabled: true,
        });
        assert_eq!(config.api_key(), None);

        config.weatherapi = Some(WeatherApiConfig {
            api_key: "key".into(),
            enabled: true,
        });
        assert_eq!(config.api_key(), Some("key"));
    }

    #[test]
    fn unresolved_placeholder_key_defers_to_env() {
        std::env::remove_var("FARMCAST_TEST_UNSET_KEY");
        let yaml = "weatherapi:\n  api_key: ${FARMCAST_TEST_UNSET_KEY}\nfarm:\n  location: Lagos\n";
        let mut config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.api_key(), None);

        std::env::set_var(API_KEY_ENV, "env-key");
        config.apply_env_api_key();
        assert_eq!(config.api_key(), Some("env-key"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = WeatherApiConfig {
            api_key: "super-secret".into(),
            enabled: true,
        };
        let debug = format!("{:?}", cfg);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}

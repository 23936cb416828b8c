//! Configuration loader and validator for the QuICC console.
//! Every section is optional; missing keys fall back to their defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use quicc::backend::full_simulator::DEFAULT_MAX_SIMULATED_WIDTH;
use quicc::types::constants::{MAX_INPUT_WIDTH, MIN_INPUT_WIDTH};

// ------------------------------------------------------------------------------------------------
// Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Limits and randomness of the full simulator
    pub simulator: SimulatorConfig,
    /// Log switch and destination
    pub logging: LoggingConfig,
    /// Console presentation
    pub display: DisplayConfig,
}

/// Settings for the state-vector simulator
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Widest search space (in bits) the simulator will accept
    pub max_input_width: u32,
    /// Fixed RNG seed for reproducible measurements; random when absent
    pub seed: Option<u64>,
    /// Refuse runs whose state vector exceeds the available memory
    pub check_memory: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_input_width: DEFAULT_MAX_SIMULATED_WIDTH,
            seed: None,
            check_memory: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Append log lines to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Print the welcome banner at start-up
    pub banner: bool,
    /// Show a spinner on the terminal while a backend runs
    pub progress: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            banner: true,
            progress: true,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Reads and validates a TOML configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml_str(&config_str)
    }

    /// Loads `path` when given, otherwise returns the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let width = self.simulator.max_input_width;
        if !(MIN_INPUT_WIDTH..=MAX_INPUT_WIDTH).contains(&width) {
            return Err(ConfigError::ValidationError(format!(
                "simulator.max_input_width must be between {} and {}, got {}",
                MIN_INPUT_WIDTH, MAX_INPUT_WIDTH, width
            )));
        }
        if let Some(path) = &self.logging.log_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError("logging.log_file must not be empty".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.simulator.max_input_width, DEFAULT_MAX_SIMULATED_WIDTH);
        assert!(config.display.banner);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            r#"
            [simulator]
            seed = 7

            [logging]
            enabled = true
            log_file = "quicc.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.simulator.seed, Some(7));
        assert_eq!(config.simulator.max_input_width, DEFAULT_MAX_SIMULATED_WIDTH);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.log_file, Some(PathBuf::from("quicc.log")));
    }

    #[test]
    fn test_rejects_out_of_range_width() {
        let result = Config::from_toml_str("[simulator]\nmax_input_width = 63\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
        let result = Config::from_toml_str("[simulator]\nmax_input_width = 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = Config::from_toml_str("[simulator]\nmax_qubits = 5\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("quicc-config-{}.toml", std::process::id()));
        fs::write(&path, "[display]\nbanner = false\n").unwrap();
        let config = Config::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!config.display.banner);
        assert!(config.display.progress);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = Config::load(Path::new("/nonexistent/quicc.toml"));
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }
}

//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub serial: SerialConfig,
    pub replay: ReplayConfig,
    pub generator: GeneratorConfig,
}

/// Serial port configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SerialConfig {
    /// Device paths to try, in order of preference
    #[serde(default = "default_ports")]
    pub ports: Vec<String>,

    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
}

/// Replay pacing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ReplayConfig {
    /// Slack in milliseconds before a late sample is dropped
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,
}

/// Synthetic telemetry generator configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Seconds each axis takes for its 360-degree sweep
    #[serde(default = "default_sweep_duration_secs")]
    pub sweep_duration_secs: u32,

    /// Samples emitted per second
    #[serde(default = "default_steps_per_second")]
    pub steps_per_second: u32,
}

// Default value functions
fn default_ports() -> Vec<String> {
    vec!["/dev/ttyUSB0".to_string(), "/dev/ttyACM0".to_string()]
}
fn default_baud_rate() -> u32 { 115_200 }

fn default_grace_ms() -> u64 { 500 }

fn default_sweep_duration_secs() -> u32 { 10 }
fn default_steps_per_second() -> u32 { 10 }

impl Default for Config {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            replay: ReplayConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            ports: default_ports(),
            baud_rate: default_baud_rate(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { grace_ms: default_grace_ms() }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sweep_duration_secs: default_sweep_duration_secs(),
            steps_per_second: default_steps_per_second(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot drive a session
    fn validate(&self) -> Result<()> {
        if self.serial.ports.is_empty() {
            return Err(toml::de::Error::custom("serial.ports must not be empty").into());
        }
        if self.serial.baud_rate == 0 {
            return Err(toml::de::Error::custom("serial.baud_rate must be nonzero").into());
        }
        if self.generator.sweep_duration_secs == 0 {
            return Err(toml::de::Error::custom("generator.sweep_duration_secs must be nonzero").into());
        }
        if self.generator.steps_per_second == 0 {
            return Err(toml::de::Error::custom("generator.steps_per_second must be nonzero").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FdaiReplayError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.serial.ports, vec!["/dev/ttyUSB0", "/dev/ttyACM0"]);
        assert_eq!(config.serial.baud_rate, 115_200);
        assert_eq!(config.replay.grace_ms, 500);
        assert_eq!(config.generator.sweep_duration_secs, 10);
        assert_eq!(config.generator.steps_per_second, 10);
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [serial]
            ports = ["/dev/ttyS1"]
            baud_rate = 9600

            [replay]
            grace_ms = 250

            [generator]
            sweep_duration_secs = 5
            steps_per_second = 20
            "#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.serial.ports, vec!["/dev/ttyS1"]);
        assert_eq!(config.serial.baud_rate, 9600);
        assert_eq!(config.replay.grace_ms, 250);
        assert_eq!(config.generator.sweep_duration_secs, 5);
        assert_eq!(config.generator.steps_per_second, 20);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file = write_config(
            r#"
            [replay]
            grace_ms = 1000
            "#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.replay.grace_ms, 1000);
        assert_eq!(config.serial.baud_rate, 115_200);
        assert_eq!(config.generator.steps_per_second, 10);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let file = write_config("not [valid toml");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, FdaiReplayError::Config(_)));
    }

    #[test]
    fn test_zero_steps_per_second_is_rejected() {
        let file = write_config(
            r#"
            [generator]
            steps_per_second = 0
            "#,
        );
        let err = Config::load(file.path()).unwrap_err();
        match err {
            FdaiReplayError::Config(e) => {
                assert!(e.to_string().contains("steps_per_second"));
            }
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_port_list_is_rejected() {
        let file = write_config(
            r#"
            [serial]
            ports = []
            "#,
        );
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, FdaiReplayError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load("/nonexistent/fdai-replay.toml").unwrap_err();
        assert!(matches!(err, FdaiReplayError::Io(_)));
    }
}

//! Scan configuration: file, environment and defaults

use crate::error::{Result, ScanError};
use piiscan_pii::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Column names in the input CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_record_id_column")]
    pub record_id_column: String,

    #[serde(default = "default_data_column")]
    pub data_column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            record_id_column: default_record_id_column(),
            data_column: default_data_column(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ScanConfig {
    /// Load from a TOML (`.toml`) or YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ScanError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents)
                .map_err(|e| ScanError::Config(format!("Invalid TOML in {}: {}", path.display(), e)))?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)
                .map_err(|e| ScanError::Config(format!("Invalid YAML in {}: {}", path.display(), e)))?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("PIISCAN_OUTPUT") {
            self.output.path = val;
        }

        if let Ok(val) = std::env::var("PIISCAN_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("PIISCAN_COMBINATION_THRESHOLD") {
            match val.parse::<usize>() {
                Ok(threshold) => self.classifier.combination_threshold = threshold,
                Err(_) => eprintln!(
                    "Warning: Invalid PIISCAN_COMBINATION_THRESHOLD '{}', using {}",
                    val, self.classifier.combination_threshold
                ),
            }
        }

        if let Ok(val) = std::env::var("PIISCAN_REDACTION_MARKER") {
            self.classifier.redaction_marker = val;
        }
    }

    /// Output path with `~` expanded
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output.path).into_owned())
    }

    pub fn log_level(&self) -> Level {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

fn default_record_id_column() -> String {
    "record_id".to_string()
}

fn default_data_column() -> String {
    "data_json".to_string()
}

fn default_output_path() -> String {
    "redacted_output.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();

        assert_eq!(config.input.record_id_column, "record_id");
        assert_eq!(config.input.data_column, "data_json");
        assert_eq!(config.output.path, "redacted_output.csv");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.classifier, ClassifierConfig::default());
    }

    #[test]
    fn test_from_toml_file() {
        let file = write_config(
            ".toml",
            r#"
[input]
data_column = "payload"

[output]
path = "clean.csv"

[classifier]
combination_threshold = 3
"#,
        );

        let config = ScanConfig::from_file(file.path()).unwrap();

        assert_eq!(config.input.record_id_column, "record_id");
        assert_eq!(config.input.data_column, "payload");
        assert_eq!(config.output.path, "clean.csv");
        assert_eq!(config.classifier.combination_threshold, 3);
        assert_eq!(config.classifier.redaction_marker, "[REDACTED_PII]");
    }

    #[test]
    fn test_from_yaml_file() {
        let file = write_config(
            ".yaml",
            "logging:\n  level: debug\nclassifier:\n  redaction_marker: \"<pii>\"\n",
        );

        let config = ScanConfig::from_file(file.path()).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.log_level(), Level::DEBUG);
        assert_eq!(config.classifier.redaction_marker, "<pii>");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let file = write_config(".toml", "[classifier\ncombination_threshold = ");
        let err = ScanConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));

        let err = ScanConfig::from_file("/nonexistent/piiscan.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let mut config = ScanConfig::default();
        config.logging.level = "LOUD".to_string();
        assert_eq!(config.log_level(), Level::INFO);

        config.logging.level = "WARN".to_string();
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn test_output_path_expands_tilde() {
        let mut config = ScanConfig::default();
        config.output.path = "~/redacted.csv".to_string();

        let path = config.output_path();
        assert!(!path.starts_with("~"));
        assert!(path.ends_with("redacted.csv"));
    }

    #[test]
    #[serial_test::serial]
    fn test_merge_env_overrides() {
        unsafe {
            std::env::set_var("PIISCAN_OUTPUT", "/tmp/env-output.csv");
            std::env::set_var("PIISCAN_COMBINATION_THRESHOLD", "4");
            std::env::set_var("PIISCAN_REDACTION_MARKER", "***");
        }

        let mut config = ScanConfig::default();
        config.merge_env();

        assert_eq!(config.output.path, "/tmp/env-output.csv");
        assert_eq!(config.classifier.combination_threshold, 4);
        assert_eq!(config.classifier.redaction_marker, "***");

        unsafe {
            std::env::remove_var("PIISCAN_OUTPUT");
            std::env::remove_var("PIISCAN_COMBINATION_THRESHOLD");
            std::env::remove_var("PIISCAN_REDACTION_MARKER");
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_merge_env_ignores_invalid_threshold() {
        unsafe {
            std::env::set_var("PIISCAN_COMBINATION_THRESHOLD", "many");
        }

        let mut config = ScanConfig::default();
        config.merge_env();
        assert_eq!(config.classifier.combination_threshold, 2);

        unsafe {
            std::env::remove_var("PIISCAN_COMBINATION_THRESHOLD");
        }
    }
}

//! Configuration file support for medref.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/medref/config.toml`.

use crate::integrity::IntegrityConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub integrity: IntegrityConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Default rendering of CLI results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Export destination configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

fn home_dir_or_cwd() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir_or_cwd().join(rest),
        Err(_) => path.to_path_buf(),
    }
}

fn default_export_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_dir_or_cwd().join(".local/share"));
    base.join("medref").join("exports")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir_or_cwd().join(".config"));
        base.join("medref").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Default path for an export of the given file extension
    ///
    /// A leading `~` in the configured directory is the home directory.
    pub fn export_path(&self, extension: &str) -> PathBuf {
        expand_home(&self.export.dir).join(format!("medref-export.{}", extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::DanglingPolicy;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.integrity.dangling_references, DanglingPolicy::Warn);
        assert!(!config.integrity.require_all_levels);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.export.dir.ends_with("medref/exports"));
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("medref").join("config.toml");

        let mut config = Config::default();
        config.integrity.dangling_references = DanglingPolicy::Error;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.integrity, config.integrity);
        assert_eq!(loaded.output.format, OutputFormat::Json);
        assert_eq!(loaded.export.dir, config.export.dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[integrity]
require_all_levels = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.integrity.require_all_levels);
        assert_eq!(config.integrity.dangling_references, DanglingPolicy::Warn); // default
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml_str = r#"
[integrity]
dangling_references = "panic"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }

    #[test]
    fn test_export_path() {
        let mut config = Config::default();
        config.export.dir = PathBuf::from("/tmp/medref");
        assert_eq!(config.export_path("csv"), PathBuf::from("/tmp/medref/medref-export.csv"));
    }

    #[test]
    fn test_export_dir_expands_home() {
        let config: Config = toml::from_str("[export]\ndir = \"~/.local/share/medref/exports\"\n").unwrap();
        let path = config.export_path("json");
        assert!(!path.starts_with("~"), "{:?}", path);
        assert_eq!(path, home_dir_or_cwd().join(".local/share/medref/exports/medref-export.json"));

        let mut config = Config::default();
        config.export.dir = PathBuf::from("exports/~");
        assert_eq!(config.export_path("csv"), PathBuf::from("exports/~/medref-export.csv"));
    }
}

//! Configuration management for snapbite.
//!
//! Configuration is loaded from the platform config directory (or
//! `~/.snapbite/config.toml` as a fallback) with sensible defaults, so the
//! pipeline works out of the box with nothing but an `OPENAI_API_KEY`.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for snapbite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scale reference object embedded in vision prompts
    pub reference: ReferenceConfig,

    /// Analysis settings (target language)
    pub analysis: AnalysisConfig,

    /// Inference service settings
    pub inference: InferenceConfig,

    /// Analysis journal settings
    pub journal: JournalConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories, falling back to
    /// `~/.snapbite/config.toml` if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "snapbite", "snapbite")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".snapbite").join("config.toml")
            })
    }

    /// Get the resolved journal file path (with ~ expansion).
    pub fn journal_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.journal.path);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.reference.name, "AirPods Pro 2");
        assert_eq!(config.analysis.language, "English");
        assert_eq!(config.inference.timeout_ms, 60_000);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[reference]"));
        assert!(toml.contains("[inference]"));
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[reference]\nname = \"credit card\"\nlength_cm = 8.56\n\n\
             [analysis]\nlanguage = \"zh-TW\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.reference.name, "credit card");
        assert!((config.reference.length_cm - 8.56).abs() < f64::EPSILON);
        assert_eq!(config.analysis.language, "zh-TW");
        // Untouched sections keep their defaults
        assert_eq!(config.inference.vision_model, "gpt-4o-mini");
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_journal_path_expands_tilde() {
        let mut config = Config::default();
        config.journal.path = "~/meals/journal.jsonl".to_string();
        let path = config.journal_path();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("meals/journal.jsonl"));
    }
}

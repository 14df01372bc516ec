// src/config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Address the evaluation service listens on when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

const BASE_URL_VAR: &str = "CALC_API_BASE_URL";
const CONFIG_PATH_VAR: &str = "CALC_CLIENT_CONFIG";

/// Client configuration, fixed once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base address of the evaluation service. Not validated.
    pub api_base_url: String,
}

/// Optional on-disk overrides, read from `config.toml`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    /// Environment wins over the file, the file wins over defaults.
    pub fn load() -> Result<Self> {
        let file = match config_path() {
            Some(path) => FileConfig::read_optional(&path)?,
            None => None,
        };
        let env_base = std::env::var(BASE_URL_VAR).ok();
        Ok(Self::from_sources(file, env_base))
    }

    pub fn from_sources(file: Option<FileConfig>, env_base: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = file.and_then(|f| f.api_base_url) {
            config.api_base_url = base;
        }
        if let Some(base) = env_base.filter(|b| !b.trim().is_empty()) {
            config.api_base_url = base;
        }

        config
    }
}

impl FileConfig {
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads the file at `path`, returning `None` when it does not exist.
    pub fn read_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loaded config file {}", path.display());
        Self::parse(&contents).map(Some)
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("calc-client").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_service() {
        let config = AppConfig::from_sources(None, None);
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileConfig::parse(r#"api_base_url = "http://calc.internal:9000""#).unwrap();
        let from_file = AppConfig::from_sources(Some(file.clone()), None);
        assert_eq!(from_file.api_base_url, "http://calc.internal:9000");

        let from_env =
            AppConfig::from_sources(Some(file), Some("http://127.0.0.1:1234".to_string()));
        assert_eq!(from_env.api_base_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        let config = AppConfig::from_sources(None, Some("  ".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_empty_file_keeps_default() {
        let file = FileConfig::parse("").unwrap();
        let config = AppConfig::from_sources(Some(file), None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("calc-client-does-not-exist.toml");
        assert!(FileConfig::read_optional(&path).unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        assert!(FileConfig::parse("api_base_url = ").is_err());
    }
}

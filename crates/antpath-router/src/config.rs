// File: src/config.rs
// Purpose: Matcher configuration parsing from antpath.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{validate_separator, MatcherError};

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// Matcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Separator between path segments (default: "/")
    #[serde(default = "default_path_separator")]
    pub path_separator: char,

    /// Whether `{name:.+}` as last segment acts as a capturing `**` (default: true)
    #[serde(default = "default_true")]
    pub trailing_capture: bool,
}

// Default values
fn default_path_separator() -> char {
    crate::path::DEFAULT_PATH_SEPARATOR
}

fn default_true() -> bool {
    true
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            path_separator: default_path_separator(),
            trailing_capture: true,
        }
    }
}

impl MatcherConfig {
    /// Checks the values a matcher cannot be built from
    ///
    /// The separator must not be one of the pattern characters `*`, `?`,
    /// `{` or `}`.
    pub fn validate(&self) -> Result<(), MatcherError> {
        validate_separator(self.path_separator)?;
        Ok(())
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults. A separator rejected by
    /// [`MatcherConfig::validate`] is returned as that `MatcherError`, without
    /// extra context, so callers can downcast it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!("No matcher config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.matcher.validate()?;

        tracing::debug!("Loaded matcher config from {:?}: {:?}", path, config.matcher);
        Ok(config)
    }

    /// Load configuration from default path (./antpath.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("antpath.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "antpath-config-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.matcher.path_separator, '/');
        assert!(config.matcher.trailing_capture);
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
            [matcher]
            path_separator = "."
            trailing_capture = false
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.matcher.path_separator, '.');
        assert!(!config.matcher.trailing_capture);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str("[matcher]\n").unwrap();
        assert_eq!(config.matcher, MatcherConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load("/definitely/not/here/antpath.toml").unwrap();
        assert_eq!(config.matcher, MatcherConfig::default());
    }

    #[test]
    fn test_load_empty_file() {
        let path = temp_config("empty", "   \n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.matcher, MatcherConfig::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_file() {
        let path = temp_config("file", "[matcher]\npath_separator = \":\"\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.matcher.path_separator, ':');
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_validate() {
        assert!(MatcherConfig::default().validate().is_ok());

        let config = MatcherConfig {
            path_separator: '?',
            trailing_capture: true,
        };
        assert!(matches!(
            config.validate(),
            Err(MatcherError::InvalidSeparator('?'))
        ));
    }

    #[test]
    fn test_load_rejects_reserved_separator() {
        let path = temp_config("reserved", "[matcher]\npath_separator = \"*\"\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatcherError>(),
            Some(MatcherError::InvalidSeparator('*'))
        ));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_load_invalid_file() {
        let path = temp_config("invalid", "[matcher]\npath_separator = \"ab\"\n");
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        let _ = fs::remove_file(path);
    }
}

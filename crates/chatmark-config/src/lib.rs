use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How formatted messages are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with bullets, numbers and quote prefixes.
    #[default]
    Text,
    /// Pretty-printed JSON output nodes.
    Json,
}

/// Presentation options. Every field is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputFormat,
    pub bullet: String,
    pub rule_width: usize,
    pub quote_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            bullet: "•".to_string(),
            rule_width: 40,
            quote_prefix: "> ".to_string(),
        }
    }
}

impl Config {
    /// Environment variable that overrides the config file location.
    pub const PATH_ENV: &'static str = "CHATMARK_CONFIG";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$CHATMARK_CONFIG` if set, otherwise `~/.config/chatmark/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::resolve_config_path(std::env::var(Self::PATH_ENV).ok().as_deref())
    }

    fn resolve_config_path(custom: Option<&str>) -> PathBuf {
        match custom.filter(|c| !c.is_empty()) {
            Some(custom) => {
                let path = PathBuf::from(custom);
                Self::expand_path(&path).unwrap_or(path)
            }
            None => {
                let config_dir = shellexpand::tilde("~/.config/chatmark");
                PathBuf::from(config_dir.as_ref()).join("config.toml")
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_path() {
        let config_path = Config::resolve_config_path(None);
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/chatmark/config.toml"));
    }

    #[test]
    fn test_empty_override_uses_default_path() {
        assert_eq!(
            Config::resolve_config_path(Some("")),
            Config::resolve_config_path(None)
        );
    }

    #[test]
    fn test_override_config_path() {
        assert_eq!(
            Config::resolve_config_path(Some("/etc/chatmark.toml")),
            PathBuf::from("/etc/chatmark.toml")
        );
    }

    #[test]
    fn test_override_config_path_with_env_var() {
        unsafe {
            env::set_var("CHATMARK_TEST_ROOT", "/test/env/path");
        }

        let path = Config::resolve_config_path(Some("$CHATMARK_TEST_ROOT/chatmark.toml"));
        assert_eq!(path, PathBuf::from("/test/env/path/chatmark.toml"));

        unsafe {
            env::remove_var("CHATMARK_TEST_ROOT");
        }
    }

    #[test]
    fn test_override_config_path_with_tilde() {
        let path = Config::resolve_config_path(Some("~/chatmark.toml"));
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.to_string_lossy().ends_with("chatmark.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            output: OutputFormat::Json,
            bullet: "-".to_string(),
            rule_width: 12,
            quote_prefix: "| ".to_string(),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str(r#"output = "json""#).unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.bullet, "•");
        assert_eq!(config.rule_width, 40);
        assert_eq!(config.quote_prefix, "> ");
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output = \"html\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            bullet: "*".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}

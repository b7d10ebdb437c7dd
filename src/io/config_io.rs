use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid color for ui.colors.{key}: {value:?} (expected #RRGGBB)")]
    InvalidColor { key: String, value: String },
}

/// Get the default config file path, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("todo").join("config.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, the default location is used if
/// a file is there, and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                read_config(&path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.behavior.reject_duplicates);
        assert!(config.behavior.confirm_remove);
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.dir, None);
    }

    #[test]
    fn overrides_applied() {
        let config = parse_config(
            r##"[behavior]
reject_duplicates = false

[ui]
show_key_hints = false

[ui.colors]
done = "#00FF00"

[log]
level = "debug"
dir = "/tmp/todo-logs"
"##,
        )
        .unwrap();
        assert!(!config.behavior.reject_duplicates);
        assert!(config.behavior.confirm_remove);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("done").map(String::as_str), Some("#00FF00"));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.dir.as_deref(), Some("/tmp/todo-logs"));
    }

    #[test]
    fn malformed_config_is_parse_error() {
        let err = parse_config("[behavior]\nconfirm_remove = \"maybe\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn read_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[behavior]\nconfirm_remove = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.behavior.confirm_remove);
        assert!(config.behavior.reject_duplicates);
    }

    #[test]
    fn explicit_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        match err {
            ConfigError::ReadError { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ReadError, got {:?}", other),
        }
    }
}

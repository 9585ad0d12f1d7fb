//! Runtime configuration loaded from TOML
//!
//! Every field has a default, so an absent file or a partial file is valid.
//!
//! ```toml
//! [playback]
//! interval_ms = 800
//!
//! [sorting]
//! array = "64, 34, 25, 12, 22, 11, 90"
//!
//! [searching]
//! array = "12, 25, 34, 64, 22, 11, 90"
//! target = "22"
//!
//! [log]
//! file = "tracetty.log"
//! filter = "debug"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "tracetty.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub sorting: SortingConfig,
    pub searching: SearchingConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Delay between auto-play steps
    pub interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig { interval_ms: 800 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortingConfig {
    pub array: String,
}

impl Default for SortingConfig {
    fn default() -> Self {
        SortingConfig {
            array: "64, 34, 25, 12, 22, 11, 90".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchingConfig {
    pub array: String,
    pub target: String,
}

impl Default for SearchingConfig {
    fn default() -> Self {
        SearchingConfig {
            array: "12, 25, 34, 64, 22, 11, 90".to_string(),
            target: "22".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Log file; logging is off when unset
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn play_interval(&self) -> Duration {
        Duration::from_millis(self.playback.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_is_defaults() {
        let config = Config::from_toml("", Path::new("t.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.play_interval(), Duration::from_millis(800));
        assert_eq!(config.searching.target, "22");
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
            [playback]
            interval_ms = 250

            [searching]
            target = "64"
        "#;
        let config = Config::from_toml(text, Path::new("t.toml")).unwrap();
        assert_eq!(config.playback.interval_ms, 250);
        assert_eq!(config.searching.target, "64");
        assert_eq!(config.searching.array, "12, 25, 34, 64, 22, 11, 90");
        assert_eq!(config.sorting, SortingConfig::default());
    }

    #[test]
    fn test_log_section() {
        let text = r#"
            [log]
            file = "out.log"
        "#;
        let config = Config::from_toml(text, Path::new("t.toml")).unwrap();
        assert_eq!(config.log.file, Some(PathBuf::from("out.log")));
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("[playback]\nspeed = 3\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::discover(Some(Path::new("/nonexistent/tracetty.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

//! JSON configuration file.
//!
//! Read from %APPDATA%/TaskbarToggle/config.json (or an explicit path).
//! The file only supplies defaults for the CLI; it is never written.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::errors::ToggleError;
use crate::model::constants::*;
use crate::model::{StrategyKind, WindowScope};

/// Defaults read from the config file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub strategy: StrategyKind,
    /// Falls back to the strategy's own default when unset.
    pub scope: Option<WindowScope>,
    pub skip_child_windows: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: DEFAULT_STRATEGY,
            scope: None,
            skip_child_windows: false,
        }
    }
}

impl Config {
    /// Window scope for `strategy`: the CLI flag, then the file, then the
    /// strategy's own default.
    pub fn scope_for(
        &self,
        strategy: StrategyKind,
        cli_scope: Option<WindowScope>,
    ) -> WindowScope {
        cli_scope
            .or(self.scope)
            .unwrap_or_else(|| strategy.default_scope())
    }
}

/// Get config file path: %APPDATA%/TaskbarToggle/config.json
pub fn config_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata)
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load config from `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ToggleError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(event = "config.not_found", path = %path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ToggleError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&contents).map_err(|source| ToggleError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load config, returning defaults (with a warning) if it is unreadable or invalid.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            // A malformed file is the operator's to fix; an unreadable one is not.
            if e.is_user_error() {
                warn!(event = "config.load_failed", error = %e, code = e.error_code());
            } else {
                error!(event = "config.load_failed", error = %e, code = e.error_code());
            }
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.strategy, StrategyKind::Taskbar);
        assert_eq!(config.scope, None);
        assert!(!config.skip_child_windows);
        assert_eq!(
            config.scope_for(config.strategy, None),
            WindowScope::AllVisible
        );
    }

    #[test]
    fn config_parses_partial_json() {
        let config: Config = serde_json::from_str(r#"{ "strategy": "style" }"#).unwrap();
        assert_eq!(config.strategy, StrategyKind::StyleFlag);
        assert_eq!(
            config.scope_for(config.strategy, None),
            WindowScope::MainWindow
        );
    }

    #[test]
    fn explicit_scope_overrides_strategy_default() {
        let config: Config =
            serde_json::from_str(r#"{ "strategy": "style", "scope": "all" }"#).unwrap();
        assert_eq!(
            config.scope_for(StrategyKind::StyleFlag, None),
            WindowScope::AllVisible
        );
    }

    #[test]
    fn unset_scope_follows_resolved_strategy() {
        let config: Config = serde_json::from_str(r#"{ "strategy": "taskbar" }"#).unwrap();
        assert_eq!(
            config.scope_for(StrategyKind::StyleFlag, None),
            WindowScope::MainWindow
        );
        assert_eq!(
            config.scope_for(StrategyKind::Taskbar, None),
            WindowScope::AllVisible
        );
    }

    #[test]
    fn cli_scope_wins_over_file() {
        let config: Config = serde_json::from_str(r#"{ "scope": "main" }"#).unwrap();
        assert_eq!(
            config.scope_for(StrategyKind::Taskbar, Some(WindowScope::AllVisible)),
            WindowScope::AllVisible
        );
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE_FAILED");
        assert_eq!(load_config(Some(path.as_path())), Config::default());
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "skip_child_windows": true, "scope": "main" }"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert!(config.skip_child_windows);
        assert_eq!(config.strategy, StrategyKind::Taskbar);
        assert_eq!(
            config.scope_for(config.strategy, None),
            WindowScope::MainWindow
        );
    }
}

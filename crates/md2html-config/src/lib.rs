use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MD2HTML_CONFIG";

/// Telegram's message length limit.
pub const DEFAULT_MAX_CONTENT_LEN: usize = 4096;

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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Raise the log level to debug.
    #[serde(default)]
    pub debug: bool,
    /// Split replies into parts of at most this many characters; unset
    /// disables splitting. Zero is rejected at parse time.
    pub max_content_len: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            max_content_len: NonZeroUsize::new(DEFAULT_MAX_CONTENT_LEN),
        }
    }
}

impl Config {
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

    /// `$MD2HTML_CONFIG` if set, else `~/.config/md2html/config.toml`.
    pub fn config_path() -> PathBuf {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(raw) => Self::expand_path(&raw.to_string_lossy()),
            None => {
                let config_dir = shellexpand::tilde("~/.config/md2html");
                PathBuf::from(config_dir.as_ref()).join("config.toml")
            }
        }
    }

    /// Expands `~` and `$VARS`; an unset variable leaves `raw` as given.
    fn expand_path(raw: &str) -> PathBuf {
        shellexpand::full(raw)
            .map(|expanded| PathBuf::from(expanded.into_owned()))
            .unwrap_or_else(|_| PathBuf::from(raw))
    }
}

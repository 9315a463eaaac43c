use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sqltables_app::{OutputFormat, ReportOptions};
use thiserror::Error;
use tracing::debug;

pub const CONFIG_ENV_VAR: &str = "SQLTABLES_CONFIG";
const CONFIG_DIR_NAME: &str = "sqltables";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults for the report options. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub unquote: Option<bool>,
    #[serde(default)]
    pub counts: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command-line values win; switches can only turn an option on.
    pub fn resolve(&self, format: Option<OutputFormat>, unquote: bool, counts: bool) -> ReportOptions {
        ReportOptions {
            format: format.or(self.format).unwrap_or_default(),
            unquote: unquote || self.unquote.unwrap_or(false),
            counts: counts || self.counts.unwrap_or(false),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the config from `explicit`, then `$SQLTABLES_CONFIG`, then the user
/// config directory. Only the last may be missing.
pub fn load_config(explicit: Option<PathBuf>) -> Result<ConfigFile, ConfigError> {
    let explicit = explicit.or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
    load_config_from(explicit.as_deref(), default_config_path().as_deref())
}

pub fn load_config_from(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return ConfigFile::load(path);
    }

    match fallback {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading config");
            ConfigFile::load(path)
        }
        _ => Ok(ConfigFile::default()),
    }
}

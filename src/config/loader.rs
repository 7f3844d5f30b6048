use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result of config initialization
#[derive(Debug, PartialEq, Eq)]
pub enum InitResult {
    /// Config was created at the given path
    Created(PathBuf),
    /// Config already existed at the given path
    AlreadyExists(PathBuf),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file path (`$XDG_CONFIG_HOME/barweather/config.toml`)
    pub fn default_path() -> PathBuf {
        if let Some(dir) = dirs::config_dir() {
            dir.join("barweather").join("config.toml")
        } else {
            PathBuf::from(".config/barweather/config.toml")
        }
    }

    /// Pick the override if given, otherwise the default location
    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path)
    }

    /// Load configuration. A missing file yields defaults; a broken one is an error.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = Self::resolve_path(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validate a config file. Unlike `load`, the file must exist.
    pub fn check(path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = Self::resolve_path(path);

        if !path.exists() {
            return Err(ConfigError::Missing(path));
        }

        Self::load_from_path(&path)
    }

    /// Create the default config file if none exists
    pub fn init(path: Option<&Path>) -> Result<InitResult, ConfigError> {
        let path = Self::resolve_path(path);

        if path.exists() {
            return Ok(InitResult::AlreadyExists(path));
        }

        Config::default().save(&path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(InitResult::Created(path))
    }
}

impl Config {
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = self.to_toml()?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

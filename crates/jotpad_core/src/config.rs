//! Runtime configuration.
//!
//! # Responsibility
//! - Parse the optional TOML configuration file.
//! - Merge command-line overrides on top and validate the result.
//!
//! # Invariants
//! - Every field has a default; an empty file is a valid configuration.
//! - `log_level` is normalized to `trace|debug|info|warn|error`.
//! - `log_dir`, when set, is absolute.

use crate::controller::AbandonPolicy;
use crate::logging::{default_log_level, normalize_level};
use crate::theme::ThemeState;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    InvalidLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidLevel(_) | Self::RelativeLogDir(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Effective widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub log_level: String,
    /// Logging stays disabled when unset.
    pub log_dir: Option<PathBuf>,
    pub start_dark: bool,
    pub abandon_policy: AbandonPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            start_dark: false,
            abandon_policy: AbandonPolicy::Discard,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub start_dark: bool,
    pub restore_abandoned_edits: bool,
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validated()
    }

    /// Reads and validates the file at `path`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Applies command-line overrides and re-validates.
    ///
    /// Boolean flags can only switch features on.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> ConfigResult<Self> {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(dir) = overrides.log_dir {
            self.log_dir = Some(dir);
        }
        self.start_dark |= overrides.start_dark;
        if overrides.restore_abandoned_edits {
            self.abandon_policy = AbandonPolicy::Restore;
        }
        self.validated()
    }

    pub fn initial_theme(&self) -> ThemeState {
        ThemeState::new(self.start_dark)
    }

    fn validated(mut self) -> ConfigResult<Self> {
        self.log_level = normalize_level(&self.log_level)
            .map_err(ConfigError::InvalidLevel)?
            .to_string();
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(self)
    }
}

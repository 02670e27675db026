use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use intake_core::projection::DisplayOptions;
use intake_core::time::{is_valid_datetime_format, DEFAULT_DATETIME_FORMAT};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "intake";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Prefilled `takenBy` for new inquiries.
    pub taken_by: Option<String>,
    pub display: DisplayConfig,
    pub confirm: ConfirmConfig,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub datetime_format: String,
}

#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    pub deletes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            taken_by: None,
            display: DisplayConfig {
                datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            },
            confirm: ConfirmConfig { deletes: true },
        }
    }
}

impl AppConfig {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            datetime_format: self.display.datetime_format.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid display.datetime_format value: {0:?}")]
    InvalidDatetimeFormat(String),
    #[error("invalid taken_by value: cannot be blank")]
    InvalidTakenBy,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    taken_by: Option<String>,
    display: Option<DisplayFile>,
    confirm: Option<ConfirmFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayFile {
    datetime_format: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfirmFile {
    deletes: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(taken_by) = parsed.taken_by {
        let trimmed = taken_by.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidTakenBy);
        }
        config.taken_by = Some(trimmed.to_string());
    }

    if let Some(display) = parsed.display {
        if let Some(format) = display.datetime_format {
            if !is_valid_datetime_format(&format) {
                return Err(ConfigError::InvalidDatetimeFormat(format));
            }
            config.display.datetime_format = format;
        }
    }

    if let Some(confirm) = parsed.confirm {
        if let Some(deletes) = confirm.deletes {
            config.confirm.deletes = deletes;
        }
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

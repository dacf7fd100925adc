use crate::workspace::Workspace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub workspace: WorkspaceSettings,
    pub behavior: BehaviorSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorkspaceSettings {
    /// Directory git commands run in. Falls back to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BehaviorSettings {
    /// When true, write subcommands skip the confirmation gate.
    /// Blocked patterns stay blocked regardless.
    pub auto_approve_writes: bool,
    pub log_commands: bool,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("gitgate"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Err(ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Config file not found",
            )));
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self)?;

        fs::write(&path, contents)?;

        // Set permissions to 600 (owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Config {
            workspace: WorkspaceSettings { root: None },
            behavior: BehaviorSettings {
                auto_approve_writes: false,
                log_commands: true,
            },
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.workspace.root {
            if !root.is_absolute() {
                return Err(ConfigError::InvalidValue(format!(
                    "workspace.root must be an absolute path, got: {}",
                    root.display()
                )));
            }
        }

        Ok(())
    }
}

impl Workspace for Config {
    fn root(&self) -> PathBuf {
        self.workspace.root.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }

    fn auto_approve(&self) -> bool {
        self.behavior.auto_approve_writes
    }
}

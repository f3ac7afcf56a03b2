use std::path::{Path, PathBuf};

use secretscan_core::scan::filesystem::DEFAULT_MAX_FILE_SIZE;
use thiserror::Error;

pub const DEFAULT_PLUGIN_NAME: &str = "SecretScanner";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("socket path must not be empty")]
    EmptySocketPath,

    #[error("plugin name must not be empty")]
    EmptyPluginName,

    #[error("max file size must be greater than zero")]
    ZeroMaxFileSize,
}

/// Immutable runtime configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub socket_path: PathBuf,
    pub plugin_name: String,
    /// Files larger than this are skipped by the filesystem engine.
    pub max_file_size: u64,
}

impl Config {
    pub fn new(
        socket_path: impl Into<PathBuf>,
        plugin_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder(socket_path, plugin_name).max_file_size(DEFAULT_MAX_FILE_SIZE).build()
    }

    pub fn builder(
        socket_path: impl Into<PathBuf>,
        plugin_name: impl Into<String>,
    ) -> ConfigBuilder {
        ConfigBuilder {
            socket_path: socket_path.into(),
            plugin_name: plugin_name.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Stable identity of this plugin instance: `<plugin_name>-<socket_path>`.
    pub fn uid(&self) -> String {
        format!("{}-{}", self.plugin_name, self.socket_path.display())
    }
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    socket_path: PathBuf,
    plugin_name: String,
    max_file_size: u64,
}

impl ConfigBuilder {
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.socket_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptySocketPath);
        }
        let plugin_name = self.plugin_name.trim().to_string();
        if plugin_name.is_empty() {
            return Err(ConfigError::EmptyPluginName);
        }
        if self.max_file_size == 0 {
            return Err(ConfigError::ZeroMaxFileSize);
        }

        Ok(Config {
            socket_path: self.socket_path,
            plugin_name,
            max_file_size: self.max_file_size,
        })
    }
}

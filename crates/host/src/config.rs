//! Host configuration via `modhost.toml`
//!
//! The config file lists the modules to load at startup (by catalog name,
//! with their init arguments), the host's access mode and the highest module
//! API version it accepts. On first open a
//! commented default file is written; edit it and restart to change settings.

use modhost_core::ApiVersion;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::loader::SUPPORTED_API_VERSION;
use crate::{Error, Result};

/// Config file name placed in the host's working directory.
pub const CONFIG_FILE_NAME: &str = "modhost.toml";

/// Controls whether commands flagged `write` may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    /// Allow all commands (default).
    #[default]
    ReadWrite,
    /// Reject commands flagged `write`.
    ReadOnly,
}

/// One module to load at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadSpec {
    /// Catalog name of the module
    pub module: String,
    /// Initialization arguments passed to `OnLoad`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

/// Host configuration loaded from `modhost.toml`.
///
/// # Example
///
/// ```toml
/// access_mode = "read-write"
/// max_api_version = 1
///
/// [[load]]
/// module = "module1"
///
/// [[load]]
/// module = "module2"
/// args = ["verbose"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// `"read-write"` (default) or `"read-only"`.
    #[serde(default)]
    pub access_mode: AccessMode,
    /// Highest API version a module may request in `init` (default 1).
    #[serde(default = "default_max_api_version")]
    pub max_api_version: ApiVersion,
    /// Modules loaded by `Host::load_configured`, in order.
    #[serde(default, rename = "load", skip_serializing_if = "Vec::is_empty")]
    pub load: Vec<LoadSpec>,
}

fn default_max_api_version() -> ApiVersion {
    SUPPORTED_API_VERSION
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            access_mode: AccessMode::default(),
            max_api_version: default_max_api_version(),
            load: Vec::new(),
        }
    }
}

impl HostConfig {
    /// Create a read-write config with no modules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Set the highest API version modules may request.
    pub fn max_api_version(mut self, version: ApiVersion) -> Self {
        self.max_api_version = version;
        self
    }

    /// Append a module to the startup list.
    pub fn load_module<I, S>(mut self, module: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load.push(LoadSpec {
            module: module.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Check the config for errors.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_api_version` is outside
    /// `1..=SUPPORTED_API_VERSION`, a `[[load]]` entry has an empty module
    /// name, or a module is listed twice.
    pub fn validate(&self) -> Result<()> {
        if !(1..=SUPPORTED_API_VERSION).contains(&self.max_api_version) {
            return Err(Error::config(format!(
                "max_api_version must be between 1 and {}, got {}",
                SUPPORTED_API_VERSION, self.max_api_version
            )));
        }
        for (i, item) in self.load.iter().enumerate() {
            if item.module.trim().is_empty() {
                return Err(Error::config(format!("load entry {} has an empty module name", i)));
            }
            if self.load[..i].iter().any(|prev| prev.module == item.module) {
                return Err(Error::config(format!(
                    "module '{}' is listed more than once",
                    item.module
                )));
            }
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# modhost configuration
#
# Access mode: "read-write" (default) or "read-only"
#   "read-only" rejects every command registered with the "write" flag
access_mode = "read-write"

# Highest module API version accepted from init (1 is the only version)
max_api_version = 1

# Modules to load at startup, in order. Names refer to the host's catalog.
# [[load]]
# module = "module1"
#
# [[load]]
# module = "module2"
# args = ["arg1", "arg2"]
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        let config: HostConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content).map_err(|e| match e {
            Error::Config { reason } => {
                Error::config(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

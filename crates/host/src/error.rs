//! Error types for the reference host.
//!
//! Load and runtime errors from the module API are wrapped losslessly; the
//! remaining variants are raised by the host's own dispatch and config
//! handling.
//!
//! # Categories
//!
//! | Category | Variants | Description |
//! |----------|----------|-------------|
//! | Module | `Load`, `ModuleNotFound` | Loading or unloading failed |
//! | Dispatch | `UnknownCommand`, `WrongArity`, `AccessDenied` | Rejected before the handler runs |
//! | Handler | `Runtime` | Reply contract violated |
//! | Input | `InvalidInput`, `Config` | Bad request or configuration |

use modhost_core::{LoadError, RuntimeError};

/// Host errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    // ==================== Module ====================
    /// Module failed to load
    #[error(transparent)]
    Load(#[from] LoadError),

    /// No such module in the catalog or the registry
    #[error("module not found: {module}")]
    ModuleNotFound { module: String },

    // ==================== Dispatch ====================
    /// No command registered under this name
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },

    /// Argument count outside the declared arity
    #[error("wrong number of arguments for '{command}' command: got {argc}")]
    WrongArity { command: String, argc: usize },

    /// Write command on a read-only host
    #[error("command '{command}' not allowed on a read-only host")]
    AccessDenied { command: String },

    // ==================== Handler ====================
    /// Handler broke the exactly-one-reply contract or failed after replying
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    // ==================== Input ====================
    /// Malformed request
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Configuration could not be read or is invalid
    #[error("config error: {reason}")]
    Config { reason: String },
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a config error.
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }
}

//! Error types for the module API
//!
//! Two error families:
//! - [`LoadError`]: a module could not be registered. Fatal to the load
//!   attempt; the host decides whether to retry.
//! - [`RuntimeError`]: a handler did not produce a valid reply.

use thiserror::Error;

use crate::name::NameError;

/// Result type alias for load-time operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Result type alias for call-time operations
pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

/// Errors raised while a module registers itself and its commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A module with this name is already loaded
    #[error("module name already in use: {name}")]
    NameCollision {
        /// Module name
        name: String,
    },

    /// The host does not implement the requested API version
    #[error("unsupported module API version {requested} (host supports up to {supported})")]
    UnsupportedApiVersion {
        /// Version requested by the module
        requested: u32,
        /// Highest version the host supports
        supported: u32,
    },

    /// `init` was called twice in one load
    #[error("module already initialized as {name}")]
    AlreadyInitialized {
        /// Name given on the first call
        name: String,
    },

    /// A command was declared before the module called `init`
    #[error("module must call init before creating command {command}")]
    NotInitialized {
        /// Command being declared
        command: String,
    },

    /// A command with this name is already registered
    #[error("command name already in use: {command}")]
    CommandCollision {
        /// Qualified command name
        command: String,
    },

    /// Arity bounds are inconsistent
    #[error("invalid arity for {command}: first_key={first_key}, last_key={last_key}, key_step={key_step}")]
    InvalidArity {
        /// Qualified command name
        command: String,
        /// Declared first key
        first_key: i32,
        /// Declared last key
        last_key: i32,
        /// Declared key step
        key_step: i32,
    },

    /// Flag string is unknown or contradictory
    #[error("invalid flags for {command}: {reason}")]
    InvalidFlags {
        /// Qualified command name
        command: String,
        /// What was wrong with the flags
        reason: String,
    },

    /// Module or command name is malformed
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    /// The module's own load logic failed
    #[error("module {module} failed to load: {reason}")]
    Failed {
        /// Module name, or the catalog entry when init was never reached
        module: String,
        /// Reason reported by the module
        reason: String,
    },
}

/// Errors raised while a handler runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Handler returned without emitting a reply
    #[error("command {command} returned without replying")]
    NoReply {
        /// Qualified command name
        command: String,
    },

    /// Handler tried to emit a second reply
    #[error("command {command} attempted to reply more than once")]
    MultipleReplies {
        /// Qualified command name
        command: String,
    },

    /// Handler-level failure (argument validation, business logic)
    #[error("{reason}")]
    Failed {
        /// Reason reported by the handler
        reason: String,
    },
}

impl RuntimeError {
    /// Handler-level failure with the given reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        RuntimeError::Failed {
            reason: reason.into(),
        }
    }
}

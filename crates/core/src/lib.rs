//! Core types and traits for the module API
//!
//! This crate defines the contract between a host and the modules it loads:
//! - Argument: Binary-safe command argument
//! - Reply: The single outcome a handler emits per invocation
//! - CommandFlags: Behavioral flags declared with a command
//! - Arity: Argument-count bounds checked by the host before dispatch
//! - ModuleApi / CallContext: Load-time and call-time host contexts
//! - OnLoad / CommandHandler: Entry points a module exposes to the host
//! - Error: LoadError and RuntimeError

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod argument;
pub mod arity;
pub mod context;
pub mod error;
pub mod flags;
pub mod name;
pub mod reply;

pub use argument::Argument;
pub use arity::Arity;
pub use context::{ApiVersion, CallContext, CommandHandler, ModuleApi, OnLoad, API_VERSION_1};
pub use error::{LoadError, LoadResult, RuntimeError, RuntimeResult};
pub use flags::{CommandFlags, FlagsError};
pub use name::{validate_name, NameError, MAX_NAME_LENGTH};
pub use reply::Reply;

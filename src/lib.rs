//! modhost - command modules and an in-process reference host
//!
//! A command module registers itself with a host at load time, declares named
//! commands with flags and arity bounds, and answers each invocation with
//! exactly one reply. This crate re-exports:
//!
//! - the module API contract from `modhost-core`
//! - the reference [`Host`] from `modhost-host`
//! - the fixture modules `module1` and `module2`
//!
//! # Quick Start
//!
//! ```ignore
//! use modhost::{builtin_catalog, Host, HostConfig, Reply};
//!
//! let host = Host::with_catalog(HostConfig::new(), builtin_catalog());
//! host.load_by_name("module1", &[])?;
//! assert_eq!(host.call(["module1.cmd1", "x"])?, Reply::ok());
//! ```

pub use modhost_core::*;
pub use modhost_host::{
    AccessMode, Catalog, CommandInfo, Error, Host, HostConfig, LoadSpec, ModuleInfo, Result,
    CONFIG_FILE_NAME, SUPPORTED_API_VERSION,
};
pub use modhost_modules::{module1, module2};

/// A catalog holding the fixture modules.
pub fn builtin_catalog() -> Catalog {
    modhost_modules::catalog().into_iter().collect()
}

//! # modhost host
//!
//! An in-process reference host for command modules. It implements the host
//! side of the module API in memory:
//!
//! - [`Host`] - module registry, dispatch table and built-in commands
//! - [`HostConfig`] - `modhost.toml` configuration
//! - [`Catalog`] - load entry points resolvable by name
//!
//! Modules are never loaded from shared objects; the catalog maps names to
//! `OnLoad` functions compiled into the process.
//!
//! ## Quick Start
//!
//! ```text
//! use modhost_host::{Catalog, Host, HostConfig};
//!
//! let host = Host::with_catalog(HostConfig::new(), catalog);
//! host.load_by_name("module1", &[])?;
//! host.call(["module1.cmd1", "arg"])?;   // +OK
//! ```

mod builtins;
mod catalog;
mod config;
mod error;
mod host;
mod invocation;
mod loader;
mod registry;

pub use catalog::Catalog;
pub use config::{AccessMode, HostConfig, LoadSpec, CONFIG_FILE_NAME};
pub use error::Error;
pub use host::Host;
pub use loader::SUPPORTED_API_VERSION;
pub use registry::{CommandInfo, ModuleInfo};

/// Result type for host operations
pub type Result<T> = std::result::Result<T, Error>;

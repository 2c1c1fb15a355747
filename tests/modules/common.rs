//! Common test utilities for module tests

use modhost::{builtin_catalog, Host, HostConfig};
use modhost_testing::Env;

/// Create a host with the fixture catalog and nothing loaded
pub fn create_host() -> Host {
    modhost_testing::init_logging();
    Host::with_catalog(HostConfig::new(), builtin_catalog())
}

/// Create an env with both fixture modules loaded
pub fn create_env() -> Env {
    Env::with_modules(&["module1", "module2"]).unwrap()
}

/// No init arguments
#[allow(dead_code)]
pub fn no_args() -> Vec<String> {
    Vec::new()
}

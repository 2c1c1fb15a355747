//! Fixture command modules
//!
//! Two independent modules used to exercise a host's load and dispatch path.
//! Each declares one read-only command taking exactly one argument and
//! replies `OK` unconditionally.
//!
//! | Module | Command |
//! |--------|---------|
//! | `module1` | `module1.cmd1` |
//! | `module2` | `module2.cmd2` |

#![warn(missing_docs)]

pub mod module1;
pub mod module2;

use modhost_core::OnLoad;

/// Load entry points of every fixture module, keyed by module name.
pub fn catalog() -> Vec<(&'static str, OnLoad)> {
    vec![
        (module1::NAME, module1::on_load as OnLoad),
        (module2::NAME, module2::on_load as OnLoad),
    ]
}

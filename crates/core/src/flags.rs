//! Command flags
//!
//! Modules declare flags as a space-separated string, e.g. `"readonly fast"`.
//! The host parses the string once at registration and keeps the bit set.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

bitflags::bitflags! {
    /// Behavioral flags of a registered command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct CommandFlags: u32 {
        /// May modify data.
        const WRITE         = 1 << 0;
        /// Never modifies data.
        const READONLY      = 1 << 1;
        /// Administrative command.
        const ADMIN         = 1 << 2;
        /// Refused when the host is out of memory.
        const DENY_OOM      = 1 << 3;
        /// Not callable from scripts.
        const DENY_SCRIPT   = 1 << 4;
        /// Allowed while the host is loading data.
        const ALLOW_LOADING = 1 << 5;
        /// Publish/subscribe command.
        const PUBSUB        = 1 << 6;
        /// Output is not deterministic.
        const RANDOM        = 1 << 7;
        /// Allowed on a replica with stale data.
        const ALLOW_STALE   = 1 << 8;
        /// Not propagated to monitors.
        const NO_MONITOR    = 1 << 9;
        /// Constant or logarithmic time.
        const FAST          = 1 << 10;
        /// Not allowed in cluster mode.
        const NO_CLUSTER    = 1 << 11;
    }
}

const FLAG_NAMES: &[(&str, CommandFlags)] = &[
    ("write", CommandFlags::WRITE),
    ("readonly", CommandFlags::READONLY),
    ("admin", CommandFlags::ADMIN),
    ("deny-oom", CommandFlags::DENY_OOM),
    ("deny-script", CommandFlags::DENY_SCRIPT),
    ("allow-loading", CommandFlags::ALLOW_LOADING),
    ("pubsub", CommandFlags::PUBSUB),
    ("random", CommandFlags::RANDOM),
    ("allow-stale", CommandFlags::ALLOW_STALE),
    ("no-monitor", CommandFlags::NO_MONITOR),
    ("fast", CommandFlags::FAST),
    ("no-cluster", CommandFlags::NO_CLUSTER),
];

/// Error when parsing a flag string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagsError {
    /// Flag name not recognized
    #[error("unknown flag '{0}'")]
    Unknown(String),
    /// Both `write` and `readonly` were given
    #[error("flags 'write' and 'readonly' are mutually exclusive")]
    WriteAndReadonly,
}

impl CommandFlags {
    /// Parse a space-separated flag string. Flag names are case-insensitive;
    /// an empty string yields no flags.
    pub fn parse(s: &str) -> Result<Self, FlagsError> {
        let mut flags = CommandFlags::empty();
        for token in s.split_whitespace() {
            let lower = token.to_ascii_lowercase();
            let flag = FLAG_NAMES
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, flag)| *flag)
                .ok_or_else(|| FlagsError::Unknown(token.to_string()))?;
            flags |= flag;
        }
        if flags.contains(CommandFlags::WRITE | CommandFlags::READONLY) {
            return Err(FlagsError::WriteAndReadonly);
        }
        Ok(flags)
    }

    /// Flag names in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        FLAG_NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Returns true if the command may modify data.
    pub fn is_write(&self) -> bool {
        self.contains(CommandFlags::WRITE)
    }

    /// Returns true if the command is declared read-only.
    pub fn is_readonly(&self) -> bool {
        self.contains(CommandFlags::READONLY)
    }
}

impl fmt::Display for CommandFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" "))
    }
}

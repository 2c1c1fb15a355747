//! Command arguments
//!
//! Arguments are binary-safe: a host passes whatever bytes the client sent.
//! Handlers that expect text use [`Argument::as_str`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single command argument, owned by the host for the duration of a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument(Vec<u8>);

impl Argument {
    /// Create an argument from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Argument(bytes.into())
    }

    /// Raw bytes of the argument.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// UTF-8 view of the argument, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Parse the argument as a signed integer.
    pub fn to_i64(&self) -> Option<i64> {
        self.as_str()?.parse().ok()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the argument is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument(s.as_bytes().to_vec())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument(s.into_bytes())
    }
}

impl From<Vec<u8>> for Argument {
    fn from(bytes: Vec<u8>) -> Self {
        Argument(bytes)
    }
}

impl From<&[u8]> for Argument {
    fn from(bytes: &[u8]) -> Self {
        Argument(bytes.to_vec())
    }
}

impl From<i64> for Argument {
    fn from(n: i64) -> Self {
        Argument(n.to_string().into_bytes())
    }
}

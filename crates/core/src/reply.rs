//! Reply type for command handlers.
//!
//! Every invocation produces exactly one reply. The host owns the reply slot;
//! handlers write into it through [`CallContext`](crate::CallContext).

use serde::{Deserialize, Serialize};

/// The single outcome of a command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Simple status string (`+OK`)
    Simple(String),

    /// Error reply (`-ERR ...`)
    Error(String),

    /// Signed integer
    Integer(i64),

    /// Binary-safe string
    Bulk(Vec<u8>),

    /// Absent value
    Null,

    /// Ordered list of replies
    Array(Vec<Reply>),
}

impl Reply {
    /// The `OK` status reply.
    pub fn ok() -> Self {
        Reply::Simple("OK".to_string())
    }

    /// Simple status reply with the given text.
    pub fn simple(text: impl Into<String>) -> Self {
        Reply::Simple(text.into())
    }

    /// Error reply with the given text.
    pub fn error(text: impl Into<String>) -> Self {
        Reply::Error(text.into())
    }

    /// Bulk string reply.
    pub fn bulk(bytes: impl Into<Vec<u8>>) -> Self {
        Reply::Bulk(bytes.into())
    }

    /// Returns true for error replies.
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Returns true for the `OK` status reply.
    pub fn is_ok_status(&self) -> bool {
        matches!(self, Reply::Simple(s) if s == "OK")
    }

    /// Text of a simple, error or UTF-8 bulk reply.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Simple(s) | Reply::Error(s) => Some(s),
            Reply::Bulk(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }
}

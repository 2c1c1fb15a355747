//! Chained assertions on a command outcome.

use modhost_core::Reply;
use modhost_host::Result;

/// The outcome of one command, checked with chained assertions.
///
/// Every check panics with the command text and the actual outcome on
/// mismatch, and returns `self` so checks can be chained:
///
/// ```ignore
/// env.expect(["info", "modules"]).contains("module1").contains("module2");
/// ```
#[derive(Debug)]
pub struct Expectation {
    command: String,
    result: Result<Reply>,
}

impl Expectation {
    pub(crate) fn new(command: String, result: Result<Reply>) -> Self {
        Self { command, result }
    }

    /// The reply equals `expected`.
    #[track_caller]
    pub fn equal(self, expected: Reply) -> Self {
        match &self.result {
            Ok(reply) if *reply == expected => {}
            other => panic!(
                "`{}`: expected {:?}, got {:?}",
                self.command, expected, other
            ),
        }
        self
    }

    /// The reply is the `OK` status.
    #[track_caller]
    pub fn ok(self) -> Self {
        self.equal(Reply::ok())
    }

    /// The command failed, either with a host error or an error reply.
    #[track_caller]
    pub fn error(self) -> Self {
        if self.error_text().is_none() {
            panic!("`{}`: expected an error, got {:?}", self.command, self.result);
        }
        self
    }

    /// The command failed with an error whose text contains `text`.
    #[track_caller]
    pub fn error_contains(self, text: &str) -> Self {
        match self.error_text() {
            Some(message) if message.contains(text) => {}
            _ => panic!(
                "`{}`: expected an error containing {:?}, got {:?}",
                self.command, text, self.result
            ),
        }
        self
    }

    /// The host rejected the command (an `Err`, not an error reply).
    #[track_caller]
    pub fn raise(self) -> Self {
        if self.result.is_ok() {
            panic!("`{}`: expected the host to raise, got {:?}", self.command, self.result);
        }
        self
    }

    /// The reply text, or one element of an array reply, contains `text`.
    #[track_caller]
    pub fn contains(self, text: &str) -> Self {
        let found = match &self.result {
            Ok(Reply::Array(items)) => items
                .iter()
                .any(|item| item.as_text().is_some_and(|t| t.contains(text))),
            Ok(reply) => reply.as_text().is_some_and(|t| t.contains(text)),
            Err(_) => false,
        };
        if !found {
            panic!(
                "`{}`: expected a reply containing {:?}, got {:?}",
                self.command, text, self.result
            );
        }
        self
    }

    /// Log the outcome at `info` level.
    pub fn debug_print(self) -> Self {
        tracing::info!(command = %self.command, result = ?self.result, "expect");
        self
    }

    /// The reply, panicking if the host raised.
    #[track_caller]
    pub fn reply(self) -> Reply {
        match self.result {
            Ok(reply) => reply,
            Err(e) => panic!("`{}`: expected a reply, got error {}", self.command, e),
        }
    }

    /// The raw outcome.
    pub fn into_result(self) -> Result<Reply> {
        self.result
    }

    fn error_text(&self) -> Option<String> {
        match &self.result {
            Ok(Reply::Error(message)) => Some(message.clone()),
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        }
    }
}

//! Call-time host context
//!
//! An [`Invocation`] holds the reply slot for one command call. It is lent to
//! the handler as `&mut dyn CallContext` and consumed by [`Invocation::finish`]
//! once the handler returns, which enforces the exactly-one-reply contract.

use modhost_core::{CallContext, Reply, RuntimeError, RuntimeResult};
use tracing::warn;

use crate::registry::CommandEntry;

pub(crate) struct Invocation<'a> {
    entry: &'a CommandEntry,
    argc: usize,
    reply: Option<Reply>,
    attempts: usize,
}

impl<'a> Invocation<'a> {
    pub(crate) fn new(entry: &'a CommandEntry, argc: usize) -> Self {
        Self {
            entry,
            argc,
            reply: None,
            attempts: 0,
        }
    }

    /// Resolve the handler's outcome into the call's reply.
    ///
    /// | Handler result | Replies | Outcome |
    /// |----------------|---------|---------|
    /// | `Ok` | 1 | the reply |
    /// | `Ok` | 0 | `NoReply` |
    /// | any | 2+ | `MultipleReplies` |
    /// | `Err(Failed)` | 0 | error reply `ERR <reason>` |
    /// | `Err(_)` | 1 | the handler's error |
    pub(crate) fn finish(self, outcome: RuntimeResult<()>) -> RuntimeResult<Reply> {
        let command = self.entry.name.clone();
        if self.attempts > 1 {
            warn!(command = %command, attempts = self.attempts, "handler replied more than once");
            return Err(RuntimeError::MultipleReplies { command });
        }
        match (outcome, self.reply) {
            (Ok(()), Some(reply)) => Ok(reply),
            (Ok(()), None) => {
                warn!(command = %command, "handler returned without replying");
                Err(RuntimeError::NoReply { command })
            }
            (Err(RuntimeError::Failed { reason }), None) => {
                Ok(Reply::Error(format!("ERR {}", reason)))
            }
            (Err(err), _) => Err(err),
        }
    }
}

impl CallContext for Invocation<'_> {
    fn command_name(&self) -> &str {
        &self.entry.name
    }

    fn module_name(&self) -> &str {
        &self.entry.module
    }

    fn argc(&self) -> usize {
        self.argc
    }

    fn reply(&mut self, reply: Reply) -> RuntimeResult<()> {
        self.attempts += 1;
        if self.reply.is_some() {
            return Err(RuntimeError::MultipleReplies {
                command: self.entry.name.clone(),
            });
        }
        self.reply = Some(reply);
        Ok(())
    }
}

//! Host contexts and module entry points
//!
//! A module talks to its host through two borrowed handles:
//!
//! - [`ModuleApi`] during `OnLoad`, to declare its identity and commands
//! - [`CallContext`] during a handler call, to read call metadata and emit
//!   the reply
//!
//! Both are passed as `&mut dyn Trait`, so a module can never retain them past
//! the call that lent them.
//!
//! # Example
//!
//! ```
//! use modhost_core::{Argument, CallContext, LoadResult, ModuleApi, RuntimeResult, API_VERSION_1};
//!
//! fn ping(ctx: &mut dyn CallContext, _args: &[Argument]) -> RuntimeResult<()> {
//!     ctx.reply_with_simple_status("PONG")
//! }
//!
//! fn on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
//!     api.init("pinger", 1, API_VERSION_1)?;
//!     api.create_command("pinger.ping", ping, "readonly fast", 0, 0, 0)?;
//!     Ok(())
//! }
//! # let _ = on_load;
//! ```

use crate::argument::Argument;
use crate::error::{LoadResult, RuntimeResult};
use crate::reply::Reply;

/// First (and current) module API version.
pub const API_VERSION_1: u32 = 1;

/// Module API version numbers understood by this crate.
pub type ApiVersion = u32;

/// A command handler.
///
/// Called once per matching invocation with arguments whose count the host has
/// already checked against the declared arity. Must emit exactly one reply.
pub type CommandHandler = fn(&mut dyn CallContext, &[Argument]) -> RuntimeResult<()>;

/// A module's load entry point.
///
/// Called exactly once per load with the initialization arguments from the
/// host's configuration.
pub type OnLoad = fn(&mut dyn ModuleApi, &[Argument]) -> LoadResult<()>;

/// Registration API a host lends to a module while it loads.
pub trait ModuleApi {
    /// Declare the module's identity.
    ///
    /// # Errors
    ///
    /// Fails on a name collision, an unsupported `api_version`, a malformed
    /// name, or a second call within the same load.
    fn init(&mut self, name: &str, version: i32, api_version: ApiVersion) -> LoadResult<()>;

    /// Declare a command.
    ///
    /// `flags` is a space-separated flag string; `first_key`, `last_key` and
    /// `key_step` are the arity bounds described in [`Arity`](crate::Arity).
    ///
    /// # Errors
    ///
    /// Fails before `init`, on a command name collision, or on invalid
    /// flags, arity or name.
    fn create_command(
        &mut self,
        name: &str,
        handler: CommandHandler,
        flags: &str,
        first_key: i32,
        last_key: i32,
        key_step: i32,
    ) -> LoadResult<()>;
}

/// Per-call handle a host lends to a command handler.
pub trait CallContext {
    /// Qualified name of the command being executed.
    fn command_name(&self) -> &str;

    /// Name of the module that registered the command.
    fn module_name(&self) -> &str;

    /// Number of arguments, excluding the command name.
    fn argc(&self) -> usize;

    /// Emit the reply for this call.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::MultipleReplies`](crate::RuntimeError::MultipleReplies)
    /// if a reply was already emitted; the first reply stands.
    fn reply(&mut self, reply: Reply) -> RuntimeResult<()>;

    /// Emit a simple status reply such as `OK`.
    fn reply_with_simple_status(&mut self, text: &str) -> RuntimeResult<()> {
        self.reply(Reply::simple(text))
    }

    /// Emit an error reply.
    fn reply_with_error(&mut self, text: &str) -> RuntimeResult<()> {
        self.reply(Reply::error(text))
    }

    /// Emit an integer reply.
    fn reply_with_integer(&mut self, n: i64) -> RuntimeResult<()> {
        self.reply(Reply::Integer(n))
    }

    /// Emit a bulk string reply.
    fn reply_with_bulk(&mut self, bytes: &[u8]) -> RuntimeResult<()> {
        self.reply(Reply::bulk(bytes))
    }

    /// Emit a null reply.
    fn reply_with_null(&mut self) -> RuntimeResult<()> {
        self.reply(Reply::Null)
    }

    /// Emit an array reply.
    fn reply_with_array(&mut self, items: Vec<Reply>) -> RuntimeResult<()> {
        self.reply(Reply::Array(items))
    }
}

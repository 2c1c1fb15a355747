//! `module2`: registers `module2.cmd2`, which always replies `OK`.

use modhost_core::{Argument, CallContext, LoadResult, ModuleApi, RuntimeResult, API_VERSION_1};

/// Module name
pub const NAME: &str = "module2";

/// Module version
pub const VERSION: i32 = 1;

/// Qualified name of the module's only command
pub const CMD2: &str = "module2.cmd2";

/// Handle `module2.cmd2`.
pub fn simple_cmd2(ctx: &mut dyn CallContext, _args: &[Argument]) -> RuntimeResult<()> {
    ctx.reply_with_simple_status("OK")
}

/// Load entry point.
pub fn on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
    api.init(NAME, VERSION, API_VERSION_1)?;
    tracing::debug!(module = NAME, "registering commands");
    api.create_command(CMD2, simple_cmd2, "readonly", 1, 1, 1)?;
    Ok(())
}

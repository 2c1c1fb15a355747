//! `module1`: registers `module1.cmd1`, which always replies `OK`.

use modhost_core::{Argument, CallContext, LoadResult, ModuleApi, RuntimeResult, API_VERSION_1};

/// Module name
pub const NAME: &str = "module1";

/// Module version
pub const VERSION: i32 = 1;

/// Qualified name of the module's only command
pub const CMD1: &str = "module1.cmd1";

/// Handle `module1.cmd1`.
pub fn simple_cmd1(ctx: &mut dyn CallContext, _args: &[Argument]) -> RuntimeResult<()> {
    ctx.reply_with_simple_status("OK")
}

/// Load entry point.
pub fn on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
    api.init(NAME, VERSION, API_VERSION_1)?;
    tracing::debug!(module = NAME, "registering commands");
    api.create_command(CMD1, simple_cmd1, "readonly", 1, 1, 1)?;
    Ok(())
}

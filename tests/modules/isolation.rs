//! Isolation Tests
//!
//! Two modules with distinct names and commands coexist without interference.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::*;
use modhost::{Argument, CallContext, LoadResult, ModuleApi, Reply, RuntimeResult, API_VERSION_1};

static LEFT_CALLS: AtomicUsize = AtomicUsize::new(0);
static RIGHT_CALLS: AtomicUsize = AtomicUsize::new(0);

fn left(ctx: &mut dyn CallContext, _args: &[Argument]) -> RuntimeResult<()> {
    LEFT_CALLS.fetch_add(1, Ordering::SeqCst);
    ctx.reply_with_simple_status("LEFT")
}

fn right(ctx: &mut dyn CallContext, _args: &[Argument]) -> RuntimeResult<()> {
    RIGHT_CALLS.fetch_add(1, Ordering::SeqCst);
    ctx.reply_with_simple_status("RIGHT")
}

fn left_on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
    api.init("left", 1, API_VERSION_1)?;
    api.create_command("left.cmd", left, "readonly", 0, 0, 0)
}

fn right_on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
    api.init("right", 1, API_VERSION_1)?;
    api.create_command("right.cmd", right, "readonly", 0, 0, 0)
}

#[test]
fn invoking_one_module_never_triggers_the_other() {
    let host = create_host();
    host.load("left", left_on_load, &[]).unwrap();
    host.load("right", right_on_load, &[]).unwrap();

    let right_before = RIGHT_CALLS.load(Ordering::SeqCst);
    assert_eq!(host.call(["left.cmd"]).unwrap(), Reply::simple("LEFT"));
    assert_eq!(host.call(["left.cmd"]).unwrap(), Reply::simple("LEFT"));
    assert_eq!(RIGHT_CALLS.load(Ordering::SeqCst), right_before);

    let left_before = LEFT_CALLS.load(Ordering::SeqCst);
    assert_eq!(host.call(["right.cmd"]).unwrap(), Reply::simple("RIGHT"));
    assert_eq!(LEFT_CALLS.load(Ordering::SeqCst), left_before);
}

#[test]
fn fixture_modules_each_own_their_command() {
    let host = create_host();
    host.load_by_name("module1", &[]).unwrap();
    host.load_by_name("module2", &[]).unwrap();

    assert_eq!(host.command_info("module1.cmd1").unwrap().module, "module1");
    assert_eq!(host.command_info("module2.cmd2").unwrap().module, "module2");
    assert_eq!(host.module("module1").unwrap().commands, vec!["module1.cmd1"]);
    assert_eq!(host.module("module2").unwrap().commands, vec!["module2.cmd2"]);
}

#[test]
fn unloading_one_module_keeps_the_other() {
    let host = create_host();
    host.load_by_name("module1", &[]).unwrap();
    host.load_by_name("module2", &[]).unwrap();

    host.unload("module2").unwrap();

    assert_eq!(host.call(["module1.cmd1", "x"]).unwrap(), Reply::ok());
    assert!(host.call(["module2.cmd2", "x"]).is_err());
}

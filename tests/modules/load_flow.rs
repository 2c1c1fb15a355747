//! Load Flow Tests
//!
//! Tests that OnLoad registers identity and commands, and that a failed load
//! leaves nothing behind.

use crate::common::*;
use modhost::{
    module1, Argument, CallContext, Error, LoadError, LoadResult, ModuleApi, RuntimeResult,
    API_VERSION_1,
};

fn ok(ctx: &mut dyn CallContext, _args: &[Argument]) -> RuntimeResult<()> {
    ctx.reply_with_simple_status("OK")
}

/// A second module that tries to claim the name "module1".
fn impostor_on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
    api.init("module1", 2, API_VERSION_1)?;
    api.create_command("impostor.cmd", ok, "readonly", 0, 0, 0)?;
    Ok(())
}

fn future_api_on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
    api.init("future", 1, API_VERSION_1 + 1)?;
    Ok(())
}

fn double_register_on_load(api: &mut dyn ModuleApi, _args: &[Argument]) -> LoadResult<()> {
    api.init("double", 1, API_VERSION_1)?;
    api.create_command("double.a", ok, "readonly", 0, 0, 0)?;
    api.create_command("double.b", ok, "readonly", 0, 0, 0)?;
    api.create_command("double.a", ok, "readonly", 0, 0, 0)?;
    Ok(())
}

// ============================================================================
// Successful Loads
// ============================================================================

#[test]
fn module1_registers_name_version_and_command() {
    let host = create_host();

    let info = host.load_by_name("module1", &[]).unwrap();

    assert_eq!(info.name, module1::NAME);
    assert_eq!(info.version, 1);
    assert_eq!(info.api_version, API_VERSION_1);
    assert_eq!(info.commands, vec![module1::CMD1]);
}

#[test]
fn loaded_command_is_reachable_under_qualified_name() {
    let host = create_host();
    host.load_by_name("module1", &[]).unwrap();

    let info = host.command_info("module1.cmd1").unwrap();
    assert_eq!(info.module, "module1");
    assert!(info.flags.is_readonly());
    assert_eq!(info.arity.as_tuple(), (1, 1, 1));
}

#[test]
fn init_args_are_accepted_and_ignored() {
    let host = create_host();
    let args = [Argument::from("unused"), Argument::from(7i64)];
    assert!(host.load_by_name("module2", &args).is_ok());
}

// ============================================================================
// Failed Loads
// ============================================================================

#[test]
fn second_module1_fails_with_name_collision() {
    let host = create_host();
    host.load_by_name("module1", &[]).unwrap();

    let err = host.load("impostor", impostor_on_load, &[]).unwrap_err();

    assert_eq!(
        err,
        Error::Load(LoadError::NameCollision {
            name: "module1".to_string()
        })
    );
    assert!(host.command_info("impostor.cmd").is_none());
    assert_eq!(host.command_count(), 1);
    assert_eq!(host.module("module1").unwrap().version, 1);
}

#[test]
fn loading_same_catalog_entry_twice_fails() {
    let host = create_host();
    host.load_by_name("module1", &[]).unwrap();

    assert!(matches!(
        host.load_by_name("module1", &[]),
        Err(Error::Load(LoadError::NameCollision { .. }))
    ));
    assert_eq!(host.modules().len(), 1);
}

#[test]
fn unsupported_api_version_fails() {
    let host = create_host();
    assert!(matches!(
        host.load("future", future_api_on_load, &[]),
        Err(Error::Load(LoadError::UnsupportedApiVersion { requested: 2, .. }))
    ));
    assert!(host.modules().is_empty());
}

#[test]
fn duplicate_command_fails_whole_load() {
    let host = create_host();

    let err = host.load("double", double_register_on_load, &[]).unwrap_err();

    assert!(matches!(err, Error::Load(LoadError::CommandCollision { .. })));
    assert!(host.module("double").is_none());
    assert!(host.command_info("double.a").is_none());
    assert!(host.command_info("double.b").is_none());
}

#[test]
fn failed_load_does_not_block_a_later_load() {
    let host = create_host();
    host.load("double", double_register_on_load, &[]).unwrap_err();
    assert!(host.load_by_name("module1", &[]).is_ok());
}

//! Dispatch Tests
//!
//! Tests that invocations reach the right handler exactly once and that the
//! host rejects bad invocations before the handler runs.

use crate::common::*;
use modhost::{AccessMode, Error, Reply};
use modhost_testing::Env;

// ============================================================================
// Replies
// ============================================================================

#[test]
fn cmd1_with_one_argument_replies_ok() {
    let host = create_host();
    host.load_by_name("module1", &[]).unwrap();

    let reply = host.call(["module1.cmd1", "anything"]).unwrap();

    assert_eq!(reply, Reply::Simple("OK".to_string()));
}

#[test]
fn cmd2_with_one_argument_replies_ok() {
    let env = create_env();
    env.expect(["module2.cmd2", "x"]).ok();
}

#[test]
fn binary_argument_is_accepted() {
    let env = create_env();
    env.expect(vec![b"module1.cmd1".to_vec(), vec![0u8, 0xff]]).ok();
}

#[test]
fn repeated_calls_are_independent() {
    let env = create_env();
    for i in 0..10i64 {
        env.expect(vec![modhost::Argument::from("module1.cmd1"), i.into()])
            .ok();
    }
}

// ============================================================================
// Arity
// ============================================================================

#[test]
fn zero_arguments_rejected() {
    let env = create_env();
    let err = env.cmd(["module1.cmd1"]).unwrap_err();
    assert_eq!(
        err,
        Error::WrongArity {
            command: "module1.cmd1".to_string(),
            argc: 0
        }
    );
}

#[test]
fn two_arguments_rejected() {
    let env = create_env();
    env.expect(["module2.cmd2", "a", "b"])
        .raise()
        .error_contains("wrong number of arguments for 'module2.cmd2'");
}

// ============================================================================
// Access Mode
// ============================================================================

#[test]
fn readonly_commands_run_on_read_only_host() {
    let env = Env::builder()
        .module("module1", no_args())
        .module("module2", no_args())
        .access_mode(AccessMode::ReadOnly)
        .build()
        .unwrap();
    env.expect(["module1.cmd1", "x"]).ok();
    env.expect(["module2.cmd2", "x"]).ok();
}

// ============================================================================
// Unknown Commands
// ============================================================================

#[test]
fn unloaded_module_command_is_unknown() {
    let env = Env::with_modules(&["module1"]).unwrap();
    assert!(matches!(
        env.cmd(["module2.cmd2", "x"]),
        Err(Error::UnknownCommand { .. })
    ));
}

#[test]
fn module_unload_through_command() {
    let env = create_env();
    env.expect(["module", "unload", "module1"]).ok();
    env.expect(["module1.cmd1", "x"]).raise().error_contains("unknown command");
    env.expect(["module2.cmd2", "x"]).ok();
}

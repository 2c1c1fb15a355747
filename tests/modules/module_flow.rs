//! Module Flow Tests
//!
//! Load both fixture modules and check every module listed by `INFO modules`
//! answers its command with `OK`.

use crate::common::*;
use modhost::{Reply, CONFIG_FILE_NAME};
use modhost_testing::Env;

fn check_sample_modules(env: &Env) -> usize {
    let mut checked = 0;
    for name in env.loaded_modules() {
        match name.as_str() {
            "module1" => {
                env.expect(["module1.cmd1", "x"]).equal(Reply::ok());
                checked += 1;
            }
            "module2" => {
                env.expect(["module2.cmd2", "x"]).equal(Reply::ok());
                checked += 1;
            }
            _ => {}
        }
    }
    checked
}

#[test]
fn modules_simple_flow() {
    let env = create_env();
    assert_eq!(check_sample_modules(&env), 2);
}

#[test]
fn modules_simple_flow_from_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "[[load]]\nmodule = \"module1\"\n\n[[load]]\nmodule = \"module2\"\nargs = [\"x\"]\n",
    )
    .unwrap();

    let env = Env::from_config(&path).unwrap();
    assert_eq!(env.loaded_modules(), vec!["module1", "module2"]);
    assert_eq!(check_sample_modules(&env), 2);
}

#[test]
fn info_modules_lists_both() {
    let env = create_env();
    env.expect(["info", "modules"])
        .contains("module:name=module1,ver=1")
        .contains("module:name=module2,ver=1");
}

#[test]
fn module_list_reports_versions() {
    let env = create_env();
    let reply = env.expect(["module", "list"]).reply();
    match reply {
        Reply::Array(modules) => assert_eq!(modules.len(), 2),
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn reply_serializes_for_clients() {
    let env = create_env();
    let reply = env.expect(["module1.cmd1", "x"]).reply();
    let json = serde_json::to_string(&reply).unwrap();
    assert_eq!(json, r#"{"Simple":"OK"}"#);
}

//! Module Layer Tests
//!
//! End-to-end tests of the fixture modules against the reference host:
//! - Load flow: identity registration, collisions, rollback
//! - Dispatch: replies, arity enforcement, access mode
//! - Isolation: independent modules never interfere
//! - Module flow: the `INFO modules` driven sample check

mod common;

mod dispatch;
mod isolation;
mod load_flow;
mod module_flow;

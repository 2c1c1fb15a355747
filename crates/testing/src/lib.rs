//! # modhost testing
//!
//! Harness for integration tests against the reference host:
//!
//! - [`Env`] - a fresh host with the requested modules loaded
//! - [`Expectation`] - chained assertions on one command's outcome
//! - [`init_logging`] - route `tracing` output through the test writer
//!
//! ```ignore
//! use modhost_testing::Env;
//!
//! let env = Env::with_modules(&["module1", "module2"])?;
//! env.expect(["module1.cmd1", "x"]).ok();
//! env.expect(["module2.cmd2"]).raise().error_contains("wrong number of arguments");
//! ```

mod env;
mod expect;
mod logging;

pub use env::{parse_info_modules, Env, EnvBuilder};
pub use expect::Expectation;
pub use logging::{init_logging, LOG_LEVEL_ENV};

//! Test environment: a fresh host with modules loaded.

use std::path::Path;

use modhost_core::{Argument, OnLoad, Reply};
use modhost_host::{AccessMode, Catalog, Host, HostConfig, Result};

use crate::expect::Expectation;
use crate::logging::init_logging;

/// Builder for [`Env`].
///
/// Starts with the fixture modules in the catalog and nothing loaded.
#[derive(Debug)]
pub struct EnvBuilder {
    config: HostConfig,
    catalog: Catalog,
}

impl EnvBuilder {
    fn new() -> Self {
        Self {
            config: HostConfig::new(),
            catalog: modhost_modules::catalog().into_iter().collect(),
        }
    }

    /// Load `name` from the catalog with `args` when the env is built.
    pub fn module<I, S>(mut self, name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.load_module(name, args);
        self
    }

    /// Set the host's access mode.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.config = self.config.access_mode(mode);
        self
    }

    /// Add a module to the catalog.
    pub fn catalog_entry(mut self, name: &str, on_load: OnLoad) -> Self {
        self.catalog.register(name, on_load);
        self
    }

    /// Start the host and load the requested modules, in order.
    ///
    /// # Errors
    ///
    /// Returns the first load failure.
    pub fn build(self) -> Result<Env> {
        init_logging();
        self.config.validate()?;
        let host = Host::with_catalog(self.config, self.catalog);
        host.load_configured()?;
        Ok(Env { host })
    }
}

/// A host under test.
///
/// # Example
///
/// ```ignore
/// let env = Env::builder().module("module1", None::<String>).build()?;
/// env.expect(["module1.cmd1", "x"]).ok();
/// assert_eq!(env.loaded_modules(), vec!["module1"]);
/// ```
#[derive(Debug)]
pub struct Env {
    host: Host,
}

impl Env {
    /// Start configuring an env.
    pub fn builder() -> EnvBuilder {
        EnvBuilder::new()
    }

    /// An env with no modules loaded.
    pub fn new() -> Self {
        init_logging();
        let EnvBuilder { config, catalog } = EnvBuilder::new();
        Self {
            host: Host::with_catalog(config, catalog),
        }
    }

    /// An env with the given catalog modules loaded, without init arguments.
    pub fn with_modules(names: &[&str]) -> Result<Self> {
        names
            .iter()
            .fold(Self::builder(), |builder, name| {
                builder.module(name, Vec::<String>::new())
            })
            .build()
    }

    /// An env configured from a `modhost.toml` file.
    pub fn from_config(path: &Path) -> Result<Self> {
        let config = HostConfig::from_file(path)?;
        let builder = EnvBuilder {
            config,
            ..EnvBuilder::new()
        };
        builder.build()
    }

    /// The underlying host.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Run a command.
    pub fn cmd<I, A>(&self, argv: I) -> Result<Reply>
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let argv: Vec<Argument> = argv.into_iter().map(Into::into).collect();
        self.host.call_args(&argv)
    }

    /// Run a command and wrap the outcome for assertions.
    pub fn expect<I, A>(&self, argv: I) -> Expectation
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let argv: Vec<Argument> = argv.into_iter().map(Into::into).collect();
        let command = argv
            .iter()
            .map(Argument::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Expectation::new(command, self.host.call_args(&argv))
    }

    /// Assert that a command result is the `OK` status.
    #[track_caller]
    pub fn assert_ok(&self, result: &Result<Reply>) {
        match result {
            Ok(reply) if reply.is_ok_status() => {}
            other => panic!("expected +OK, got {:?}", other),
        }
    }

    /// Module names as reported by `INFO modules`.
    pub fn loaded_modules(&self) -> Vec<String> {
        let text = match self.cmd(["info", "modules"]) {
            Ok(reply) => reply.as_text().unwrap_or_default().to_string(),
            Err(_) => return Vec::new(),
        };
        parse_info_modules(&text)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract module names from `INFO modules` text.
///
/// Each module line looks like `module:name=<name>,ver=<v>,...`; the header
/// and any other lines are skipped.
pub fn parse_info_modules(text: &str) -> Vec<String> {
    text.split("\r\n")
        .skip(1)
        .filter_map(|line| line.strip_prefix("module:name="))
        .map(|rest| rest.split(',').next().unwrap_or(rest).to_string())
        .collect()
}

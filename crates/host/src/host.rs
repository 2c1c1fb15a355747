//! The reference host - loads modules and dispatches their commands.
//!
//! A [`Host`] owns the module registry and the dispatch table. Modules
//! contribute entries through `OnLoad`; the host resolves command names at
//! call time, enforces arity and access mode before a handler runs, and
//! enforces the exactly-one-reply contract after it returns.
//!
//! # Locking
//!
//! The registry sits behind a `parking_lot::RwLock`. Dispatch takes a short
//! read lock to clone the command entry out and runs the handler unlocked.
//! Loads hold an upgradable read lock while `OnLoad` runs (one load at a
//! time, dispatch continues) and upgrade to a write lock only to commit.

use std::fmt::Write as _;
use std::path::Path;

use modhost_core::{Argument, OnLoad, Reply};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::{AccessMode, HostConfig, CONFIG_FILE_NAME};
use crate::invocation::Invocation;
use crate::loader::LoadContext;
use crate::registry::{name_key, CommandInfo, ModuleInfo, Registry};
use crate::{Error, Result};

/// In-process host for command modules.
///
/// `Host` is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use modhost_host::{Catalog, Host, HostConfig};
///
/// let catalog: Catalog = modhost_modules::catalog().into_iter().collect();
/// let host = Host::with_catalog(HostConfig::new(), catalog);
///
/// host.load_by_name("module1", &[])?;
/// let reply = host.call(["module1.cmd1", "x"])?;
/// assert!(reply.is_ok_status());
/// ```
#[derive(Debug)]
pub struct Host {
    config: HostConfig,
    catalog: Catalog,
    registry: RwLock<Registry>,
}

impl Host {
    /// Create a host with an empty catalog.
    pub fn new(config: HostConfig) -> Self {
        Self::with_catalog(config, Catalog::new())
    }

    /// Create a host that resolves module names against `catalog`.
    pub fn with_catalog(config: HostConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            registry: RwLock::new(Registry::default()),
        }
    }

    /// Open a host from the `modhost.toml` in `dir` and load its configured
    /// modules. A default config file is written if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be read or parsed, or if any
    /// configured module fails to load.
    pub fn open(dir: &Path, catalog: Catalog) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        HostConfig::write_default_if_missing(&path)?;
        let config = HostConfig::from_file(&path)?;
        let host = Self::with_catalog(config, catalog);
        host.load_configured()?;
        Ok(host)
    }

    /// The host's configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// The host's catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Run a module's `OnLoad` and register what it declares.
    ///
    /// `entry` names the entry point in logs and errors until the module has
    /// declared its own name. Registrations are staged and committed only if
    /// `OnLoad` succeeds; a failed load leaves the host unchanged.
    pub fn load(&self, entry: &str, on_load: OnLoad, args: &[Argument]) -> Result<ModuleInfo> {
        let guard = self.registry.upgradable_read();
        let mut ctx = LoadContext::new(&guard, entry, self.config.max_api_version);
        let staged = on_load(&mut ctx, args).and_then(|()| ctx.finish());
        let staged = match staged {
            Ok(staged) => staged,
            Err(e) => {
                warn!(entry, error = %e, "module failed to load");
                return Err(e.into());
            }
        };

        let mut registry = RwLockUpgradableReadGuard::upgrade(guard);
        let module = staged.info.clone();
        registry.commit(staged);
        info!(
            module = %module.name,
            version = module.version,
            commands = module.commands.len(),
            "module loaded"
        );
        Ok(module)
    }

    /// Load a module from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModuleNotFound`] if the catalog has no such entry, or
    /// the module's load error.
    pub fn load_by_name(&self, name: &str, args: &[Argument]) -> Result<ModuleInfo> {
        let on_load = self.catalog.get(name).ok_or_else(|| Error::ModuleNotFound {
            module: name.to_string(),
        })?;
        self.load(name, on_load, args)
    }

    /// Load every module listed in the config, in order. Stops at the first
    /// failure; modules loaded before it stay loaded.
    pub fn load_configured(&self) -> Result<Vec<ModuleInfo>> {
        let mut loaded = Vec::with_capacity(self.config.load.len());
        for item in &self.config.load {
            let args: Vec<Argument> = item
                .args
                .iter()
                .map(|a| Argument::from(a.as_str()))
                .collect();
            loaded.push(self.load_by_name(&item.module, &args)?);
        }
        Ok(loaded)
    }

    /// Remove a module and all of its commands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModuleNotFound`] if no module of that name is loaded.
    pub fn unload(&self, name: &str) -> Result<()> {
        let removed = self.registry.write().remove(name);
        match removed {
            Some(module) => {
                info!(module = %module.name, commands = module.commands.len(), "module unloaded");
                Ok(())
            }
            None => Err(Error::ModuleNotFound {
                module: name.to_string(),
            }),
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Execute a command. The first element of `argv` is the command name.
    pub fn call<I, A>(&self, argv: I) -> Result<Reply>
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        let argv: Vec<Argument> = argv.into_iter().map(Into::into).collect();
        self.call_args(&argv)
    }

    /// Execute a command from already-built arguments.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for an empty `argv` or a non-UTF-8 name
    /// - [`Error::UnknownCommand`] if nothing is registered under the name
    /// - [`Error::WrongArity`] if the argument count is outside the declared
    ///   bounds (the handler is not called)
    /// - [`Error::AccessDenied`] for a `write` command on a read-only host
    /// - [`Error::Runtime`] if the handler broke the reply contract
    pub fn call_args(&self, argv: &[Argument]) -> Result<Reply> {
        let (name, args) = argv
            .split_first()
            .ok_or_else(|| Error::invalid_input("empty command"))?;
        let name = name
            .as_str()
            .ok_or_else(|| Error::invalid_input("command name is not valid UTF-8"))?;

        if let Some(result) = self.call_builtin(&name_key(name), args) {
            return result;
        }

        let entry = self
            .registry
            .read()
            .command(name)
            .ok_or_else(|| Error::UnknownCommand {
                command: name.to_string(),
            })?;

        if !entry.arity.accepts(args.len()) {
            return Err(Error::WrongArity {
                command: entry.name.clone(),
                argc: args.len(),
            });
        }
        if self.config.access_mode == AccessMode::ReadOnly && entry.flags.is_write() {
            return Err(Error::AccessDenied {
                command: entry.name.clone(),
            });
        }

        debug!(command = %entry.name, argc = args.len(), "dispatch");
        let mut invocation = Invocation::new(&entry, args.len());
        let outcome = (entry.handler)(&mut invocation, args);
        Ok(invocation.finish(outcome)?)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Loaded modules, sorted by name.
    pub fn modules(&self) -> Vec<ModuleInfo> {
        self.registry.read().modules().cloned().collect()
    }

    /// A loaded module by name.
    pub fn module(&self, name: &str) -> Option<ModuleInfo> {
        self.registry.read().module(name).cloned()
    }

    /// Introspection data for a registered command.
    pub fn command_info(&self, name: &str) -> Option<CommandInfo> {
        self.registry.read().command(name).map(|entry| entry.info())
    }

    /// Number of registered module commands.
    pub fn command_count(&self) -> usize {
        self.registry.read().command_count()
    }

    /// The `INFO modules` section.
    ///
    /// ```text
    /// # Modules\r\n
    /// module:name=module1,ver=1,api=1\r\n
    /// ```
    pub fn info_modules(&self) -> String {
        let registry = self.registry.read();
        let mut out = String::from("# Modules\r\n");
        for module in registry.modules() {
            let _ = write!(
                out,
                "module:name={},ver={},api={}\r\n",
                module.name, module.version, module.api_version
            );
        }
        out
    }
}

//! Module registry and dispatch table
//!
//! Both live in one [`Registry`] behind the host's lock so that a load commits
//! its module record and all of its commands in a single write.
//!
//! Module and command names are matched case-insensitively; both maps are
//! keyed by the ASCII-lowercased name and keep the declared spelling for
//! display.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use modhost_core::{ApiVersion, Arity, CommandFlags, CommandHandler};
use serde::{Deserialize, Serialize};

/// Names served by the host itself; modules cannot register them.
pub(crate) const RESERVED_COMMANDS: &[&str] = &["ping", "info", "module", "command"];

/// Identity and commands of a loaded module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module name
    pub name: String,
    /// Module version
    pub version: i32,
    /// API version the module initialized with
    pub api_version: ApiVersion,
    /// Commands registered by the module, in registration order
    pub commands: Vec<String>,
}

/// Introspection data for a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    /// Qualified command name as declared
    pub name: String,
    /// Owning module
    pub module: String,
    /// Parsed flags
    pub flags: CommandFlags,
    /// Arity bounds
    pub arity: Arity,
}

/// A dispatch table entry.
#[derive(Clone)]
pub(crate) struct CommandEntry {
    pub(crate) name: String,
    pub(crate) module: String,
    pub(crate) handler: CommandHandler,
    pub(crate) flags: CommandFlags,
    pub(crate) arity: Arity,
}

impl CommandEntry {
    pub(crate) fn info(&self) -> CommandInfo {
        CommandInfo {
            name: self.name.clone(),
            module: self.module.clone(),
            flags: self.flags,
            arity: self.arity,
        }
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("module", &self.module)
            .field("flags", &self.flags)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Everything one successful `OnLoad` contributes.
#[derive(Debug)]
pub(crate) struct StagedModule {
    pub(crate) info: ModuleInfo,
    pub(crate) commands: Vec<CommandEntry>,
}

/// Loaded modules and the dispatch table.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    modules: BTreeMap<String, ModuleInfo>,
    commands: HashMap<String, Arc<CommandEntry>>,
}

pub(crate) fn name_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl Registry {
    pub(crate) fn has_module(&self, name: &str) -> bool {
        self.modules.contains_key(&name_key(name))
    }

    /// True if `name` is taken by a registered or reserved command.
    pub(crate) fn has_command(&self, name: &str) -> bool {
        let key = name_key(name);
        RESERVED_COMMANDS.contains(&key.as_str()) || self.commands.contains_key(&key)
    }

    pub(crate) fn command(&self, name: &str) -> Option<Arc<CommandEntry>> {
        self.commands.get(&name_key(name)).cloned()
    }

    pub(crate) fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub(crate) fn module(&self, name: &str) -> Option<&ModuleInfo> {
        self.modules.get(&name_key(name))
    }

    /// Modules sorted by lowercased name.
    pub(crate) fn modules(&self) -> impl Iterator<Item = &ModuleInfo> {
        self.modules.values()
    }

    /// Commit a staged load. The caller has already checked for collisions
    /// under the same lock.
    pub(crate) fn commit(&mut self, staged: StagedModule) {
        for entry in staged.commands {
            self.commands
                .insert(name_key(&entry.name), Arc::new(entry));
        }
        self.modules.insert(name_key(&staged.info.name), staged.info);
    }

    /// Remove a module and its commands.
    pub(crate) fn remove(&mut self, name: &str) -> Option<ModuleInfo> {
        let info = self.modules.remove(&name_key(name))?;
        for command in &info.commands {
            self.commands.remove(&name_key(command));
        }
        Some(info)
    }
}

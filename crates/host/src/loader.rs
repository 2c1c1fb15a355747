//! Load-time host context
//!
//! [`LoadContext`] is the [`ModuleApi`] a module sees during `OnLoad`. It checks
//! every declaration against the committed registry (read-only) and stages
//! the results. Nothing becomes visible to the dispatcher until the host
//! commits the staged module after `OnLoad` returns `Ok`.

use modhost_core::{
    validate_name, ApiVersion, Arity, CommandFlags, CommandHandler, LoadError, LoadResult,
    ModuleApi, API_VERSION_1,
};
use tracing::debug;

use crate::registry::{name_key, CommandEntry, ModuleInfo, Registry, StagedModule};

/// Highest module API version this host implements.
pub const SUPPORTED_API_VERSION: ApiVersion = API_VERSION_1;

pub(crate) struct LoadContext<'r> {
    registry: &'r Registry,
    entry: String,
    max_api_version: ApiVersion,
    identity: Option<ModuleInfo>,
    commands: Vec<CommandEntry>,
}

impl<'r> LoadContext<'r> {
    pub(crate) fn new(registry: &'r Registry, entry: &str, max_api_version: ApiVersion) -> Self {
        Self {
            registry,
            entry: entry.to_string(),
            max_api_version: max_api_version.min(SUPPORTED_API_VERSION),
            identity: None,
            commands: Vec::new(),
        }
    }

    /// Consume the context after a successful `OnLoad`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Failed`] if the module never called `init`.
    pub(crate) fn finish(self) -> LoadResult<StagedModule> {
        let mut info = self.identity.ok_or_else(|| LoadError::Failed {
            module: self.entry.clone(),
            reason: "module did not call init".to_string(),
        })?;
        info.commands = self.commands.iter().map(|c| c.name.clone()).collect();
        Ok(StagedModule {
            info,
            commands: self.commands,
        })
    }
}

impl ModuleApi for LoadContext<'_> {
    fn init(&mut self, name: &str, version: i32, api_version: ApiVersion) -> LoadResult<()> {
        if let Some(identity) = &self.identity {
            return Err(LoadError::AlreadyInitialized {
                name: identity.name.clone(),
            });
        }
        validate_name(name)?;
        if api_version == 0 || api_version > self.max_api_version {
            return Err(LoadError::UnsupportedApiVersion {
                requested: api_version,
                supported: self.max_api_version,
            });
        }
        if self.registry.has_module(name) {
            return Err(LoadError::NameCollision {
                name: name.to_string(),
            });
        }
        debug!(module = name, version, api_version, "module init");
        self.identity = Some(ModuleInfo {
            name: name.to_string(),
            version,
            api_version,
            commands: Vec::new(),
        });
        Ok(())
    }

    fn create_command(
        &mut self,
        name: &str,
        handler: CommandHandler,
        flags: &str,
        first_key: i32,
        last_key: i32,
        key_step: i32,
    ) -> LoadResult<()> {
        let module = match &self.identity {
            Some(identity) => identity.name.clone(),
            None => {
                return Err(LoadError::NotInitialized {
                    command: name.to_string(),
                })
            }
        };
        validate_name(name)?;
        let key = name_key(name);
        let staged = self.commands.iter().any(|c| name_key(&c.name) == key);
        if staged || self.registry.has_command(name) {
            return Err(LoadError::CommandCollision {
                command: name.to_string(),
            });
        }
        let flags = CommandFlags::parse(flags).map_err(|e| LoadError::InvalidFlags {
            command: name.to_string(),
            reason: e.to_string(),
        })?;
        let arity = Arity::new(name, first_key, last_key, key_step)?;

        debug!(module = %module, command = name, flags = %flags, "command staged");
        self.commands.push(CommandEntry {
            name: name.to_string(),
            module,
            handler,
            flags,
            arity,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modhost_core::{Argument, CallContext, NameError, RuntimeResult};

    fn ok(ctx: &mut dyn CallContext, _args: &[Argument]) -> RuntimeResult<()> {
        ctx.reply_with_simple_status("OK")
    }

    #[test]
    fn test_stages_identity_and_commands() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        ctx.init("m", 3, API_VERSION_1).unwrap();
        ctx.create_command("m.a", ok, "readonly", 1, 1, 1).unwrap();
        ctx.create_command("m.b", ok, "write fast", 0, -1, 1).unwrap();

        let staged = ctx.finish().unwrap();
        assert_eq!(staged.info.name, "m");
        assert_eq!(staged.info.version, 3);
        assert_eq!(staged.info.commands, vec!["m.a", "m.b"]);
        assert_eq!(staged.commands[1].flags, CommandFlags::WRITE | CommandFlags::FAST);
        assert_eq!(staged.commands[1].arity.max(), None);
    }

    #[test]
    fn test_command_before_init() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        let err = ctx.create_command("m.a", ok, "", 0, 0, 0).unwrap_err();
        assert_eq!(
            err,
            LoadError::NotInitialized {
                command: "m.a".to_string()
            }
        );
    }

    #[test]
    fn test_init_twice() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        ctx.init("m", 1, API_VERSION_1).unwrap();
        assert!(matches!(
            ctx.init("m2", 1, API_VERSION_1),
            Err(LoadError::AlreadyInitialized { .. })
        ));
    }

    #[test]
    fn test_unsupported_api_version() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        assert_eq!(
            ctx.init("m", 1, 2),
            Err(LoadError::UnsupportedApiVersion {
                requested: 2,
                supported: 1
            })
        );
        assert!(ctx.init("m", 1, 0).is_err());
    }

    #[test]
    fn test_max_api_version_caps_init() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", 0);
        assert_eq!(
            ctx.init("m", 1, API_VERSION_1),
            Err(LoadError::UnsupportedApiVersion {
                requested: 1,
                supported: 0
            })
        );

        let mut ctx = LoadContext::new(&registry, "m", 7);
        assert!(matches!(
            ctx.init("m", 1, 2),
            Err(LoadError::UnsupportedApiVersion { supported: 1, .. })
        ));
        assert!(ctx.init("m", 1, API_VERSION_1).is_ok());
    }

    #[test]
    fn test_module_name_collision_ignores_case() {
        let mut registry = Registry::default();
        let mut first = LoadContext::new(&registry, "module1", API_VERSION_1);
        first.init("module1", 1, API_VERSION_1).unwrap();
        let staged = first.finish().unwrap();
        registry.commit(staged);

        let mut ctx = LoadContext::new(&registry, "impostor", API_VERSION_1);
        assert_eq!(
            ctx.init("MODULE1", 1, API_VERSION_1),
            Err(LoadError::NameCollision {
                name: "MODULE1".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_module_name() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        assert_eq!(
            ctx.init("", 1, API_VERSION_1),
            Err(LoadError::InvalidName(NameError::Empty))
        );
    }

    #[test]
    fn test_duplicate_command_within_load() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        ctx.init("m", 1, API_VERSION_1).unwrap();
        ctx.create_command("m.a", ok, "", 0, 0, 0).unwrap();
        assert_eq!(
            ctx.create_command("M.A", ok, "", 0, 0, 0),
            Err(LoadError::CommandCollision {
                command: "M.A".to_string()
            })
        );
    }

    #[test]
    fn test_reserved_command_name() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        ctx.init("m", 1, API_VERSION_1).unwrap();
        assert!(matches!(
            ctx.create_command("ping", ok, "", 0, 0, 0),
            Err(LoadError::CommandCollision { .. })
        ));
    }

    #[test]
    fn test_invalid_flags_and_arity() {
        let registry = Registry::default();
        let mut ctx = LoadContext::new(&registry, "m", API_VERSION_1);
        ctx.init("m", 1, API_VERSION_1).unwrap();
        assert!(matches!(
            ctx.create_command("m.a", ok, "readonly bogus", 0, 0, 0),
            Err(LoadError::InvalidFlags { .. })
        ));
        assert!(matches!(
            ctx.create_command("m.a", ok, "readonly", 2, 1, 1),
            Err(LoadError::InvalidArity { .. })
        ));
    }

    #[test]
    fn test_finish_without_init() {
        let registry = Registry::default();
        let ctx = LoadContext::new(&registry, "entry", API_VERSION_1);
        match ctx.finish() {
            Err(LoadError::Failed { module, reason }) => {
                assert_eq!(module, "entry");
                assert!(reason.contains("init"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}

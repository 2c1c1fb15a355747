//! Commands served by the host itself.
//!
//! | Command | Reply |
//! |---------|-------|
//! | `PING [message]` | `PONG`, or the message as a bulk string |
//! | `INFO [section]` | Info text; only the `server` and `modules` sections exist |
//! | `MODULE LIST` | One `[name, <name>, ver, <version>]` array per module |
//! | `MODULE LOAD <name> [args...]` | `OK` after loading from the catalog |
//! | `MODULE UNLOAD <name>` | `OK` |
//! | `COMMAND INFO <name>...` | Per name: `[name, [flags], first, last, step]` or null |
//! | `COMMAND COUNT` | Number of module commands |

use modhost_core::{Argument, Reply};

use crate::registry::RESERVED_COMMANDS;
use crate::{Error, Host, Result};

fn wrong_arity(command: &str, args: &[Argument]) -> Error {
    Error::WrongArity {
        command: command.to_string(),
        argc: args.len(),
    }
}

fn subcommand(args: &[Argument]) -> Option<String> {
    args.first()
        .and_then(Argument::as_str)
        .map(str::to_ascii_lowercase)
}

impl Host {
    /// Serve a built-in command. `key` is the lowercased command name;
    /// returns `None` when it is not a built-in.
    pub(crate) fn call_builtin(&self, key: &str, args: &[Argument]) -> Option<Result<Reply>> {
        if !RESERVED_COMMANDS.contains(&key) {
            return None;
        }
        Some(match key {
            "ping" => self.ping(args),
            "info" => self.info(args),
            "module" => self.module_command(args),
            _ => self.command_command(args),
        })
    }

    fn ping(&self, args: &[Argument]) -> Result<Reply> {
        match args {
            [] => Ok(Reply::simple("PONG")),
            [message] => Ok(Reply::bulk(message.as_bytes())),
            _ => Err(wrong_arity("ping", args)),
        }
    }

    fn info(&self, args: &[Argument]) -> Result<Reply> {
        let server = format!(
            "# Server\r\nmodhost_version:{}\r\n",
            env!("CARGO_PKG_VERSION")
        );
        let text = match args {
            [] => format!("{}\r\n{}", server, self.info_modules()),
            [section] => match section.as_str().map(str::to_ascii_lowercase).as_deref() {
                Some("server") => server,
                Some("modules") => self.info_modules(),
                Some("all") | Some("everything") => {
                    format!("{}\r\n{}", server, self.info_modules())
                }
                _ => String::new(),
            },
            _ => return Err(wrong_arity("info", args)),
        };
        Ok(Reply::bulk(text.into_bytes()))
    }

    fn module_command(&self, args: &[Argument]) -> Result<Reply> {
        match subcommand(args).as_deref() {
            Some("list") if args.len() == 1 => {
                let modules = self
                    .modules()
                    .into_iter()
                    .map(|m| {
                        Reply::Array(vec![
                            Reply::bulk("name"),
                            Reply::bulk(m.name),
                            Reply::bulk("ver"),
                            Reply::Integer(i64::from(m.version)),
                        ])
                    })
                    .collect();
                Ok(Reply::Array(modules))
            }
            Some("load") if args.len() >= 2 => {
                let name = args[1]
                    .as_str()
                    .ok_or_else(|| Error::invalid_input("module name is not valid UTF-8"))?;
                self.load_by_name(name, &args[2..])?;
                Ok(Reply::ok())
            }
            Some("unload") if args.len() == 2 => {
                let name = args[1]
                    .as_str()
                    .ok_or_else(|| Error::invalid_input("module name is not valid UTF-8"))?;
                self.unload(name)?;
                Ok(Reply::ok())
            }
            Some("list") | Some("load") | Some("unload") | None => {
                Err(wrong_arity("module", args))
            }
            Some(other) => Err(Error::invalid_input(format!(
                "unknown subcommand '{}' for 'module'",
                other
            ))),
        }
    }

    fn command_command(&self, args: &[Argument]) -> Result<Reply> {
        match subcommand(args).as_deref() {
            Some("count") if args.len() == 1 => Ok(Reply::Integer(self.command_count() as i64)),
            Some("info") => {
                let replies = args[1..]
                    .iter()
                    .map(|name| {
                        let info = name.as_str().and_then(|n| self.command_info(n));
                        match info {
                            Some(info) => {
                                let (first, last, step) = info.arity.as_tuple();
                                Reply::Array(vec![
                                    Reply::bulk(info.name),
                                    Reply::Array(
                                        info.flags.names().into_iter().map(Reply::simple).collect(),
                                    ),
                                    Reply::Integer(i64::from(first)),
                                    Reply::Integer(i64::from(last)),
                                    Reply::Integer(i64::from(step)),
                                ])
                            }
                            None => Reply::Null,
                        }
                    })
                    .collect();
                Ok(Reply::Array(replies))
            }
            Some("count") | None => Err(wrong_arity("command", args)),
            Some(other) => Err(Error::invalid_input(format!(
                "unknown subcommand '{}' for 'command'",
                other
            ))),
        }
    }
}

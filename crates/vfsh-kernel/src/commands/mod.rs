//! Command set for vfsh.
//!
//! The command set is closed: every command is a [`Command`] variant and
//! [`dispatch`] is the single place that maps a variant to its
//! implementation, so adding a command without wiring it up fails to compile.
//!
//! # Architecture
//!
//! ```text
//! Command::from_str("ls") ──► dispatch(Command::Ls, args, ctx)
//!                               └── builtin::ls::run(args, ctx) ──► ExecResult
//! ```

mod builtin;
mod context;

use std::fmt;
use std::str::FromStr;

pub use context::ExecContext;

use crate::interpreter::ExecResult;

/// Every command the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Ls,
    Cd,
    Mkdir,
    Chmod,
    History,
    Exit,
    Cat,
    Pwd,
    Help,
    Date,
    Cal,
}

impl Command {
    /// All commands, in help order.
    pub const ALL: [Command; 11] = [
        Command::Ls,
        Command::Cd,
        Command::Pwd,
        Command::Cat,
        Command::Mkdir,
        Command::Chmod,
        Command::History,
        Command::Date,
        Command::Cal,
        Command::Help,
        Command::Exit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Ls => "ls",
            Command::Cd => "cd",
            Command::Mkdir => "mkdir",
            Command::Chmod => "chmod",
            Command::History => "history",
            Command::Exit => "exit",
            Command::Cat => "cat",
            Command::Pwd => "pwd",
            Command::Help => "help",
            Command::Date => "date",
            Command::Cal => "cal",
        }
    }

    /// Synopsis shown by `help` and in usage errors.
    pub fn usage(self) -> &'static str {
        match self {
            Command::Ls => "ls [path]",
            Command::Cd => "cd [path]",
            Command::Mkdir => "mkdir <path>",
            Command::Chmod => "chmod <mode> <path>",
            Command::History => "history",
            Command::Exit => "exit",
            Command::Cat => "cat <file>",
            Command::Pwd => "pwd",
            Command::Help => "help",
            Command::Date => "date",
            Command::Cal => "cal [month [year]] | cal year month",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Command::Ls => "list a directory (with modes) or name a file",
            Command::Cd => "change directory (default /)",
            Command::Mkdir => "create one directory, in memory only",
            Command::Chmod => "relabel a node's octal mode, e.g. 755",
            Command::History => "show session history",
            Command::Exit => "end the session",
            Command::Cat => "print a file",
            Command::Pwd => "print the current directory",
            Command::Help => "show this help",
            Command::Date => "show the current date and time",
            Command::Cal => "show a month calendar",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a first word that names no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Run `command` with its arguments (command name excluded).
pub fn dispatch(command: Command, args: &[String], ctx: &mut ExecContext) -> ExecResult {
    match command {
        Command::Ls => builtin::ls::run(args, ctx),
        Command::Cd => builtin::cd::run(args, ctx),
        Command::Mkdir => builtin::mkdir::run(args, ctx),
        Command::Chmod => builtin::chmod::run(args, ctx),
        Command::History => builtin::history::run(args, ctx),
        Command::Exit => builtin::exit::run(args, ctx),
        Command::Cat => builtin::cat::run(args, ctx),
        Command::Pwd => builtin::pwd::run(args, ctx),
        Command::Help => builtin::help::run(args, ctx),
        Command::Date => builtin::date::run(args, ctx),
        Command::Cal => builtin::cal::run(args, ctx),
    }
}

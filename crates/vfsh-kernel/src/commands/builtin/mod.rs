//! Builtin command implementations.
//!
//! Each command exposes `run(args, ctx) -> ExecResult`; `args` excludes the
//! command name. Commands check their own argument shape and report failures
//! as `<name>: <detail>` messages.

pub mod cal;
pub mod cat;
pub mod cd;
pub mod chmod;
pub mod date;
pub mod exit;
pub mod help;
pub mod history;
pub mod ls;
pub mod mkdir;
pub mod pwd;

use crate::interpreter::ExecResult;

/// Standard failure for commands that take no arguments.
fn reject_args(name: &str, args: &[String]) -> Option<ExecResult> {
    (!args.is_empty()).then(|| {
        ExecResult::failure(ExecResult::FAILURE, format!("{name}: unexpected arguments"))
    })
}

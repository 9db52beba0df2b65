//! exit: End the session.

use super::reject_args;
use crate::commands::ExecContext;
use crate::interpreter::ExecResult;

pub fn run(args: &[String], _ctx: &mut ExecContext) -> ExecResult {
    if let Some(err) = reject_args("exit", args) {
        return err;
    }
    ExecResult::exit("Exiting...")
}

//! pwd: Print working directory.

use super::reject_args;
use crate::commands::ExecContext;
use crate::interpreter::ExecResult;

pub fn run(args: &[String], ctx: &mut ExecContext) -> ExecResult {
    if let Some(err) = reject_args("pwd", args) {
        return err;
    }
    ExecResult::success(ctx.current_path())
}

//! mkdir: Create a directory in the in-memory tree.

use crate::commands::ExecContext;
use crate::interpreter::ExecResult;
use crate::vfs;

/// Create exactly one directory. Intermediate directories are never created.
pub fn run(args: &[String], ctx: &mut ExecContext) -> ExecResult {
    let [path] = args else {
        return ExecResult::failure(ExecResult::FAILURE, "mkdir: usage: mkdir <path>");
    };

    match vfs::mkdir(ctx.vfs, *ctx.cwd, path) {
        Ok(id) => ExecResult::success(format!("mkdir: created '{}'", ctx.vfs.path_of(id))),
        Err(e) => ExecResult::failure(
            ExecResult::FAILURE,
            format!("mkdir: cannot create directory '{}': {}", path, e.reason()),
        ),
    }
}

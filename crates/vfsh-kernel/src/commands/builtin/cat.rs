//! cat: Print a file's content.

use crate::commands::ExecContext;
use crate::interpreter::ExecResult;

pub fn run(args: &[String], ctx: &mut ExecContext) -> ExecResult {
    let [path] = args else {
        return ExecResult::failure(ExecResult::FAILURE, "cat: usage: cat <file>");
    };

    let content = ctx
        .resolve(path)
        .and_then(|id| ctx.vfs.read_file(id).map(str::to_string));
    match content {
        Ok(content) => ExecResult::success(content),
        Err(e) => ExecResult::failure(ExecResult::FAILURE, format!("cat: {}: {}", path, e.reason())),
    }
}

//! ls: List directory contents.

use crate::commands::ExecContext;
use crate::interpreter::ExecResult;

/// List the children of the target directory (default: cwd), one per line as
/// `name[/]<TAB>mode`. A file target prints only its name.
pub fn run(args: &[String], ctx: &mut ExecContext) -> ExecResult {
    if args.len() > 1 {
        return ExecResult::failure(ExecResult::FAILURE, "ls: too many arguments");
    }

    let target = match args.first() {
        None => ctx.cwd(),
        Some(path) => match ctx.resolve(path) {
            Ok(id) => id,
            Err(e) => {
                return ExecResult::failure(
                    ExecResult::FAILURE,
                    format!("ls: cannot access '{}': {}", path, e.reason()),
                );
            }
        },
    };

    let node = ctx.vfs.node(target);
    if node.is_file() {
        return ExecResult::success(node.name());
    }

    let lines: Vec<String> = node
        .children()
        .map(|(name, id)| {
            let child = ctx.vfs.node(id);
            format!("{}{}\t{}", name, child.kind().suffix(), child.mode())
        })
        .collect();
    ExecResult::success(lines.join("\n"))
}

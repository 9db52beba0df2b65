//! history: Show the session's command history.

use super::reject_args;
use crate::commands::ExecContext;
use crate::interpreter::ExecResult;

/// Print every recorded line, numbered from 1. The `history` line itself is
/// already recorded when this runs, so it is always the last entry.
pub fn run(args: &[String], ctx: &mut ExecContext) -> ExecResult {
    if let Some(err) = reject_args("history", args) {
        return err;
    }
    ExecResult::success(ctx.history.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;

    #[test]
    fn test_history_lists_entries() {
        let mut fx = Fixture::new();
        fx.history.push("ls");
        fx.history.push("cd docs");
        fx.history.push("history");
        let result = fx.run(run, &[]);
        assert!(result.ok());
        assert_eq!(result.out, "1  ls\n2  cd docs\n3  history");
    }

    #[test]
    fn test_history_rejects_args() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["-c"]);
        assert_eq!(result.err, "history: unexpected arguments");
    }
}

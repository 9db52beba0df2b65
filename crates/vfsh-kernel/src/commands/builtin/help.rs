//! help: List the available commands.

use super::reject_args;
use crate::commands::{Command, ExecContext};
use crate::interpreter::ExecResult;

pub fn run(args: &[String], _ctx: &mut ExecContext) -> ExecResult {
    if let Some(err) = reject_args("help", args) {
        return err;
    }

    let width = Command::ALL
        .iter()
        .map(|cmd| cmd.usage().len())
        .max()
        .unwrap_or(0);
    let mut out = String::from("Commands:");
    for cmd in Command::ALL {
        out.push_str(&format!("\n  {:<width$}  {}", cmd.usage(), cmd.summary()));
    }
    ExecResult::success(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;

    #[test]
    fn test_help_lists_every_command() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &[]);
        assert!(result.ok());
        assert!(result.out.starts_with("Commands:"));
        for cmd in Command::ALL {
            assert!(result.out.contains(cmd.usage()), "missing {cmd}");
        }
        assert_eq!(result.out.lines().count(), Command::ALL.len() + 1);
    }
}

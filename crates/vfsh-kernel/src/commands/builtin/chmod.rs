//! chmod: Relabel a node's permission mode.
//!
//! Modes are always octal (`755`, `0644`, `0o700`). The mode is metadata
//! only; nothing in the shell enforces it.

use crate::commands::ExecContext;
use crate::interpreter::ExecResult;
use crate::vfs::{self, VfsError};

pub fn run(args: &[String], ctx: &mut ExecContext) -> ExecResult {
    let [mode, path] = args else {
        return ExecResult::failure(ExecResult::FAILURE, "chmod: usage: chmod <mode> <path>");
    };

    match vfs::chmod(ctx.vfs, *ctx.cwd, mode, path) {
        Ok(id) => {
            let node = ctx.vfs.node(id);
            ExecResult::success(format!(
                "chmod: changed mode of '{}' to {}",
                ctx.vfs.path_of(id),
                node.mode()
            ))
        }
        Err(VfsError::InvalidMode(_)) => {
            ExecResult::failure(ExecResult::FAILURE, format!("chmod: invalid mode: '{mode}'"))
        }
        Err(e) => ExecResult::failure(
            ExecResult::FAILURE,
            format!("chmod: cannot access '{}': {}", path, e.reason()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;
    use rstest::rstest;

    #[rstest]
    #[case("755", 0o755, "0755 (rwxr-xr-x)")]
    #[case("0700", 0o700, "0700 (rwx------)")]
    #[case("0o644", 0o644, "0644 (rw-r--r--)")]
    #[case("0", 0, "0000 (---------)")]
    fn test_chmod_sets_mode(#[case] mode: &str, #[case] bits: u16, #[case] shown: &str) {
        let mut fx = Fixture::new();
        let result = fx.run(run, &[mode, "motd"]);
        assert!(result.ok(), "{}", result.err);
        assert_eq!(
            result.out,
            format!("chmod: changed mode of '/motd' to {shown}")
        );
        let id = fx.vfs.resolve(fx.cwd, "/motd").unwrap();
        assert_eq!(fx.vfs.node(id).mode().bits(), bits);
    }

    #[test]
    fn test_chmod_directory() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["700", "/docs/notes"]);
        assert_eq!(
            result.out,
            "chmod: changed mode of '/docs/notes' to 0700 (rwx------)"
        );
    }

    #[rstest]
    #[case("999")]
    #[case("rwx")]
    #[case("1000")]
    #[case("")]
    #[case("u+x")]
    fn test_chmod_invalid_mode(#[case] mode: &str) {
        let mut fx = Fixture::new();
        let result = fx.run(run, &[mode, "motd"]);
        assert!(!result.ok());
        assert_eq!(result.err, format!("chmod: invalid mode: '{mode}'"));
        let id = fx.vfs.resolve(fx.cwd, "/motd").unwrap();
        assert_eq!(fx.vfs.node(id).mode().bits(), 0o644);
    }

    #[test]
    fn test_chmod_bad_mode_reported_before_path() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["999", "nope"]);
        assert_eq!(result.err, "chmod: invalid mode: '999'");
    }

    #[test]
    fn test_chmod_missing_path() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["755", "nope"]);
        assert_eq!(
            result.err,
            "chmod: cannot access 'nope': No such file or directory"
        );
    }

    #[test]
    fn test_chmod_usage() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run(run, &["755"]).err, "chmod: usage: chmod <mode> <path>");
    }
}

//! cd: Change working directory.

use crate::commands::ExecContext;
use crate::interpreter::ExecResult;
use crate::vfs::VfsError;

/// Change the current directory. With no argument, go to the root.
pub fn run(args: &[String], ctx: &mut ExecContext) -> ExecResult {
    if args.len() > 1 {
        return ExecResult::failure(ExecResult::FAILURE, "cd: too many arguments");
    }
    let target = args.first().map(String::as_str).unwrap_or("/");

    match ctx.resolve(target) {
        Ok(id) if ctx.vfs.node(id).is_dir() => {
            ctx.set_cwd(id);
            ExecResult::success("")
        }
        Ok(_) | Err(VfsError::NotADirectory(_)) => {
            ExecResult::failure(ExecResult::FAILURE, format!("cd: not a directory: {target}"))
        }
        Err(_) => ExecResult::failure(
            ExecResult::FAILURE,
            format!("cd: no such file or directory: {target}"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;

    #[test]
    fn test_cd_subdir() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["docs"]);
        assert!(result.ok());
        assert_eq!(result.out, "");
        assert_eq!(fx.cwd_path(), "/docs");
    }

    #[test]
    fn test_cd_default_is_root() {
        let mut fx = Fixture::new();
        fx.chdir("/docs/notes");
        assert!(fx.run(run, &[]).ok());
        assert_eq!(fx.cwd_path(), "/");
    }

    #[test]
    fn test_cd_dotdot_and_slash() {
        let mut fx = Fixture::new();
        fx.run(run, &["docs"]);
        fx.run(run, &[".."]);
        assert_eq!(fx.cwd_path(), "/");
        fx.run(run, &["/docs/notes"]);
        fx.run(run, &["/"]);
        assert_eq!(fx.cwd_path(), "/");
    }

    #[test]
    fn test_cd_file_fails() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["motd"]);
        assert!(!result.ok());
        assert_eq!(result.err, "cd: not a directory: motd");
        assert_eq!(fx.cwd_path(), "/");
    }

    #[test]
    fn test_cd_through_file_fails() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["motd/inner"]);
        assert_eq!(result.err, "cd: not a directory: motd/inner");
    }

    #[test]
    fn test_cd_nonexistent() {
        let mut fx = Fixture::new();
        fx.chdir("docs");
        let result = fx.run(run, &["nowhere"]);
        assert_eq!(result.err, "cd: no such file or directory: nowhere");
        assert_eq!(fx.cwd_path(), "/docs");
    }

    #[test]
    fn test_cd_too_many_args() {
        let mut fx = Fixture::new();
        let result = fx.run(run, &["docs", "motd"]);
        assert_eq!(result.err, "cd: too many arguments");
        assert_eq!(fx.cwd_path(), "/");
    }
}

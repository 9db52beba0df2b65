//! Line interpreter for vfsh.
//!
//! One line goes through four stages:
//!
//! ```text
//! raw line ──► expand $NAME ──► split into words ──► Command::from_str(word[0])
//!                                                          └── dispatch(args) ──► ExecResult
//! ```
//!
//! Nothing here returns a Rust error: parse failures, unknown commands and
//! command failures all come back as an [`ExecResult`] with a non-zero code.

mod result;

pub use result::{Control, ExecResult};

use tracing::instrument;

use crate::commands::{self, Command, ExecContext};
use crate::expand::{env_lookup, expand_vars};
use crate::history::History;
use crate::lexer::split_words;
use crate::vfs::{NodeId, Vfs};

/// Variable lookup used by `$NAME` expansion.
pub type Lookup = fn(&str) -> Option<String>;

/// Interpreter state: the tree, the current directory and the history.
#[derive(Debug, Clone)]
pub struct Interpreter {
    vfs: Vfs,
    cwd: NodeId,
    history: History,
    lookup: Lookup,
}

impl Interpreter {
    /// Start at the root of `vfs`, expanding variables from the process
    /// environment.
    pub fn new(vfs: Vfs) -> Self {
        Self::with_lookup(vfs, env_lookup)
    }

    /// Start at the root of `vfs` with a custom variable source.
    pub fn with_lookup(vfs: Vfs, lookup: Lookup) -> Self {
        Self {
            cwd: vfs.root(),
            vfs,
            history: History::new(),
            lookup,
        }
    }

    /// Execute one line.
    ///
    /// A blank line does nothing and is not recorded. Any other line is
    /// recorded verbatim before it runs, so `history` sees itself and failed
    /// lines are kept too.
    #[instrument(level = "debug", skip(self), fields(cwd = %self.current_path()))]
    pub fn execute(&mut self, line: &str) -> ExecResult {
        if line.trim().is_empty() {
            return ExecResult::success("");
        }
        self.history.push(line);

        let expanded = expand_vars(line, self.lookup);
        let words = match split_words(&expanded) {
            Ok(words) => words,
            Err(e) => {
                tracing::debug!(error = %e, "line did not tokenize");
                return ExecResult::failure(ExecResult::PARSE_ERROR, format!("parse error: {e}"));
            }
        };

        let Some((name, args)) = words.split_first() else {
            // Only reachable when expansion erased everything, e.g. `$EMPTY`.
            return ExecResult::success("");
        };

        let command = match name.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => return ExecResult::failure(ExecResult::NOT_FOUND, unknown.to_string()),
        };

        let mut ctx = ExecContext::new(&mut self.vfs, &mut self.cwd, &self.history);
        let result = commands::dispatch(command, args, &mut ctx);
        tracing::debug!(%command, code = result.code, "executed");
        result
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Absolute path of the current directory.
    pub fn current_path(&self) -> String {
        self.vfs.path_of(self.cwd)
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vfs {
        let mut vfs = Vfs::new();
        let root = vfs.root();
        let docs = vfs.add_directory(root, "docs").unwrap();
        vfs.add_file(docs, "readme.txt", "read me\n").unwrap();
        vfs.add_file(root, "motd", "hello\n").unwrap();
        vfs
    }

    fn fake_env(name: &str) -> Option<String> {
        match name {
            "DIR" => Some("docs".to_string()),
            "SPACED" => Some("a b".to_string()),
            "EMPTY" => Some(String::new()),
            _ => None,
        }
    }

    fn interp() -> Interpreter {
        Interpreter::with_lookup(sample(), fake_env)
    }

    #[test]
    fn test_starts_at_root() {
        let interp = interp();
        assert_eq!(interp.current_path(), "/");
        assert_eq!(interp.cwd(), interp.vfs().root());
        assert!(interp.history().is_empty());
    }

    #[test]
    fn test_blank_line_not_recorded() {
        let mut interp = interp();
        let result = interp.execute("   \t ");
        assert!(result.ok());
        assert!(interp.history().is_empty());
    }

    #[test]
    fn test_dispatches_commands() {
        let mut interp = interp();
        assert!(interp.execute("cd docs").ok());
        assert_eq!(interp.current_path(), "/docs");
        assert_eq!(interp.execute("ls").out, "readme.txt\t0644 (rw-r--r--)");
    }

    #[test]
    fn test_expands_variables() {
        let mut interp = interp();
        assert!(interp.execute("cd $DIR").ok());
        assert_eq!(interp.current_path(), "/docs");
    }

    #[test]
    fn test_expansion_happens_before_splitting() {
        let mut interp = interp();
        let result = interp.execute("cd $SPACED");
        assert_eq!(result.err, "cd: too many arguments");
    }

    #[test]
    fn test_unset_variable_kept_verbatim() {
        let mut interp = interp();
        let result = interp.execute("cd $NOPE");
        assert_eq!(result.err, "cd: no such file or directory: $NOPE");
    }

    #[test]
    fn test_line_that_expands_to_nothing() {
        let mut interp = interp();
        let result = interp.execute("$EMPTY");
        assert!(result.ok());
        assert_eq!(interp.history().len(), 1);
    }

    #[test]
    fn test_unknown_command() {
        let mut interp = interp();
        let result = interp.execute("rm -rf /");
        assert_eq!(result.code, ExecResult::NOT_FOUND);
        assert_eq!(result.err, "Unknown command: rm");
        assert_eq!(interp.history().entries(), ["rm -rf /"]);
    }

    #[test]
    fn test_parse_error() {
        let mut interp = interp();
        let result = interp.execute("cd 'docs");
        assert_eq!(result.code, ExecResult::PARSE_ERROR);
        assert_eq!(result.err, "parse error: no closing quotation");
        assert_eq!(interp.current_path(), "/");
        assert_eq!(interp.history().len(), 1);
    }

    #[test]
    fn test_quoted_arguments() {
        let mut interp = interp();
        let result = interp.execute("cat \"docs/readme.txt\"");
        assert_eq!(result.out, "read me\n");
    }

    #[test]
    fn test_history_includes_itself() {
        let mut interp = interp();
        interp.execute("pwd");
        interp.execute("bogus");
        let result = interp.execute("history");
        assert_eq!(result.out, "1  pwd\n2  bogus\n3  history");
    }

    #[test]
    fn test_exit_signals_control() {
        let mut interp = interp();
        let result = interp.execute("exit");
        assert!(result.is_exit());
        assert_eq!(result.out, "Exiting...");
    }
}

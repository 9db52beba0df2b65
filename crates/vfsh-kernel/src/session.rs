//! Session runner: feeds lines to the interpreter and renders the results.
//!
//! A session is driven either one line at a time ([`Session::submit`], used
//! by the REPL) or from a script file ([`Session::run_script`]), which
//! yields one [`ScriptStep`] per non-blank line so the caller decides how to
//! echo and print.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ShellConfig;
use crate::history::History;
use crate::ingest::{self, IngestError};
use crate::interpreter::{ExecResult, Interpreter};
use crate::vfs::{NodeId, Vfs};

/// Name of the root-level file shown as a banner.
pub const MOTD_FILE: &str = "motd";

/// Failures starting a script run.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("cannot read script {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What the user sees after one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Output then error text, newline-joined. Empty when there is nothing to show.
    pub text: String,
    /// Prompt label for the next line.
    pub prompt: String,
    pub ok: bool,
    /// The line ran `exit`.
    pub exit: bool,
}

/// One executed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    /// 1-based line number in the script file.
    pub line_no: usize,
    pub line: String,
    /// Prompt in effect when the line ran, for echoing `<prompt><line>`.
    pub prompt: String,
    pub rendered: Rendered,
}

/// One running interpreter instance.
#[derive(Debug, Clone)]
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    pub fn new(vfs: Vfs) -> Self {
        Self::with_interpreter(Interpreter::new(vfs))
    }

    /// Wrap an already configured interpreter.
    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Self { interpreter }
    }

    /// Ingest `config.source` and start a session at its root.
    pub fn from_config(config: &ShellConfig) -> Result<Self, IngestError> {
        ingest::load(&config.source).map(Self::new)
    }

    /// Execute one line.
    pub fn submit(&mut self, line: &str) -> Rendered {
        let result = self.interpreter.execute(line);
        self.render(&result)
    }

    /// Start running the script at `path`.
    ///
    /// Only opening the file can fail. The returned iterator executes one line
    /// per `next()` call and stops after an `exit` line or at end of file.
    #[tracing::instrument(level = "info", skip(self), fields(script = %path.display()))]
    pub fn run_script(&mut self, path: &Path) -> Result<ScriptRun<'_>, SessionError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SessionError::ScriptNotFound(path.to_path_buf()),
            _ => SessionError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Ok(ScriptRun {
            session: self,
            lines: BufReader::new(file).lines(),
            line_no: 0,
            done: false,
        })
    }

    /// Prompt label: `vfs:<path>> `.
    pub fn prompt(&self) -> String {
        format!("vfs:{}> ", self.current_path())
    }

    pub fn current_path(&self) -> String {
        self.interpreter.current_path()
    }

    pub fn history(&self) -> &History {
        self.interpreter.history()
    }

    pub fn vfs(&self) -> &Vfs {
        self.interpreter.vfs()
    }

    pub fn cwd(&self) -> NodeId {
        self.interpreter.cwd()
    }

    /// Content of the root-level `motd` file, if there is one.
    pub fn motd(&self) -> Option<&str> {
        let vfs = self.vfs();
        vfs.node(vfs.root())
            .child(MOTD_FILE)
            .and_then(|id| vfs.node(id).content())
    }

    fn render(&self, result: &ExecResult) -> Rendered {
        Rendered {
            text: result.text(),
            prompt: self.prompt(),
            ok: result.ok(),
            exit: result.is_exit(),
        }
    }
}

/// Lazy execution of a script file. See [`Session::run_script`].
pub struct ScriptRun<'a> {
    session: &'a mut Session,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    done: bool,
}

impl Iterator for ScriptRun<'_> {
    type Item = ScriptStep;

    fn next(&mut self) -> Option<ScriptStep> {
        while !self.done {
            let raw = self.lines.next()?;
            self.line_no += 1;
            let prompt = self.session.prompt();

            let line = match raw {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    tracing::warn!(line_no = self.line_no, error = %e, "script read failed");
                    return Some(ScriptStep {
                        line_no: self.line_no,
                        line: String::new(),
                        rendered: Rendered {
                            text: format!("[script:{}] read error: {}", self.line_no, e),
                            prompt: prompt.clone(),
                            ok: false,
                            exit: false,
                        },
                        prompt,
                    });
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            let mut rendered = self.session.submit(&line);
            if !rendered.ok {
                rendered.text = format!("[script:{}] {}", self.line_no, rendered.text);
            }
            if rendered.exit {
                self.done = true;
            }
            return Some(ScriptStep {
                line_no: self.line_no,
                line,
                prompt,
                rendered,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut vfs = Vfs::new();
        let root = vfs.root();
        let docs = vfs.add_directory(root, "docs").unwrap();
        vfs.add_file(docs, "readme.txt", "read me\n").unwrap();
        vfs.add_file(root, "motd", "Welcome\n").unwrap();
        Session::new(vfs)
    }

    #[test]
    fn test_prompt_tracks_cwd() {
        let mut session = session();
        assert_eq!(session.prompt(), "vfs:/> ");
        let rendered = session.submit("cd docs");
        assert!(rendered.ok);
        assert_eq!(rendered.text, "");
        assert_eq!(rendered.prompt, "vfs:/docs> ");
    }

    #[test]
    fn test_blank_submit_renders_nothing() {
        let mut session = session();
        let rendered = session.submit("");
        assert_eq!(rendered.text, "");
        assert!(rendered.ok);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_failure_text() {
        let mut session = session();
        let rendered = session.submit("cd motd");
        assert!(!rendered.ok);
        assert_eq!(rendered.text, "cd: not a directory: motd");
        assert_eq!(rendered.prompt, "vfs:/> ");
    }

    #[test]
    fn test_exit_flag() {
        let mut session = session();
        let rendered = session.submit("exit");
        assert!(rendered.exit);
        assert_eq!(rendered.text, "Exiting...");
    }

    #[test]
    fn test_motd() {
        assert_eq!(session().motd(), Some("Welcome\n"));
        assert_eq!(Session::new(Vfs::new()).motd(), None);
    }

    #[test]
    fn test_motd_directory_is_ignored() {
        let mut vfs = Vfs::new();
        let root = vfs.root();
        vfs.add_directory(root, "motd").unwrap();
        assert_eq!(Session::new(vfs).motd(), None);
    }

    #[test]
    fn test_missing_script() {
        let mut session = session();
        let err = session
            .run_script(Path::new("/definitely/not/here.vsh"))
            .err()
            .unwrap();
        assert!(matches!(err, SessionError::ScriptNotFound(_)));
    }
}

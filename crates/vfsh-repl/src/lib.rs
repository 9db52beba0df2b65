//! vfsh REPL: interactive shell and script runner over an in-memory VFS.
//!
//! This REPL provides an interactive interface to a vfsh [`Session`].
//! It handles:
//! - Startup: ingestion, the `motd` banner, an optional startup script
//! - Line editing and arrow-key recall via rustyline (history is not persisted)
//! - Output formatting for terminals and pipes

pub mod format;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use vfsh_kernel::{Session, ShellConfig};

use crate::format::{OutputContext, detect_context, ensure_newline, format_banner, format_echo, format_output};

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading, printing the text if any.
    Continue(Option<String>),
    /// Stop after printing the text.
    Exit(Option<String>),
}

/// REPL state.
pub struct Repl {
    session: Session,
    context: OutputContext,
}

impl Repl {
    /// Wrap an existing session. Output is formatted for pipes.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            context: OutputContext::Piped,
        }
    }

    /// Ingest `config.source` and start a REPL over it.
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        let session = Session::from_config(config)
            .with_context(|| format!("Failed to load VFS from {}", config.source.display()))?;
        Ok(Self::new(session))
    }

    /// Format output for the given context.
    pub fn with_output(mut self, context: OutputContext) -> Self {
        self.context = context;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let rendered = self.session.submit(line);
        let text = format_output(&rendered, self.context);
        if rendered.exit {
            LineOutcome::Exit(text)
        } else {
            LineOutcome::Continue(text)
        }
    }

    /// Run a script, echoing each line as `<prompt><line>` followed by its
    /// output. Returns `true` if the script ran `exit`.
    pub fn run_script(&mut self, path: &Path, out: &mut impl Write) -> Result<bool> {
        let context = self.context;
        let steps = self
            .session
            .run_script(path)
            .with_context(|| format!("Failed to run script {}", path.display()))?;

        let mut exited = false;
        for step in steps {
            writeln!(out, "{}", format_echo(&step))?;
            if let Some(text) = format_output(&step.rendered, context) {
                out.write_all(ensure_newline(&text).as_bytes())?;
            }
            exited = step.rendered.exit;
        }
        out.flush()?;
        Ok(exited)
    }
}

/// Run the shell described by `config`: banner, startup script, then the
/// interactive loop unless the script ran `exit`. A script that cannot be
/// opened is reported and skipped.
pub fn run(config: &ShellConfig) -> Result<()> {
    let mut repl = Repl::from_config(config)?.with_output(detect_context());
    let mut stdout = std::io::stdout();

    if config.show_motd {
        if let Some(motd) = repl.session().motd() {
            print!("{}", format_banner(motd));
        }
    }

    // A bad script is reported and the prompt still starts. Only loading is fatal.
    if let Some(script) = &config.script {
        match repl.run_script(script, &mut stdout) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("startup script failed: {e:#}");
                println!("[error] {e:#}");
            }
        }
    }

    let mut rl = DefaultEditor::new().context("Failed to create editor")?;

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("Failed to add history entry: {}", e);
                    }
                }

                match repl.process_line(&line) {
                    LineOutcome::Continue(text) => print_text(text.as_deref()),
                    LineOutcome::Exit(text) => {
                        print_text(text.as_deref());
                        return Ok(());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_text(text: Option<&str>) {
    if let Some(text) = text {
        print!("{}", ensure_newline(text));
    }
}

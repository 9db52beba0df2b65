//! Output formatting for the REPL.
//!
//! The kernel renders plain text. This module decides how that text reaches
//! the user:
//!
//! - **Interactive** → directory entries in `ls` listings are colored
//! - **Piped** → text passes through untouched, so scripts and tests can
//!   compare output byte for byte

use std::io::IsTerminal;

use vfsh_kernel::{Rendered, ScriptStep};

/// Who is reading the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputContext {
    Interactive,
    Piped,
}

/// Detect the output context based on terminal state.
pub fn detect_context() -> OutputContext {
    if std::io::stdout().is_terminal() && colors_allowed() {
        OutputContext::Interactive
    } else {
        OutputContext::Piped
    }
}

/// Respect `NO_COLOR` and `TERM=dumb`.
fn colors_allowed() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false)
}

/// Text to print for a rendered line, `None` when there is nothing to show.
pub fn format_output(rendered: &Rendered, context: OutputContext) -> Option<String> {
    if rendered.text.is_empty() {
        return None;
    }
    match context {
        OutputContext::Piped => Some(rendered.text.clone()),
        OutputContext::Interactive if rendered.ok => Some(
            rendered
                .text
                .lines()
                .map(colorize_listing_line)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        OutputContext::Interactive => Some(colorize_error(&rendered.text)),
    }
}

/// Echo of a script line as the user would have typed it.
pub fn format_echo(step: &ScriptStep) -> String {
    format!("{}{}", step.prompt, step.line)
}

/// `motd` banner, newline-terminated.
pub fn format_banner(motd: &str) -> String {
    ensure_newline(motd)
}

/// Append a newline unless `text` already ends with one.
pub fn ensure_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

/// Color the name of a `name/<TAB>mode` listing line.
fn colorize_listing_line(line: &str) -> String {
    use owo_colors::OwoColorize;

    match line.split_once('\t') {
        Some((name, mode)) if name.ends_with('/') => {
            format!("{}\t{}", name.blue().bold(), mode)
        }
        _ => line.to_string(),
    }
}

fn colorize_error(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.red().to_string()
}

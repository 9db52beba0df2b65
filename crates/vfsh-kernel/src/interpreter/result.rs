//! ExecResult: the structured result of every command execution.
//!
//! Command failures never escape the interpreter as Rust errors. They come
//! back as an `ExecResult` with a non-zero `code` and the message in `err`,
//! and the session carries on.

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Control {
    #[default]
    Continue,
    /// `exit` was run; the session loop should stop.
    Exit,
}

/// The result of executing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Normal output.
    pub out: String,
    /// Error output.
    pub err: String,
    pub control: Control,
}

impl ExecResult {
    /// Exit code for command errors (bad arguments, unresolvable paths).
    pub const FAILURE: i64 = 1;
    /// Exit code for lines that do not tokenize.
    pub const PARSE_ERROR: i64 = 2;
    /// Exit code for unknown commands.
    pub const NOT_FOUND: i64 = 127;

    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
            control: Control::Continue,
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
            control: Control::Continue,
        }
    }

    /// Successful result that ends the session.
    pub fn exit(out: impl Into<String>) -> Self {
        Self {
            control: Control::Exit,
            ..Self::success(out)
        }
    }

    /// True if the exit code is 0.
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    pub fn is_exit(&self) -> bool {
        self.control == Control::Exit
    }

    /// Output followed by error text, newline-separated, empty parts skipped.
    pub fn text(&self) -> String {
        match (self.out.is_empty(), self.err.is_empty()) {
            (_, true) => self.out.clone(),
            (true, false) => self.err.clone(),
            (false, false) => format!("{}\n{}", self.out, self.err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = ExecResult::success("hello");
        assert!(result.ok());
        assert!(!result.is_exit());
        assert_eq!(result.text(), "hello");
    }

    #[test]
    fn test_failure() {
        let result = ExecResult::failure(ExecResult::FAILURE, "cd: nope");
        assert!(!result.ok());
        assert_eq!(result.code, 1);
        assert_eq!(result.text(), "cd: nope");
    }

    #[test]
    fn test_exit() {
        let result = ExecResult::exit("Exiting...");
        assert!(result.ok());
        assert!(result.is_exit());
    }

    #[test]
    fn test_text_joins_out_and_err() {
        let result = ExecResult {
            code: 1,
            out: "partial".into(),
            err: "boom".into(),
            control: Control::Continue,
        };
        assert_eq!(result.text(), "partial\nboom");
        assert_eq!(ExecResult::success("").text(), "");
    }
}

//! Session configuration.

use std::path::PathBuf;

/// Configuration for one shell session.
///
/// Built once from the command line and passed by reference to
/// [`Session::from_config`](crate::session::Session::from_config) and the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Real directory snapshotted into the VFS at startup.
    pub source: PathBuf,

    /// Script to run before (or instead of) the interactive prompt.
    pub script: Option<PathBuf>,

    /// Print the root `motd` file as a banner when the REPL starts.
    pub show_motd: bool,
}

impl ShellConfig {
    /// Config for `source` with no script and the banner enabled.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            script: None,
            show_motd: true,
        }
    }

    /// Set the startup script.
    pub fn with_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Enable or disable the motd banner.
    pub fn with_motd(mut self, show: bool) -> Self {
        self.show_motd = show;
        self
    }
}

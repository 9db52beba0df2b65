//! vfsh CLI entry point.
//!
//! Usage:
//!   vfsh --vfs <dir>                     # Interactive shell over <dir>
//!   vfsh --vfs <dir> --script <file>     # Run a script, then continue interactively
//!   vfsh --vfs <dir> --no-motd           # Skip the motd banner

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vfsh_kernel::ShellConfig;

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with shell output (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Version,
    Shell(ShellConfig),
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();

    match parse_args(&args)? {
        Invocation::Help => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }
        Invocation::Version => {
            println!("vfsh {} ({})", env!("CARGO_PKG_VERSION"), env!("VFSH_BUILD_INFO"));
            Ok(ExitCode::SUCCESS)
        }
        Invocation::Shell(config) => {
            vfsh_repl::run(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut source = None;
    let mut script = None;
    let mut show_motd = true;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Invocation::Help),
            "--version" | "-V" => return Ok(Invocation::Version),
            "--no-motd" => show_motd = false,
            "--vfs" => {
                source = Some(iter.next().context("--vfs requires a directory argument")?.clone());
            }
            "--script" => {
                script = Some(iter.next().context("--script requires a file argument")?.clone());
            }
            other => {
                if let Some(dir) = other.strip_prefix("--vfs=") {
                    source = Some(dir.to_string());
                } else if let Some(file) = other.strip_prefix("--script=") {
                    script = Some(file.to_string());
                } else {
                    bail!("Unknown option: {other}\nRun 'vfsh --help' for usage.");
                }
            }
        }
    }

    let source = source.context("--vfs <DIR> is required\nRun 'vfsh --help' for usage.")?;
    let mut config = ShellConfig::new(source).with_motd(show_motd);
    if let Some(script) = script {
        config = config.with_script(script);
    }
    Ok(Invocation::Shell(config))
}

fn print_help() {
    println!(
        r#"vfsh v{}: a shell over an in-memory snapshot of a directory

Usage:
  vfsh --vfs <DIR> [--script <FILE>] [--no-motd]

Options:
  --vfs <DIR>                  Directory to load into the virtual filesystem
  --script <FILE>              Run FILE line by line before the prompt
  --no-motd                    Do not print the root motd file on startup
  -h, --help                   Show this help
  -V, --version                Show version

Changes made in the shell (mkdir, chmod) stay in memory; <DIR> is never written.
Set RUST_LOG=debug to trace loading and command execution on stderr.
"#,
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full() {
        let parsed = parse_args(&args(&["--vfs", "root", "--script", "s.vsh", "--no-motd"])).unwrap();
        assert_eq!(
            parsed,
            Invocation::Shell(ShellConfig::new("root").with_script("s.vsh").with_motd(false))
        );
    }

    #[test]
    fn test_parse_equals_forms() {
        let parsed = parse_args(&args(&["--vfs=root", "--script=s.vsh"])).unwrap();
        assert_eq!(
            parsed,
            Invocation::Shell(ShellConfig::new("root").with_script("s.vsh"))
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Invocation::Help);
        assert_eq!(parse_args(&args(&["-V"])).unwrap(), Invocation::Version);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--vfs"])).is_err());
        assert!(parse_args(&args(&["--vfs", "root", "--bogus"])).is_err());
    }
}

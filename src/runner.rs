//! Command-runner abstraction
//!
//! The dispatcher never spawns processes directly; it goes through
//! [`CommandRunner`] so tests can substitute a recording fake and command
//! assembly stays checkable without a real compiler or CMake install.

use crate::error::DispatchError;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Spawns child processes on behalf of the dispatcher
pub trait CommandRunner {
    /// Run `program args...` and capture its standard output
    fn capture_stdout(&self, program: &str, args: &[&str]) -> Result<String, DispatchError>;

    /// Run `argv` with `working_dir` as the child's working directory,
    /// inheriting the parent's standard streams, and return its exit status.
    ///
    /// The working directory is passed to the child explicitly; the invoking
    /// process's own working directory is never touched.
    fn run_in(&self, argv: &[String], working_dir: &Path) -> Result<ExitStatus, DispatchError>;
}

/// Real process execution via `std::process::Command`
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture_stdout(&self, program: &str, args: &[&str]) -> Result<String, DispatchError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DispatchError::ProbeFailed {
                command: format!("{} {}", program, args.join(" ")),
                source,
            })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run_in(&self, argv: &[String], working_dir: &Path) -> Result<ExitStatus, DispatchError> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            DispatchError::ToolSpawnFailed {
                command: String::new(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "empty command line",
                ),
            }
        })?;
        Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .status()
            .map_err(|source| DispatchError::ToolSpawnFailed {
                command: argv.join(" "),
                source,
            })
    }
}

//! Configuration dispatch
//!
//! Maps host platform + build configuration + optional sanitizer to one
//! CMake invocation. The flow is linear: ensure the out directory, probe
//! the compiler where the platform requires it, assemble the argument list,
//! run the tool with the out directory as its working directory.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::DispatchError;
use crate::platform::Platform;
use crate::runner::CommandRunner;
use crate::toolchain::ToolchainConfig;

/// Name of the generated-build-files directory under the source root
pub const OUT_DIR_NAME: &str = "out";

/// A fully assembled configuration run, ready to execute
#[derive(Debug, Clone, Serialize)]
pub struct ConfigureCommand {
    /// Tool binary followed by its arguments
    pub argv: Vec<String>,
    /// Working directory the tool runs in
    pub working_dir: PathBuf,
}

/// Create `path` and any missing parents
///
/// Idempotent: an existing directory is fine. A pre-existing non-directory
/// at `path` is an error.
pub fn ensure_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;
    Ok(())
}

/// Resolve the source tree as the parent of the running executable's directory
///
/// Mirrors the original layout where the dispatcher lives in a tool
/// subdirectory of the tree it configures.
pub fn default_source_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate own executable")?;
    let tool_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(tool_dir
        .parent()
        .unwrap_or(tool_dir)
        .to_path_buf())
}

/// Build the platform-specific argument list for the configuration tool
///
/// The Windows command carries only the generator, architecture, and source
/// path: selecting Release vs Debug happens inside Visual Studio, so
/// `config` and `sanitizer` are intentionally not forwarded on that branch.
pub fn assemble_command(
    platform: Platform,
    toolchain: &ToolchainConfig,
    config: &str,
    sanitizer: Option<&str>,
    source_dir: &Path,
) -> Result<Vec<String>, DispatchError> {
    let source = source_dir.to_string_lossy().into_owned();
    match platform {
        Platform::Windows => Ok(vec![
            toolchain.windows_tool.clone(),
            "-G".to_string(),
            toolchain.windows_generator.clone(),
            "-A".to_string(),
            toolchain.windows_arch.clone(),
            source,
        ]),
        Platform::Linux => {
            let mut argv = vec![
                toolchain.linux_tool.clone(),
                "-G".to_string(),
                toolchain.linux_generator.clone(),
                format!("-DCMAKE_BUILD_TYPE={}", config),
            ];
            if let Some(sanitizer) = sanitizer {
                argv.push(format!("-DSANITIZER={}", sanitizer));
            }
            argv.push(source);
            Ok(argv)
        }
        Platform::Unsupported => Err(DispatchError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        }),
    }
}

/// Verify the installed compiler reports the expected version
///
/// Returns an error the caller can print and act on instead of terminating
/// the process from inside the check.
pub fn check_compiler_version(
    toolchain: &ToolchainConfig,
    runner: &dyn CommandRunner,
) -> Result<(), DispatchError> {
    let output = runner.capture_stdout(&toolchain.compiler, &["--version"])?;
    debug!(compiler = %toolchain.compiler, output = %output.trim(), "compiler probe");
    if output.contains(&toolchain.expected_compiler_version) {
        Ok(())
    } else {
        Err(DispatchError::CompilerVersionMismatch {
            compiler: toolchain.compiler.clone(),
            expected: toolchain.expected_compiler_version.clone(),
            hint: toolchain.version_hint.clone(),
        })
    }
}

/// Prepare a configuration run without executing it
///
/// Ensures the out directory, runs the platform preconditions, and returns
/// the command the dispatcher would execute.
pub fn prepare(
    platform: Platform,
    toolchain: &ToolchainConfig,
    config: &str,
    sanitizer: Option<&str>,
    source_dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<ConfigureCommand> {
    let out_dir = source_dir.join(OUT_DIR_NAME);
    println!("{}", out_dir.display());

    ensure_directory(&out_dir)?;

    if platform == Platform::Linux {
        check_compiler_version(toolchain, runner)?;
    }

    let argv = assemble_command(platform, toolchain, config, sanitizer, source_dir)?;
    debug!(?argv, out_dir = %out_dir.display(), "assembled configuration command");

    Ok(ConfigureCommand {
        argv,
        working_dir: out_dir,
    })
}

/// Run the configuration tool for `config` (optionally with a sanitizer)
///
/// The tool inherits this process's standard streams and runs with the out
/// directory as its working directory; our own working directory is never
/// changed, so it is identical before and after the call on every path.
pub fn dispatch(
    platform: Platform,
    toolchain: &ToolchainConfig,
    config: &str,
    sanitizer: Option<&str>,
    source_dir: &Path,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let command = prepare(platform, toolchain, config, sanitizer, source_dir, runner)?;

    let status = runner.run_in(&command.argv, &command.working_dir)?;
    if !status.success() {
        return Err(DispatchError::ToolFailed { status }.into());
    }
    Ok(())
}

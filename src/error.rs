//! Error taxonomy for the configuration dispatcher

use thiserror::Error;

/// Errors raised while dispatching a configuration run
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unsupported platform: {os}. Supported platforms: windows, linux")]
    UnsupportedPlatform { os: String },

    #[error("### ERROR: expected {compiler} version {expected}\n### {hint}")]
    CompilerVersionMismatch {
        compiler: String,
        expected: String,
        hint: String,
    },

    #[error("Failed to run compiler probe `{command}`: {source}")]
    ProbeFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run configuration tool `{command}`: {source}")]
    ToolSpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration tool exited with {status}")]
    ToolFailed { status: std::process::ExitStatus },
}

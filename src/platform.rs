//! Host platform detection
//!
//! The dispatcher only distinguishes the platforms it can generate for.
//! Everything else is `Unsupported` and reported as an explicit error at
//! command-assembly time rather than silently producing no command.

use std::fmt;

/// Platforms the dispatcher knows how to configure for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Visual Studio generator, x64
    Windows,
    /// Makefile generator with a gcc version precondition
    Linux,
    /// Anything else (reported, never silently skipped)
    Unsupported,
}

impl Platform {
    /// Detect the platform the process is running on
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as reported by `std::env::consts::OS`) to a platform
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            _ => Platform::Unsupported,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
            Platform::Unsupported => write!(f, "unsupported"),
        }
    }
}

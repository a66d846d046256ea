//! Toolchain configuration
//!
//! Generator names, tool binaries, and the compiler version precondition are
//! configuration data, not dispatch logic. Defaults reproduce the historical
//! build setup (VS 2019 on Windows, Eclipse CDT4 Makefiles + gcc 8.3 on
//! Linux); any field can be overridden from a TOML file via `--toolchain`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Overridable toolchain settings consumed by the dispatcher
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Configuration tool binary on Windows
    pub windows_tool: String,
    /// Configuration tool binary on Linux (historically the `cmake3` alias)
    pub linux_tool: String,
    /// Generator passed via -G on Windows
    pub windows_generator: String,
    /// Target architecture passed via -A on Windows
    pub windows_arch: String,
    /// Generator passed via -G on Linux
    pub linux_generator: String,
    /// Compiler binary probed with `--version` before configuring on Linux
    pub compiler: String,
    /// Substring the probe output must contain
    pub expected_compiler_version: String,
    /// Remediation hint printed when the version check fails
    pub version_hint: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            windows_tool: "cmake".to_string(),
            linux_tool: "cmake3".to_string(),
            windows_generator: "Visual Studio 16 2019".to_string(),
            windows_arch: "x64".to_string(),
            linux_generator: "Eclipse CDT4 - Unix Makefiles".to_string(),
            compiler: "g++".to_string(),
            expected_compiler_version: "8.3".to_string(),
            version_hint: "Enable gcc 8 using:   scl enable devtoolset-8 bash".to_string(),
        }
    }
}

impl ToolchainConfig {
    /// Load overrides from a TOML file; absent fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read toolchain file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse toolchain file {}", path.display()))?;
        Ok(config)
    }
}

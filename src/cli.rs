//! CLI argument parsing for configen

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for --dry-run
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "configen")]
#[command(version)]
#[command(about = "CMake build-configuration dispatcher with toolchain validation", long_about = None)]
pub struct Cli {
    /// Build configuration to generate (e.g. Release, Debug)
    #[arg(value_name = "CONFIG", default_value = "Release")]
    pub config: String,

    /// Sanitizer to enable via -DSANITIZER (e.g. address, undefined); Linux only
    #[arg(short = 's', long = "sanitizer", value_name = "NAME")]
    pub sanitizer: Option<String>,

    /// Source tree to configure (default: parent of this executable's directory)
    #[arg(long = "source-dir", value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Toolchain overrides in TOML (generators, tool names, compiler version)
    #[arg(long = "toolchain", value_name = "FILE")]
    pub toolchain: Option<PathBuf>,

    /// Print the assembled command instead of running the configuration tool
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

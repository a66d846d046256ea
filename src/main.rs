use anyhow::Result;
use clap::Parser;
use configen::{
    cli::{Cli, OutputFormat},
    dispatch,
    platform::Platform,
    runner::SystemRunner,
    toolchain::ToolchainConfig,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print an assembled command without executing it
fn print_dry_run(command: &dispatch::ConfigureCommand, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("cd {}", command.working_dir.display());
            println!("{}", command.argv.join(" "));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(command)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let toolchain = if let Some(path) = &args.toolchain {
        ToolchainConfig::from_file(path)?
    } else {
        ToolchainConfig::default()
    };

    let source_dir = match args.source_dir {
        Some(dir) => dir,
        None => dispatch::default_source_dir()?,
    };

    let platform = Platform::host();
    let runner = SystemRunner;

    if args.dry_run {
        let command = dispatch::prepare(
            platform,
            &toolchain,
            &args.config,
            args.sanitizer.as_deref(),
            &source_dir,
            &runner,
        )?;
        print_dry_run(&command, args.format)?;
        return Ok(());
    }

    dispatch::dispatch(
        platform,
        &toolchain,
        &args.config,
        args.sanitizer.as_deref(),
        &source_dir,
        &runner,
    )?;

    Ok(())
}

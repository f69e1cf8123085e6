// Superteam entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Load config (copying defaults on first run)
// 3. Initialize tracing (stderr, so stdout carries only results)
// 4. Dispatch the subcommand

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use superteam_app::cli::Cli;
use superteam_app::commands::{self, Settings};
use superteam_core::config;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 1. Parse arguments
    let cli = Cli::parse();

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 3. Initialize tracing
    init_tracing(&config.logging.filter)?;
    info!("Config loaded: season data at {}", config.data.season_csv);

    // 4. Dispatch
    let settings = Settings::resolve(&config, cli.data.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &settings, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Initialize tracing to stderr. RUST_LOG wins over the configured filter.
fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

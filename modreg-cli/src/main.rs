//! Modreg CLI
//!
//! Command-line front end for browsing a module registry.

mod commands;
mod config;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::{Config, DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT_SECS};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "modreg")]
#[command(about = "Module registry catalog CLI", long_about = None)]
struct Cli {
    /// Modules API URL (or registry root with --discover)
    #[arg(long, env = "MODREG_REGISTRY_URL", default_value = DEFAULT_REGISTRY_URL)]
    registry_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "MODREG_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Treat --registry-url as a registry root and discover the modules API
    #[arg(long, env = "MODREG_DISCOVER")]
    discover: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config {
        registry_url: cli.registry_url,
        timeout: Duration::from_secs(cli.timeout),
        discover: cli.discover,
    };

    // Only the top-level message is shown; causes go to the log
    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    let catalog = config.catalog().await?;
    handle_command(command, &catalog).await
}

/// Initialize logging to stderr; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "modreg_cli=warn",
        1 => "modreg_cli=info,modreg_client=info",
        _ => "modreg_cli=debug,modreg_client=debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

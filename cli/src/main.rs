mod cli;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.base_url.is_some() {
        config.base_url = cli.base_url;
    }
    if cli.team_file.is_some() {
        config.team_file = cli.team_file;
    }

    match cli.command {
        Commands::Chart { attacker, defender } => {
            commands::matchup::chart(&attacker, &defender)?;
        }

        Commands::Profile { types } => {
            commands::matchup::profile(&types)?;
        }

        Commands::Analyze { members } => {
            commands::matchup::analyze(&members)?;
        }

        Commands::Roster {
            limit,
            search,
            fixture,
        } => {
            commands::roster::list(&config, limit, search.as_deref(), fixture.as_deref()).await?;
        }

        Commands::Team { command } => {
            commands::team::handle(&config, command).await?;
        }

        Commands::VerifyChart { types } => {
            commands::roster::verify_chart(&config, &types).await?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

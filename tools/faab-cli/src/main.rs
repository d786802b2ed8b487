//! FAAB CLI
//!
//! Traces a Sleeper league's history, replays every season's waiver spending
//! and prints each owner's starting FAAB for the upcoming season.

mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use faab_ledger::{resolve_season_chain, BudgetSimulator, OwnerDirectory, Standings};
use sleeper_fetcher::SleeperClient;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Overrides};

#[derive(Parser)]
#[command(name = "faab-cli")]
#[command(about = "Compute starting FAAB balances from a Sleeper league's season history")]
#[command(version = "0.1.0")]
struct Cli {
    /// Current (upcoming) league id
    #[arg(short, long)]
    league: Option<String>,

    /// Number of completed seasons to replay
    #[arg(short, long)]
    seasons: Option<usize>,

    /// FAAB every owner starts the oldest season with
    #[arg(long)]
    initial_budget: Option<u64>,

    /// FAAB added at the start of every later season
    #[arg(long)]
    annual_addition: Option<u64>,

    /// Maximum FAAB balance
    #[arg(long)]
    cap: Option<u64>,

    /// Delay after each Sleeper request in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// TOML config file; FAAB_* / SLEEPER_* variables and flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the standings as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every balance transition
    #[arg(long)]
    journal: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(cli).await {
        Ok(()) => {
            info!("Calculation complete");
            Ok(())
        }
        Err(e) => {
            error!("Calculation failed: {:#}", e);
            Err(e)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply(Overrides {
        league_id: cli.league,
        seasons: cli.seasons,
        initial_budget: cli.initial_budget,
        annual_addition: cli.annual_addition,
        cap: cli.cap,
        delay_ms: cli.delay_ms,
    });
    config.ledger.validate().context("Invalid ledger configuration")?;

    let ledger = &config.ledger;
    info!(
        "Starting FAAB calculation for league history ending with {} ({} seasons)",
        ledger.league_id, ledger.seasons_to_process
    );

    let client =
        SleeperClient::new(config.sleeper.clone()).context("Failed to create Sleeper client")?;

    let chain = resolve_season_chain(&client, &ledger.league_id, ledger.seasons_to_process)
        .await
        .context("Could not resolve league history")?;

    let simulator = BudgetSimulator::new(ledger.budget.clone())?;
    let outcome = simulator.run(&client, &chain).await;

    let directory = OwnerDirectory::fetch(&client, &ledger.league_id).await;
    let standings = Standings::new(&ledger.league_id, &outcome.balances, &directory);

    if cli.journal {
        report::print_journal(&outcome);
    }
    report::print_standings(&standings, &outcome, chain.len() + 1);

    if let Some(path) = &cli.output {
        report::write_json(&standings, path)?;
        info!("Wrote standings to {}", path.display());
    }

    Ok(())
}

//! Console and JSON output

use anyhow::{Context, Result};
use colored::*;
use faab_ledger::{LedgerEvent, SimulationOutcome, Standings, StandingsEntry};
use std::path::Path;

pub fn print_standings(standings: &Standings, outcome: &SimulationOutcome, upcoming_season: usize) {
    println!();
    println!(
        "{}",
        format!("Starting FAAB for season {} (league {})", upcoming_season, standings.league_id)
            .bold()
    );
    println!("{}", "─".repeat(52).dimmed());

    for entry in &standings.entries {
        println!("{}", format_row(entry));
    }

    println!("{}", "─".repeat(52).dimmed());
    if !outcome.skipped_seasons.is_empty() {
        println!(
            "{} rosters unavailable for {}; their spending is not reflected",
            "⚠".yellow(),
            outcome.skipped_seasons.join(", ")
        );
    }
    let inferred = outcome
        .journal
        .iter()
        .filter(|e| matches!(e, LedgerEvent::InferredStart { .. }))
        .count();
    if inferred > 0 {
        println!(
            "{} {} owner(s) joined mid-history; starting FAAB was estimated",
            "⚠".yellow(),
            inferred
        );
    }
}

pub fn format_row(entry: &StandingsEntry) -> String {
    let balance = format!("{:>6}", entry.balance.to_string());
    let balance = if entry.rank == 1 { balance.green().bold() } else { balance.normal() };
    format!("{:>3}. {:<40} {}", entry.rank, entry.display_name, balance)
}

pub fn print_journal(outcome: &SimulationOutcome) {
    println!();
    println!("{}", "Transition journal".bold());
    for event in &outcome.journal {
        println!("  {}", describe(event));
    }
}

pub fn describe(event: &LedgerEvent) -> String {
    match event {
        LedgerEvent::Initialized { season, owner_id, balance } => {
            format!("S{} {}: initialized at {}", season, owner_id, balance)
        }
        LedgerEvent::InferredStart { season, owner_id, balance } => {
            format!("S{} {}: first seen, assumed start {}", season, owner_id, balance)
        }
        LedgerEvent::SeasonStart { season, owner_id, before, after } => {
            format!("S{} {}: season start {} -> {}", season, owner_id, before, after)
        }
        LedgerEvent::Spent { season, owner_id, roster_id, spent, before, after } => format!(
            "S{} {} (roster {}): spent {}, {} -> {}",
            season, owner_id, roster_id, spent, before, after
        ),
        LedgerEvent::SeasonSkipped { season, league_id } => {
            format!("S{}: rosters for league {} unavailable, skipped", season, league_id)
        }
        LedgerEvent::MissingOwner { season, roster_id } => {
            format!("S{}: roster {} has no owner, ignored", season, roster_id)
        }
    }
}

pub fn write_json(standings: &Standings, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(standings).context("Failed to serialize standings")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

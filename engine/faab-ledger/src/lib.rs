//! # FAAB Ledger
//!
//! Works out each owner's Free Agent Acquisition Budget for the upcoming season
//! of a dynasty league.
//!
//! The league's history is traced back through `previous_league_id` pointers
//! ([`resolve_season_chain`]), then replayed oldest first by the
//! [`BudgetSimulator`]: owners start with an initial budget, receive a capped
//! annual addition at the start of every later season, and have each season's
//! waiver spending deducted. The resulting balances are ranked into
//! [`Standings`].

pub mod budget;
pub mod chain;
pub mod config;
pub mod error;
pub mod ledger;
pub mod simulator;
pub mod source;
pub mod standings;

#[cfg(test)]
mod testing;


pub use budget::Budget;
pub use chain::{resolve_season_chain, SeasonChain};
pub use config::{BudgetSettings, LateJoinerStart, LedgerConfig};
pub use error::{LedgerError, SourceError};
pub use ledger::{BudgetLedger, LedgerEvent, OwnerBudget};
pub use simulator::{BudgetSimulator, SeasonReplay, SimulationOutcome};
pub use source::{LeagueDataSource, OwnerName, RosterSpend, SeasonDetails};
pub use standings::{OwnerDirectory, Standings, StandingsEntry};

pub type Result<T> = std::result::Result<T, LedgerError>;

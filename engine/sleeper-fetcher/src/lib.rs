//! Sleeper Fetcher
//!
//! Reads league records, rosters and users from the Sleeper API and exposes
//! them to the FAAB ledger as a [`faab_ledger::LeagueDataSource`].

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::SleeperClient;
pub use config::SleeperConfig;
pub use error::FetchError;
pub use models::*;

pub type Result<T> = std::result::Result<T, FetchError>;

//! Error types for the FAAB ledger

use thiserror::Error;

/// Boxed error coming back from a league data source
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Could not fetch details for league {league_id}: {source}")]
    SeasonFetch {
        league_id: String,
        #[source]
        source: SourceError,
    },

    #[error("Could only trace back {found} seasons, {required} are required")]
    ChainTooShort { found: usize, required: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

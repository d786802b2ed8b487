//! Season chain resolution
//!
//! Walks `previous_league_id` pointers back from the current league and returns
//! the historical league ids oldest first.

use crate::source::LeagueDataSource;
use crate::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Historical league ids, oldest season first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonChain {
    league_ids: Vec<String>,
}

impl SeasonChain {
    /// Build a chain from ids that are already oldest first
    pub fn new(league_ids: Vec<String>) -> Self {
        Self { league_ids }
    }

    pub fn league_ids(&self) -> &[String] {
        &self.league_ids
    }

    pub fn len(&self) -> usize {
        self.league_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.league_ids.is_empty()
    }

    /// Iterate as `(season_number, league_id)`, season numbers starting at 1
    pub fn seasons(&self) -> impl Iterator<Item = (usize, &str)> {
        self.league_ids.iter().enumerate().map(|(i, id)| (i + 1, id.as_str()))
    }
}

/// Trace back `seasons` completed seasons from `current_league_id`.
///
/// The current league is fetched only to read its back-pointer and is not part
/// of the result. Once `seasons` ids are collected, the back-pointer of the last
/// one (if any) is appended as the oldest season without being fetched.
/// Running out of history before `seasons` ids are found is an error, as is any
/// failed fetch.
pub async fn resolve_season_chain<S>(
    source: &S,
    current_league_id: &str,
    seasons: usize,
) -> Result<SeasonChain>
where
    S: LeagueDataSource + ?Sized,
{
    info!("Tracing back {} seasons from league {}", seasons, current_league_id);

    let mut history: Vec<String> = Vec::with_capacity(seasons + 1);
    let mut cursor = current_league_id.to_string();

    for step in 0..=seasons {
        info!("Fetching details for league {}", cursor);
        let details = source.season_details(&cursor).await.map_err(|e| {
            LedgerError::SeasonFetch { league_id: cursor.clone(), source: Box::new(e) }
        })?;

        let previous = details.previous_league_id.filter(|id| !id.is_empty());
        info!("  -> previous_league_id: {:?}", previous);

        if step > 0 {
            history.push(std::mem::take(&mut cursor));
        }

        match previous {
            Some(oldest) if history.len() == seasons => {
                history.push(oldest);
                break;
            }
            Some(previous) => cursor = previous,
            None => {
                if history.len() < seasons {
                    warn!("Found null previous_league_id after {} seasons", history.len());
                }
                break;
            }
        }
    }

    if history.len() < seasons {
        return Err(LedgerError::ChainTooShort { found: history.len(), required: seasons });
    }

    history.reverse();
    info!("Processing seasons in order: {:?}", history);
    Ok(SeasonChain::new(history))
}

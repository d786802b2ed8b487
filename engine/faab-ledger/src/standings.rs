//! Final FAAB standings with owner display names

use crate::budget::Budget;
use crate::ledger::OwnerBudget;
use crate::source::{LeagueDataSource, OwnerName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// Owner id to display name lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerDirectory {
    names: HashMap<String, String>,
}

impl OwnerDirectory {
    pub fn from_users(users: Vec<OwnerName>) -> Self {
        let names = users
            .into_iter()
            .map(|user| {
                let name = user
                    .display_name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| format!("Unknown Owner ({})", user.owner_id));
                (user.owner_id, name)
            })
            .collect();
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display name, or `Owner ID <id>` for owners with no user record
    pub fn display_name(&self, owner_id: &str) -> String {
        self.names.get(owner_id).cloned().unwrap_or_else(|| format!("Owner ID {}", owner_id))
    }

    /// Fetch the users of `league_id`. A failed fetch yields an empty
    /// directory so the standings fall back to raw owner ids.
    pub async fn fetch<S>(source: &S, league_id: &str) -> Self
    where
        S: LeagueDataSource + ?Sized,
    {
        info!("Fetching user details for league {}", league_id);
        match source.owner_names(league_id).await {
            Ok(users) => Self::from_users(users),
            Err(e) => {
                warn!("Could not fetch user details ({}); output will use owner ids", e);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub rank: usize,
    pub display_name: String,
    pub owner_id: String,
    pub balance: Budget,
}

/// Starting FAAB for the upcoming season, highest balance first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub league_id: String,
    pub entries: Vec<StandingsEntry>,
}

impl Standings {
    /// Rank balances descending. Ties keep discovery order.
    pub fn new(league_id: &str, balances: &[OwnerBudget], directory: &OwnerDirectory) -> Self {
        let mut ordered: Vec<&OwnerBudget> = balances.iter().collect();
        ordered.sort_by(|a, b| b.balance.cmp(&a.balance));

        let entries = ordered
            .into_iter()
            .enumerate()
            .map(|(i, owner)| StandingsEntry {
                rank: i + 1,
                display_name: directory.display_name(&owner.owner_id),
                owner_id: owner.owner_id.clone(),
                balance: owner.balance,
            })
            .collect();

        Self { league_id: league_id.to_string(), entries }
    }
}

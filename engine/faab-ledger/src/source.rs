//! League data consumed by the resolver and the simulator

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The part of a league record the season chain needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDetails {
    pub league_id: String,

    /// League id of the prior season, `None` at the start of history
    pub previous_league_id: Option<String>,
}

/// One roster's FAAB spending for a season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSpend {
    /// Persistent owner identity; orphaned rosters have none
    pub owner_id: Option<String>,

    /// Per-season roster slot, only used in diagnostics
    pub roster_id: u32,

    /// FAAB used during the season
    pub waiver_budget_used: u64,
}

/// Display name for an owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerName {
    pub owner_id: String,
    pub display_name: Option<String>,
}

/// Source of league history.
///
/// Calls are awaited one at a time; implementations that talk to a remote API
/// are expected to pace themselves.
#[async_trait]
pub trait LeagueDataSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the league record for `league_id`
    async fn season_details(&self, league_id: &str) -> Result<SeasonDetails, Self::Error>;

    /// Fetch every roster's spending for `league_id`
    async fn roster_spending(&self, league_id: &str) -> Result<Vec<RosterSpend>, Self::Error>;

    /// Fetch the users of `league_id`
    async fn owner_names(&self, league_id: &str) -> Result<Vec<OwnerName>, Self::Error>;
}

use faab_ledger::{OwnerName, RosterSpend, SeasonDetails};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sleeper league response, reduced to the fields the ledger reads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperLeague {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub previous_league_id: Option<String>,
}

/// Sleeper roster response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperRoster {
    #[serde(default)]
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub settings: Option<RosterSettings>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub waiver_budget_used: Option<i64>,
}

/// Sleeper user response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl From<SleeperLeague> for SeasonDetails {
    fn from(league: SleeperLeague) -> Self {
        SeasonDetails { league_id: league.league_id, previous_league_id: league.previous_league_id }
    }
}

impl SleeperRoster {
    /// FAAB used this season; null or missing counts as zero
    pub fn waiver_budget_used(&self) -> i64 {
        self.settings.as_ref().and_then(|s| s.waiver_budget_used).unwrap_or(0)
    }
}

impl From<SleeperRoster> for RosterSpend {
    fn from(roster: SleeperRoster) -> Self {
        let used = roster.waiver_budget_used();
        // Sleeper occasionally reports refunds as negative usage
        if used < 0 {
            warn!(
                "Roster {} reports negative waiver_budget_used {}, treating as 0",
                roster.roster_id, used
            );
        }
        RosterSpend {
            owner_id: roster.owner_id,
            roster_id: roster.roster_id,
            waiver_budget_used: used.max(0) as u64,
        }
    }
}

impl From<SleeperUser> for OwnerName {
    fn from(user: SleeperUser) -> Self {
        OwnerName { owner_id: user.user_id, display_name: user.display_name }
    }
}

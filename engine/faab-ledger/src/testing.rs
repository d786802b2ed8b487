//! In-memory league history for tests

use crate::source::{LeagueDataSource, OwnerName, RosterSpend, SeasonDetails};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("mock fetch failed for {0}")]
pub struct MockError(String);

#[derive(Debug, Default)]
pub struct MockLeague {
    previous: HashMap<String, Option<String>>,
    rosters: HashMap<String, Vec<RosterSpend>>,
    users: Option<Vec<OwnerName>>,
    failing_details: HashSet<String>,
    failing_rosters: HashSet<String>,
    detail_calls: Mutex<Vec<String>>,
    roster_calls: Mutex<Vec<String>>,
}

impl MockLeague {
    /// Leagues linked oldest to newest; the first has no previous league
    pub fn linked(league_ids: &[&str]) -> Self {
        let mut league = Self::default();
        let mut previous: Option<String> = None;
        for id in league_ids {
            league.previous.insert(id.to_string(), previous.clone());
            previous = Some(id.to_string());
        }
        league
    }

    pub fn set_previous(&mut self, league_id: &str, previous: Option<&str>) {
        self.previous.insert(league_id.to_string(), previous.map(str::to_string));
    }

    pub fn with_rosters(mut self, league_id: &str, rosters: Vec<RosterSpend>) -> Self {
        self.rosters.insert(league_id.to_string(), rosters);
        self
    }

    pub fn with_users(mut self, users: Vec<OwnerName>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn fail_details(&mut self, league_id: &str) {
        self.failing_details.insert(league_id.to_string());
    }

    pub fn fail_rosters(&mut self, league_id: &str) {
        self.failing_rosters.insert(league_id.to_string());
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn roster_calls(&self) -> Vec<String> {
        self.roster_calls.lock().unwrap().clone()
    }
}

/// Spending record for one roster
pub fn spend(owner_id: &str, roster_id: u32, spent: u64) -> RosterSpend {
    RosterSpend { owner_id: Some(owner_id.to_string()), roster_id, waiver_budget_used: spent }
}

#[async_trait]
impl LeagueDataSource for MockLeague {
    type Error = MockError;

    async fn season_details(&self, league_id: &str) -> Result<SeasonDetails, MockError> {
        self.detail_calls.lock().unwrap().push(league_id.to_string());
        if self.failing_details.contains(league_id) {
            return Err(MockError(league_id.to_string()));
        }
        let previous =
            self.previous.get(league_id).ok_or_else(|| MockError(league_id.to_string()))?;
        Ok(SeasonDetails { league_id: league_id.to_string(), previous_league_id: previous.clone() })
    }

    async fn roster_spending(&self, league_id: &str) -> Result<Vec<RosterSpend>, MockError> {
        self.roster_calls.lock().unwrap().push(league_id.to_string());
        if self.failing_rosters.contains(league_id) {
            return Err(MockError(league_id.to_string()));
        }
        self.rosters.get(league_id).cloned().ok_or_else(|| MockError(league_id.to_string()))
    }

    async fn owner_names(&self, league_id: &str) -> Result<Vec<OwnerName>, MockError> {
        self.users.clone().ok_or_else(|| MockError(league_id.to_string()))
    }
}

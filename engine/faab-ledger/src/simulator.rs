//! Forward FAAB simulation over a season chain
//!
//! Seasons are replayed strictly in chronological order: every season after the
//! oldest opens with the annual addition for all known owners, then that
//! season's spending is deducted. One more addition after the newest season
//! yields the balances for the upcoming season.

use crate::budget::Budget;
use crate::chain::SeasonChain;
use crate::config::BudgetSettings;
use crate::ledger::{BudgetLedger, LedgerEvent, OwnerBudget};
use crate::source::{LeagueDataSource, RosterSpend};
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Result of replaying a season chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Start-of-upcoming-season balances, in owner discovery order
    pub balances: Vec<OwnerBudget>,

    /// Every transition, in the order it was applied
    pub journal: Vec<LedgerEvent>,

    /// Number of seasons replayed, skipped ones included
    pub seasons_processed: usize,

    /// League ids whose rosters could not be fetched
    pub skipped_seasons: Vec<String>,
}

/// Budget state machine for a single replay.
///
/// Drive it with [`SeasonReplay::begin_season`], then either
/// [`SeasonReplay::apply_spending`] or [`SeasonReplay::skip_season`] for each
/// season in order, and close with [`SeasonReplay::finish`].
#[derive(Debug)]
pub struct SeasonReplay<'a> {
    settings: &'a BudgetSettings,
    ledger: BudgetLedger,
    journal: Vec<LedgerEvent>,
    last_season: usize,
}

impl<'a> SeasonReplay<'a> {
    pub fn new(settings: &'a BudgetSettings) -> Self {
        Self { settings, ledger: BudgetLedger::new(), journal: Vec::new(), last_season: 0 }
    }

    pub fn ledger(&self) -> &BudgetLedger {
        &self.ledger
    }

    /// Apply the annual addition to every known owner. No-op for season 1.
    pub fn begin_season(&mut self, season: usize) {
        self.last_season = season;
        if season <= 1 {
            debug!("Skipping annual addition for season {}", season);
            return;
        }
        self.top_up(season);
    }

    /// Deduct one season's roster spending
    pub fn apply_spending(&mut self, season: usize, rosters: &[RosterSpend]) {
        for roster in rosters {
            let Some(owner_id) = roster.owner_id.as_deref().filter(|id| !id.is_empty()) else {
                warn!("Roster {} in season {} has no owner_id, skipping", roster.roster_id, season);
                self.journal.push(LedgerEvent::MissingOwner { season, roster_id: roster.roster_id });
                continue;
            };

            if !self.ledger.contains(owner_id) {
                self.open_owner(season, owner_id);
            }

            let spent = Budget::new(roster.waiver_budget_used);
            if let Some((before, after)) = self.ledger.spend(owner_id, spent) {
                debug!(
                    "Owner {} (roster {}): spent {}, season {} ends at {} (was {})",
                    owner_id, roster.roster_id, spent, season, after, before
                );
                self.journal.push(LedgerEvent::Spent {
                    season,
                    owner_id: owner_id.to_string(),
                    roster_id: roster.roster_id,
                    spent,
                    before,
                    after,
                });
            }
        }
    }

    /// Record that a season's spending is unavailable
    pub fn skip_season(&mut self, season: usize, league_id: &str) {
        warn!("Skipping spending for season {} (league {})", season, league_id);
        self.journal.push(LedgerEvent::SeasonSkipped { season, league_id: league_id.to_string() });
    }

    /// Apply the addition for the upcoming season and hand back the state
    pub fn finish(mut self) -> (BudgetLedger, Vec<LedgerEvent>) {
        let upcoming = self.last_season + 1;
        info!("Calculating starting FAAB for upcoming season {}", upcoming);
        self.top_up(upcoming);
        (self.ledger, self.journal)
    }

    fn top_up(&mut self, season: usize) {
        let changes = self.ledger.top_up_all(self.settings.annual_addition, self.settings.cap);
        for (owner_id, before, after) in changes {
            debug!(
                "Owner {}: {} -> {} at start of season {} (+{}, cap {})",
                owner_id, before, after, season, self.settings.annual_addition, self.settings.cap
            );
            self.journal.push(LedgerEvent::SeasonStart { season, owner_id, before, after });
        }
    }

    fn open_owner(&mut self, season: usize, owner_id: &str) {
        let owner_id_owned = owner_id.to_string();
        if season <= 1 {
            let balance = self.settings.initial_budget.capped(self.settings.cap);
            self.ledger.open(owner_id, balance);
            debug!("Owner {}: initialized season 1 FAAB = {}", owner_id, balance);
            self.journal.push(LedgerEvent::Initialized { season, owner_id: owner_id_owned, balance });
        } else {
            let balance = self.settings.late_joiner_budget();
            self.ledger.open(owner_id, balance);
            warn!(
                "Owner {} first seen in season {}; assuming a starting FAAB of {}",
                owner_id, season, balance
            );
            self.journal.push(LedgerEvent::InferredStart {
                season,
                owner_id: owner_id_owned,
                balance,
            });
        }
    }
}

/// Replays a season chain against a league data source
#[derive(Debug, Clone)]
pub struct BudgetSimulator {
    settings: BudgetSettings,
}

impl BudgetSimulator {
    pub fn new(settings: BudgetSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Replay every season in `chain`, oldest first.
    ///
    /// A season whose rosters cannot be fetched contributes no spending but
    /// still receives its annual addition.
    pub async fn run<S>(&self, source: &S, chain: &SeasonChain) -> SimulationOutcome
    where
        S: LeagueDataSource + ?Sized,
    {
        let mut replay = SeasonReplay::new(&self.settings);
        let mut skipped_seasons = Vec::new();

        for (season, league_id) in chain.seasons() {
            info!("Processing season {} (league {})", season, league_id);
            replay.begin_season(season);

            match source.roster_spending(league_id).await {
                Ok(rosters) => {
                    info!("Applying spending for {} rosters", rosters.len());
                    replay.apply_spending(season, &rosters);
                }
                Err(e) => {
                    warn!("Could not fetch rosters for league {}: {}", league_id, e);
                    replay.skip_season(season, league_id);
                    skipped_seasons.push(league_id.to_string());
                }
            }
        }

        let (ledger, journal) = replay.finish();
        SimulationOutcome {
            balances: ledger.into_balances(),
            journal,
            seasons_processed: chain.len(),
            skipped_seasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(owner: Option<&str>, roster_id: u32, spent: u64) -> RosterSpend {
        RosterSpend {
            owner_id: owner.map(str::to_string),
            roster_id,
            waiver_budget_used: spent,
        }
    }

    #[test]
    fn test_first_season_has_no_addition() {
        let settings = BudgetSettings::default();
        let mut replay = SeasonReplay::new(&settings);

        replay.begin_season(1);
        replay.apply_spending(1, &[roster(Some("a"), 1, 0)]);

        assert_eq!(replay.ledger().balance("a"), Some(Budget::new(1000)));
        assert!(!replay.journal.iter().any(|e| matches!(e, LedgerEvent::SeasonStart { .. })));
    }

    #[test]
    fn test_missing_owner_is_skipped() {
        let settings = BudgetSettings::default();
        let mut replay = SeasonReplay::new(&settings);

        replay.begin_season(1);
        replay.apply_spending(1, &[roster(None, 7, 300), roster(Some(""), 8, 300)]);

        assert!(replay.ledger().is_empty());
        assert_eq!(
            replay.journal,
            vec![
                LedgerEvent::MissingOwner { season: 1, roster_id: 7 },
                LedgerEvent::MissingOwner { season: 1, roster_id: 8 },
            ]
        );
    }

    #[test]
    fn test_finish_applies_upcoming_addition() {
        let settings = BudgetSettings::default();
        let mut replay = SeasonReplay::new(&settings);

        replay.begin_season(1);
        replay.apply_spending(1, &[roster(Some("a"), 1, 600)]);
        let (ledger, journal) = replay.finish();

        assert_eq!(ledger.balance("a"), Some(Budget::new(650)));
        assert_eq!(
            journal.last(),
            Some(&LedgerEvent::SeasonStart {
                season: 2,
                owner_id: "a".to_string(),
                before: Budget::new(400),
                after: Budget::new(650),
            })
        );
    }

    #[test]
    fn test_oversized_initial_budget_is_capped() {
        let settings = BudgetSettings { initial_budget: Budget::new(5000), ..Default::default() };
        let mut replay = SeasonReplay::new(&settings);

        replay.begin_season(1);
        replay.apply_spending(1, &[roster(Some("a"), 1, 0)]);

        assert_eq!(replay.ledger().balance("a"), Some(settings.cap));
        assert_eq!(
            replay.journal[0],
            LedgerEvent::Initialized { season: 1, owner_id: "a".to_string(), balance: settings.cap }
        );
    }

    #[test]
    fn test_simulator_rejects_invalid_settings() {
        let settings = BudgetSettings { cap: Budget::ZERO, ..Default::default() };
        assert!(BudgetSimulator::new(settings).is_err());
    }
}

//! Configuration for the FAAB ledger

use crate::budget::Budget;
use crate::{LedgerError, Result};
use serde::{Deserialize, Serialize};

/// League id the calculation starts from when nothing else is configured
pub const DEFAULT_LEAGUE_ID: &str = "1183849444265443328";

/// Number of completed seasons replayed by default
pub const DEFAULT_SEASONS_TO_PROCESS: usize = 3;

/// Budget tunables for the forward simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSettings {
    /// FAAB every owner starts the oldest season with
    pub initial_budget: Budget,

    /// Amount added to every known owner at the start of each later season
    pub annual_addition: Budget,

    /// Maximum balance after any addition
    pub cap: Budget,

    /// Starting balance assumed for owners who first appear mid-chain
    pub late_joiner: LateJoinerStart,
}

/// How to seed the balance of an owner first seen after the oldest season.
///
/// There is no history for such an owner, so any choice here is an
/// approximation rather than real accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateJoinerStart {
    /// One annual addition
    #[default]
    AnnualAddition,
    /// The same amount the oldest season started with
    InitialBudget,
    /// A full budget
    Cap,
    /// A fixed amount (clamped to the cap)
    Fixed(Budget),
}

/// Ledger configuration: which league to start from and how to replay it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Current (not yet started) league id
    pub league_id: String,

    /// Number of completed seasons to walk back through
    pub seasons_to_process: usize,

    pub budget: BudgetSettings,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            initial_budget: Budget::new(1000),
            annual_addition: Budget::new(250),
            cap: Budget::new(1000),
            late_joiner: LateJoinerStart::default(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            league_id: DEFAULT_LEAGUE_ID.to_string(),
            seasons_to_process: DEFAULT_SEASONS_TO_PROCESS,
            budget: BudgetSettings::default(),
        }
    }
}

impl BudgetSettings {
    /// Starting balance for an owner who joined after the oldest season
    pub fn late_joiner_budget(&self) -> Budget {
        let start = match self.late_joiner {
            LateJoinerStart::AnnualAddition => self.annual_addition,
            LateJoinerStart::InitialBudget => self.initial_budget,
            LateJoinerStart::Cap => self.cap,
            LateJoinerStart::Fixed(amount) => amount,
        };
        start.capped(self.cap)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cap == Budget::ZERO {
            return Err(LedgerError::InvalidConfig { message: "cap must be positive".to_string() });
        }
        if self.initial_budget > self.cap {
            return Err(LedgerError::InvalidConfig {
                message: format!(
                    "initial budget {} exceeds cap {}",
                    self.initial_budget, self.cap
                ),
            });
        }
        Ok(())
    }
}

impl LedgerConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay any `FAAB_*` environment variables onto this config
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Overlay `FAAB_*` values returned by `lookup`
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(league_id) = lookup("FAAB_LEAGUE_ID") {
            self.league_id = league_id;
        }
        if let Some(seasons) = parse_var::<usize, _>(&lookup, "FAAB_SEASONS")? {
            self.seasons_to_process = seasons;
        }
        if let Some(initial) = parse_var::<u64, _>(&lookup, "FAAB_INITIAL_BUDGET")? {
            self.budget.initial_budget = Budget::new(initial);
        }
        if let Some(addition) = parse_var::<u64, _>(&lookup, "FAAB_ANNUAL_ADDITION")? {
            self.budget.annual_addition = Budget::new(addition);
        }
        if let Some(cap) = parse_var::<u64, _>(&lookup, "FAAB_CAP")? {
            self.budget.cap = Budget::new(cap);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.league_id.trim().is_empty() {
            return Err(LedgerError::InvalidConfig {
                message: "league_id must not be empty".to_string(),
            });
        }
        if self.seasons_to_process == 0 {
            return Err(LedgerError::InvalidConfig {
                message: "seasons_to_process must be at least 1".to_string(),
            });
        }
        self.budget.validate()
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| LedgerError::InvalidConfig { message: format!("Invalid {}", name) }),
        None => Ok(None),
    }
}

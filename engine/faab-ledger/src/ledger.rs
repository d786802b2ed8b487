//! Per-owner FAAB balances

use crate::budget::Budget;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One owner's running balance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerBudget {
    pub owner_id: String,
    pub balance: Budget,
}

/// Balance transition recorded while replaying seasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// Owner present in the oldest season, seeded with the initial budget
    Initialized { season: usize, owner_id: String, balance: Budget },

    /// Owner first seen after the oldest season, seeded by the late-joiner rule
    InferredStart { season: usize, owner_id: String, balance: Budget },

    /// Annual addition applied before a season's spending
    SeasonStart { season: usize, owner_id: String, before: Budget, after: Budget },

    /// Season spending deducted
    Spent {
        season: usize,
        owner_id: String,
        roster_id: u32,
        spent: Budget,
        before: Budget,
        after: Budget,
    },

    /// Roster spending could not be fetched; no spending applied
    SeasonSkipped { season: usize, league_id: String },

    /// Roster without an owner; ignored
    MissingOwner { season: usize, roster_id: u32 },
}

/// Owner balances in discovery order.
///
/// An owner is absent until first observed; membership is the only signal that
/// an owner has been initialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetLedger {
    owners: Vec<OwnerBudget>,
    index: HashMap<String, usize>,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, owner_id: &str) -> bool {
        self.index.contains_key(owner_id)
    }

    pub fn balance(&self, owner_id: &str) -> Option<Budget> {
        self.index.get(owner_id).map(|&i| self.owners[i].balance)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Owners in the order they were first observed
    pub fn iter(&self) -> impl Iterator<Item = &OwnerBudget> {
        self.owners.iter()
    }

    /// Start tracking `owner_id` at `balance`. Returns false if already tracked.
    pub fn open(&mut self, owner_id: &str, balance: Budget) -> bool {
        if self.contains(owner_id) {
            return false;
        }
        self.index.insert(owner_id.to_string(), self.owners.len());
        self.owners.push(OwnerBudget { owner_id: owner_id.to_string(), balance });
        true
    }

    /// Add `addition` to every tracked owner, clamped to `cap`.
    /// Returns `(owner_id, before, after)` for each owner.
    pub fn top_up_all(&mut self, addition: Budget, cap: Budget) -> Vec<(String, Budget, Budget)> {
        self.owners
            .iter_mut()
            .map(|owner| {
                let before = owner.balance;
                owner.balance = before.top_up(addition, cap);
                (owner.owner_id.clone(), before, owner.balance)
            })
            .collect()
    }

    /// Deduct `spent` from `owner_id`, floored at zero.
    /// Returns `(before, after)`, or `None` for an untracked owner.
    pub fn spend(&mut self, owner_id: &str, spent: Budget) -> Option<(Budget, Budget)> {
        let &i = self.index.get(owner_id)?;
        let owner = &mut self.owners[i];
        let before = owner.balance;
        owner.balance = before.spend(spent);
        Some((before, owner.balance))
    }

    pub fn into_balances(self) -> Vec<OwnerBudget> {
        self.owners
    }
}

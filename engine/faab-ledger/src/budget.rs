//! FAAB amount type with the clamped arithmetic the ledger relies on

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-dollar FAAB amount.
///
/// Balances only ever move through [`Budget::top_up`] (which clamps to the cap)
/// and [`Budget::spend`] (which floors at zero), so a balance that starts inside
/// `[0, cap]` stays there.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Budget(u64);

impl Budget {
    pub const ZERO: Budget = Budget(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Add `addition`, clamping the result to `cap`
    pub fn top_up(self, addition: Budget, cap: Budget) -> Self {
        Self(self.0.saturating_add(addition.0).min(cap.0))
    }

    /// Subtract `spent`, flooring the result at zero
    pub fn spend(self, spent: Budget) -> Self {
        Self(self.0.saturating_sub(spent.0))
    }

    /// Clamp to `cap` without adding anything
    pub fn capped(self, cap: Budget) -> Self {
        Self(self.0.min(cap.0))
    }
}

impl From<u64> for Budget {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_up_clamps_to_cap() {
        let cap = Budget::new(1000);
        assert_eq!(Budget::new(800).top_up(Budget::new(250), cap), cap);
        assert_eq!(Budget::new(500).top_up(Budget::new(250), cap), Budget::new(750));
        assert_eq!(Budget::new(u64::MAX).top_up(Budget::new(1), cap), cap);
    }

    #[test]
    fn test_spend_floors_at_zero() {
        assert_eq!(Budget::new(100).spend(Budget::new(250)), Budget::ZERO);
        assert_eq!(Budget::new(1000).spend(Budget::new(200)), Budget::new(800));
    }

    #[test]
    fn test_display() {
        assert_eq!(Budget::new(750).to_string(), "$750");
    }
}

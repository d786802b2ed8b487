//! Combined configuration for the CLI

use anyhow::{Context, Result};
use faab_ledger::{Budget, LedgerConfig};
use serde::{Deserialize, Serialize};
use sleeper_fetcher::SleeperConfig;
use std::path::Path;

/// Everything the CLI needs, as read from a TOML file or the environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ledger: LedgerConfig,
    pub sleeper: SleeperConfig,
}

/// Values given on the command line; each one wins over file and environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub league_id: Option<String>,
    pub seasons: Option<usize>,
    pub initial_budget: Option<u64>,
    pub annual_addition: Option<u64>,
    pub cap: Option<u64>,
    pub delay_ms: Option<u64>,
}

impl AppConfig {
    /// Defaults, then `path` if given, then `FAAB_*` / `SLEEPER_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let mut config = Self::from_file(path)?;
                config.overlay_vars(|name| std::env::var(name).ok())?;
                Ok(config)
            }
            None => Self::from_env(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            ledger: LedgerConfig::from_env().context("Failed to read ledger settings")?,
            sleeper: SleeperConfig::from_env().context("Failed to read Sleeper settings")?,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn overlay_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.ledger.apply_vars(&lookup).context("Failed to read ledger settings")?;
        self.sleeper.apply_vars(&lookup).context("Failed to read Sleeper settings")?;
        Ok(())
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(league_id) = overrides.league_id {
            self.ledger.league_id = league_id;
        }
        if let Some(seasons) = overrides.seasons {
            self.ledger.seasons_to_process = seasons;
        }
        if let Some(initial) = overrides.initial_budget {
            self.ledger.budget.initial_budget = Budget::new(initial);
        }
        if let Some(addition) = overrides.annual_addition {
            self.ledger.budget.annual_addition = Budget::new(addition);
        }
        if let Some(cap) = overrides.cap {
            self.ledger.budget.cap = Budget::new(cap);
        }
        if let Some(delay) = overrides.delay_ms {
            self.sleeper.request_delay_ms = delay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let mut config = AppConfig::default();
        config.apply(Overrides {
            league_id: Some("99".to_string()),
            cap: Some(1200),
            delay_ms: Some(0),
            ..Default::default()
        });

        assert_eq!(config.ledger.league_id, "99");
        assert_eq!(config.ledger.budget.cap, Budget::new(1200));
        assert_eq!(config.ledger.budget.annual_addition, Budget::new(250));
        assert_eq!(config.sleeper.request_delay_ms, 0);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [ledger]
            league_id = "1048"

            [sleeper]
            request_delay_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.ledger.league_id, "1048");
        assert_eq!(config.ledger.seasons_to_process, 3);
        assert_eq!(config.sleeper.request_delay_ms, 100);
        assert_eq!(config.sleeper.api_base_url, "https://api.sleeper.app/v1");
    }

    #[test]
    fn test_env_layers_over_file() {
        let path = std::env::temp_dir().join(format!("faab-cli-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[ledger]\nleague_id = \"1048\"\nseasons_to_process = 2\n\n[sleeper]\nrequest_delay_ms = 100\n",
        )
        .unwrap();

        let mut config = AppConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        config
            .overlay_vars(|name| match name {
                "FAAB_SEASONS" => Some("4".to_string()),
                "SLEEPER_REQUEST_DELAY_MS" => Some("0".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.ledger.league_id, "1048");
        assert_eq!(config.ledger.seasons_to_process, 4);
        assert_eq!(config.sleeper.request_delay_ms, 0);
    }

    #[test]
    fn test_bad_env_value_is_reported() {
        let mut config = AppConfig::default();
        let err = config
            .overlay_vars(|name| (name == "FAAB_CAP").then(|| "-1".to_string()))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid FAAB_CAP"));
    }
}

//! Sleeper API client

use crate::config::SleeperConfig;
use crate::models::{SleeperLeague, SleeperRoster, SleeperUser};
use crate::{FetchError, Result};
use async_trait::async_trait;
use faab_ledger::{LeagueDataSource, OwnerName, RosterSpend, SeasonDetails};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Sleeper API client.
///
/// Requests are issued one at a time and every request is followed by the
/// configured delay, successful or not.
#[derive(Debug)]
pub struct SleeperClient {
    config: SleeperConfig,
    client: Client,
}

impl SleeperClient {
    /// Create a new Sleeper API client
    pub fn new(config: SleeperConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }

    /// Get a league by id
    pub async fn get_league(&self, league_id: &str) -> Result<SleeperLeague> {
        self.get_json(&format!("league/{}", league_id)).await
    }

    /// Get every roster in a league
    pub async fn get_rosters(&self, league_id: &str) -> Result<Vec<SleeperRoster>> {
        self.get_json(&format!("league/{}/rosters", league_id)).await
    }

    /// Get every user in a league
    pub async fn get_users(&self, league_id: &str) -> Result<Vec<SleeperUser>> {
        self.get_json(&format!("league/{}/users", league_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        let result = self.fetch(&url).await;
        tokio::time::sleep(self.config.request_delay()).await;
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { url: url.to_string() });
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(FetchError::SleeperApi {
                message: format!("{} returned {} - {}", url, status, error_text),
            });
        }

        let body = response.text().await?;
        decode_body(url, &body)
    }
}

/// Sleeper answers unknown ids with `200 null`
fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    let value: Option<T> = serde_json::from_str(body)?;
    value.ok_or_else(|| FetchError::NotFound { url: url.to_string() })
}

#[async_trait]
impl LeagueDataSource for SleeperClient {
    type Error = FetchError;

    async fn season_details(&self, league_id: &str) -> Result<SeasonDetails> {
        let league = self.get_league(league_id).await?;
        info!(
            "League {} ({}, season {})",
            league.league_id,
            league.name.as_deref().unwrap_or("unnamed"),
            league.season.as_deref().unwrap_or("?")
        );
        Ok(league.into())
    }

    async fn roster_spending(&self, league_id: &str) -> Result<Vec<RosterSpend>> {
        let rosters = self.get_rosters(league_id).await?;
        Ok(rosters.into_iter().map(RosterSpend::from).collect())
    }

    async fn owner_names(&self, league_id: &str) -> Result<Vec<OwnerName>> {
        let users = self.get_users(league_id).await?;
        Ok(users.into_iter().map(OwnerName::from).collect())
    }
}

//! Read-only client for the Fantasy Premier League REST API.
//!
//! Each call makes exactly one request: no retries, no caching. Callers get a
//! [`Result`] and decide which default to fall back to.

use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::{
    cli::types::{EntryId, LeagueId, PageNumber},
    fpl::types::{EntryHistory, GameweekRecord, ManagerProfile, Participant, StandingsEnvelope},
    FplError, Result, BASE_URL_ENV_VAR,
};


/// Base path for the public FPL API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// The two per-manager lookups the roster builder needs.
#[allow(async_fn_in_trait)]
pub trait EntrySource {
    async fn manager_name(&self, entry: EntryId) -> Result<String>;
    async fn gameweek_history(&self, entry: EntryId) -> Result<Vec<GameweekRecord>>;
}

#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    base_url: String,
}

impl FplClient {
    /// Client against `FPL_API_BASE_URL` if set, the public API otherwise.
    pub fn new() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| FPL_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent("fpl-mini-league/0.1").build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        info!("Fetching data from URL: {url}");
        let v = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    /// One page of a classic league's standings.
    ///
    /// Fails with [`FplError::UnexpectedShape`] if `standings.results` is absent.
    pub async fn fetch_standings_page(
        &self,
        league_id: LeagueId,
        page: PageNumber,
    ) -> Result<Vec<Participant>> {
        let endpoint = format!("/leagues-classic/{league_id}/standings/");
        let url = format!("{}{endpoint}?page_new={page}", self.base_url);
        let body = self.get_json(&url).await?;

        if body.pointer("/standings/results").is_none() {
            return Err(FplError::UnexpectedShape {
                endpoint,
                detail: format!("missing standings.results in {body}"),
            });
        }
        let envelope: StandingsEnvelope = serde_json::from_value(body)?;
        Ok(envelope.standings.results)
    }

    /// `"{first} {last}"` from the manager's profile.
    pub async fn fetch_manager_name(&self, entry: EntryId) -> Result<String> {
        let url = format!("{}/entry/{entry}/", self.base_url);
        let profile: ManagerProfile = serde_json::from_value(self.get_json(&url).await?)?;
        Ok(profile.display_name())
    }

    /// Current-season gameweek history. A response without `current` is empty.
    pub async fn fetch_gameweek_history(&self, entry: EntryId) -> Result<Vec<GameweekRecord>> {
        let url = format!("{}/entry/{entry}/history/", self.base_url);
        let history: EntryHistory = serde_json::from_value(self.get_json(&url).await?)?;
        Ok(history.current)
    }
}

impl EntrySource for FplClient {
    async fn manager_name(&self, entry: EntryId) -> Result<String> {
        self.fetch_manager_name(entry).await
    }

    async fn gameweek_history(&self, entry: EntryId) -> Result<Vec<GameweekRecord>> {
        self.fetch_gameweek_history(entry).await
    }
}

//! Remote stats service over HTTP.

use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;

use crate::cli::types::Timeframe;
use crate::error::Result;
use crate::league::{LeagueSettings, Player, Projection};
use crate::provider::StatsProvider;


/// JSON stats service exposing `/league`, `/players` and
/// `/projections?timeframe=<tf>`.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent(concat!("fhockey/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let res = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}

impl StatsProvider for HttpProvider {
    async fn league_settings(&self) -> Result<LeagueSettings> {
        self.get_json("league", &[]).await
    }

    async fn players(&self) -> Result<Vec<Player>> {
        self.get_json("players", &[]).await
    }

    async fn projections(&self, timeframe: Timeframe) -> Result<Vec<Projection>> {
        let all: Vec<Projection> = self
            .get_json("projections", &[("timeframe", timeframe.as_str())])
            .await?;
        Ok(all.into_iter().filter(|p| p.timeframe == timeframe).collect())
    }
}

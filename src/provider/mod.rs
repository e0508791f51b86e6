//! Where league settings, players and projections come from.
//!
//! The engine never fetches anything itself. Commands ask a
//! [`StatsProvider`] for records and hand them to the engine.

pub mod cached;
pub mod fixtures;
pub mod http;

pub use cached::CachedProvider;
pub use fixtures::FixtureProvider;
pub use http::HttpProvider;

use crate::cli::types::Timeframe;
use crate::error::Result;
use crate::league::{LeagueSettings, Player, Projection};

/// Supplier of league records.
#[allow(async_fn_in_trait)]
pub trait StatsProvider {
    async fn league_settings(&self) -> Result<LeagueSettings>;

    async fn players(&self) -> Result<Vec<Player>>;

    /// Projections covering `timeframe`.
    async fn projections(&self, timeframe: Timeframe) -> Result<Vec<Projection>>;
}

/// Provider picked at startup: local fixtures or a remote stats service.
pub enum Source {
    Fixtures(FixtureProvider),
    Http(HttpProvider),
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::Fixtures(p) => format!("fixtures in {}", p.dir().display()),
            Source::Http(p) => format!("stats service at {}", p.base_url()),
        }
    }
}

impl StatsProvider for Source {
    async fn league_settings(&self) -> Result<LeagueSettings> {
        match self {
            Source::Fixtures(p) => p.league_settings().await,
            Source::Http(p) => p.league_settings().await,
        }
    }

    async fn players(&self) -> Result<Vec<Player>> {
        match self {
            Source::Fixtures(p) => p.players().await,
            Source::Http(p) => p.players().await,
        }
    }

    async fn projections(&self, timeframe: Timeframe) -> Result<Vec<Projection>> {
        match self {
            Source::Fixtures(p) => p.projections(timeframe).await,
            Source::Http(p) => p.projections(timeframe).await,
        }
    }
}

//! Shared setup for command handlers: provider selection, configuration
//! and record loading.

use std::{collections::HashMap, path::PathBuf, time::Duration};

use crate::{
    cli::types::{PlayerId, Timeframe},
    core::config::{resolve_data_dir, resolve_provider_url, AppConfig},
    error::{FantasyError, Result},
    league::{LeagueSettings, Player, Projection},
    provider::{CachedProvider, FixtureProvider, HttpProvider, Source, StatsProvider},
};

/// Resources every command needs.
pub struct CommandContext {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub provider: CachedProvider<Source>,
    pub timeframe: Timeframe,
    pub verbose: bool,
}

impl CommandContext {
    /// Resolve configuration and pick a provider: HTTP when a provider URL is
    /// configured, local fixtures otherwise.
    pub fn new(
        data_dir: Option<PathBuf>,
        provider_url: Option<String>,
        timeframe: Timeframe,
        verbose: bool,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir);
        let config = AppConfig::load(&data_dir)?;

        let source = match resolve_provider_url(provider_url, &config) {
            Some(url) => Source::Http(HttpProvider::new(url)?),
            None => Source::Fixtures(FixtureProvider::new(data_dir.clone())),
        };
        if verbose {
            println!("Reading league data from {}", source.describe());
        }

        let ttl = Duration::from_secs(config.cache_ttl_secs());
        let provider = CachedProvider::new(source, ttl)?;

        Ok(Self {
            data_dir,
            config,
            provider,
            timeframe,
            verbose,
        })
    }

    /// Load settings, players and projections for the context's timeframe.
    pub async fn load(&self) -> Result<LeagueRecords> {
        load_records(&self.provider, self.timeframe, self.verbose).await
    }
}

/// Everything the engine needs for one evaluation.
#[derive(Debug, Clone)]
pub struct LeagueRecords {
    pub settings: LeagueSettings,
    pub players: Vec<Player>,
    pub projections: Vec<Projection>,
}

impl LeagueRecords {
    /// Look up players by id, in the order given.
    pub fn players_by_id(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        let by_id: HashMap<PlayerId, &Player> = self.players.iter().map(|p| (p.id, p)).collect();
        ids.iter()
            .map(|id| {
                by_id
                    .get(id)
                    .map(|p| (*p).clone())
                    .ok_or(FantasyError::PlayerNotFound { id: *id })
            })
            .collect()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}

pub async fn load_records<P: StatsProvider>(
    provider: &P,
    timeframe: Timeframe,
    verbose: bool,
) -> Result<LeagueRecords> {
    if verbose {
        println!("Loading league settings...");
    }
    let settings = provider.league_settings().await?;

    if verbose {
        println!("Loading players...");
    }
    let players = provider.players().await?;

    if verbose {
        println!("Loading projections {}...", timeframe.describe());
    }
    let projections = provider.projections(timeframe).await?;

    if verbose {
        println!(
            "✓ {} players, {} projections loaded",
            players.len(),
            projections.len()
        );
    }

    Ok(LeagueRecords {
        settings,
        players,
        projections,
    })
}

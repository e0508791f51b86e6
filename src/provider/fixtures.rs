//! JSON fixture files on disk.

use log::debug;
use serde::de::DeserializeOwned;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::cli::types::Timeframe;
use crate::core::config::{LEAGUE_FILE, PLAYERS_FILE, PROJECTIONS_FILE};
use crate::error::Result;
use crate::league::{LeagueSettings, Player, Projection};
use crate::provider::StatsProvider;

/// Reads `league.json`, `players.json` and `projections.json` from `dir`.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    dir: PathBuf,
}

impl FixtureProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        debug!("Reading fixture {}", path.display());
        let contents = fs::read_to_string(&path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl StatsProvider for FixtureProvider {
    async fn league_settings(&self) -> Result<LeagueSettings> {
        self.read(LEAGUE_FILE)
    }

    async fn players(&self) -> Result<Vec<Player>> {
        self.read(PLAYERS_FILE)
    }

    async fn projections(&self, timeframe: Timeframe) -> Result<Vec<Projection>> {
        let all: Vec<Projection> = self.read(PROJECTIONS_FILE)?;
        Ok(all.into_iter().filter(|p| p.timeframe == timeframe).collect())
    }
}

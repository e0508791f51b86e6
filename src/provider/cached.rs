//! TTL-cached wrapper around any provider.

use log::debug;
use std::{sync::Arc, time::Duration};

use crate::cli::types::Timeframe;
use crate::core::cache::{Clock, SystemClock, TtlCache};
use crate::error::Result;
use crate::league::{LeagueSettings, Player, Projection};
use crate::provider::StatsProvider;

/// Entries per record kind. Projections are keyed by timeframe, of which
/// there are five.
const CACHE_CAPACITY: usize = 8;

/// Serves repeated requests from memory until entries go stale.
pub struct CachedProvider<P> {
    inner: P,
    league: TtlCache<(), LeagueSettings>,
    players: TtlCache<(), Vec<Player>>,
    projections: TtlCache<Timeframe, Vec<Projection>>,
}

impl<P: StatsProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Result<Self> {
        Self::with_clock(inner, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(inner: P, ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self> {
        Ok(Self {
            inner,
            league: TtlCache::with_clock(1, ttl, clock.clone())?,
            players: TtlCache::with_clock(1, ttl, clock.clone())?,
            projections: TtlCache::with_clock(CACHE_CAPACITY, ttl, clock)?,
        })
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drop every cached response so the next call goes to the inner provider.
    pub fn invalidate_all(&self) -> Result<()> {
        self.league.clear()?;
        self.players.clear()?;
        self.projections.clear()?;
        Ok(())
    }
}

impl<P: StatsProvider> StatsProvider for CachedProvider<P> {
    async fn league_settings(&self) -> Result<LeagueSettings> {
        if let Some(hit) = self.league.get(&())? {
            debug!("League settings served from cache");
            return Ok(hit);
        }
        let settings = self.inner.league_settings().await?;
        self.league.put((), settings.clone())?;
        Ok(settings)
    }

    async fn players(&self) -> Result<Vec<Player>> {
        if let Some(hit) = self.players.get(&())? {
            debug!("Players served from cache");
            return Ok(hit);
        }
        let players = self.inner.players().await?;
        self.players.put((), players.clone())?;
        Ok(players)
    }

    async fn projections(&self, timeframe: Timeframe) -> Result<Vec<Projection>> {
        if let Some(hit) = self.projections.get(&timeframe)? {
            debug!("Projections for {} served from cache", timeframe);
            return Ok(hit);
        }
        let projections = self.inner.projections(timeframe).await?;
        self.projections.put(timeframe, projections.clone())?;
        Ok(projections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{PlayerId, Position, SlotType, Stat};
    use crate::core::cache::ManualClock;
    use crate::league::{RosterSlots, SkaterStats, StatLine};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that counts how often it is asked for each record kind.
    #[derive(Default)]
    struct CountingProvider {
        league_calls: AtomicUsize,
        player_calls: AtomicUsize,
        projection_calls: AtomicUsize,
    }

    impl StatsProvider for CountingProvider {
        async fn league_settings(&self) -> Result<LeagueSettings> {
            self.league_calls.fetch_add(1, Ordering::SeqCst);
            Ok(LeagueSettings::points(
                RosterSlots::new([(SlotType::C, 1)]),
                [(Stat::Goals, 1.0)].into_iter().collect(),
            ))
        }

        async fn players(&self) -> Result<Vec<Player>> {
            self.player_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Player {
                id: PlayerId::new(1),
                name: "Skater 1".to_string(),
                team: "BOS".to_string(),
                positions: [Position::C].into_iter().collect(),
                is_goalie: false,
                games_played: 10,
                season_stats: None,
            }])
        }

        async fn projections(&self, timeframe: Timeframe) -> Result<Vec<Projection>> {
            self.projection_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Projection {
                player_id: PlayerId::new(1),
                timeframe,
                games_played: 3,
                stats: StatLine::Skater(SkaterStats {
                    goals: 1.0,
                    ..Default::default()
                }),
            }])
        }
    }

    fn cached(ttl_secs: u64) -> (CachedProvider<CountingProvider>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let provider = CachedProvider::with_clock(
            CountingProvider::default(),
            Duration::from_secs(ttl_secs),
            clock.clone(),
        )
        .unwrap();
        (provider, clock)
    }

    #[tokio::test]
    async fn test_repeated_calls_hit_cache() {
        let (provider, _) = cached(60);

        provider.league_settings().await.unwrap();
        provider.league_settings().await.unwrap();
        provider.players().await.unwrap();
        provider.players().await.unwrap();

        assert_eq!(provider.inner().league_calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.inner().player_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_projections_cached_per_timeframe() {
        let (provider, _) = cached(60);

        provider.projections(Timeframe::Next7).await.unwrap();
        provider.projections(Timeframe::Next7).await.unwrap();
        let season = provider.projections(Timeframe::RestOfSeason).await.unwrap();

        assert_eq!(season[0].timeframe, Timeframe::RestOfSeason);
        assert_eq!(provider.inner().projection_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_stale_entries_refetched() {
        let (provider, clock) = cached(60);

        provider.players().await.unwrap();
        clock.advance(Duration::from_secs(61));
        provider.players().await.unwrap();

        assert_eq!(provider.inner().player_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let (provider, _) = cached(60);

        provider.league_settings().await.unwrap();
        provider.projections(Timeframe::Today).await.unwrap();
        provider.invalidate_all().unwrap();
        provider.league_settings().await.unwrap();
        provider.projections(Timeframe::Today).await.unwrap();

        assert_eq!(provider.inner().league_calls.load(Ordering::SeqCst), 2);
        assert_eq!(provider.inner().projection_calls.load(Ordering::SeqCst), 2);
    }
}

//! Free-agent ranking.
//!
//! The default ranking is raw projected points. In fill-weaknesses mode a
//! free agent's value is boosted by how much it produces, relative to the
//! rest of the pool, in the categories where the caller's team trails the
//! league baseline.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::cli::types::Stat;
use crate::engine::scoring::{ensure_unique_players, index_projections, score_indexed};
use crate::error::{FantasyError, Result};
use crate::league::{LeagueSettings, Player, Projection};

#[cfg(test)]
mod tests;

/// Z-score at which a category counts as a strength in the reasoning text.
pub const STRONG_Z: f64 = 1.0;
/// Z-score at which a strength is called elite.
pub const ELITE_Z: f64 = 2.0;
/// How many strengths the reasoning text names.
const PROFILE_CATEGORIES: usize = 2;
/// Cap on a free agent's production relative to the pool average.
const MAX_RELATIVE_STRENGTH: f64 = 3.0;
/// Below this, a pool's standard deviation is treated as zero.
const STDEV_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankingStrategy {
    #[default]
    BestAvailable,
    FillWeaknesses,
}

/// Per-game category rates for the caller's roster and for an average team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    #[serde(rename = "teamRates")]
    pub team_rates: BTreeMap<Stat, f64>,
    #[serde(rename = "leagueBaseline")]
    pub league_baseline: BTreeMap<Stat, f64>,
}

impl CategoryProfile {
    pub fn validate(&self) -> Result<()> {
        for (stat, rate) in self.team_rates.iter().chain(self.league_baseline.iter()) {
            if !rate.is_finite() || (*rate < 0.0 && !stat.allows_negative()) {
                return Err(FantasyError::validation(format!(
                    "category rate for {} must be a non-negative number, got {}",
                    stat, rate
                )));
            }
        }
        Ok(())
    }

    /// Relative shortfall, in (0, 1], for every category the team trails
    /// the baseline in.
    pub fn deficits(&self) -> BTreeMap<Stat, f64> {
        self.league_baseline
            .iter()
            .filter_map(|(stat, baseline)| {
                let team = self.team_rates.get(stat)?;
                if *baseline <= 0.0 {
                    return None;
                }
                let gap = if stat.lower_is_better() {
                    team - baseline
                } else {
                    baseline - team
                };
                (gap > 0.0).then(|| (*stat, (gap / baseline).min(1.0)))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaiverTarget {
    pub player: Player,
    pub projection: Option<Projection>,
    /// Projected fantasy points.
    pub value: f64,
    /// Ranking key. Equal to `value` unless boosted for team needs.
    pub score: f64,
    pub reasoning: String,
    pub need_categories: Vec<Stat>,
}

/// Mean and standard deviation of one category across the free-agent pool.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PoolStats {
    mean: f64,
    stdev: f64,
}

impl PoolStats {
    fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                stdev: 0.0,
            };
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            stdev: variance.sqrt(),
        }
    }

    /// Z-score oriented so that positive always means better.
    fn zscore(&self, stat: Stat, value: f64) -> Option<f64> {
        if self.stdev < STDEV_EPSILON {
            return None;
        }
        let z = (value - self.mean) / self.stdev;
        Some(if stat.lower_is_better() { -z } else { z })
    }

    /// Production relative to the pool average, capped.
    fn relative(&self, stat: Stat, value: f64) -> f64 {
        let ratio = if stat.lower_is_better() {
            if value <= 0.0 {
                return 0.0;
            }
            self.mean / value
        } else {
            if self.mean <= 0.0 {
                return 0.0;
            }
            value / self.mean
        };
        ratio.clamp(0.0, MAX_RELATIVE_STRENGTH)
    }
}

/// Per-category pool statistics of the replacement-level free agents.
struct ReplacementPool {
    stats: BTreeMap<Stat, PoolStats>,
}

impl ReplacementPool {
    fn build<'a>(projections: impl Iterator<Item = &'a Projection>) -> Self {
        let mut values: BTreeMap<Stat, Vec<f64>> = BTreeMap::new();
        for projection in projections {
            for (stat, _) in projection.stats.entries() {
                if let Some(rate) = projection.per_game(stat) {
                    values.entry(stat).or_default().push(rate);
                }
            }
        }
        Self {
            stats: values
                .into_iter()
                .map(|(stat, v)| (stat, PoolStats::from_values(&v)))
                .collect(),
        }
    }

    /// Categories the projection stands out in, strongest first.
    fn strengths(&self, projection: &Projection) -> Vec<(Stat, f64)> {
        let mut strengths: Vec<(Stat, f64)> = projection
            .stats
            .entries()
            .into_iter()
            .filter_map(|(stat, _)| {
                let rate = projection.per_game(stat)?;
                let z = self.stats.get(&stat)?.zscore(stat, rate)?;
                (z >= STRONG_Z).then_some((stat, z))
            })
            .collect();
        strengths.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        strengths
    }

    /// Multiplier for team needs, and the needs the projection helps with.
    fn need_boost(&self, projection: &Projection, deficits: &BTreeMap<Stat, f64>) -> (f64, Vec<Stat>) {
        let mut multiplier = 1.0;
        let mut helped: Vec<(Stat, f64)> = Vec::new();
        for (stat, deficit) in deficits {
            let Some(rate) = projection.per_game(*stat) else {
                continue;
            };
            let Some(pool) = self.stats.get(stat) else {
                continue;
            };
            let relative = pool.relative(*stat, rate);
            multiplier += deficit * relative;
            if relative > 1.0 {
                helped.push((*stat, deficit * relative));
            }
        }
        helped.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        (multiplier, helped.into_iter().map(|(s, _)| s).collect())
    }
}

fn join_stats(stats: &[Stat]) -> String {
    stats.iter().map(|s| s.abbrev()).collect::<Vec<_>>().join("/")
}

fn describe(pool: &ReplacementPool, projection: Option<&Projection>, value: f64, needs: &[Stat]) -> String {
    let Some(projection) = projection else {
        return "no projection available; ranked at zero value".to_string();
    };

    let strengths = pool.strengths(projection);
    let profile = match strengths.first() {
        Some((_, top_z)) => {
            let tier = if *top_z >= ELITE_Z { "elite" } else { "strong" };
            let named: Vec<Stat> = strengths
                .iter()
                .take(PROFILE_CATEGORIES)
                .map(|(s, _)| *s)
                .collect();
            format!("{} {} profile", tier, join_stats(&named))
        }
        None => "replacement-level profile".to_string(),
    };

    let mut reasoning = format!(
        "{}; {:.1} projected pts {}",
        profile,
        value,
        projection.timeframe.describe()
    );
    if !needs.is_empty() {
        reasoning.push_str(&format!("; fills team need in {}", join_stats(needs)));
    }
    reasoning
}

/// Rank `free_agents` by projected points, best first; ties go to the lower
/// player id.
pub fn rank_waiver_targets(
    free_agents: &[Player],
    projections: &[Projection],
    settings: &LeagueSettings,
) -> Result<Vec<WaiverTarget>> {
    rank_waiver_targets_with(
        free_agents,
        projections,
        settings,
        RankingStrategy::BestAvailable,
        None,
    )
}

/// Rank `free_agents` under `strategy`.
///
/// `FillWeaknesses` needs `profile`; without one the ranking falls back to
/// raw projected points.
pub fn rank_waiver_targets_with(
    free_agents: &[Player],
    projections: &[Projection],
    settings: &LeagueSettings,
    strategy: RankingStrategy,
    profile: Option<&CategoryProfile>,
) -> Result<Vec<WaiverTarget>> {
    settings.validate()?;
    if settings.weights().is_none() {
        return Err(FantasyError::UnsupportedScoring);
    }
    ensure_unique_players(free_agents, "free agent pool")?;
    let index = index_projections(projections)?;

    let deficits = match (strategy, profile) {
        (RankingStrategy::FillWeaknesses, Some(profile)) => {
            profile.validate()?;
            Some(profile.deficits())
        }
        (RankingStrategy::FillWeaknesses, None) => {
            warn!("Fill-weaknesses ranking requested without a category profile; ranking by projected points");
            None
        }
        (RankingStrategy::BestAvailable, _) => None,
    };

    let scored = free_agents
        .iter()
        .map(|player| score_indexed(player, &index, settings).map(|s| (player, s)))
        .collect::<Result<Vec<_>>>()?;

    let skater_pool = ReplacementPool::build(
        scored
            .iter()
            .filter_map(|(_, s)| s.map(|(p, _)| p))
            .filter(|p| !p.is_goalie()),
    );
    let goalie_pool = ReplacementPool::build(
        scored
            .iter()
            .filter_map(|(_, s)| s.map(|(p, _)| p))
            .filter(|p| p.is_goalie()),
    );

    let mut targets: Vec<WaiverTarget> = scored
        .into_iter()
        .map(|(player, scored)| {
            let projection = scored.map(|(p, _)| p);
            let value = scored.map(|(_, pts)| pts).unwrap_or(0.0);
            let pool = if player.is_goalie {
                &goalie_pool
            } else {
                &skater_pool
            };

            let (multiplier, needs) = match (&deficits, projection) {
                (Some(deficits), Some(projection)) => pool.need_boost(projection, deficits),
                _ => (1.0, Vec::new()),
            };
            let score = if value > 0.0 { value * multiplier } else { value };

            WaiverTarget {
                player: player.clone(),
                projection: projection.cloned(),
                value,
                score,
                reasoning: describe(pool, projection, value, &needs),
                need_categories: needs,
            }
        })
        .collect();

    targets.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.player.id.cmp(&b.player.id))
    });

    debug!(
        "Ranked {} free agents ({:?}, {} weak categories)",
        targets.len(),
        strategy,
        deficits.as_ref().map(|d| d.len()).unwrap_or(0)
    );
    Ok(targets)
}

//! Stat line to fantasy point conversion.

use std::collections::{BTreeMap, HashMap};

use crate::cli::types::{PlayerId, Stat};
use crate::error::{FantasyError, Result};
use crate::league::{LeagueSettings, Player, Projection, ScoringRules, StatLine};


/// Weighted sum of every stat present in both `line` and `weights`.
///
/// Weight signs are applied as-is: a negative GAA weight makes a lower GAA
/// cost fewer points. Rate stats are never inverted, so a GAA of 2.0 at
/// weight -1.0 contributes -2.0, not +2.0.
pub fn points_for_line(line: &StatLine, weights: &BTreeMap<Stat, f64>) -> f64 {
    line.entries()
        .into_iter()
        .filter_map(|(stat, value)| weights.get(&stat).map(|w| value * w))
        .sum()
}

/// Fantasy points for one projection under `settings`.
///
/// Only points leagues reduce to a scalar; category leagues return
/// [`FantasyError::UnsupportedScoring`].
pub fn calculate_fantasy_points(projection: &Projection, settings: &LeagueSettings) -> Result<f64> {
    match &settings.scoring {
        ScoringRules::Points { points_per_stat } => {
            Ok(points_for_line(&projection.stats, points_per_stat))
        }
        ScoringRules::Categories { .. } => Err(FantasyError::UnsupportedScoring),
    }
}

/// Like [`calculate_fantasy_points`], but first checks that `projection`
/// belongs to `player` and has the matching skater/goalie shape.
pub fn score_player(player: &Player, projection: &Projection, settings: &LeagueSettings) -> Result<f64> {
    projection.check_against(player)?;
    calculate_fantasy_points(projection, settings)
}

/// Projections keyed by player id.
pub type ProjectionIndex<'a> = HashMap<PlayerId, &'a Projection>;

/// Index `projections` by player, rejecting duplicates.
pub fn index_projections(projections: &[Projection]) -> Result<ProjectionIndex<'_>> {
    let mut index = HashMap::with_capacity(projections.len());
    for projection in projections {
        projection.validate()?;
        if index.insert(projection.player_id, projection).is_some() {
            return Err(FantasyError::validation(format!(
                "duplicate projection for player {}",
                projection.player_id
            )));
        }
    }
    Ok(index)
}

/// Score `player` against its projection in `index`, if any.
///
/// A missing projection is `Ok(None)`: callers treat it as zero.
pub fn score_indexed<'a>(
    player: &Player,
    index: &ProjectionIndex<'a>,
    settings: &LeagueSettings,
) -> Result<Option<(&'a Projection, f64)>> {
    match index.get(&player.id) {
        Some(projection) => {
            let points = score_player(player, projection, settings)?;
            Ok(Some((*projection, points)))
        }
        None => Ok(None),
    }
}

/// Reject rosters that list the same player id twice.
pub fn ensure_unique_players<'a>(players: impl IntoIterator<Item = &'a Player>, context: &str) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for player in players {
        player.validate()?;
        if !seen.insert(player.id) {
            return Err(FantasyError::validation(format!(
                "duplicate player id {} in {}",
                player.id, context
            )));
        }
    }
    Ok(())
}

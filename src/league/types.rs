//! Player and projection records supplied by the data layer.

use crate::cli::types::{PlayerId, Position, Stat, Timeframe};
use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;


/// Projected or accumulated stat line for a skater.
///
/// Absent fields deserialize as zero, which contributes nothing to scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkaterStats {
    #[serde(rename = "G", default)]
    pub goals: f64,
    #[serde(rename = "A", default)]
    pub assists: f64,
    #[serde(rename = "PTS", default)]
    pub points: f64,
    #[serde(rename = "plusMinus", default)]
    pub plus_minus: f64,
    #[serde(rename = "PPP", default)]
    pub power_play_points: f64,
    #[serde(rename = "SOG", default)]
    pub shots: f64,
    #[serde(rename = "HIT", default)]
    pub hits: f64,
    #[serde(rename = "BLK", default)]
    pub blocks: f64,
    #[serde(rename = "PIM", default)]
    pub penalty_minutes: f64,
}

impl SkaterStats {
    pub fn get(&self, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Goals => Some(self.goals),
            Stat::Assists => Some(self.assists),
            Stat::Points => Some(self.points),
            Stat::PlusMinus => Some(self.plus_minus),
            Stat::PowerPlayPoints => Some(self.power_play_points),
            Stat::ShotsOnGoal => Some(self.shots),
            Stat::Hits => Some(self.hits),
            Stat::Blocks => Some(self.blocks),
            Stat::PenaltyMinutes => Some(self.penalty_minutes),
            _ => None,
        }
    }

    fn map(&self, f: impl Fn(Stat, f64) -> f64) -> Self {
        Self {
            goals: f(Stat::Goals, self.goals),
            assists: f(Stat::Assists, self.assists),
            points: f(Stat::Points, self.points),
            plus_minus: f(Stat::PlusMinus, self.plus_minus),
            power_play_points: f(Stat::PowerPlayPoints, self.power_play_points),
            shots: f(Stat::ShotsOnGoal, self.shots),
            hits: f(Stat::Hits, self.hits),
            blocks: f(Stat::Blocks, self.blocks),
            penalty_minutes: f(Stat::PenaltyMinutes, self.penalty_minutes),
        }
    }
}

/// Projected or accumulated stat line for a goalie.
///
/// `goals_against_average` and `save_percentage` are rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalieStats {
    #[serde(rename = "W", default)]
    pub wins: f64,
    #[serde(rename = "SV", default)]
    pub saves: f64,
    #[serde(rename = "GA", default)]
    pub goals_against: f64,
    #[serde(rename = "GAA", default)]
    pub goals_against_average: f64,
    #[serde(rename = "SV_PCT", default)]
    pub save_percentage: f64,
    #[serde(rename = "SO", default)]
    pub shutouts: f64,
}

impl GoalieStats {
    pub fn get(&self, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Wins => Some(self.wins),
            Stat::Saves => Some(self.saves),
            Stat::GoalsAgainst => Some(self.goals_against),
            Stat::GoalsAgainstAverage => Some(self.goals_against_average),
            Stat::SavePercentage => Some(self.save_percentage),
            Stat::Shutouts => Some(self.shutouts),
            _ => None,
        }
    }

    fn map(&self, f: impl Fn(Stat, f64) -> f64) -> Self {
        Self {
            wins: f(Stat::Wins, self.wins),
            saves: f(Stat::Saves, self.saves),
            goals_against: f(Stat::GoalsAgainst, self.goals_against),
            goals_against_average: f(Stat::GoalsAgainstAverage, self.goals_against_average),
            save_percentage: f(Stat::SavePercentage, self.save_percentage),
            shutouts: f(Stat::Shutouts, self.shutouts),
        }
    }
}

/// A stat line of either shape. Serialized under exactly one of the
/// `skaterStats` / `goalieStats` keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatLine {
    #[serde(rename = "skaterStats")]
    Skater(SkaterStats),
    #[serde(rename = "goalieStats")]
    Goalie(GoalieStats),
}

impl StatLine {
    pub fn is_goalie(&self) -> bool {
        matches!(self, StatLine::Goalie(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StatLine::Skater(_) => "skater",
            StatLine::Goalie(_) => "goalie",
        }
    }

    pub fn get(&self, stat: Stat) -> Option<f64> {
        match self {
            StatLine::Skater(s) => s.get(stat),
            StatLine::Goalie(g) => g.get(stat),
        }
    }

    /// Every (stat, value) pair carried by this line.
    pub fn entries(&self) -> Vec<(Stat, f64)> {
        let stats: &[Stat] = match self {
            StatLine::Skater(_) => &Stat::SKATER,
            StatLine::Goalie(_) => &Stat::GOALIE,
        };
        stats
            .iter()
            .filter_map(|stat| self.get(*stat).map(|v| (*stat, v)))
            .collect()
    }

    /// Multiply every stat, rates included, by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        match self {
            StatLine::Skater(s) => StatLine::Skater(s.map(|_, v| v * k)),
            StatLine::Goalie(g) => StatLine::Goalie(g.map(|_, v| v * k)),
        }
    }

    /// Multiply counting stats by `factor`; rate stats are carried unchanged.
    pub fn prorated(&self, factor: f64) -> Self {
        let f = |stat: Stat, v: f64| if stat.is_rate() { v } else { v * factor };
        match self {
            StatLine::Skater(s) => StatLine::Skater(s.map(f)),
            StatLine::Goalie(g) => StatLine::Goalie(g.map(f)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (stat, value) in self.entries() {
            if !value.is_finite() {
                return Err(FantasyError::validation(format!(
                    "{} must be finite, got {}",
                    stat, value
                )));
            }
            if value < 0.0 && !stat.allows_negative() {
                return Err(FantasyError::validation(format!(
                    "{} must be non-negative, got {}",
                    stat, value
                )));
            }
        }
        Ok(())
    }
}

/// A rostered or available player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub team: String,
    pub positions: BTreeSet<Position>,
    #[serde(rename = "isGoalie")]
    pub is_goalie: bool,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: u32,
    #[serde(rename = "seasonStats", default, skip_serializing_if = "Option::is_none")]
    pub season_stats: Option<StatLine>,
}

impl Player {
    pub fn kind(&self) -> &'static str {
        if self.is_goalie {
            "goalie"
        } else {
            "skater"
        }
    }

    /// Positions joined for display, e.g. "C/LW".
    pub fn position_label(&self) -> String {
        self.positions
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() {
            return Err(FantasyError::validation(format!(
                "player {} has no eligible positions",
                self.id
            )));
        }
        if self.is_goalie != self.positions.contains(&Position::G) {
            return Err(FantasyError::validation(format!(
                "player {} goalie flag does not match positions {}",
                self.id,
                self.position_label()
            )));
        }
        if let Some(stats) = &self.season_stats {
            if stats.is_goalie() != self.is_goalie {
                return Err(FantasyError::TypeMismatch {
                    player_id: self.id,
                    expected: self.kind(),
                    found: stats.kind(),
                });
            }
            stats.validate()?;
        }
        Ok(())
    }
}

/// Expected production for one player over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: u32,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl Projection {
    pub fn is_goalie(&self) -> bool {
        self.stats.is_goalie()
    }

    /// Per-game value of `stat`. Rate stats are returned as-is.
    pub fn per_game(&self, stat: Stat) -> Option<f64> {
        let value = self.stats.get(stat)?;
        if stat.is_rate() || self.games_played == 0 {
            Some(value)
        } else {
            Some(value / self.games_played as f64)
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.stats.validate()
    }

    /// Fail with `TypeMismatch` unless this projection has `player`'s stat shape.
    pub fn check_against(&self, player: &Player) -> Result<()> {
        if self.player_id != player.id {
            return Err(FantasyError::validation(format!(
                "projection for player {} applied to player {}",
                self.player_id, player.id
            )));
        }
        if self.is_goalie() != player.is_goalie {
            return Err(FantasyError::TypeMismatch {
                player_id: player.id,
                expected: player.kind(),
                found: self.stats.kind(),
            });
        }
        Ok(())
    }
}

/// Build a projection for `games` upcoming games from `player`'s season line.
///
/// Counting stats are prorated by `games / games_played`; GAA and SV% carry
/// over unchanged.
pub fn project_from_season(player: &Player, timeframe: Timeframe, games: u32) -> Result<Projection> {
    let season = player.season_stats.as_ref().ok_or_else(|| {
        FantasyError::validation(format!("player {} has no season stats", player.id))
    })?;
    if player.games_played == 0 {
        return Err(FantasyError::validation(format!(
            "player {} has no games played to project from",
            player.id
        )));
    }
    if season.is_goalie() != player.is_goalie {
        return Err(FantasyError::TypeMismatch {
            player_id: player.id,
            expected: player.kind(),
            found: season.kind(),
        });
    }

    let factor = games as f64 / player.games_played as f64;
    Ok(Projection {
        player_id: player.id,
        timeframe,
        games_played: games,
        stats: season.prorated(factor),
    })
}

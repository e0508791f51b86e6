//! Trade evaluation.

use serde::Serialize;
use std::fmt;

use crate::cli::types::Timeframe;
use crate::engine::scoring::{ensure_unique_players, index_projections, score_indexed, ProjectionIndex};
use crate::error::{FantasyError, Result};
use crate::league::{LeagueSettings, Player, Projection};

/// Net gain, in projected points, a trade must exceed to count as a win
/// (or fall below the negative of to count as a loss).
pub const DEFAULT_TRADE_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Win,
    Loss,
    Fair,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Win => "Win",
            Verdict::Loss => "Loss",
            Verdict::Fair => "Fair",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeResult {
    pub verdict: Verdict,
    pub net_gain: f64,
    pub value_out: f64,
    pub value_in: f64,
    pub timeframe: Option<Timeframe>,
    pub summary: String,
}

/// Trade evaluator with an adjustable verdict threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeAnalyzer {
    threshold: f64,
}

impl Default for TradeAnalyzer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_TRADE_THRESHOLD,
        }
    }
}

impl TradeAnalyzer {
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(FantasyError::validation(format!(
                "trade threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn verdict(&self, net_gain: f64) -> Verdict {
        if net_gain > self.threshold {
            Verdict::Win
        } else if net_gain < -self.threshold {
            Verdict::Loss
        } else {
            Verdict::Fair
        }
    }

    /// Compare the projected value of `players_out` with `players_in`.
    ///
    /// Players without a projection add nothing to their side. All
    /// projections involved must cover the same timeframe.
    pub fn analyze(
        &self,
        players_out: &[Player],
        players_in: &[Player],
        projections: &[Projection],
        settings: &LeagueSettings,
    ) -> Result<TradeResult> {
        settings.validate()?;
        if settings.weights().is_none() {
            return Err(FantasyError::UnsupportedScoring);
        }
        ensure_unique_players(players_out.iter().chain(players_in.iter()), "trade")?;
        let index = index_projections(projections)?;

        let timeframe = common_timeframe(players_out.iter().chain(players_in.iter()), &index)?;
        let value_out = side_value(players_out, &index, settings)?;
        let value_in = side_value(players_in, &index, settings)?;
        let net_gain = value_in - value_out;
        let verdict = self.verdict(net_gain);

        let window = timeframe.map(|t| t.describe()).unwrap_or("with no projections");
        let summary = format!(
            "{}: receiving {:.1} pts for {:.1} pts given up {} (net {:+.1}, threshold {:.1})",
            verdict, value_in, value_out, window, net_gain, self.threshold
        );

        Ok(TradeResult {
            verdict,
            net_gain,
            value_out,
            value_in,
            timeframe,
            summary,
        })
    }
}

/// Evaluate a trade with [`DEFAULT_TRADE_THRESHOLD`].
pub fn analyze_trade(
    players_out: &[Player],
    players_in: &[Player],
    projections: &[Projection],
    settings: &LeagueSettings,
) -> Result<TradeResult> {
    TradeAnalyzer::default().analyze(players_out, players_in, projections, settings)
}

fn side_value(players: &[Player], index: &ProjectionIndex<'_>, settings: &LeagueSettings) -> Result<f64> {
    let mut total = 0.0;
    for player in players {
        if let Some((_, points)) = score_indexed(player, index, settings)? {
            total += points;
        }
    }
    Ok(total)
}

fn common_timeframe<'a>(
    players: impl Iterator<Item = &'a Player>,
    index: &ProjectionIndex<'_>,
) -> Result<Option<Timeframe>> {
    let mut window: Option<Timeframe> = None;
    for player in players {
        let Some(projection) = index.get(&player.id) else {
            continue;
        };
        match window {
            None => window = Some(projection.timeframe),
            Some(tf) if tf != projection.timeframe => {
                return Err(FantasyError::validation(format!(
                    "trade mixes {} and {} projections",
                    tf, projection.timeframe
                )));
            }
            Some(_) => {}
        }
    }
    Ok(window)
}

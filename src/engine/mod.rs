//! Pure decision components: scoring, lineup optimization, trade evaluation
//! and free-agent ranking.
//!
//! Nothing in here performs I/O. Every function takes the records it needs
//! and returns a fresh result.

pub mod lineup;
pub mod scoring;
pub mod trade;
pub mod waiver;

pub use lineup::{optimize_lineup, BenchedPlayer, LineupResult, LineupSlot};
pub use scoring::{calculate_fantasy_points, points_for_line, score_player};
pub use trade::{analyze_trade, TradeAnalyzer, TradeResult, Verdict, DEFAULT_TRADE_THRESHOLD};
pub use waiver::{
    rank_waiver_targets, rank_waiver_targets_with, CategoryProfile, RankingStrategy, WaiverTarget,
};

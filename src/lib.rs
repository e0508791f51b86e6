//! Fantasy Hockey Decision Engine
//!
//! Turns league settings, player records and stat projections into roster
//! decisions for head-to-head points leagues.
//!
//! ## Features
//!
//! - **Scoring**: Weighted fantasy points for skater and goalie stat lines
//! - **Lineup Optimization**: Maximum-weight assignment of players to lineup
//!   slots, honoring multi-position eligibility, UTIL and goalie-only slots
//! - **Trade Analysis**: Net projected gain with a Win / Loss / Fair verdict
//! - **Waiver Ranking**: Free agents ranked by projected value, optionally
//!   boosted for the categories a team is weak in
//! - **Pluggable Data**: JSON fixtures or an HTTP stats service, with a TTL cache
//!
//! ## Quick Start
//!
//! ```rust
//! use fhockey::{
//!     engine::calculate_fantasy_points,
//!     league::{LeagueSettings, Projection, RosterSlots, SkaterStats, StatLine},
//!     PlayerId, SlotType, Stat, Timeframe,
//! };
//!
//! let settings = LeagueSettings::points(
//!     RosterSlots::new([(SlotType::C, 2)]),
//!     [(Stat::Goals, 3.0), (Stat::Assists, 2.0)].into_iter().collect(),
//! );
//! let projection = Projection {
//!     player_id: PlayerId::new(8478402),
//!     timeframe: Timeframe::Next7,
//!     games_played: 3,
//!     stats: StatLine::Skater(SkaterStats {
//!         goals: 1.0,
//!         assists: 2.0,
//!         ..Default::default()
//!     }),
//! };
//!
//! assert_eq!(calculate_fantasy_points(&projection, &settings).unwrap(), 7.0);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a directory of fixtures, or at a stats service:
//! ```bash
//! export FHOCKEY_DATA_DIR=~/hockey/my-league
//! export FHOCKEY_PROVIDER_URL=http://localhost:8080/api
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod league;
pub mod provider;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, SlotType, Stat, Timeframe};
pub use error::{FantasyError, Result};
pub use league::{LeagueSettings, Player, Projection};

pub const DATA_DIR_ENV_VAR: &str = "FHOCKEY_DATA_DIR";
pub const PROVIDER_URL_ENV_VAR: &str = "FHOCKEY_PROVIDER_URL";
pub const TRADE_THRESHOLD_ENV_VAR: &str = "FHOCKEY_TRADE_THRESHOLD";

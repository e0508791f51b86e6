//! Records exchanged with the data layer: players, projections, league settings.

pub mod settings;
pub mod types;

pub use settings::{LeagueSettings, RosterSlots, ScoringRules};
pub use types::{project_from_season, GoalieStats, Player, Projection, SkaterStats, StatLine};

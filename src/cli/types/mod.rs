//! Type-safe wrappers and enums for fantasy hockey data.

pub mod ids;
pub mod position;
pub mod stat;
pub mod time;

pub use ids::PlayerId;
pub use position::{Position, SlotType};
pub use stat::Stat;
pub use time::Timeframe;

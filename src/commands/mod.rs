//! Command implementations for the fhockey CLI

pub mod common;
pub mod league;
pub mod lineup;
pub mod score;
pub mod trade;
pub mod waivers;

pub use common::{CommandContext, LeagueRecords};

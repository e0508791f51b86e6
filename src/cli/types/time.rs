//! Evaluation windows for projections.

use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The window a projection covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "today")]
    Today,
    #[default]
    #[serde(rename = "next_7")]
    Next7,
    #[serde(rename = "next_14")]
    Next14,
    #[serde(rename = "rest_of_season")]
    RestOfSeason,
    #[serde(rename = "custom")]
    Custom,
}

impl Timeframe {
    /// Wire name, as used in query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Today => "today",
            Timeframe::Next7 => "next_7",
            Timeframe::Next14 => "next_14",
            Timeframe::RestOfSeason => "rest_of_season",
            Timeframe::Custom => "custom",
        }
    }

    /// Human-readable phrase for summaries, e.g. "over the next 7 days".
    pub fn describe(&self) -> &'static str {
        match self {
            Timeframe::Today => "today",
            Timeframe::Next7 => "over the next 7 days",
            Timeframe::Next14 => "over the next 14 days",
            Timeframe::RestOfSeason => "over the rest of the season",
            Timeframe::Custom => "over the custom window",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "today" => Ok(Timeframe::Today),
            "next_7" | "next7" | "week" => Ok(Timeframe::Next7),
            "next_14" | "next14" => Ok(Timeframe::Next14),
            "rest_of_season" | "ros" => Ok(Timeframe::RestOfSeason),
            "custom" => Ok(Timeframe::Custom),
            _ => Err(FantasyError::InvalidTimeframe {
                timeframe: s.to_string(),
            }),
        }
    }
}

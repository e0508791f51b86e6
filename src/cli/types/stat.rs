//! Statistical categories tracked for skaters and goalies.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scoring statistic, serialized by its league abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stat {
    #[serde(rename = "G")]
    Goals,
    #[serde(rename = "A")]
    Assists,
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "plusMinus")]
    PlusMinus,
    #[serde(rename = "PPP")]
    PowerPlayPoints,
    #[serde(rename = "SOG")]
    ShotsOnGoal,
    #[serde(rename = "HIT")]
    Hits,
    #[serde(rename = "BLK")]
    Blocks,
    #[serde(rename = "PIM")]
    PenaltyMinutes,
    #[serde(rename = "W")]
    Wins,
    #[serde(rename = "SV")]
    Saves,
    #[serde(rename = "GA")]
    GoalsAgainst,
    #[serde(rename = "GAA")]
    GoalsAgainstAverage,
    #[serde(rename = "SV_PCT")]
    SavePercentage,
    #[serde(rename = "SO")]
    Shutouts,
}

impl Stat {
    pub const SKATER: [Stat; 9] = [
        Stat::Goals,
        Stat::Assists,
        Stat::Points,
        Stat::PlusMinus,
        Stat::PowerPlayPoints,
        Stat::ShotsOnGoal,
        Stat::Hits,
        Stat::Blocks,
        Stat::PenaltyMinutes,
    ];

    pub const GOALIE: [Stat; 6] = [
        Stat::Wins,
        Stat::Saves,
        Stat::GoalsAgainst,
        Stat::GoalsAgainstAverage,
        Stat::SavePercentage,
        Stat::Shutouts,
    ];

    pub fn abbrev(&self) -> &'static str {
        match self {
            Stat::Goals => "G",
            Stat::Assists => "A",
            Stat::Points => "PTS",
            Stat::PlusMinus => "plusMinus",
            Stat::PowerPlayPoints => "PPP",
            Stat::ShotsOnGoal => "SOG",
            Stat::Hits => "HIT",
            Stat::Blocks => "BLK",
            Stat::PenaltyMinutes => "PIM",
            Stat::Wins => "W",
            Stat::Saves => "SV",
            Stat::GoalsAgainst => "GA",
            Stat::GoalsAgainstAverage => "GAA",
            Stat::SavePercentage => "SV_PCT",
            Stat::Shutouts => "SO",
        }
    }

    pub fn is_goalie_stat(&self) -> bool {
        Stat::GOALIE.contains(self)
    }

    /// Rate stats are averages, not counts, and never scale with games played.
    pub fn is_rate(&self) -> bool {
        matches!(self, Stat::GoalsAgainstAverage | Stat::SavePercentage)
    }

    pub fn lower_is_better(&self) -> bool {
        matches!(self, Stat::GoalsAgainst | Stat::GoalsAgainstAverage)
    }

    /// Only plus/minus may legitimately go negative.
    pub fn allows_negative(&self) -> bool {
        matches!(self, Stat::PlusMinus)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

impl FromStr for Stat {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Stat::SKATER
            .iter()
            .chain(Stat::GOALIE.iter())
            .find(|stat| stat.abbrev().eq_ignore_ascii_case(trimmed))
            .copied()
            .or(match trimmed.to_uppercase().as_str() {
                "+/-" | "PM" => Some(Stat::PlusMinus),
                "SV%" => Some(Stat::SavePercentage),
                _ => None,
            })
            .ok_or_else(|| FantasyError::InvalidStat {
                stat: s.to_string(),
            })
    }
}

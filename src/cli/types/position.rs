//! Hockey positions and lineup slot types.

use crate::error::FantasyError;
use crate::league::types::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positions a player can be eligible at.
///
/// # Examples
///
/// ```rust
/// use fhockey::Position;
///
/// let lw: Position = "lw".parse().unwrap();
/// assert_eq!(lw, Position::LW);
/// assert_eq!(lw.to_string(), "LW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    C,
    LW,
    RW,
    D,
    G,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::C => "C",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::D => "D",
            Position::G => "G",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Position::C),
            "LW" => Ok(Position::LW),
            "RW" => Ok(Position::RW),
            "D" => Ok(Position::D),
            "G" => Ok(Position::G),
            _ => Err(FantasyError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

/// Lineup slot types a league can configure.
///
/// Variant order is the canonical lineup order: positional skater slots,
/// then UTIL, then G, followed by the non-scoring BN and IR slots. The derived
/// `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlotType {
    C,
    LW,
    RW,
    D,
    UTIL,
    G,
    BN,
    IR,
}

impl SlotType {
    pub const ALL: [SlotType; 8] = [
        SlotType::C,
        SlotType::LW,
        SlotType::RW,
        SlotType::D,
        SlotType::UTIL,
        SlotType::G,
        SlotType::BN,
        SlotType::IR,
    ];

    /// Whether a player in this slot counts toward projected points.
    pub fn is_active(&self) -> bool {
        !matches!(self, SlotType::BN | SlotType::IR)
    }

    /// Positional eligibility of `player` for this slot.
    ///
    /// IR accepts anyone; injury status is the caller's concern.
    pub fn accepts(&self, player: &Player) -> bool {
        match self {
            SlotType::C => !player.is_goalie && player.positions.contains(&Position::C),
            SlotType::LW => !player.is_goalie && player.positions.contains(&Position::LW),
            SlotType::RW => !player.is_goalie && player.positions.contains(&Position::RW),
            SlotType::D => !player.is_goalie && player.positions.contains(&Position::D),
            SlotType::UTIL => !player.is_goalie,
            SlotType::G => player.is_goalie,
            SlotType::BN | SlotType::IR => true,
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlotType::C => "C",
            SlotType::LW => "LW",
            SlotType::RW => "RW",
            SlotType::D => "D",
            SlotType::UTIL => "UTIL",
            SlotType::G => "G",
            SlotType::BN => "BN",
            SlotType::IR => "IR",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SlotType {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(SlotType::C),
            "LW" => Ok(SlotType::LW),
            "RW" => Ok(SlotType::RW),
            "D" => Ok(SlotType::D),
            "UTIL" | "UTL" => Ok(SlotType::UTIL),
            "G" => Ok(SlotType::G),
            "BN" | "BENCH" => Ok(SlotType::BN),
            "IR" | "IR+" => Ok(SlotType::IR),
            _ => Err(FantasyError::InvalidSlot {
                slot: s.to_string(),
            }),
        }
    }
}

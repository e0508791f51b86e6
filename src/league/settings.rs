//! League scoring rules and roster configuration.

use crate::cli::types::{SlotType, Stat};
use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Slot type to capacity. Counts are signed so that malformed input can be
/// rejected with a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterSlots(pub BTreeMap<SlotType, i64>);

impl RosterSlots {
    pub fn new(slots: impl IntoIterator<Item = (SlotType, i64)>) -> Self {
        Self(slots.into_iter().collect())
    }

    pub fn count(&self, slot: SlotType) -> usize {
        self.0.get(&slot).copied().unwrap_or(0).max(0) as usize
    }

    pub fn total(&self) -> usize {
        SlotType::ALL.iter().map(|s| self.count(*s)).sum()
    }

    /// One entry per slot instance, in canonical order.
    pub fn expand(&self) -> Vec<SlotType> {
        SlotType::ALL
            .iter()
            .flat_map(|slot| std::iter::repeat(*slot).take(self.count(*slot)))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        for (slot, count) in &self.0 {
            if *count < 0 {
                return Err(FantasyError::validation(format!(
                    "slot {} has negative count {}",
                    slot, count
                )));
            }
        }
        Ok(())
    }
}

/// How a league turns stats into results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scoringType")]
pub enum ScoringRules {
    #[serde(rename = "H2H_Points")]
    Points {
        #[serde(rename = "pointsPerStat", default)]
        points_per_stat: BTreeMap<Stat, f64>,
    },
    #[serde(rename = "H2H_Categories")]
    Categories {
        #[serde(rename = "skaterCategories", default)]
        skater_categories: BTreeSet<Stat>,
        #[serde(rename = "goalieCategories", default)]
        goalie_categories: BTreeSet<Stat>,
    },
}

impl ScoringRules {
    pub fn label(&self) -> &'static str {
        match self {
            ScoringRules::Points { .. } => "H2H_Points",
            ScoringRules::Categories { .. } => "H2H_Categories",
        }
    }
}

/// Root settings object for one league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueSettings {
    #[serde(rename = "rosterSlots")]
    pub roster_slots: RosterSlots,
    #[serde(flatten)]
    pub scoring: ScoringRules,
}

impl LeagueSettings {
    /// Points league with the given weights.
    pub fn points(roster_slots: RosterSlots, points_per_stat: BTreeMap<Stat, f64>) -> Self {
        Self {
            roster_slots,
            scoring: ScoringRules::Points { points_per_stat },
        }
    }

    /// Weight table, if this is a points league.
    pub fn weights(&self) -> Option<&BTreeMap<Stat, f64>> {
        match &self.scoring {
            ScoringRules::Points { points_per_stat } => Some(points_per_stat),
            ScoringRules::Categories { .. } => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.roster_slots.validate()?;
        match &self.scoring {
            ScoringRules::Points { points_per_stat } => {
                if let Some((stat, w)) = points_per_stat.iter().find(|(_, w)| !w.is_finite()) {
                    return Err(FantasyError::validation(format!(
                        "weight for {} must be finite, got {}",
                        stat, w
                    )));
                }
            }
            ScoringRules::Categories {
                skater_categories,
                goalie_categories,
            } => {
                if let Some(stat) = skater_categories.iter().find(|s| s.is_goalie_stat()) {
                    return Err(FantasyError::validation(format!(
                        "{} is not a skater category",
                        stat
                    )));
                }
                if let Some(stat) = goalie_categories.iter().find(|s| !s.is_goalie_stat()) {
                    return Err(FantasyError::validation(format!(
                        "{} is not a goalie category",
                        stat
                    )));
                }
            }
        }
        Ok(())
    }
}

//! League summary command

use std::collections::BTreeSet;

use crate::{
    cli::types::{SlotType, Stat},
    league::{LeagueSettings, ScoringRules},
    provider::StatsProvider,
    Result,
};

use super::common::CommandContext;

/// Handle the league command
pub async fn handle_league(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let settings = ctx.provider.league_settings().await?;
    settings.validate()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        print!("{}", render_league(&settings));
    }

    if ctx.verbose {
        println!("Data directory: {}", ctx.data_dir.display());
    }

    Ok(())
}

/// Human-readable summary of scoring rules and roster slots.
pub fn render_league(settings: &LeagueSettings) -> String {
    let mut out = format!("Scoring: {}\n", settings.scoring.label());

    match &settings.scoring {
        ScoringRules::Points { points_per_stat } => {
            for (stat, weight) in points_per_stat {
                out.push_str(&format!("  {:<10} {:>6.2}\n", stat.to_string(), weight));
            }
        }
        ScoringRules::Categories {
            skater_categories,
            goalie_categories,
        } => {
            let join = |cats: &BTreeSet<Stat>| {
                cats.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
            };
            out.push_str(&format!("  Skater categories: {}\n", join(skater_categories)));
            out.push_str(&format!("  Goalie categories: {}\n", join(goalie_categories)));
        }
    }

    out.push_str("Roster slots:\n");
    for slot in SlotType::ALL {
        let count = settings.roster_slots.count(slot);
        if count > 0 {
            out.push_str(&format!("  {:<5} {}\n", slot.to_string(), count));
        }
    }
    out.push_str(&format!("  Total {}\n", settings.roster_slots.total()));
    out
}

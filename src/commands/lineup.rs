//! Optimal lineup command

use crate::{
    cli::types::PlayerId,
    engine::{optimize_lineup, LineupResult},
    Result,
};

use super::common::CommandContext;

/// Handle the lineup command
pub async fn handle_lineup(ctx: &CommandContext, roster_ids: &[PlayerId], as_json: bool) -> Result<()> {
    let records = ctx.load().await?;
    let roster = records.players_by_id(roster_ids)?;

    if ctx.verbose {
        println!("Optimizing lineup for {} players...", roster.len());
    }
    let result = optimize_lineup(&roster, &records.projections, &records.settings)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_lineup(&result));
    }

    Ok(())
}

pub fn render_lineup(result: &LineupResult) -> String {
    let mut out = String::new();

    for slot in &result.active_roster {
        if let Some(player) = &slot.player {
            out.push_str(&format!(
                "{:<5} {} ({}) {:.2}\n",
                slot.slot_type.to_string(),
                player.name,
                player.position_label(),
                slot.projected_points
            ));
        }
    }
    for slot in &result.empty_slots {
        out.push_str(&format!("{:<5} (empty)\n", slot.to_string()));
    }
    for benched in &result.bench {
        let slot = benched
            .slot_type
            .map(|s| s.to_string())
            .unwrap_or_else(|| "--".to_string());
        out.push_str(&format!(
            "{:<5} {} ({}) {:.2}\n",
            slot,
            benched.player.name,
            benched.player.position_label(),
            benched.projected_points
        ));
    }
    out.push_str(&format!(
        "Total projected points: {:.2}\n",
        result.total_projected_points
    ));
    out
}

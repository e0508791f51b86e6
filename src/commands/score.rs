//! Projected fantasy points for every projection in the window

use serde::Serialize;

use crate::{
    cli::types::{PlayerId, Timeframe},
    engine::{calculate_fantasy_points, score_player},
    Result,
};

use super::common::{CommandContext, LeagueRecords};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProjection {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub timeframe: Timeframe,
    pub games: u32,
    pub points: f64,
}

/// Score every projection, highest first. Projections for players missing
/// from the player list are still scored.
pub fn score_projections(records: &LeagueRecords) -> Result<Vec<ScoredProjection>> {
    records.settings.validate()?;

    let mut scored = records
        .projections
        .iter()
        .map(|projection| -> Result<ScoredProjection> {
            projection.validate()?;
            let (name, position, points) = match records.player(projection.player_id) {
                Some(player) => (
                    player.name.clone(),
                    player.position_label(),
                    score_player(player, projection, &records.settings)?,
                ),
                None => (
                    format!("#{}", projection.player_id),
                    "?".to_string(),
                    calculate_fantasy_points(projection, &records.settings)?,
                ),
            };
            Ok(ScoredProjection {
                player_id: projection.player_id,
                name,
                position,
                timeframe: projection.timeframe,
                games: projection.games_played,
                points,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|a, b| {
        b.points
            .partial_cmp(&a.points)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    Ok(scored)
}

/// Handle the score command
pub async fn handle_score(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let records = ctx.load().await?;
    let scored = score_projections(&records)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        for row in &scored {
            println!(
                "{} {} ({}) [{} games] {:.2}",
                row.player_id, row.name, row.position, row.games, row.points
            );
        }
    }

    Ok(())
}

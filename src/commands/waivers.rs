//! Free-agent ranking command

use std::{collections::HashSet, path::Path};

use crate::{
    cli::types::PlayerId,
    engine::{rank_waiver_targets_with, CategoryProfile, RankingStrategy, WaiverTarget},
    error::FantasyError,
    Result,
};

use super::common::{CommandContext, LeagueRecords};

/// Parameters for the waivers command
#[derive(Debug, Clone, Default)]
pub struct WaiverParams {
    /// Rostered players to leave out of the pool.
    pub exclude: Vec<PlayerId>,
    pub fill_weaknesses: bool,
    pub profile: Option<std::path::PathBuf>,
    pub limit: Option<usize>,
    pub as_json: bool,
}

pub fn load_profile(path: &Path) -> Result<CategoryProfile> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        FantasyError::validation(format!("cannot read category profile {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Rank every loaded player not in `exclude`.
pub fn rank_free_agents(
    records: &LeagueRecords,
    exclude: &[PlayerId],
    strategy: RankingStrategy,
    profile: Option<&CategoryProfile>,
) -> Result<Vec<WaiverTarget>> {
    let excluded: HashSet<PlayerId> = exclude.iter().copied().collect();
    let pool: Vec<_> = records
        .players
        .iter()
        .filter(|p| !excluded.contains(&p.id))
        .cloned()
        .collect();

    rank_waiver_targets_with(
        &pool,
        &records.projections,
        &records.settings,
        strategy,
        profile,
    )
}

/// Handle the waivers command
pub async fn handle_waivers(ctx: &CommandContext, params: WaiverParams) -> Result<()> {
    let profile = params.profile.as_deref().map(load_profile).transpose()?;
    let strategy = if params.fill_weaknesses {
        RankingStrategy::FillWeaknesses
    } else {
        RankingStrategy::BestAvailable
    };

    let records = ctx.load().await?;
    let mut targets = rank_free_agents(&records, &params.exclude, strategy, profile.as_ref())?;
    if let Some(limit) = params.limit {
        targets.truncate(limit);
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
    } else {
        for (rank, target) in targets.iter().enumerate() {
            println!(
                "{:>3}. {} {} ({}) {:.2} - {}",
                rank + 1,
                target.player.id,
                target.player.name,
                target.player.position_label(),
                target.score,
                target.reasoning
            );
        }
    }

    Ok(())
}

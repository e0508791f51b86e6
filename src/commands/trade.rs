//! Trade evaluation command

use crate::{
    cli::types::PlayerId,
    core::config::resolve_trade_threshold,
    engine::{TradeAnalyzer, TradeResult},
    Result,
};

use super::common::{CommandContext, LeagueRecords};

/// Evaluate giving `give` for `get` using the loaded records.
pub fn evaluate_trade(
    records: &LeagueRecords,
    give: &[PlayerId],
    get: &[PlayerId],
    threshold: f64,
) -> Result<TradeResult> {
    let players_out = records.players_by_id(give)?;
    let players_in = records.players_by_id(get)?;
    TradeAnalyzer::with_threshold(threshold)?.analyze(
        &players_out,
        &players_in,
        &records.projections,
        &records.settings,
    )
}

/// Handle the trade command
pub async fn handle_trade(
    ctx: &CommandContext,
    give: &[PlayerId],
    get: &[PlayerId],
    threshold: Option<f64>,
    as_json: bool,
) -> Result<()> {
    let threshold = resolve_trade_threshold(threshold, &ctx.config)?;
    let records = ctx.load().await?;

    if ctx.verbose {
        println!(
            "Evaluating {} out / {} in with threshold {:.1}...",
            give.len(),
            get.len(),
            threshold
        );
    }
    let result = evaluate_trade(&records, give, get, threshold)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.summary);
    }

    Ok(())
}

//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fhockey::{
    cli::{Commands, Fhockey},
    commands::{
        league::handle_league,
        lineup::handle_lineup,
        score::handle_score,
        trade::handle_trade,
        waivers::{handle_waivers, WaiverParams},
        CommandContext,
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let app = Fhockey::parse();

    let ctx = CommandContext::new(
        app.global.data_dir,
        app.global.provider_url,
        app.global.timeframe,
        app.global.verbose,
    )
    .context("failed to load configuration")?;

    match app.command {
        Commands::League { json } => handle_league(&ctx, json)
            .await
            .context("league command failed")?,

        Commands::Score { json } => handle_score(&ctx, json)
            .await
            .context("score command failed")?,

        Commands::Lineup { roster, json } => handle_lineup(&ctx, &roster, json)
            .await
            .context("lineup command failed")?,

        Commands::Trade {
            give,
            get,
            threshold,
            json,
        } => handle_trade(&ctx, &give, &get, threshold, json)
            .await
            .context("trade command failed")?,

        Commands::Waivers {
            exclude,
            fill_weaknesses,
            profile,
            limit,
            json,
        } => handle_waivers(
            &ctx,
            WaiverParams {
                exclude,
                fill_weaknesses,
                profile,
                limit,
                as_json: json,
            },
        )
        .await
        .context("waivers command failed")?,
    }

    Ok(())
}

//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, Timeframe};

/// Options shared by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Directory holding league.json, players.json, projections.json and
    /// config.json (or set `FHOCKEY_DATA_DIR`).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Base URL of a stats service to read from instead of local fixtures
    /// (or set `FHOCKEY_PROVIDER_URL`).
    #[clap(long, global = true)]
    pub provider_url: Option<String>,

    /// Projection window: today, next_7, next_14, rest_of_season, custom.
    #[clap(long, short, global = true, default_value_t = Timeframe::default())]
    pub timeframe: Timeframe,

    /// Print progress while loading data.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize the league's scoring rules and roster slots
    League {
        /// Output the settings as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Projected fantasy points for every player with a projection
    Score {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Pick the highest-scoring legal lineup from a roster
    Lineup {
        /// Rostered player ids (repeatable): `-r 8478402 -r 8477934`.
        #[clap(long, short, required = true, num_args = 1..)]
        roster: Vec<PlayerId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare the projected value of both sides of a trade
    Trade {
        /// Player ids given up.
        #[clap(long, num_args = 1..)]
        give: Vec<PlayerId>,

        /// Player ids received.
        #[clap(long, num_args = 1..)]
        get: Vec<PlayerId>,

        /// Net points a trade must exceed to be a win (or set
        /// `FHOCKEY_TRADE_THRESHOLD`).
        #[clap(long)]
        threshold: Option<f64>,

        /// Output the result as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Rank free agents
    Waivers {
        /// Rostered player ids to leave out of the pool (repeatable).
        #[clap(long, short, num_args = 1..)]
        exclude: Vec<PlayerId>,

        /// Boost players who help in categories where the team trails the league.
        #[clap(long, requires = "profile")]
        fill_weaknesses: bool,

        /// JSON file with `teamRates` and `leagueBaseline` per-game category rates.
        #[clap(long)]
        profile: Option<PathBuf>,

        /// Show only the top N players.
        #[clap(long, short)]
        limit: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fhockey", about = "Fantasy hockey decision engine", version)]
pub struct Fhockey {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

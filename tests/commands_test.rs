//! Integration tests for command handlers over a fixture directory

use std::{fs, path::Path};

use fhockey::{
    commands::{
        league::handle_league,
        lineup::handle_lineup,
        score::{handle_score, score_projections},
        trade::{evaluate_trade, handle_trade},
        waivers::{handle_waivers, rank_free_agents, WaiverParams},
        CommandContext,
    },
    core::{resolve_trade_threshold, AppConfig},
    engine::{RankingStrategy, Verdict},
    FantasyError, PlayerId, Timeframe, TRADE_THRESHOLD_ENV_VAR,
};
use serde_json::json;
use tempfile::{tempdir, TempDir};

fn write_fixtures(dir: &Path) {
    let league = json!({
        "scoringType": "H2H_Points",
        "pointsPerStat": {"G": 3.0, "A": 2.0, "SOG": 0.5, "HIT": 0.25, "W": 4.0, "SV": 0.2, "GAA": -1.0},
        "rosterSlots": {"C": 1, "LW": 1, "D": 1, "UTIL": 1, "G": 1, "BN": 1}
    });
    let players = json!([
        {"id": 1, "name": "Auston Matthews", "team": "TOR", "positions": ["C"], "isGoalie": false, "gamesPlayed": 70},
        {"id": 2, "name": "Brady Tkachuk", "team": "OTT", "positions": ["LW"], "isGoalie": false, "gamesPlayed": 72},
        {"id": 3, "name": "Cale Makar", "team": "COL", "positions": ["D"], "isGoalie": false, "gamesPlayed": 68},
        {"id": 4, "name": "Mika Zibanejad", "team": "NYR", "positions": ["C"], "isGoalie": false, "gamesPlayed": 70},
        {"id": 5, "name": "Igor Shesterkin", "team": "NYR", "positions": ["G"], "isGoalie": true, "gamesPlayed": 55},
        {"id": 6, "name": "Tom Wilson", "team": "WSH", "positions": ["RW"], "isGoalie": false, "gamesPlayed": 66},
        {"id": 7, "name": "Ryan Reaves", "team": "TOR", "positions": ["RW"], "isGoalie": false, "gamesPlayed": 40}
    ]);
    let projections = json!([
        {"playerId": 1, "timeframe": "next_7", "gamesPlayed": 3, "skaterStats": {"G": 2.0, "A": 1.0, "SOG": 12.0}},
        {"playerId": 2, "timeframe": "next_7", "gamesPlayed": 3, "skaterStats": {"G": 1.0, "A": 1.0, "SOG": 9.0, "HIT": 8.0}},
        {"playerId": 3, "timeframe": "next_7", "gamesPlayed": 3, "skaterStats": {"G": 0.5, "A": 3.0, "SOG": 8.0}},
        {"playerId": 4, "timeframe": "next_7", "gamesPlayed": 3, "skaterStats": {"G": 1.0, "A": 2.0, "SOG": 7.0}},
        {"playerId": 5, "timeframe": "next_7", "gamesPlayed": 2, "goalieStats": {"W": 1.5, "SV": 55.0, "GAA": 2.2, "SV_PCT": 0.925}},
        {"playerId": 6, "timeframe": "next_7", "gamesPlayed": 3, "skaterStats": {"G": 1.0, "A": 1.0, "SOG": 6.0, "HIT": 10.0}},
        {"playerId": 7, "timeframe": "next_7", "gamesPlayed": 2, "skaterStats": {"HIT": 12.0}},
        {"playerId": 1, "timeframe": "rest_of_season", "gamesPlayed": 12, "skaterStats": {"G": 8.0, "A": 6.0, "SOG": 48.0}}
    ]);

    fs::write(dir.join("league.json"), league.to_string()).unwrap();
    fs::write(dir.join("players.json"), players.to_string()).unwrap();
    fs::write(dir.join("projections.json"), projections.to_string()).unwrap();
}

fn fixture_context() -> (TempDir, CommandContext) {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    let ctx = CommandContext::new(
        Some(dir.path().to_path_buf()),
        None,
        Timeframe::Next7,
        false,
    )
    .unwrap();
    (dir, ctx)
}

#[tokio::test]
async fn test_score_ranks_projections() {
    let (_dir, ctx) = fixture_context();
    let records = ctx.load().await.unwrap();
    let scored = score_projections(&records).unwrap();

    // Only the next_7 window is loaded.
    assert_eq!(scored.len(), 7);
    // Shesterkin: 6 + 11 - 2.2 = 14.8
    assert_eq!(scored[0].player_id, PlayerId::new(5));
    assert!((scored[0].points - 14.8).abs() < 1e-9);
    // Matthews: 6 + 2 + 6 = 14
    assert_eq!(scored[1].player_id, PlayerId::new(1));
    assert_eq!(scored[1].points, 14.0);
    assert_eq!(scored.last().unwrap().player_id, PlayerId::new(7));
}

#[tokio::test]
async fn test_lineup_uses_util_for_second_center() {
    let (_dir, ctx) = fixture_context();
    let records = ctx.load().await.unwrap();
    let roster = records
        .players_by_id(&[1, 2, 3, 4, 5].map(PlayerId::new))
        .unwrap();

    let result =
        fhockey::engine::optimize_lineup(&roster, &records.projections, &records.settings).unwrap();

    let mut centers: Vec<u64> = result
        .active_roster
        .iter()
        .filter(|s| matches!(s.slot_type, fhockey::SlotType::C | fhockey::SlotType::UTIL))
        .map(|s| s.player.as_ref().unwrap().id.as_u64())
        .collect();
    centers.sort();
    assert_eq!(centers, vec![1, 4]);
    assert_eq!(result.active_roster.len(), 5);
    assert!(result.bench.is_empty());
    assert!(result.empty_slots.is_empty());

    handle_lineup(&ctx, &[PlayerId::new(1), PlayerId::new(5)], true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_lineup_unknown_player() {
    let (_dir, ctx) = fixture_context();
    let err = handle_lineup(&ctx, &[PlayerId::new(99)], false)
        .await
        .unwrap_err();
    assert!(matches!(err, FantasyError::PlayerNotFound { .. }));
}

#[tokio::test]
async fn test_trade_threshold_from_config_file() {
    let (dir, ctx) = fixture_context();
    let records = ctx.load().await.unwrap();

    // Tkachuk (11.5) for Wilson (10.5): net -1.0 sits on the default threshold.
    let result = evaluate_trade(&records, &[PlayerId::new(2)], &[PlayerId::new(6)], 1.0).unwrap();
    assert_eq!(result.net_gain, -1.0);
    assert_eq!(result.verdict, Verdict::Fair);

    let config = AppConfig {
        trade_threshold: Some(0.5),
        ..Default::default()
    };
    fs::write(
        dir.path().join("config.json"),
        serde_json::to_string(&config).unwrap(),
    )
    .unwrap();
    let loaded = AppConfig::load(dir.path()).unwrap();
    let threshold = loaded.trade_threshold.unwrap();
    let result = evaluate_trade(&records, &[PlayerId::new(2)], &[PlayerId::new(6)], threshold).unwrap();
    assert_eq!(result.verdict, Verdict::Loss);

    handle_trade(&ctx, &[PlayerId::new(2)], &[PlayerId::new(6)], Some(2.0), false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_waivers_fill_weaknesses_profile() {
    let (dir, ctx) = fixture_context();
    let records = ctx.load().await.unwrap();
    let rostered = [1, 2, 3, 5].map(PlayerId::new);

    let default = rank_free_agents(&records, &rostered, RankingStrategy::BestAvailable, None).unwrap();
    let ids: Vec<u64> = default.iter().map(|t| t.player.id.as_u64()).collect();
    // Zibanejad 10.5, Wilson 10.5, Reaves 3.0
    assert_eq!(ids, vec![4, 6, 7]);

    let profile_path = dir.path().join("profile.json");
    fs::write(
        &profile_path,
        json!({"teamRates": {"HIT": 1.0}, "leagueBaseline": {"HIT": 4.0}}).to_string(),
    )
    .unwrap();

    let profile = fhockey::commands::waivers::load_profile(&profile_path).unwrap();
    let boosted = rank_free_agents(
        &records,
        &rostered,
        RankingStrategy::FillWeaknesses,
        Some(&profile),
    )
    .unwrap();
    assert_eq!(boosted[0].player.id, PlayerId::new(6));
    assert_eq!(boosted[0].need_categories, vec![fhockey::Stat::Hits]);
    assert!(boosted[0].reasoning.contains("fills team need in HIT"));

    handle_waivers(
        &ctx,
        WaiverParams {
            exclude: rostered.to_vec(),
            fill_weaknesses: true,
            profile: Some(profile_path),
            limit: Some(2),
            as_json: true,
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_league_and_score_handlers_run() {
    let (_dir, ctx) = fixture_context();
    handle_league(&ctx, false).await.unwrap();
    handle_score(&ctx, true).await.unwrap();
}

#[tokio::test]
async fn test_missing_fixtures_surface_io_error() {
    let dir = tempdir().unwrap();
    let ctx = CommandContext::new(Some(dir.path().to_path_buf()), None, Timeframe::Next7, false).unwrap();

    let err = handle_score(&ctx, false).await.unwrap_err();
    assert!(matches!(err, FantasyError::Io(_)));
}

#[test]
fn test_trade_threshold_from_env() {
    let config = AppConfig {
        trade_threshold: Some(4.0),
        ..Default::default()
    };

    std::env::set_var(TRADE_THRESHOLD_ENV_VAR, "2.5");
    assert_eq!(resolve_trade_threshold(None, &config).unwrap(), 2.5);
    assert_eq!(resolve_trade_threshold(Some(0.5), &config).unwrap(), 0.5);

    std::env::set_var(TRADE_THRESHOLD_ENV_VAR, "lots");
    assert!(resolve_trade_threshold(None, &config).unwrap_err().is_validation());

    std::env::remove_var(TRADE_THRESHOLD_ENV_VAR);
    assert_eq!(resolve_trade_threshold(None, &config).unwrap(), 4.0);
}

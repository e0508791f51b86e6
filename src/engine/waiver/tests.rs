//! Unit tests for free-agent ranking

use super::*;
use crate::cli::types::{PlayerId, Position, SlotType, Timeframe};
use crate::league::{GoalieStats, RosterSlots, ScoringRules, SkaterStats, StatLine};

#[cfg(test)]
mod waiver_tests {
    use super::*;

    fn settings() -> LeagueSettings {
        LeagueSettings::points(
            RosterSlots::new([(SlotType::C, 2), (SlotType::BN, 2)]),
            [(Stat::Goals, 1.0), (Stat::Wins, 2.0)].into_iter().collect(),
        )
    }

    fn skater(id: u64) -> Player {
        Player {
            id: PlayerId::new(id),
            name: format!("Skater {id}"),
            team: "MTL".to_string(),
            positions: [Position::RW].into_iter().collect(),
            is_goalie: false,
            games_played: 30,
            season_stats: None,
        }
    }

    fn goalie(id: u64) -> Player {
        Player {
            id: PlayerId::new(id),
            name: format!("Goalie {id}"),
            team: "MTL".to_string(),
            positions: [Position::G].into_iter().collect(),
            is_goalie: true,
            games_played: 30,
            season_stats: None,
        }
    }

    fn skater_proj(id: u64, stats: SkaterStats) -> Projection {
        Projection {
            player_id: PlayerId::new(id),
            timeframe: Timeframe::Next7,
            games_played: 4,
            stats: StatLine::Skater(stats),
        }
    }

    fn goals(id: u64, goals: f64) -> Projection {
        skater_proj(
            id,
            SkaterStats {
                goals,
                ..Default::default()
            },
        )
    }

    fn goals_and_hits(id: u64, goals: f64, hits: f64) -> Projection {
        skater_proj(
            id,
            SkaterStats {
                goals,
                hits,
                ..Default::default()
            },
        )
    }

    fn ids(targets: &[WaiverTarget]) -> Vec<u64> {
        targets.iter().map(|t| t.player.id.as_u64()).collect()
    }

    #[test]
    fn test_default_ranking_by_value() {
        let pool = vec![skater(1), skater(2), skater(3)];
        let projections = vec![goals(1, 2.0), goals(2, 5.0), goals(3, 3.0)];

        let ranked = rank_waiver_targets(&pool, &projections, &settings()).unwrap();

        assert_eq!(ids(&ranked), vec![2, 3, 1]);
        assert_eq!(ranked[0].value, 5.0);
        assert!(ranked.iter().all(|t| t.score == t.value));
        assert!(ranked.iter().all(|t| t.need_categories.is_empty()));
    }

    #[test]
    fn test_ties_broken_by_player_id() {
        let pool = vec![skater(9), skater(4), skater(6)];
        let projections = vec![goals(9, 3.0), goals(4, 3.0), goals(6, 3.0)];

        let ranked = rank_waiver_targets(&pool, &projections, &settings()).unwrap();
        assert_eq!(ids(&ranked), vec![4, 6, 9]);
    }

    #[test]
    fn test_missing_projection_ranks_at_zero() {
        let pool = vec![skater(1), skater(2)];
        let projections = vec![goals(2, 1.0)];

        let ranked = rank_waiver_targets(&pool, &projections, &settings()).unwrap();
        assert_eq!(ids(&ranked), vec![2, 1]);
        assert_eq!(ranked[1].value, 0.0);
        assert!(ranked[1].projection.is_none());
        assert!(ranked[1].reasoning.contains("no projection"));
    }

    #[test]
    fn test_fill_weaknesses_promotes_category_help() {
        let pool = vec![skater(1), skater(2), skater(3)];
        let projections = vec![
            goals_and_hits(1, 10.0, 0.0),
            goals_and_hits(2, 9.0, 16.0),
            goals_and_hits(3, 2.0, 4.0),
        ];
        let profile = CategoryProfile {
            team_rates: [(Stat::Hits, 15.0)].into_iter().collect(),
            league_baseline: [(Stat::Hits, 25.0)].into_iter().collect(),
        };

        let ranked = rank_waiver_targets_with(
            &pool,
            &projections,
            &settings(),
            RankingStrategy::FillWeaknesses,
            Some(&profile),
        )
        .unwrap();

        assert_eq!(ids(&ranked), vec![2, 1, 3]);
        assert_eq!(ranked[0].value, 9.0);
        assert!(ranked[0].score > ranked[1].score);
        assert_eq!(ranked[0].need_categories, vec![Stat::Hits]);
        assert!(ranked[0].reasoning.contains("fills team need in HIT"));
        assert_eq!(ranked[1].score, 10.0);
        assert!(ranked[2].need_categories.is_empty());
    }

    #[test]
    fn test_fill_weaknesses_without_profile_falls_back() {
        let pool = vec![skater(1), skater(2)];
        let projections = vec![goals_and_hits(1, 10.0, 0.0), goals_and_hits(2, 9.0, 16.0)];

        let ranked = rank_waiver_targets_with(
            &pool,
            &projections,
            &settings(),
            RankingStrategy::FillWeaknesses,
            None,
        )
        .unwrap();

        assert_eq!(ids(&ranked), vec![1, 2]);
        assert_eq!(ranked[1].score, 9.0);
    }

    #[test]
    fn test_team_above_baseline_gets_no_boost() {
        let profile = CategoryProfile {
            team_rates: [(Stat::Hits, 30.0), (Stat::GoalsAgainstAverage, 3.5)]
                .into_iter()
                .collect(),
            league_baseline: [(Stat::Hits, 25.0), (Stat::GoalsAgainstAverage, 2.8)]
                .into_iter()
                .collect(),
        };

        let deficits = profile.deficits();
        assert!(!deficits.contains_key(&Stat::Hits));
        assert!((deficits[&Stat::GoalsAgainstAverage] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_profile_validation() {
        let profile = CategoryProfile {
            team_rates: [(Stat::Hits, -2.0)].into_iter().collect(),
            league_baseline: BTreeMap::new(),
        };
        let err = rank_waiver_targets_with(
            &[skater(1)],
            &[],
            &settings(),
            RankingStrategy::FillWeaknesses,
            Some(&profile),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_reasoning_names_standout_categories() {
        let pool: Vec<Player> = (1..=10).map(skater).collect();
        let mut projections: Vec<Projection> = (1..=9)
            .map(|id| {
                skater_proj(
                    id,
                    SkaterStats {
                        goals: 1.0,
                        shots: 4.0,
                        hits: if id == 9 { 8.0 } else { 4.0 },
                        ..Default::default()
                    },
                )
            })
            .collect();
        projections.push(skater_proj(
            10,
            SkaterStats {
                goals: 1.0,
                shots: 40.0,
                hits: 24.0,
                ..Default::default()
            },
        ));

        let ranked = rank_waiver_targets(&pool, &projections, &settings()).unwrap();
        let standout = ranked.iter().find(|t| t.player.id == PlayerId::new(10)).unwrap();
        let average = ranked.iter().find(|t| t.player.id == PlayerId::new(1)).unwrap();

        assert!(standout.reasoning.starts_with("elite SOG/HIT profile"));
        assert!(standout.reasoning.contains("over the next 7 days"));
        assert!(average.reasoning.starts_with("replacement-level profile"));
    }

    #[test]
    fn test_goalies_compared_against_goalie_pool() {
        let pool = vec![goalie(1), goalie(2), skater(3)];
        let goalie_line = |id: u64, wins: f64, gaa: f64| Projection {
            player_id: PlayerId::new(id),
            timeframe: Timeframe::Next7,
            games_played: 3,
            stats: StatLine::Goalie(GoalieStats {
                wins,
                goals_against_average: gaa,
                ..Default::default()
            }),
        };
        let projections = vec![goalie_line(1, 3.0, 1.5), goalie_line(2, 0.0, 4.5), goals(3, 1.0)];

        let ranked = rank_waiver_targets(&pool, &projections, &settings()).unwrap();
        assert_eq!(ids(&ranked), vec![1, 3, 2]);
        assert!(ranked[0].reasoning.contains("W/GAA"));
        assert!(ranked[1].reasoning.starts_with("replacement-level"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let pool = vec![skater(1), skater(2), goalie(3)];
        let projections = vec![goals(1, 2.0), goals_and_hits(2, 2.0, 9.0)];

        let first = rank_waiver_targets(&pool, &projections, &settings()).unwrap();
        let second = rank_waiver_targets(&pool, &projections, &settings()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_bad_input() {
        let duplicate = vec![skater(1), skater(1)];
        assert!(rank_waiver_targets(&duplicate, &[], &settings())
            .unwrap_err()
            .is_validation());

        let categories = LeagueSettings {
            roster_slots: RosterSlots::new([(SlotType::C, 1)]),
            scoring: ScoringRules::Categories {
                skater_categories: [Stat::Hits].into_iter().collect(),
                goalie_categories: Default::default(),
            },
        };
        assert!(matches!(
            rank_waiver_targets(&[skater(1)], &[], &categories),
            Err(FantasyError::UnsupportedScoring)
        ));
    }
}

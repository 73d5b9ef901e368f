use gridiron_engine::{
    DriveOutcome, Game, GameOutcome, GamePhase, PlayRecord, SimSeed, Team, TeamConfig, Urgency,
    YardageModel, drive_handoff, simulate_drive, simulate_game,
};

fn default_pair() -> (Team, Team) {
    let first = Team::new(TeamConfig::new("The Idaho Beets")).unwrap();
    let second = Team::new(TeamConfig {
        attempt_two_point: true,
        ..TeamConfig::new("The Boston Wicked Tuna")
    })
    .unwrap();
    (first, second)
}

#[test]
fn test_games_end_with_consistent_outcome() {
    for seed in 0..200 {
        let (first, second) = default_pair();
        let outcome = simulate_game(first, second, &mut SimSeed::from_u64(seed).rng());
        match outcome {
            GameOutcome::Decided(result) => {
                let winner = result.winner();
                let loser = result.loser();
                assert!(winner.score() > loser.score());
                assert!(winner.possessions() >= 1 && loser.possessions() >= 1);
                assert_eq!(
                    winner.score(),
                    winner.drives().iter().map(|d| d.points()).sum::<u32>()
                );
                // Possessions alternate, the first team never trails in count.
                let (first, second) = if winner.had_ball_first() {
                    (winner, loser)
                } else {
                    (loser, winner)
                };
                assert!(first.possessions() - second.possessions() <= 1);
                assert_eq!(result.first_possession(), first.name());
            }
            GameOutcome::NoDecision(stalemate) => {
                assert_eq!(stalemate.first().score(), stalemate.second().score());
            }
        }
    }
}

#[test]
fn test_drive_records_are_well_formed() {
    let team = Team::new(TeamConfig::new("Beets")).unwrap();
    let mut rng = SimSeed::from_u64(77).rng();
    for _ in 0..500 {
        let drive = simulate_drive(&team, Urgency::None, 25.0, &mut rng);
        let plays = drive.plays();
        assert!(!plays.is_empty());
        assert_eq!(plays[0].situation().field_position, 25.0);

        for play in plays {
            let s = play.situation();
            assert!(s.downs_completed <= 3);
            assert!(s.field_position < 100.0);
            if s.downs_completed < 3 {
                assert!(play.is_run());
            }
            assert!([0, 3, 6, 7, 8].contains(&play.points()));
        }
        // Only the last play can end the drive.
        for play in &plays[..plays.len() - 1] {
            assert!(play.is_run());
            assert_eq!(play.points(), 0);
        }

        let start = drive_handoff(&drive);
        assert!((0.0..=99.0).contains(&start), "start {start}");
        if let Some(DriveOutcome::Touchdown | DriveOutcome::FieldGoal) = drive.outcome() {
            assert_eq!(start, 25.0);
        }
    }
}

#[test]
fn test_yardage_model_bounds() {
    let model = YardageModel::new(-15.0, 6.0, 25.0).unwrap();
    let mut rng = SimSeed::from_u64(1).rng();
    let draws = model.sample_n(&mut rng, 10_000);
    assert!(draws.iter().all(|y| (-15.0..=25.0).contains(y)));
    let mean = draws.iter().sum::<f64>() / 10_000.0;
    // Triangular mean: (min + mode + max) / 3 = 5.33
    assert!((mean - 16.0 / 3.0).abs() < 0.5, "mean {mean}");
}

#[test]
fn test_never_scoring_team_reaches_cap() {
    let config = TeamConfig {
        min_yards: -1.0,
        expected_yards: -1.0,
        max_yards: -1.0,
        ..TeamConfig::new("Stuck")
    };
    let first = Team::new(config.clone()).unwrap();
    let second = Team::new(config).unwrap();
    let outcome = Game::new(first, second)
        .with_max_possessions(30)
        .simulate(&mut SimSeed::from_u64(3).rng());
    assert!(outcome.is_no_decision());
    assert_eq!(outcome.possessions(), 30);
}

#[test]
fn test_step_by_step_matches_simulate() {
    let (first, second) = default_pair();
    let mut game = Game::new(first.clone(), second.clone());
    let mut rng = SimSeed::from_u64(11).rng();
    assert_eq!(game.phase(), GamePhase::FirstPossession);
    while !game.play_possession(&mut rng).is_over() {}

    let outcome = Game::new(first, second).simulate(&mut SimSeed::from_u64(11).rng());
    assert_eq!(game.possessions(), outcome.possessions());
    assert_eq!(game.has_winner(), outcome.is_decided());
}

#[test]
fn test_play_records_serialize_with_play_type() {
    let team = Team::new(TeamConfig::new("Beets")).unwrap();
    let drive = simulate_drive(&team, Urgency::None, 25.0, &mut SimSeed::from_u64(5).rng());
    let json = serde_json::to_value(&drive).unwrap();
    let plays = json["plays"].as_array().unwrap();
    assert_eq!(plays.len(), drive.plays().len());
    for (value, play) in plays.iter().zip(drive.plays()) {
        let expected = match play {
            PlayRecord::Run { .. } => "run",
            PlayRecord::Punt { .. } => "punt",
            PlayRecord::FieldGoalAttempt { .. } => "field_goal_attempt",
        };
        assert_eq!(value["play_type"], expected);
    }
}

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use gridiron_engine::{
    DEFAULT_MAX_POSSESSIONS, Drive, Game, GameOutcome, PlayRecord, Team, TeamSummary,
    scoring::kick_distance,
};

use crate::{
    schema::GameFile,
    util::{Output, down_name, spot},
};

use super::{MatchupArg, SeedArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    #[clap(flatten)]
    matchup: MatchupArg,
    #[clap(flatten)]
    seed: SeedArg,
    /// Stop an endless game after this many drives
    #[arg(long, default_value_t = DEFAULT_MAX_POSSESSIONS)]
    max_possessions: usize,
    /// Print every snap, not just drive results
    #[arg(long)]
    plays: bool,
    /// Write the game as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for GameArg {
    fn default() -> Self {
        Self {
            matchup: MatchupArg::default(),
            seed: SeedArg::default(),
            max_possessions: DEFAULT_MAX_POSSESSIONS,
            plays: false,
            output: None,
        }
    }
}

pub(crate) fn run(arg: &GameArg) -> anyhow::Result<()> {
    let GameArg {
        matchup,
        seed,
        max_possessions,
        plays,
        output,
    } = arg;
    let (first_config, second_config) = matchup.configs()?;
    let first = Team::new(first_config.clone()).context("Invalid first team")?;
    let second = Team::new(second_config.clone()).context("Invalid second team")?;
    let seed = seed.seed();

    println!("Simulating overtime: {} vs {}", first.name(), second.name());
    let outcome = Game::new(first, second)
        .with_max_possessions(*max_possessions)
        .simulate(&mut seed.rng());

    let (first_summary, second_summary) = match &outcome {
        GameOutcome::Decided(result) if result.winner().had_ball_first() => {
            (result.winner(), result.loser())
        }
        GameOutcome::Decided(result) => (result.loser(), result.winner()),
        GameOutcome::NoDecision(stalemate) => (stalemate.first(), stalemate.second()),
    };
    print_drives(first_summary, second_summary, *plays);

    println!();
    match &outcome {
        GameOutcome::Decided(result) => {
            let winner = result.winner();
            println!(
                "{} win {}-{} after {} possessions ({} the ball first)",
                winner.name(),
                winner.score(),
                result.loser().score(),
                outcome.possessions(),
                if winner.had_ball_first() {
                    "had"
                } else {
                    "did not have"
                },
            );
        }
        GameOutcome::NoDecision(stalemate) => {
            println!(
                "No decision after {} possessions, tied {}-{}",
                stalemate.possessions(),
                stalemate.first().score(),
                stalemate.second().score(),
            );
        }
    }

    if let Some(path) = output {
        let file = GameFile {
            simulated_at: Utc::now(),
            seed,
            max_possessions: *max_possessions,
            first: first_config,
            second: second_config,
            outcome,
        };
        Output::save_json(&file, Some(path.clone()))?;
        eprintln!("Game saved to {}", path.display());
    }

    Ok(())
}

/// Prints drives in the order they were played. Possessions alternate,
/// starting with the team that received first.
fn print_drives(first: &TeamSummary, second: &TeamSummary, plays: bool) {
    let rounds = first.drives().len().max(second.drives().len());
    let order = (0..rounds).flat_map(|i| {
        let first_drive = first.drives().get(i).map(|d| (true, d));
        let second_drive = second.drives().get(i).map(|d| (false, d));
        first_drive.into_iter().chain(second_drive)
    });

    let mut score = (0, 0);
    for (number, (by_first, drive)) in order.enumerate() {
        let name = if by_first { first.name() } else { second.name() };
        print_drive(number + 1, name, drive, plays);
        if by_first {
            score.0 += drive.points();
        } else {
            score.1 += drive.points();
        }
        if drive.points() > 0 {
            println!(
                "          {} {} - {} {}",
                first.name(),
                score.0,
                score.1,
                second.name()
            );
        }
    }
}

fn print_drive(number: usize, team: &str, drive: &Drive, plays: bool) {
    let outcome = drive
        .outcome()
        .map_or_else(|| "no play".to_owned(), |o| o.to_string());
    println!(
        "Drive {number:>2}: {team} from {}: {outcome}, {} pts ({} plays, {:.1} yds)",
        spot(drive.start()),
        drive.points(),
        drive.plays().len(),
        drive.total_yards(),
    );
    if !plays {
        return;
    }
    for play in drive.plays() {
        let s = play.situation();
        let call = match play {
            PlayRecord::Run { yards_gained, .. } => format!("run for {yards_gained:.1}"),
            PlayRecord::Punt {
                distance,
                opponent_position,
                ..
            } => format!("punt {distance:.1} yds, opponent takes over at own {opponent_position:.1}"),
            PlayRecord::FieldGoalAttempt { made, .. } => {
                let kick = kick_distance(s.field_position);
                format!(
                    "{kick:.0}-yd field goal {}",
                    if *made { "is good" } else { "is no good" }
                )
            }
        };
        println!(
            "    {} & {:.1} at {}: {call}",
            down_name(s.downs_completed),
            s.yards_needed,
            spot(s.field_position),
        );
    }
}

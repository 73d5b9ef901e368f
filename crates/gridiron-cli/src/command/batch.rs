use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Context as _;
use chrono::Utc;
use gridiron_batch::{BatchRunner, DEFAULT_GAMES, TeamBatchSummary};
use gridiron_engine::DEFAULT_MAX_POSSESSIONS;

use crate::{
    schema::BatchFile,
    util::{Output, percent},
};

use super::{MatchupArg, SeedArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BatchArg {
    #[clap(flatten)]
    matchup: MatchupArg,
    #[clap(flatten)]
    seed: SeedArg,
    /// Number of games to simulate
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    games: usize,
    /// Stop an endless game after this many drives
    #[arg(long, default_value_t = DEFAULT_MAX_POSSESSIONS)]
    max_possessions: usize,
    /// Worker threads (defaults to the available parallelism)
    #[arg(long)]
    threads: Option<NonZeroUsize>,
    /// Also write the full report as JSON to stdout
    #[arg(long)]
    json: bool,
    /// Write the full report as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BatchArg) -> anyhow::Result<()> {
    let BatchArg {
        matchup,
        seed,
        games,
        max_possessions,
        threads,
        json,
        output,
    } = arg;
    let (first, second) = matchup.configs()?;

    let mut runner = BatchRunner::new(first.clone(), second.clone())
        .games(*games)
        .max_possessions(*max_possessions)
        .seed(seed.seed());
    if let Some(threads) = threads {
        runner = runner.threads(*threads);
    }

    eprintln!("Simulating {games} games: {} vs {}", first.name, second.name);
    let report = runner.run().context("Invalid team configuration")?;
    let summary = report.summary();

    eprintln!();
    eprintln!("Games:     {}", summary.games);
    eprintln!(
        "Decided:   {} ({} stopped at {max_possessions} possessions)",
        summary.decided, summary.no_decisions
    );
    eprintln!(
        "Team with the ball first wins: {}",
        percent(summary.first_possession_win_rate)
    );
    if let Some(possessions) = &summary.possessions {
        eprintln!(
            "Possessions per game: mean {:.2}, median {}, max {}",
            possessions.mean, possessions.median, possessions.max
        );
    }
    for team in [&summary.first, &summary.second] {
        print_team(team);
    }

    if *json || output.is_some() {
        let file = BatchFile {
            simulated_at: Utc::now(),
            first,
            second,
            report,
        };
        Output::save_json(&file, output.clone())?;
        if let Some(path) = output {
            eprintln!("Report saved to {}", path.display());
        }
    }

    Ok(())
}

fn print_team(team: &TeamBatchSummary) {
    eprintln!();
    eprintln!("{}:", team.name);
    eprintln!(
        "  Wins:        {} ({})",
        team.wins,
        percent(team.win_probability)
    );
    if let Some(score) = &team.score {
        eprintln!(
            "  Score:       mean {:.2}, std {:.2}, max {}",
            score.mean, score.std_dev, score.max
        );
    }
    let percentiles = team
        .score_percentiles
        .iter()
        .map(|(p, value)| format!("P{p}={value}"))
        .collect::<Vec<_>>();
    eprintln!("  Percentiles: {}", percentiles.join(", "));
    if let Some(yards) = &team.total_yards {
        eprintln!("  Yards:       mean {:.1}", yards.mean);
    }
}

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use gridiron_engine::{SimSeed, TeamConfig};
use rand::Rng as _;

use crate::util;

use self::{batch::BatchArg, drives::DrivesArg, game::GameArg};

mod batch;
mod drives;
mod game;

const FIRST_TEAM_NAME: &str = "The Idaho Beets";
const SECOND_TEAM_NAME: &str = "The Boston Wicked Tuna";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to simulate (defaults to a single game)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Simulate one overtime game and print it drive by drive
    Game(#[clap(flatten)] GameArg),
    /// Simulate many games and summarize the results
    Batch(#[clap(flatten)] BatchArg),
    /// Simulate standalone drives for one team and break down how they end
    Drives(#[clap(flatten)] DrivesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Game(GameArg::default())) {
        Mode::Game(arg) => game::run(&arg)?,
        Mode::Batch(arg) => batch::run(&arg)?,
        Mode::Drives(arg) => drives::run(&arg)?,
    }
    Ok(())
}

/// One team, from a JSON file and/or command-line overrides.
fn team_config(
    default_name: &str,
    file: Option<&PathBuf>,
    name: Option<&String>,
    two_point: bool,
) -> anyhow::Result<TeamConfig> {
    let mut config = match file {
        Some(path) => util::read_team_file(path)?,
        None => TeamConfig::new(default_name),
    };
    if let Some(name) = name {
        config.name.clone_from(name);
    }
    if two_point {
        config.attempt_two_point = true;
    }
    log::debug!("team config: {config:?}");
    Ok(config)
}

/// The two teams of a game. The first team receives the ball first.
#[derive(Default, Debug, Clone, clap::Args)]
struct MatchupArg {
    /// JSON team file for the team receiving first
    #[arg(long, value_name = "PATH")]
    first: Option<PathBuf>,
    /// JSON team file for the team receiving second
    #[arg(long, value_name = "PATH")]
    second: Option<PathBuf>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    second_name: Option<String>,
    /// Go for two after every touchdown by the first team
    #[arg(long)]
    first_two_point: bool,
    /// Go for two after every touchdown by the second team
    #[arg(long)]
    second_two_point: bool,
}

impl MatchupArg {
    fn configs(&self) -> anyhow::Result<(TeamConfig, TeamConfig)> {
        let first = team_config(
            FIRST_TEAM_NAME,
            self.first.as_ref(),
            self.first_name.as_ref(),
            self.first_two_point,
        )
        .context("Failed to load first team")?;
        let second = team_config(
            SECOND_TEAM_NAME,
            self.second.as_ref(),
            self.second_name.as_ref(),
            self.second_two_point,
        )
        .context("Failed to load second team")?;
        Ok((first, second))
    }
}

/// Seed option shared by every subcommand.
#[derive(Default, Debug, Clone, clap::Args)]
struct SeedArg {
    /// Hex seed (up to 32 digits) for a reproducible run; random if omitted
    #[arg(long)]
    seed: Option<SimSeed>,
}

impl SeedArg {
    fn seed(&self) -> SimSeed {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        eprintln!("Seed: {seed}");
        seed
    }
}

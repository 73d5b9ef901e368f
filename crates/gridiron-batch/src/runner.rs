use std::{num::NonZeroUsize, thread};

use gridiron_engine::{
    DEFAULT_MAX_POSSESSIONS, Game, GameOutcome, SimSeed, Team, TeamConfig, TeamConfigError,
    TeamSummary,
};
use rand::Rng as _;
use serde::{Deserialize, Serialize};

use crate::BatchSummary;

/// Number of games played when none is specified.
pub const DEFAULT_GAMES: usize = 1000;

/// Plays many independent games between two team configurations.
///
/// The first configuration always receives the ball first. Each game gets
/// fresh per-game state and its own [`SimSeed`] derived from the master seed,
/// and games are spread over worker threads. Results are ordered by game
/// index, so a given master seed always yields the same report no matter how
/// many threads ran it.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    first: TeamConfig,
    second: TeamConfig,
    games: usize,
    seed: Option<SimSeed>,
    max_possessions: usize,
    threads: Option<NonZeroUsize>,
}

impl BatchRunner {
    #[must_use]
    pub fn new(first: TeamConfig, second: TeamConfig) -> Self {
        Self {
            first,
            second,
            games: DEFAULT_GAMES,
            seed: None,
            max_possessions: DEFAULT_MAX_POSSESSIONS,
            threads: None,
        }
    }

    #[must_use]
    pub fn games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Master seed. Without one, a random seed is drawn and recorded in the
    /// report.
    #[must_use]
    pub fn seed(mut self, seed: SimSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn max_possessions(mut self, max_possessions: usize) -> Self {
        self.max_possessions = max_possessions;
        self
    }

    /// Worker thread count. Defaults to the available parallelism.
    #[must_use]
    pub fn threads(mut self, threads: NonZeroUsize) -> Self {
        self.threads = Some(threads);
        self
    }

    fn worker_count(&self) -> usize {
        self.threads
            .or_else(|| thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }

    /// Validates both configurations and plays every game.
    pub fn run(&self) -> Result<BatchReport, TeamConfigError> {
        let first = Team::new(self.first.clone())?;
        let second = Team::new(self.second.clone())?;

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut master = seed.rng();
        let seeds = (0..self.games)
            .map(|_| master.random::<SimSeed>())
            .collect::<Vec<_>>();

        let chunk_size = self.games.div_ceil(self.worker_count()).max(1);
        let max_possessions = self.max_possessions;
        let mut slots = vec![None; self.games];
        thread::scope(|s| {
            for (chunk, (slots, seeds)) in slots
                .chunks_mut(chunk_size)
                .zip(seeds.chunks(chunk_size))
                .enumerate()
            {
                let first = &first;
                let second = &second;
                s.spawn(move || {
                    for (offset, (slot, seed)) in slots.iter_mut().zip(seeds).enumerate() {
                        let outcome = Game::new(first.clone(), second.clone())
                            .with_max_possessions(max_possessions)
                            .simulate(&mut seed.rng());
                        let index = chunk * chunk_size + offset;
                        *slot = Some(GameRecord::new(index, *seed, &outcome));
                    }
                });
            }
        });
        let records = slots.into_iter().flatten().collect::<Vec<_>>();

        let summary = BatchSummary::from_records(first.name(), second.name(), &records);
        log::info!(
            "{} vs {}: {} games, {} decided",
            first.name(),
            second.name(),
            summary.games,
            summary.decided,
        );

        Ok(BatchReport {
            seed,
            max_possessions,
            summary,
            games: records,
        })
    }
}

/// One team's line in a [`GameRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamLine {
    pub name: String,
    pub score: u32,
    pub drives: usize,
    pub total_yards: f64,
}

impl From<&TeamSummary> for TeamLine {
    fn from(summary: &TeamSummary) -> Self {
        Self {
            name: summary.name().to_owned(),
            score: summary.score(),
            drives: summary.possessions(),
            total_yards: summary.total_yards(),
        }
    }
}

/// Flat result of one game in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub index: usize,
    pub seed: SimSeed,
    /// Name of the winner; `None` if the possession cap ended the game.
    pub winner: Option<String>,
    pub winner_had_ball_first: Option<bool>,
    pub possessions: usize,
    /// Team that received the ball first.
    pub first: TeamLine,
    pub second: TeamLine,
}

impl GameRecord {
    #[must_use]
    pub fn new(index: usize, seed: SimSeed, outcome: &GameOutcome) -> Self {
        match outcome {
            GameOutcome::Decided(result) => {
                let (first, second) = if result.winner().had_ball_first() {
                    (result.winner(), result.loser())
                } else {
                    (result.loser(), result.winner())
                };
                Self {
                    index,
                    seed,
                    winner: Some(result.winner().name().to_owned()),
                    winner_had_ball_first: Some(result.winner().had_ball_first()),
                    possessions: result.possessions(),
                    first: first.into(),
                    second: second.into(),
                }
            }
            GameOutcome::NoDecision(stalemate) => Self {
                index,
                seed,
                winner: None,
                winner_had_ball_first: None,
                possessions: stalemate.possessions(),
                first: stalemate.first().into(),
                second: stalemate.second().into(),
            },
        }
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}

/// Everything a batch produced: the master seed, each game, and the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    seed: SimSeed,
    max_possessions: usize,
    summary: BatchSummary,
    games: Vec<GameRecord>,
}

impl BatchReport {
    #[must_use]
    pub fn seed(&self) -> SimSeed {
        self.seed
    }

    #[must_use]
    pub fn max_possessions(&self) -> usize {
        self.max_possessions
    }

    #[must_use]
    pub fn summary(&self) -> &BatchSummary {
        &self.summary
    }

    #[must_use]
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }
}

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{KICKOFF_SPOT, Team},
    engine::{Drive, drive_handoff, simulate_drive},
    model::Urgency,
};

/// Default bound on the total number of drives in one game.
pub const DEFAULT_MAX_POSSESSIONS: usize = 200;

/// Per-game record of one team, owned by the [`Game`].
#[derive(Debug, Clone)]
pub struct TeamState {
    team: Team,
    urgency: Urgency,
    score: u32,
    has_completed_possession: bool,
    had_ball_first: bool,
    drives: Vec<Drive>,
}

impl TeamState {
    fn new(team: Team, had_ball_first: bool) -> Self {
        Self {
            team,
            urgency: Urgency::None,
            score: 0,
            has_completed_possession: false,
            had_ball_first,
            drives: vec![],
        }
    }

    #[must_use]
    pub fn team(&self) -> &Team {
        &self.team
    }

    #[must_use]
    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn has_completed_possession(&self) -> bool {
        self.has_completed_possession
    }

    #[must_use]
    pub fn had_ball_first(&self) -> bool {
        self.had_ball_first
    }

    #[must_use]
    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    fn record_drive(&mut self, drive: Drive) {
        self.score += drive.points();
        self.has_completed_possession = true;
        self.drives.push(drive);
    }

    fn into_summary(self) -> TeamSummary {
        TeamSummary {
            name: self.team.name().to_owned(),
            score: self.score,
            had_ball_first: self.had_ball_first,
            possessions: self.drives.len(),
            total_yards: self.drives.iter().map(Drive::total_yards).sum(),
            drives: self.drives,
        }
    }
}

/// Where a game stands between possessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    FirstPossession,
    SecondPossession,
    SuddenDeath,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Urgency of the second team after the first team's opening drive.
fn urgency_after_opening(score: u32) -> Urgency {
    match score {
        7 => Urgency::NeedTouchdown,
        3 => Urgency::NeedScore,
        _ => Urgency::None,
    }
}

/// An overtime game between two teams.
///
/// Both teams are guaranteed one possession. The first team receives at its
/// own 25; the second team answers from wherever the first drive left the
/// ball, and if the first team scored exactly a touchdown with the extra
/// point (7) or a field goal (3) it plays to match. After the two opening
/// possessions the game becomes sudden death: possessions alternate and the
/// game ends as soon as the scores differ.
///
/// Games that never break the tie end after
/// [`max_possessions`](Self::with_max_possessions) drives with
/// [`GameOutcome::NoDecision`].
#[derive(Debug, Clone)]
pub struct Game {
    first: TeamState,
    second: TeamState,
    max_possessions: usize,
    phase: GamePhase,
    next_start: f64,
    offense: Side,
}

impl Game {
    /// Sets up a game where `first` receives the ball first.
    #[must_use]
    pub fn new(first: Team, second: Team) -> Self {
        Self {
            first: TeamState::new(first, true),
            second: TeamState::new(second, false),
            max_possessions: DEFAULT_MAX_POSSESSIONS,
            phase: GamePhase::FirstPossession,
            next_start: KICKOFF_SPOT,
            offense: Side::First,
        }
    }

    /// Caps the total number of drives. Values below 2 are raised to 2, since
    /// both opening possessions are always played.
    #[must_use]
    pub fn with_max_possessions(mut self, max_possessions: usize) -> Self {
        self.max_possessions = max_possessions.max(2);
        self
    }

    #[must_use]
    pub fn max_possessions(&self) -> usize {
        self.max_possessions
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Team that received the ball first.
    #[must_use]
    pub fn first(&self) -> &TeamState {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &TeamState {
        &self.second
    }

    /// Drives played so far by both teams.
    #[must_use]
    pub fn possessions(&self) -> usize {
        self.first.drives.len() + self.second.drives.len()
    }

    /// Spot where the next possession starts.
    #[must_use]
    pub fn next_start(&self) -> f64 {
        self.next_start
    }

    /// Whether both teams have had the ball and the scores differ.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.winner_side().is_some()
    }

    fn winner_side(&self) -> Option<Side> {
        if !(self.first.has_completed_possession && self.second.has_completed_possession) {
            return None;
        }
        match self.first.score.cmp(&self.second.score) {
            Ordering::Greater => Some(Side::First),
            Ordering::Less => Some(Side::Second),
            Ordering::Equal => None,
        }
    }

    fn state_mut(&mut self, side: Side) -> &mut TeamState {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    /// Plays the next drive and returns the phase the game is in afterwards.
    ///
    /// Does nothing once the game is over.
    pub fn play_possession<R>(&mut self, rng: &mut R) -> GamePhase
    where
        R: Rng + ?Sized,
    {
        let offense = match self.phase {
            GamePhase::Over => return self.phase,
            GamePhase::FirstPossession => Side::First,
            GamePhase::SecondPossession => Side::Second,
            GamePhase::SuddenDeath => self.offense,
        };

        let start = self.next_start;
        let state = self.state_mut(offense);
        let drive = simulate_drive(&state.team, state.urgency, start, rng);
        let next_start = drive_handoff(&drive);
        state.record_drive(drive);
        self.next_start = next_start;
        self.offense = offense.other();

        self.phase = if self.phase.is_first_possession() {
            self.second.urgency = urgency_after_opening(self.first.score);
            GamePhase::SecondPossession
        } else {
            self.first.urgency = Urgency::None;
            self.second.urgency = Urgency::None;
            if self.has_winner() || self.possessions() >= self.max_possessions {
                GamePhase::Over
            } else {
                GamePhase::SuddenDeath
            }
        };
        self.phase
    }

    /// Plays the game to the end.
    pub fn simulate<R>(mut self, rng: &mut R) -> GameOutcome
    where
        R: Rng + ?Sized,
    {
        while !self.phase.is_over() {
            self.play_possession(rng);
        }
        self.into_outcome()
    }

    fn into_outcome(self) -> GameOutcome {
        let possessions = self.possessions();
        let winner_side = self.winner_side();
        let first = self.first.into_summary();
        let second = self.second.into_summary();

        let Some(side) = winner_side else {
            log::warn!(
                "{} vs {}: no winner after {possessions} possessions ({}-{})",
                first.name,
                second.name,
                first.score,
                second.score,
            );
            return GameOutcome::NoDecision(Stalemate {
                possessions,
                first,
                second,
            });
        };

        let first_possession = first.name.clone();
        let (winner, loser) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };
        log::debug!(
            "{} beat {} {}-{} after {possessions} possessions",
            winner.name,
            loser.name,
            winner.score,
            loser.score,
        );
        GameOutcome::Decided(GameResult {
            first_possession,
            winner,
            loser,
        })
    }
}

/// Plays a full game with the default possession cap.
pub fn simulate_game<R>(first: Team, second: Team, rng: &mut R) -> GameOutcome
where
    R: Rng + ?Sized,
{
    Game::new(first, second).simulate(rng)
}

/// One team's side of a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    name: String,
    score: u32,
    had_ball_first: bool,
    possessions: usize,
    total_yards: f64,
    drives: Vec<Drive>,
}

impl TeamSummary {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn had_ball_first(&self) -> bool {
        self.had_ball_first
    }

    #[must_use]
    pub fn possessions(&self) -> usize {
        self.possessions
    }

    #[must_use]
    pub fn total_yards(&self) -> f64 {
        self.total_yards
    }

    #[must_use]
    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    first_possession: String,
    winner: TeamSummary,
    loser: TeamSummary,
}

impl GameResult {
    #[must_use]
    pub fn winner(&self) -> &TeamSummary {
        &self.winner
    }

    #[must_use]
    pub fn loser(&self) -> &TeamSummary {
        &self.loser
    }

    /// Name of the team that received the ball first.
    #[must_use]
    pub fn first_possession(&self) -> &str {
        &self.first_possession
    }

    #[must_use]
    pub fn possessions(&self) -> usize {
        self.winner.possessions + self.loser.possessions
    }
}

/// A game stopped by the possession cap while still tied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stalemate {
    possessions: usize,
    first: TeamSummary,
    second: TeamSummary,
}

impl Stalemate {
    #[must_use]
    pub fn possessions(&self) -> usize {
        self.possessions
    }

    #[must_use]
    pub fn first(&self) -> &TeamSummary {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &TeamSummary {
        &self.second
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GameOutcome {
    Decided(GameResult),
    NoDecision(Stalemate),
}

impl GameOutcome {
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match self {
            Self::Decided(result) => Some(result),
            Self::NoDecision(_) => None,
        }
    }

    #[must_use]
    pub fn possessions(&self) -> usize {
        match self {
            Self::Decided(result) => result.possessions(),
            Self::NoDecision(stalemate) => stalemate.possessions(),
        }
    }
}

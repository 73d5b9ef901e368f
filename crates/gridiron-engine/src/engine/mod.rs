//! Drive and game simulation.
//!
//! This module strings the per-play models together into possessions and
//! possessions into games:
//!
//! - [`DriveState`] - Down, distance, and spot; advanced one snap at a time
//! - [`Drive`] - A finished possession with its play-by-play
//! - [`next_start`] / [`drive_handoff`] - Where the other team takes over
//! - [`Game`] - Two teams alternating possessions until a winner emerges
//! - [`SimSeed`] - Seed for reproducible games
//!
//! # Game Flow
//!
//! 1. The first team drives from its own 25
//! 2. The second team answers from wherever the first drive left the ball,
//!    knowing whether it needs a touchdown or any score
//! 3. If still tied, sudden death: possessions alternate and the first team
//!    ahead after a possession wins
//! 4. A possession cap ends endless games as a [`GameOutcome::NoDecision`]
//!
//! # Example
//!
//! ```
//! use gridiron_engine::{Game, SimSeed, Team, TeamConfig};
//!
//! let first = Team::new(TeamConfig::new("Beets")).unwrap();
//! let second = Team::new(TeamConfig::new("Tuna")).unwrap();
//!
//! let mut rng = SimSeed::from_u64(7).rng();
//! let outcome = Game::new(first, second)
//!     .with_max_possessions(50)
//!     .simulate(&mut rng);
//! assert!(outcome.possessions() <= 50);
//! ```

pub use self::{drive::*, game::*, seed::*, transition::*};

mod drive;
mod game;
mod seed;
mod transition;

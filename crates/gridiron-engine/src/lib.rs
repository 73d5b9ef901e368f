//! Drive and game simulation engine for American-football overtime studies.
//!
//! The engine plays out possessions one snap at a time and strings them into
//! complete games under regulation-then-sudden-death rules. Every random draw
//! (play yardage, punt distance, two-point tries, field-goal kicks) goes
//! through an injected [`rand::Rng`], so a game is fully reproducible from a
//! [`SimSeed`].
//!
//! # Layers
//!
//! - [`core`] - Teams, field constants, and play records
//! - [`model`] - Per-play sampling and decision rules (yardage, punts,
//!   scoring, fourth down)
//! - [`engine`] - The drive state machine, possession hand-offs, and the game
//!   orchestrator
//!
//! # Example
//!
//! ```
//! use gridiron_engine::{GameOutcome, SimSeed, Team, TeamConfig, simulate_game};
//!
//! let first = Team::new(TeamConfig::new("The Idaho Beets")).unwrap();
//! let second = Team::new(TeamConfig {
//!     attempt_two_point: true,
//!     ..TeamConfig::new("The Boston Wicked Tuna")
//! })
//! .unwrap();
//!
//! let mut rng = SimSeed::from_u64(123).rng();
//! match simulate_game(first, second, &mut rng) {
//!     GameOutcome::Decided(result) => {
//!         assert!(result.winner().score() > result.loser().score());
//!     }
//!     GameOutcome::NoDecision(stalemate) => {
//!         println!("no decision after {} drives", stalemate.possessions());
//!     }
//! }
//! ```

pub use self::{core::*, engine::*, model::*};

pub mod core;
pub mod engine;
pub mod model;

#[cfg(test)]
pub(crate) mod testing;

/// Rejected team configuration.
///
/// Returned by [`Team::new`] before any simulation runs.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum TeamConfigError {
    #[display("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[display("minimum yards ({min}) exceeds expected yards ({expected})")]
    MinAboveExpected { min: f64, expected: f64 },
    #[display("expected yards ({expected}) exceeds maximum yards ({max})")]
    ExpectedAboveMax { expected: f64, max: f64 },
    #[display("{field} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    #[display("punt standard deviation must not be negative, got {stdev}")]
    NegativePuntStdev { stdev: f64 },
}

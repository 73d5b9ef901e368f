//! Repeated simulation and result tabulation.
//!
//! A single overtime game says little; the interesting numbers (how often the
//! team that receives first wins, how scores are spread, how drives end) come
//! from thousands of them.
//!
//! - [`BatchRunner`] - Plays N seeded games between two team configurations in parallel
//! - [`BatchReport`] / [`BatchSummary`] - Per-game rows and their aggregate
//! - [`DriveStudy`] - Plays N standalone drives for one team and tabulates how they end
//!
//! Every run is reproducible: the report carries the master seed, and each
//! game row carries the seed it was played with.
//!
//! # Example
//!
//! ```
//! use gridiron_batch::BatchRunner;
//! use gridiron_engine::{SimSeed, TeamConfig};
//!
//! let report = BatchRunner::new(TeamConfig::new("Beets"), TeamConfig::new("Tuna"))
//!     .games(20)
//!     .seed(SimSeed::from_u64(1))
//!     .run()
//!     .unwrap();
//!
//! let summary = report.summary();
//! assert_eq!(summary.games, 20);
//! assert_eq!(summary.first.wins + summary.second.wins, summary.decided);
//! ```

pub use self::{drive_study::*, runner::*, summary::*};

mod drive_study;
mod runner;
mod summary;

use chrono::{DateTime, Utc};
use gridiron_batch::{BatchReport, DriveStudyReport};
use gridiron_engine::{GameOutcome, SimSeed, TeamConfig};
use serde::{Deserialize, Serialize};

/// A single simulated game, with what is needed to replay it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameFile {
    pub simulated_at: DateTime<Utc>,
    pub seed: SimSeed,
    pub max_possessions: usize,
    pub first: TeamConfig,
    pub second: TeamConfig,
    pub outcome: GameOutcome,
}

/// A batch of games between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFile {
    pub simulated_at: DateTime<Utc>,
    pub first: TeamConfig,
    pub second: TeamConfig,
    pub report: BatchReport,
}

/// Outcome breakdown of standalone drives for one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivesFile {
    pub simulated_at: DateTime<Utc>,
    pub team: TeamConfig,
    pub report: DriveStudyReport,
}

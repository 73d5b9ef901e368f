use std::collections::BTreeMap;

use gridiron_engine::{
    DriveOutcome, GOAL_LINE, KICKOFF_SPOT, SimSeed, Team, TeamConfig, TeamConfigError, Urgency,
    simulate_drive,
};
use gridiron_stats::descriptive::DescriptiveStats;
use rand::Rng as _;
use serde::{Deserialize, Serialize};

use crate::summary::ratio;

/// Number of drives played when none is specified.
pub const DEFAULT_DRIVES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DriveStudyError {
    #[display("invalid team configuration: {_0}")]
    Config(TeamConfigError),
    #[display("drives must start in the field of play, got {start}")]
    InvalidStart { start: f64 },
}

impl From<TeamConfigError> for DriveStudyError {
    fn from(err: TeamConfigError) -> Self {
        Self::Config(err)
    }
}

/// How one team's drives end when started from the same spot.
///
/// Plays many independent possessions (no opponent, no game) and tabulates
/// the share of each [`DriveOutcome`] and of each point value.
///
/// # Example
///
/// ```
/// use gridiron_batch::DriveStudy;
/// use gridiron_engine::{DriveOutcome, SimSeed, TeamConfig};
///
/// let report = DriveStudy::new(TeamConfig::new("Beets"))
///     .drives(500)
///     .seed(SimSeed::from_u64(3))
///     .run()
///     .unwrap();
///
/// let total = report.outcomes.iter().map(|o| o.count).sum::<usize>();
/// assert_eq!(total, 500);
/// assert_eq!(report.outcomes.len(), DriveOutcome::ALL.len());
/// ```
#[derive(Debug, Clone)]
pub struct DriveStudy {
    config: TeamConfig,
    drives: usize,
    start: f64,
    urgency: Urgency,
    seed: Option<SimSeed>,
}

impl DriveStudy {
    #[must_use]
    pub fn new(config: TeamConfig) -> Self {
        Self {
            config,
            drives: DEFAULT_DRIVES,
            start: KICKOFF_SPOT,
            urgency: Urgency::None,
            seed: None,
        }
    }

    #[must_use]
    pub fn drives(mut self, drives: usize) -> Self {
        self.drives = drives;
        self
    }

    #[must_use]
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Plays every drive as if the team needed a touchdown or any score.
    #[must_use]
    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: SimSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn run(&self) -> Result<DriveStudyReport, DriveStudyError> {
        let team = Team::new(self.config.clone())?;
        if !(0.0..GOAL_LINE).contains(&self.start) {
            return Err(DriveStudyError::InvalidStart { start: self.start });
        }

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = seed.rng();

        let mut outcomes = BTreeMap::<DriveOutcome, usize>::new();
        let mut points = BTreeMap::<u32, usize>::new();
        let mut plays = Vec::with_capacity(self.drives);
        let mut yards = Vec::with_capacity(self.drives);
        for _ in 0..self.drives {
            let drive = simulate_drive(&team, self.urgency, self.start, &mut rng);
            if let Some(outcome) = drive.outcome() {
                *outcomes.entry(outcome).or_default() += 1;
            }
            *points.entry(drive.points()).or_default() += 1;
            #[expect(clippy::cast_precision_loss)]
            let play_count = drive.plays().len() as f64;
            plays.push(play_count);
            yards.push(drive.total_yards());
        }

        let outcomes = DriveOutcome::ALL
            .into_iter()
            .map(|outcome| {
                let count = outcomes.get(&outcome).copied().unwrap_or(0);
                OutcomeShare {
                    outcome,
                    count,
                    fraction: ratio(count, self.drives),
                }
            })
            .collect();
        let points = points
            .into_iter()
            .map(|(points, count)| PointsShare {
                points,
                count,
                fraction: ratio(count, self.drives),
            })
            .collect();

        log::info!(
            "{}: {} drives from {:.1}",
            team.name(),
            self.drives,
            self.start
        );

        Ok(DriveStudyReport {
            team: team.name().to_owned(),
            seed,
            start: self.start,
            drives: self.drives,
            outcomes,
            points,
            plays_per_drive: DescriptiveStats::new(plays),
            yards_per_drive: DescriptiveStats::new(yards),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeShare {
    pub outcome: DriveOutcome,
    pub count: usize,
    pub fraction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsShare {
    pub points: u32,
    pub count: usize,
    pub fraction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveStudyReport {
    pub team: String,
    pub seed: SimSeed,
    pub start: f64,
    pub drives: usize,
    /// One entry per [`DriveOutcome`], in [`DriveOutcome::ALL`] order.
    pub outcomes: Vec<OutcomeShare>,
    /// Observed point values in ascending order.
    pub points: Vec<PointsShare>,
    pub plays_per_drive: Option<DescriptiveStats>,
    pub yards_per_drive: Option<DescriptiveStats>,
}

impl DriveStudyReport {
    #[must_use]
    pub fn outcome(&self, outcome: DriveOutcome) -> Option<&OutcomeShare> {
        self.outcomes.iter().find(|share| share.outcome == outcome)
    }
}

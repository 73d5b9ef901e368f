use gridiron_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};
use serde::{Deserialize, Serialize};

use crate::{GameRecord, TeamLine};

/// Percentile points reported for final scores.
pub const SCORE_PERCENTILES: [f64; 5] = [10.0, 25.0, 50.0, 75.0, 90.0];

/// Aggregate for one of the two teams in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamBatchSummary {
    pub name: String,
    pub wins: usize,
    /// Share of decided games won. `None` if no game was decided.
    pub win_probability: Option<f64>,
    pub score: Option<DescriptiveStats>,
    pub score_percentiles: Percentiles,
    pub total_yards: Option<DescriptiveStats>,
}

impl TeamBatchSummary {
    fn new<'a, I>(name: &str, wins: usize, decided: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = &'a TeamLine>,
    {
        let (scores, yards): (Vec<_>, Vec<_>) = lines
            .into_iter()
            .map(|line| (f64::from(line.score), line.total_yards))
            .unzip();
        Self {
            name: name.to_owned(),
            wins,
            win_probability: ratio(wins, decided),
            score: DescriptiveStats::new(scores.iter().copied()),
            score_percentiles: Percentiles::new(&scores, &SCORE_PERCENTILES),
            total_yards: DescriptiveStats::new(yards),
        }
    }
}

/// Totals over every game of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub decided: usize,
    /// Games ended by the possession cap.
    pub no_decisions: usize,
    /// Share of decided games won by the team that received first.
    pub first_possession_win_rate: Option<f64>,
    /// Team that received the ball first in every game.
    pub first: TeamBatchSummary,
    pub second: TeamBatchSummary,
    pub possessions: Option<DescriptiveStats>,
}

impl BatchSummary {
    #[must_use]
    pub fn from_records(first_name: &str, second_name: &str, records: &[GameRecord]) -> Self {
        let decided = records.iter().filter(|r| r.is_decided()).count();
        let first_wins = records
            .iter()
            .filter(|r| r.winner_had_ball_first == Some(true))
            .count();
        let second_wins = records
            .iter()
            .filter(|r| r.winner_had_ball_first == Some(false))
            .count();

        #[expect(clippy::cast_precision_loss)]
        let possessions = DescriptiveStats::new(records.iter().map(|r| r.possessions as f64));

        Self {
            games: records.len(),
            decided,
            no_decisions: records.len() - decided,
            first_possession_win_rate: ratio(first_wins, decided),
            first: TeamBatchSummary::new(
                first_name,
                first_wins,
                decided,
                records.iter().map(|r| &r.first),
            ),
            second: TeamBatchSummary::new(
                second_name,
                second_wins,
                decided,
                records.iter().map(|r| &r.second),
            ),
            possessions,
        }
    }
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn ratio(count: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| count as f64 / total as f64)
}

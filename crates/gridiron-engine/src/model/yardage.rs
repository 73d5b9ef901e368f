use rand::Rng;
use rand_distr::{Distribution as _, Triangular};

use crate::{TeamConfigError, core::check_finite};

/// Net yardage of a single play, drawn from a triangular distribution.
///
/// Three intuitive numbers (worst, most likely, best) are enough to give the
/// skew of real play-by-play data: many short gains, the occasional big play.
///
/// # Example
///
/// ```
/// use gridiron_engine::{SimSeed, YardageModel};
///
/// let model = YardageModel::new(-15.0, 6.0, 25.0).unwrap();
/// let mut rng = SimSeed::from_u64(7).rng();
///
/// let gain = model.sample(&mut rng);
/// assert!((-15.0..=25.0).contains(&gain));
///
/// let series = model.sample_n(&mut rng, 3);
/// assert_eq!(series.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct YardageModel {
    min: f64,
    expected: f64,
    max: f64,
    distribution: Triangular<f64>,
}

impl YardageModel {
    /// Builds the model from (minimum, most likely, maximum) yards.
    ///
    /// `min == expected == max` is allowed and makes every play gain exactly
    /// that many yards.
    pub fn new(min: f64, expected: f64, max: f64) -> Result<Self, TeamConfigError> {
        check_finite("min_yards", min)?;
        check_finite("expected_yards", expected)?;
        check_finite("max_yards", max)?;
        if min > expected {
            return Err(TeamConfigError::MinAboveExpected { min, expected });
        }
        if expected > max {
            return Err(TeamConfigError::ExpectedAboveMax { expected, max });
        }
        let distribution = Triangular::new(min, max, expected)
            .map_err(|_| TeamConfigError::ExpectedAboveMax { expected, max })?;
        Ok(Self {
            min,
            expected,
            max,
            distribution,
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn expected(&self) -> f64 {
        self.expected
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draws the yardage of one play. Always within `[min, max]`.
    pub fn sample<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        self.distribution.sample(rng).clamp(self.min, self.max)
    }

    /// Draws `n` independent plays.
    pub fn sample_n<R>(&self, rng: &mut R, n: usize) -> Vec<f64>
    where
        R: Rng + ?Sized,
    {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Total yardage of `n` consecutive plays.
    ///
    /// With `n = 3` this estimates whether a set of downs converts without
    /// needing a fourth-down decision.
    pub fn sample_series<R>(&self, rng: &mut R, n: usize) -> f64
    where
        R: Rng + ?Sized,
    {
        (0..n).map(|_| self.sample(rng)).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::SimSeed;

    use super::*;

    #[test]
    fn test_draws_stay_within_bounds() {
        let params = [
            (-15.0, 6.0, 25.0),
            (-5.0, -5.0, 40.0),
            (0.0, 30.0, 30.0),
            (-2.5, 3.5, 7.25),
        ];
        let mut rng = SimSeed::from_u64(42).rng();
        for (min, expected, max) in params {
            let model = YardageModel::new(min, expected, max).unwrap();
            for gain in model.sample_n(&mut rng, 5000) {
                assert!(
                    (min..=max).contains(&gain),
                    "{gain} outside [{min}, {max}]"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_distribution_is_constant() {
        let model = YardageModel::new(10.0, 10.0, 10.0).unwrap();
        let mut rng = SimSeed::from_u64(1).rng();
        assert!(model.sample_n(&mut rng, 50).iter().all(|&y| y == 10.0));
        assert_eq!(model.sample_series(&mut rng, 3), 30.0);
    }

    #[test]
    fn test_sample_mean_tracks_triangular_mean() {
        let model = YardageModel::new(-15.0, 6.0, 25.0).unwrap();
        let mut rng = SimSeed::from_u64(9).rng();
        let n = 20_000;
        #[expect(clippy::cast_precision_loss)]
        let mean = model.sample_series(&mut rng, n) / n as f64;
        // (min + mode + max) / 3
        let expected_mean = (-15.0 + 6.0 + 25.0) / 3.0;
        assert!((mean - expected_mean).abs() < 0.3, "mean = {mean}");
    }

    #[test]
    fn test_rejects_unordered_bounds() {
        assert!(matches!(
            YardageModel::new(1.0, 0.0, 5.0),
            Err(TeamConfigError::MinAboveExpected { .. })
        ));
        assert!(matches!(
            YardageModel::new(0.0, 6.0, 5.0),
            Err(TeamConfigError::ExpectedAboveMax { .. })
        ));
        assert!(matches!(
            YardageModel::new(f64::NEG_INFINITY, 6.0, 5.0),
            Err(TeamConfigError::NonFinite {
                field: "min_yards",
                ..
            })
        ));
    }
}

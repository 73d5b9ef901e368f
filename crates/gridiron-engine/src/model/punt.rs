use rand::Rng;
use rand_distr::{Distribution as _, Normal};

use crate::{
    TeamConfigError,
    core::{GOAL_LINE, TOUCHBACK_SPOT, check_finite},
};

/// Punt distance model. Run-backs are not modeled.
#[derive(Debug, Clone)]
pub struct PuntModel {
    mean: f64,
    stdev: f64,
    distribution: Normal<f64>,
}

/// Result of a single punt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuntKick {
    pub distance: f64,
    /// Where the ball comes down, in the kicking team's coordinates.
    pub landing_spot: f64,
    /// Where the receiving team takes over, in its own coordinates.
    pub opponent_position: f64,
}

impl PuntModel {
    pub fn new(mean: f64, stdev: f64) -> Result<Self, TeamConfigError> {
        check_finite("punt_distance", mean)?;
        check_finite("punt_stdev", stdev)?;
        if stdev < 0.0 {
            return Err(TeamConfigError::NegativePuntStdev { stdev });
        }
        let distribution =
            Normal::new(mean, stdev).map_err(|_| TeamConfigError::NegativePuntStdev { stdev })?;
        Ok(Self {
            mean,
            stdev,
            distribution,
        })
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    pub fn sample_distance<R>(&self, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        self.distribution.sample(rng)
    }

    /// Punts from `field_position` and spots the ball for the receiving team.
    pub fn kick<R>(&self, field_position: f64, rng: &mut R) -> PuntKick
    where
        R: Rng + ?Sized,
    {
        let distance = self.sample_distance(rng);
        let landing_spot = field_position + distance;
        PuntKick {
            distance,
            landing_spot,
            opponent_position: receiving_position(landing_spot),
        }
    }
}

/// Receiving team's starting spot for a punt landing at `landing_spot`.
///
/// A ball that carries past the goal line is a touchback at the 25.
///
/// ```
/// use gridiron_engine::receiving_position;
///
/// assert_eq!(receiving_position(80.0), 20.0);
/// assert_eq!(receiving_position(100.0), 0.0);
/// assert_eq!(receiving_position(104.0), 25.0);
/// ```
#[must_use]
pub fn receiving_position(landing_spot: f64) -> f64 {
    if landing_spot <= GOAL_LINE {
        GOAL_LINE - landing_spot
    } else {
        TOUCHBACK_SPOT
    }
}

#[cfg(test)]
mod tests {
    use crate::SimSeed;

    use super::*;

    #[test]
    fn test_fixed_distance_punt_in_field_of_play() {
        let model = PuntModel::new(45.0, 0.0).unwrap();
        let mut rng = SimSeed::from_u64(3).rng();
        let kick = model.kick(30.0, &mut rng);
        assert_eq!(kick.distance, 45.0);
        assert_eq!(kick.landing_spot, 75.0);
        assert_eq!(kick.opponent_position, 25.0);

        let kick = model.kick(50.0, &mut rng);
        assert_eq!(kick.landing_spot, 95.0);
        assert_eq!(kick.opponent_position, 5.0);
    }

    #[test]
    fn test_touchback_when_landing_past_goal_line() {
        let model = PuntModel::new(45.0, 0.0).unwrap();
        let mut rng = SimSeed::from_u64(3).rng();
        let kick = model.kick(60.0, &mut rng);
        assert_eq!(kick.landing_spot, 105.0);
        assert_eq!(kick.opponent_position, 25.0);
    }

    #[test]
    fn test_landing_on_goal_line_is_not_a_touchback() {
        assert_eq!(receiving_position(100.0), 0.0);
        assert_eq!(receiving_position(100.5), 25.0);
    }

    #[test]
    fn test_rejects_negative_stdev() {
        assert!(matches!(
            PuntModel::new(45.0, -0.1),
            Err(TeamConfigError::NegativePuntStdev { .. })
        ));
    }
}

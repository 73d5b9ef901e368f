//! Scoring rules: touchdown conversions and field goals.
//!
//! # Field-goal range
//!
//! Kick distance is the distance to the goal line plus 17 yards (10 for the
//! end zone, 7 for the snap and hold). Success probability is a step function
//! of that distance:
//!
//! | kick distance | probability |
//! |---------------|-------------|
//! | ≤ 40          | 0.90        |
//! | 41–50         | 0.70        |
//! | 51–60         | 0.60        |
//! | > 60          | 0.00        |

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{TeamConfigError, core::GOAL_LINE};

pub const TOUCHDOWN_POINTS: u8 = 6;
pub const FIELD_GOAL_POINTS: u8 = 3;
pub const EXTRA_POINT: u8 = 1;
pub const TWO_POINT_CONVERSION: u8 = 2;

/// End zone depth plus snap-and-hold distance.
pub const KICK_DISTANCE_OFFSET: f64 = 17.0;

/// Yards gained reported for a field-goal attempt (the snap back to the holder).
pub const FIELD_GOAL_YARDS_GAINED: f64 = -5.0;

/// How a team tries to add points after a touchdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConversionPolicy {
    /// Kick the extra point. Never misses.
    ExtraPoint,
    /// Go for two with the given success probability.
    TwoPoint { success_rate: f64 },
}

impl ConversionPolicy {
    pub fn two_point(success_rate: f64) -> Result<Self, TeamConfigError> {
        if !(0.0..=1.0).contains(&success_rate) {
            return Err(TeamConfigError::ProbabilityOutOfRange {
                field: "two_point_conversion_rate",
                value: success_rate,
            });
        }
        Ok(Self::TwoPoint { success_rate })
    }
}

/// Points added after a touchdown.
///
/// Extra points are automatic and consume no randomness. A two-point try
/// draws one uniform value and succeeds when it is at or below the success
/// rate.
pub fn touchdown_bonus<R>(conversion: ConversionPolicy, rng: &mut R) -> u8
where
    R: Rng + ?Sized,
{
    match conversion {
        ConversionPolicy::ExtraPoint => EXTRA_POINT,
        ConversionPolicy::TwoPoint { success_rate } => {
            if rng.random::<f64>() <= success_rate {
                TWO_POINT_CONVERSION
            } else {
                0
            }
        }
    }
}

/// Length of a field-goal attempt from `field_position`.
#[must_use]
pub fn kick_distance(field_position: f64) -> f64 {
    (GOAL_LINE - field_position) + KICK_DISTANCE_OFFSET
}

/// Probability that a field goal from `field_position` is good.
///
/// ```
/// use gridiron_engine::scoring::field_goal_probability;
///
/// assert_eq!(field_goal_probability(80.0), 0.90); // 37-yard kick
/// assert_eq!(field_goal_probability(30.0), 0.0); // 87-yard kick
/// ```
#[must_use]
pub fn field_goal_probability(field_position: f64) -> f64 {
    let distance = kick_distance(field_position);
    if distance <= 40.0 {
        0.90
    } else if distance <= 50.0 {
        0.70
    } else if distance <= 60.0 {
        0.60
    } else {
        0.0
    }
}

/// Outcome of a field-goal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGoalKick {
    pub made: bool,
    pub points: u8,
}

/// Attempts a field goal from `field_position`.
///
/// Draws one uniform value. Out of range kicks (probability 0) always miss.
pub fn attempt_field_goal<R>(field_position: f64, rng: &mut R) -> FieldGoalKick
where
    R: Rng + ?Sized,
{
    let probability = field_goal_probability(field_position);
    let draw = rng.random::<f64>();
    let made = probability > 0.0 && draw <= probability;
    FieldGoalKick {
        made,
        points: if made { FIELD_GOAL_POINTS } else { 0 },
    }
}

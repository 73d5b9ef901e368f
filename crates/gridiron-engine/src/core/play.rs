use serde::{Deserialize, Serialize};

use crate::model::FIELD_GOAL_YARDS_GAINED;

/// Down-and-distance snapshot taken before a play is run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Situation {
    pub field_position: f64,
    /// Downs already used in the current set (0-3).
    pub downs_completed: u8,
    pub yards_needed: f64,
}

/// One snap of a drive.
///
/// Each variant carries only the fields that make sense for it. Serialized
/// with a `play_type` tag:
///
/// ```
/// use gridiron_engine::{PlayRecord, Situation};
///
/// let play = PlayRecord::Punt {
///     situation: Situation {
///         field_position: 30.0,
///         downs_completed: 3,
///         yards_needed: 4.0,
///     },
///     distance: 45.0,
///     opponent_position: 25.0,
/// };
/// let json = serde_json::to_value(&play).unwrap();
/// assert_eq!(json["play_type"], "punt");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "play_type", rename_all = "snake_case")]
pub enum PlayRecord {
    Run {
        situation: Situation,
        yards_gained: f64,
        /// 0, or 6 plus the conversion on a touchdown.
        points: u8,
    },
    Punt {
        situation: Situation,
        distance: f64,
        /// Receiving team's starting spot, after the touchback rule.
        opponent_position: f64,
    },
    FieldGoalAttempt {
        situation: Situation,
        made: bool,
        points: u8,
    },
}

impl PlayRecord {
    #[must_use]
    pub fn situation(&self) -> &Situation {
        match self {
            Self::Run { situation, .. }
            | Self::Punt { situation, .. }
            | Self::FieldGoalAttempt { situation, .. } => situation,
        }
    }

    #[must_use]
    pub fn points(&self) -> u8 {
        match self {
            Self::Run { points, .. } | Self::FieldGoalAttempt { points, .. } => *points,
            Self::Punt { .. } => 0,
        }
    }

    /// Yards gained as reported on the play sheet.
    ///
    /// Field-goal attempts report the snap distance as a loss so that a miss
    /// is spotted behind the line of scrimmage. Punts gain nothing.
    #[must_use]
    pub fn yards_gained(&self) -> Option<f64> {
        match self {
            Self::Run { yards_gained, .. } => Some(*yards_gained),
            Self::FieldGoalAttempt { .. } => Some(FIELD_GOAL_YARDS_GAINED),
            Self::Punt { .. } => None,
        }
    }

    /// Whether this play crossed the goal line.
    #[must_use]
    pub fn is_touchdown(&self) -> bool {
        matches!(self, Self::Run { points, .. } if *points >= 6)
    }
}

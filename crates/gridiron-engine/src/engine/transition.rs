//! Possession hand-off: where the next drive starts.
//!
//! The next team's spot depends only on the last snap of the previous drive:
//!
//! - Any score: kickoff, always a touchback at the 25.
//! - Punt: the spot already computed for the receiving team.
//! - Turnover on downs or missed field goal: the field is flipped around the
//!   spot where the failed play ended. A missed kick ends 5 yards behind the
//!   line of scrimmage (the snap), a failed run wherever the runner stopped.
//!
//! Hand-offs never place the ball on or past the goal line; such spots are
//! moved back to [`LAST_SPOT_IN_FIELD`].

use crate::{
    core::{GOAL_LINE, KICKOFF_SPOT, LAST_SPOT_IN_FIELD, PlayRecord},
    engine::Drive,
};

/// Starting field position of the team receiving the ball after `last_play`.
///
/// ```
/// use gridiron_engine::{PlayRecord, Situation, next_start};
///
/// // Missed 47-yard field goal from the 70.
/// let miss = PlayRecord::FieldGoalAttempt {
///     situation: Situation {
///         field_position: 70.0,
///         downs_completed: 3,
///         yards_needed: 6.0,
///     },
///     made: false,
///     points: 0,
/// };
/// assert_eq!(next_start(&miss), 35.0);
/// ```
#[must_use]
pub fn next_start(last_play: &PlayRecord) -> f64 {
    let spot = if last_play.points() > 0 {
        KICKOFF_SPOT
    } else if let PlayRecord::Punt {
        opponent_position, ..
    } = last_play
    {
        *opponent_position
    } else {
        let yards_gained = last_play.yards_gained().unwrap_or(0.0);
        GOAL_LINE - (last_play.situation().field_position + yards_gained)
    };
    spot.min(LAST_SPOT_IN_FIELD)
}

/// Starting field position of the opponent after `drive`.
///
/// A drive without plays hands the ball over at its own start, flipped.
#[must_use]
pub fn drive_handoff(drive: &Drive) -> f64 {
    drive.last_play().map_or_else(
        || (GOAL_LINE - drive.start()).min(LAST_SPOT_IN_FIELD),
        next_start,
    )
}

#[cfg(test)]
mod tests {
    use crate::core::Situation;

    use super::*;

    fn situation(field_position: f64) -> Situation {
        Situation {
            field_position,
            downs_completed: 3,
            yards_needed: 4.0,
        }
    }

    #[test]
    fn test_touchdown_leads_to_kickoff() {
        let td = PlayRecord::Run {
            situation: situation(92.0),
            yards_gained: 12.0,
            points: 7,
        };
        assert_eq!(next_start(&td), 25.0);
    }

    #[test]
    fn test_made_field_goal_leads_to_kickoff() {
        let fg = PlayRecord::FieldGoalAttempt {
            situation: situation(80.0),
            made: true,
            points: 3,
        };
        assert_eq!(next_start(&fg), 25.0);
    }

    #[test]
    fn test_punt_uses_receiving_spot() {
        let punt = PlayRecord::Punt {
            situation: situation(40.0),
            distance: 42.0,
            opponent_position: 18.0,
        };
        assert_eq!(next_start(&punt), 18.0);
    }

    #[test]
    fn test_missed_field_goal_flips_field() {
        let miss = PlayRecord::FieldGoalAttempt {
            situation: situation(70.0),
            made: false,
            points: 0,
        };
        assert_eq!(next_start(&miss), 35.0);
    }

    #[test]
    fn test_turnover_on_downs_flips_at_end_of_run() {
        let stop = PlayRecord::Run {
            situation: situation(60.0),
            yards_gained: 2.5,
            points: 0,
        };
        assert_eq!(next_start(&stop), 37.5);
    }

    #[test]
    fn test_spot_past_goal_line_is_pulled_back() {
        // Lost 10 yards from the 5: would put the opponent on the 105.
        let safety_spot = PlayRecord::Run {
            situation: situation(5.0),
            yards_gained: -10.0,
            points: 0,
        };
        assert_eq!(next_start(&safety_spot), LAST_SPOT_IN_FIELD);
    }
}

use serde::{Deserialize, Serialize};

use crate::{core::Situation, model::scoring::field_goal_probability};

/// Minimum make probability for a field-goal attempt on the last down.
pub const FIELD_GOAL_ATTEMPT_THRESHOLD: f64 = 0.55;

/// What a team must do on its possession to stay in the game.
///
/// Only set during the first overtime possession of the team that did not
/// receive first; cleared when sudden death begins.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum Urgency {
    #[default]
    None,
    /// Down by a touchdown: a field goal does not help.
    NeedTouchdown,
    /// Down by a field goal: any score keeps the game going.
    NeedScore,
}

/// Play call on the last down of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FourthDownCall {
    Convert,
    FieldGoal,
    Punt,
}

/// Fourth-down decision rule.
///
/// Rules are checked in order:
///
/// 1. Needing a touchdown, or being short (`yards_needed < yard_threshold`)
///    and in range (`field_position > position_threshold`): go for it.
/// 2. Field goal probability above [`FIELD_GOAL_ATTEMPT_THRESHOLD`]: kick.
/// 3. Needing any score: go for it, since a punt cannot score.
/// 4. Otherwise punt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourthDownPolicy {
    yard_threshold: f64,
    position_threshold: f64,
}

impl FourthDownPolicy {
    #[must_use]
    pub const fn new(yard_threshold: f64, position_threshold: f64) -> Self {
        Self {
            yard_threshold,
            position_threshold,
        }
    }

    #[must_use]
    pub fn yard_threshold(&self) -> f64 {
        self.yard_threshold
    }

    #[must_use]
    pub fn position_threshold(&self) -> f64 {
        self.position_threshold
    }

    /// Short yardage in opponent territory.
    #[must_use]
    pub fn is_short_and_in_range(&self, situation: &Situation) -> bool {
        situation.field_position > self.position_threshold
            && situation.yards_needed < self.yard_threshold
    }

    #[must_use]
    pub fn decide(&self, situation: &Situation, urgency: Urgency) -> FourthDownCall {
        if urgency.is_need_touchdown() || self.is_short_and_in_range(situation) {
            FourthDownCall::Convert
        } else if field_goal_probability(situation.field_position) > FIELD_GOAL_ATTEMPT_THRESHOLD {
            FourthDownCall::FieldGoal
        } else if urgency.is_need_score() {
            FourthDownCall::Convert
        } else {
            FourthDownCall::Punt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn situation(field_position: f64, yards_needed: f64) -> Situation {
        Situation {
            field_position,
            downs_completed: 3,
            yards_needed,
        }
    }

    const POLICY: FourthDownPolicy = FourthDownPolicy::new(2.0, 45.0);

    #[test]
    fn test_punts_long_yardage_in_own_territory() {
        assert_eq!(
            POLICY.decide(&situation(30.0, 8.0), Urgency::None),
            FourthDownCall::Punt
        );
    }

    #[test]
    fn test_need_touchdown_always_converts() {
        // Own territory, long yardage: would otherwise punt.
        assert_eq!(
            POLICY.decide(&situation(20.0, 9.0), Urgency::NeedTouchdown),
            FourthDownCall::Convert
        );
        // Chip-shot range: would otherwise kick.
        assert_eq!(
            POLICY.decide(&situation(90.0, 9.0), Urgency::NeedTouchdown),
            FourthDownCall::Convert
        );
    }

    #[test]
    fn test_short_and_in_range_converts() {
        assert_eq!(
            POLICY.decide(&situation(50.0, 1.0), Urgency::None),
            FourthDownCall::Convert
        );
        // Exactly on the thresholds does not qualify.
        assert_eq!(
            POLICY.decide(&situation(45.0, 1.0), Urgency::None),
            FourthDownCall::Punt
        );
        assert_eq!(
            POLICY.decide(&situation(50.0, 2.0), Urgency::None),
            FourthDownCall::Punt
        );
    }

    #[test]
    fn test_kicks_when_in_range() {
        // 57-yard kick, probability 0.60
        assert_eq!(
            POLICY.decide(&situation(60.0, 5.0), Urgency::None),
            FourthDownCall::FieldGoal
        );
        assert_eq!(
            POLICY.decide(&situation(60.0, 5.0), Urgency::NeedScore),
            FourthDownCall::FieldGoal
        );
    }

    #[test]
    fn test_need_score_out_of_range_converts() {
        assert_eq!(
            POLICY.decide(&situation(40.0, 5.0), Urgency::NeedScore),
            FourthDownCall::Convert
        );
    }
}

use serde::{Deserialize, Serialize};

use crate::{
    TeamConfigError,
    model::{ConversionPolicy, FourthDownPolicy, PuntModel, YardageModel},
};

/// Raw team configuration, as read from a team file or built by hand.
///
/// Every field except `name` has a default, so a JSON team file only needs to
/// list what differs from a league-average offense:
///
/// ```
/// use gridiron_engine::TeamConfig;
///
/// let config: TeamConfig =
///     serde_json::from_str(r#"{ "name": "Tuna", "attempt_two_point": true }"#).unwrap();
/// assert_eq!(config.expected_yards, 6.0);
/// assert!(config.attempt_two_point);
/// ```
///
/// A configuration is only checked when it is turned into a [`Team`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    /// Worst net yardage a single play can produce.
    #[serde(default = "defaults::min_yards")]
    pub min_yards: f64,
    /// Most likely net yardage of a play.
    #[serde(default = "defaults::expected_yards")]
    pub expected_yards: f64,
    /// Best net yardage a single play can produce.
    #[serde(default = "defaults::max_yards")]
    pub max_yards: f64,
    #[serde(default = "defaults::punt_distance")]
    pub punt_distance: f64,
    #[serde(default = "defaults::punt_stdev")]
    pub punt_stdev: f64,
    /// Go for it on fourth down only when fewer yards than this are needed...
    #[serde(default = "defaults::fourth_down_yard_threshold")]
    pub fourth_down_yard_threshold: f64,
    /// ...and the ball is beyond this field position.
    #[serde(default = "defaults::fourth_down_position_threshold")]
    pub fourth_down_position_threshold: f64,
    #[serde(default = "defaults::two_point_conversion_rate")]
    pub two_point_conversion_rate: f64,
    #[serde(default)]
    pub attempt_two_point: bool,
}

mod defaults {
    pub(super) const fn min_yards() -> f64 {
        -15.0
    }
    pub(super) const fn expected_yards() -> f64 {
        6.0
    }
    pub(super) const fn max_yards() -> f64 {
        25.0
    }
    pub(super) const fn punt_distance() -> f64 {
        45.0
    }
    pub(super) const fn punt_stdev() -> f64 {
        4.0
    }
    pub(super) const fn fourth_down_yard_threshold() -> f64 {
        2.0
    }
    pub(super) const fn fourth_down_position_threshold() -> f64 {
        45.0
    }
    pub(super) const fn two_point_conversion_rate() -> f64 {
        0.5
    }
}

impl TeamConfig {
    /// Creates a configuration with the given name and default parameters.
    #[must_use]
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            min_yards: defaults::min_yards(),
            expected_yards: defaults::expected_yards(),
            max_yards: defaults::max_yards(),
            punt_distance: defaults::punt_distance(),
            punt_stdev: defaults::punt_stdev(),
            fourth_down_yard_threshold: defaults::fourth_down_yard_threshold(),
            fourth_down_position_threshold: defaults::fourth_down_position_threshold(),
            two_point_conversion_rate: defaults::two_point_conversion_rate(),
            attempt_two_point: false,
        }
    }
}

/// A validated team profile: everything needed to call and sample plays.
///
/// Teams are immutable. Per-game state (score, drive history, overtime
/// obligations) lives in [`TeamState`](crate::TeamState), owned by the game.
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    yardage: YardageModel,
    punt: PuntModel,
    fourth_down: FourthDownPolicy,
    conversion: ConversionPolicy,
}

impl Team {
    /// Validates a configuration and builds the team's play models.
    ///
    /// # Errors
    ///
    /// Fails if any parameter is not finite, if the yardage bounds are out of
    /// order, if the two-point rate is not a probability, or if the punt
    /// standard deviation is negative.
    pub fn new(config: TeamConfig) -> Result<Self, TeamConfigError> {
        check_finite("fourth_down_yard_threshold", config.fourth_down_yard_threshold)?;
        check_finite(
            "fourth_down_position_threshold",
            config.fourth_down_position_threshold,
        )?;

        let yardage = YardageModel::new(config.min_yards, config.expected_yards, config.max_yards)?;
        let punt = PuntModel::new(config.punt_distance, config.punt_stdev)?;
        let fourth_down = FourthDownPolicy::new(
            config.fourth_down_yard_threshold,
            config.fourth_down_position_threshold,
        );
        // The rate is checked even when the team kicks extra points.
        let two_point = ConversionPolicy::two_point(config.two_point_conversion_rate)?;
        let conversion = if config.attempt_two_point {
            two_point
        } else {
            ConversionPolicy::ExtraPoint
        };

        Ok(Self {
            name: config.name,
            yardage,
            punt,
            fourth_down,
            conversion,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn yardage(&self) -> &YardageModel {
        &self.yardage
    }

    #[must_use]
    pub fn punt(&self) -> &PuntModel {
        &self.punt
    }

    #[must_use]
    pub fn fourth_down(&self) -> &FourthDownPolicy {
        &self.fourth_down
    }

    #[must_use]
    pub fn conversion(&self) -> ConversionPolicy {
        self.conversion
    }
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), TeamConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TeamConfigError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let team = Team::new(TeamConfig::new("Beets")).unwrap();
        assert_eq!(team.name(), "Beets");
        assert_eq!(team.conversion(), ConversionPolicy::ExtraPoint);
        assert_eq!(team.yardage().min(), -15.0);
        assert_eq!(team.yardage().expected(), 6.0);
        assert_eq!(team.yardage().max(), 25.0);
    }

    #[test]
    fn test_two_point_flag_selects_two_point_policy() {
        let team = Team::new(TeamConfig {
            attempt_two_point: true,
            two_point_conversion_rate: 0.4,
            ..TeamConfig::new("Tuna")
        })
        .unwrap();
        assert_eq!(
            team.conversion(),
            ConversionPolicy::TwoPoint { success_rate: 0.4 }
        );
    }

    #[test]
    fn test_min_above_expected_is_rejected() {
        let err = Team::new(TeamConfig {
            min_yards: 8.0,
            ..TeamConfig::new("Bad")
        })
        .unwrap_err();
        assert_eq!(
            err,
            TeamConfigError::MinAboveExpected {
                min: 8.0,
                expected: 6.0
            }
        );
    }

    #[test]
    fn test_expected_above_max_is_rejected() {
        let err = Team::new(TeamConfig {
            max_yards: 5.0,
            ..TeamConfig::new("Bad")
        })
        .unwrap_err();
        assert_eq!(
            err,
            TeamConfigError::ExpectedAboveMax {
                expected: 6.0,
                max: 5.0
            }
        );
    }

    #[test]
    fn test_probability_out_of_range_is_rejected_even_when_unused() {
        let err = Team::new(TeamConfig {
            two_point_conversion_rate: 1.5,
            attempt_two_point: false,
            ..TeamConfig::new("Bad")
        })
        .unwrap_err();
        assert!(matches!(
            err,
            TeamConfigError::ProbabilityOutOfRange { value, .. } if value == 1.5
        ));
    }

    #[test]
    fn test_negative_punt_stdev_is_rejected() {
        let err = Team::new(TeamConfig {
            punt_stdev: -1.0,
            ..TeamConfig::new("Bad")
        })
        .unwrap_err();
        assert_eq!(err, TeamConfigError::NegativePuntStdev { stdev: -1.0 });
    }

    #[test]
    fn test_non_finite_threshold_is_rejected() {
        let err = Team::new(TeamConfig {
            fourth_down_position_threshold: f64::NAN,
            ..TeamConfig::new("Bad")
        })
        .unwrap_err();
        assert!(matches!(
            err,
            TeamConfigError::NonFinite {
                field: "fourth_down_position_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: TeamConfig = serde_json::from_str(r#"{ "name": "Beets" }"#).unwrap();
        assert_eq!(config, TeamConfig::new("Beets"));
    }
}

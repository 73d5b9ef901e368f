use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{FIRST_DOWN_DISTANCE, GOAL_LINE, LAST_DOWN, PlayRecord, Situation, Team},
    model::{
        FourthDownCall, Urgency,
        scoring::{TOUCHDOWN_POINTS, attempt_field_goal, touchdown_bonus},
    },
};

/// Down, distance, and spot of the team with the ball.
///
/// `DriveState` is a value: [`DriveState::play`] never mutates, it returns the
/// state after the snap together with the record of what happened. A drive is
/// over once the state is no longer [open](DriveState::is_open).
///
/// # Example
///
/// ```
/// use gridiron_engine::{DriveState, SimSeed, Team, TeamConfig, Urgency};
///
/// let team = Team::new(TeamConfig {
///     min_yards: 4.0,
///     expected_yards: 4.0,
///     max_yards: 4.0,
///     ..TeamConfig::new("Grinders")
/// })
/// .unwrap();
/// let mut rng = SimSeed::from_u64(0).rng();
///
/// let state = DriveState::kickoff(25.0);
/// let outcome = state.play(&team, Urgency::None, &mut rng);
/// assert_eq!(outcome.state.field_position(), 29.0);
/// assert_eq!(outcome.state.downs_completed(), 1);
/// assert_eq!(outcome.state.yards_needed(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveState {
    downs_completed: u8,
    field_position: f64,
    yards_needed: f64,
}

/// Result of one snap: the next state and the play record.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    pub state: DriveState,
    pub record: PlayRecord,
}

impl DriveState {
    /// First-and-ten at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a spot in the field of play.
    #[must_use]
    pub fn kickoff(start: f64) -> Self {
        assert!(
            start.is_finite() && start < GOAL_LINE,
            "possession must start in the field of play, got {start}"
        );
        Self {
            downs_completed: 0,
            field_position: start,
            yards_needed: FIRST_DOWN_DISTANCE,
        }
    }

    /// Resumes a drive from an arbitrary down-and-distance.
    #[must_use]
    pub fn from_situation(situation: Situation) -> Self {
        Self {
            downs_completed: situation.downs_completed,
            field_position: situation.field_position,
            yards_needed: situation.yards_needed,
        }
    }

    #[must_use]
    pub fn downs_completed(&self) -> u8 {
        self.downs_completed
    }

    #[must_use]
    pub fn field_position(&self) -> f64 {
        self.field_position
    }

    #[must_use]
    pub fn yards_needed(&self) -> f64 {
        self.yards_needed
    }

    #[must_use]
    pub fn situation(&self) -> Situation {
        Situation {
            field_position: self.field_position,
            downs_completed: self.downs_completed,
            yards_needed: self.yards_needed,
        }
    }

    /// Whether the offense still has the ball: downs remain and it has not
    /// scored a touchdown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.downs_completed <= LAST_DOWN && self.field_position < GOAL_LINE
    }

    /// Runs the next snap.
    ///
    /// On the first three downs of a set the offense always runs a play. On
    /// the last down the team's [`FourthDownPolicy`](crate::FourthDownPolicy)
    /// picks between going for it, a field goal, and a punt.
    ///
    /// # Panics
    ///
    /// Panics if the drive is already over. Stepping a closed drive is a bug
    /// in the caller, not a game situation.
    pub fn play<R>(&self, team: &Team, urgency: Urgency, rng: &mut R) -> PlayOutcome
    where
        R: Rng + ?Sized,
    {
        assert!(
            self.downs_completed <= LAST_DOWN,
            "drive stepped with {} downs completed",
            self.downs_completed
        );
        assert!(
            self.field_position < GOAL_LINE,
            "drive stepped after reaching the goal line ({})",
            self.field_position
        );

        if self.downs_completed < LAST_DOWN {
            return self.run_play(team, rng);
        }
        match team.fourth_down().decide(&self.situation(), urgency) {
            FourthDownCall::Convert => self.run_play(team, rng),
            FourthDownCall::FieldGoal => self.kick_field_goal(rng),
            FourthDownCall::Punt => self.punt(team, rng),
        }
    }

    fn run_play<R>(&self, team: &Team, rng: &mut R) -> PlayOutcome
    where
        R: Rng + ?Sized,
    {
        let situation = self.situation();
        let yards_gained = team.yardage().sample(rng);

        let mut state = *self;
        state.field_position += yards_gained;
        state.downs_completed += 1;

        let mut points = 0;
        if state.field_position >= GOAL_LINE {
            points = TOUCHDOWN_POINTS + touchdown_bonus(team.conversion(), rng);
        } else {
            state.yards_needed -= yards_gained;
            if state.yards_needed <= 0.0 {
                state.downs_completed = 0;
                state.yards_needed = FIRST_DOWN_DISTANCE;
            }
        }

        PlayOutcome {
            state,
            record: PlayRecord::Run {
                situation,
                yards_gained,
                points,
            },
        }
    }

    fn kick_field_goal<R>(&self, rng: &mut R) -> PlayOutcome
    where
        R: Rng + ?Sized,
    {
        let situation = self.situation();
        let kick = attempt_field_goal(self.field_position, rng);

        let mut state = *self;
        state.downs_completed += 1;

        PlayOutcome {
            state,
            record: PlayRecord::FieldGoalAttempt {
                situation,
                made: kick.made,
                points: kick.points,
            },
        }
    }

    fn punt<R>(&self, team: &Team, rng: &mut R) -> PlayOutcome
    where
        R: Rng + ?Sized,
    {
        let situation = self.situation();
        let kick = team.punt().kick(self.field_position, rng);

        let mut state = *self;
        state.downs_completed += 1;

        PlayOutcome {
            state,
            record: PlayRecord::Punt {
                situation,
                distance: kick.distance,
                opponent_position: kick.opponent_position,
            },
        }
    }
}

/// How a drive ended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum DriveOutcome {
    #[display("touchdown")]
    Touchdown,
    #[display("field goal")]
    FieldGoal,
    #[display("missed field goal")]
    MissedFieldGoal,
    #[display("punt")]
    Punt,
    #[display("turnover on downs")]
    TurnoverOnDowns,
}

impl DriveOutcome {
    pub const ALL: [Self; 5] = [
        Self::Touchdown,
        Self::FieldGoal,
        Self::MissedFieldGoal,
        Self::Punt,
        Self::TurnoverOnDowns,
    ];

    /// Classifies the last play of a drive.
    #[must_use]
    pub fn from_last_play(play: &PlayRecord) -> Self {
        match play {
            PlayRecord::Run { points, .. } if *points > 0 => Self::Touchdown,
            PlayRecord::Run { .. } => Self::TurnoverOnDowns,
            PlayRecord::FieldGoalAttempt { made: true, .. } => Self::FieldGoal,
            PlayRecord::FieldGoalAttempt { made: false, .. } => Self::MissedFieldGoal,
            PlayRecord::Punt { .. } => Self::Punt,
        }
    }
}

/// One possession: where it started and every snap in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    start: f64,
    plays: Vec<PlayRecord>,
}

impl Drive {
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }

    #[must_use]
    pub fn last_play(&self) -> Option<&PlayRecord> {
        self.plays.last()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<DriveOutcome> {
        self.last_play().map(DriveOutcome::from_last_play)
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.plays.iter().map(|p| u32::from(p.points())).sum()
    }

    /// Sum of reported yards gained (punts excluded, field-goal attempts count
    /// their snap loss).
    #[must_use]
    pub fn total_yards(&self) -> f64 {
        self.plays.iter().filter_map(PlayRecord::yards_gained).sum()
    }
}

/// Plays a full possession for `team` starting first-and-ten at `start`.
///
/// Snaps continue until the offense scores a touchdown or runs out of downs
/// (including kicking a field goal or punting).
pub fn simulate_drive<R>(team: &Team, urgency: Urgency, start: f64, rng: &mut R) -> Drive
where
    R: Rng + ?Sized,
{
    let mut state = DriveState::kickoff(start);
    let mut plays = vec![];
    while state.is_open() {
        let PlayOutcome {
            state: next,
            record,
        } = state.play(team, urgency, rng);
        log::trace!("{}: {record:?}", team.name());
        plays.push(record);
        state = next;
    }

    let drive = Drive { start, plays };
    log::debug!(
        "{} drive from {start:.1}: {} plays, {} ({} pts)",
        team.name(),
        drive.plays.len(),
        drive
            .outcome()
            .map_or_else(|| "no play".to_owned(), |o| o.to_string()),
        drive.points(),
    );
    drive
}

#[cfg(test)]
mod tests {
    use crate::{SimSeed, TeamConfig, testing::ScriptedRng};

    use super::*;

    fn fixed_gain_team(yards: f64) -> Team {
        Team::new(TeamConfig {
            min_yards: yards,
            expected_yards: yards,
            max_yards: yards,
            punt_stdev: 0.0,
            ..TeamConfig::new("Fixed")
        })
        .unwrap()
    }

    fn state(field_position: f64, downs_completed: u8, yards_needed: f64) -> DriveState {
        DriveState::from_situation(Situation {
            field_position,
            downs_completed,
            yards_needed,
        })
    }

    #[test]
    fn test_kickoff_state() {
        let s = DriveState::kickoff(25.0);
        assert_eq!(s.downs_completed(), 0);
        assert_eq!(s.yards_needed(), 10.0);
        assert_eq!(s.field_position(), 25.0);
        assert!(s.is_open());
    }

    #[test]
    fn test_ten_yard_drive_scores_on_eighth_play() {
        let team = fixed_gain_team(10.0);
        let mut rng = SimSeed::from_u64(0).rng();
        let drive = simulate_drive(&team, Urgency::None, 25.0, &mut rng);

        assert_eq!(drive.plays().len(), 8);
        assert!(drive.plays().iter().all(PlayRecord::is_run));
        let spots = drive
            .plays()
            .iter()
            .map(|p| p.situation().field_position + p.yards_gained().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            spots,
            [35.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0, 105.0]
        );
        // Every snap is a fresh first down.
        assert!(
            drive
                .plays()
                .iter()
                .all(|p| p.situation().downs_completed == 0 && p.situation().yards_needed == 10.0)
        );
        assert_eq!(drive.points(), 7);
        assert_eq!(drive.outcome(), Some(DriveOutcome::Touchdown));
    }

    #[test]
    fn test_converting_final_down_renews_set() {
        let team = fixed_gain_team(3.0);
        // 4th and 1 at midfield: short and in range, so the team goes for it.
        let s = state(50.0, 3, 1.0);
        let mut rng = SimSeed::from_u64(0).rng();
        let out = s.play(&team, Urgency::None, &mut rng);

        assert_eq!(out.state.downs_completed(), 0);
        assert_eq!(out.state.yards_needed(), 10.0);
        assert_eq!(out.state.field_position(), 53.0);
        assert!(out.state.is_open());
        assert!(out.record.is_run());
    }

    #[test]
    fn test_failed_conversion_ends_drive() {
        let team = fixed_gain_team(1.0);
        let s = state(30.0, 3, 5.0);
        let mut rng = SimSeed::from_u64(0).rng();
        let out = s.play(&team, Urgency::NeedTouchdown, &mut rng);

        assert_eq!(out.state.downs_completed(), 4);
        assert_eq!(out.state.field_position(), 31.0);
        assert!(!out.state.is_open());
    }

    #[test]
    fn test_punt_on_fourth_and_long() {
        let team = fixed_gain_team(1.0);
        let s = state(30.0, 3, 7.0);
        let mut rng = SimSeed::from_u64(0).rng();
        let out = s.play(&team, Urgency::None, &mut rng);

        assert_eq!(
            out.record,
            PlayRecord::Punt {
                situation: s.situation(),
                distance: 45.0,
                opponent_position: 25.0,
            }
        );
        assert_eq!(out.state.downs_completed(), 4);
        assert!(!out.state.is_open());
    }

    #[test]
    fn test_punt_touchback() {
        let team = fixed_gain_team(1.0);
        // 4th and 7 at the 56: a 61-yard field goal is out of range, so punt.
        let s = state(56.0, 3, 7.0);
        let mut rng = SimSeed::from_u64(0).rng();
        let out = s.play(&team, Urgency::None, &mut rng);
        match out.record {
            PlayRecord::Punt {
                distance,
                opponent_position,
                ..
            } => {
                assert_eq!(distance, 45.0);
                assert_eq!(opponent_position, 25.0);
            }
            other => panic!("expected punt, got {other:?}"),
        }
    }

    #[test]
    fn test_field_goal_ends_drive_made_or_missed() {
        let team = fixed_gain_team(1.0);
        let s = state(70.0, 3, 6.0);

        let mut rng = ScriptedRng::new([0.1]);
        let made = s.play(&team, Urgency::None, &mut rng);
        assert_eq!(made.record.points(), 3);
        assert_eq!(made.state.downs_completed(), 4);

        let mut rng = ScriptedRng::new([0.9]);
        let missed = s.play(&team, Urgency::None, &mut rng);
        assert_eq!(missed.record.points(), 0);
        assert_eq!(missed.record.yards_gained(), Some(-5.0));
        assert!(!missed.state.is_open());
    }

    #[test]
    fn test_two_point_touchdown() {
        let team = Team::new(TeamConfig {
            min_yards: 20.0,
            expected_yards: 20.0,
            max_yards: 20.0,
            attempt_two_point: true,
            two_point_conversion_rate: 0.5,
            ..TeamConfig::new("Tuna")
        })
        .unwrap();
        let s = state(85.0, 1, 10.0);

        // Every draw succeeds the conversion, whichever one the run consumes.
        let mut rng = ScriptedRng::new([0.2, 0.2]);
        let out = s.play(&team, Urgency::None, &mut rng);
        assert_eq!(out.record.points(), 8);
        assert_eq!(out.state.field_position(), 105.0);
        assert!(!out.state.is_open());
    }

    #[test]
    #[should_panic(expected = "downs completed")]
    fn test_stepping_closed_drive_panics() {
        let team = fixed_gain_team(1.0);
        let mut rng = SimSeed::from_u64(0).rng();
        let _ = state(30.0, 4, 5.0).play(&team, Urgency::None, &mut rng);
    }

    #[test]
    #[should_panic(expected = "field of play")]
    fn test_kickoff_past_goal_line_panics() {
        let _ = DriveState::kickoff(100.0);
    }
}

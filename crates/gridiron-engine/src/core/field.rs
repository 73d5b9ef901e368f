/// Field position of the opponent's goal line.
///
/// Positions are measured from the possessing team's own goal line (0.0).
pub const GOAL_LINE: f64 = 100.0;

/// Where a team starts after a kickoff. Kickoffs are always touchbacks.
pub const KICKOFF_SPOT: f64 = 25.0;

/// Where the receiving team starts after a punt into the end zone.
pub const TOUCHBACK_SPOT: f64 = 25.0;

/// Furthest spot a possession may start from.
///
/// Hand-offs that would place the ball on or beyond the goal line are spotted
/// here instead.
pub const LAST_SPOT_IN_FIELD: f64 = 99.0;

/// Yards needed to earn a new set of downs.
pub const FIRST_DOWN_DISTANCE: f64 = 10.0;

/// Downs completed when the final snap of a set is about to be played.
pub const LAST_DOWN: u8 = 3;

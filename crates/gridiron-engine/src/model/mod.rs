//! Per-play sampling and decision rules.
//!
//! Each model is a small value type built once per team and then queried
//! snap after snap:
//!
//! - [`YardageModel`] - Triangular distribution of net yards per play
//! - [`PuntModel`] - Normal distribution of punt distance plus the touchback rule
//! - [`scoring`] - Touchdown conversions and field-goal range/outcome
//! - [`FourthDownPolicy`] - Go for it, kick, or punt on the last down of a set
//!
//! All sampling takes the random source as an argument; nothing in this module
//! reaches for a global generator.

pub use self::{fourth_down::*, punt::*, scoring::*, yardage::*};

mod fourth_down;
mod punt;
pub mod scoring;
mod yardage;

//! Core data: field geometry, team profiles, and play records.

pub use self::{field::*, play::*, team::*};

mod field;
mod play;
mod team;

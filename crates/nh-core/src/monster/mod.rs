//! Monster system
//!
//! Monster race templates live in `crate::race`; this module holds the
//! per-instance runtime state the turn engine advances every turn.

mod monst;

pub use monst::{Monster, MonsterId, MonsterMFlags, SmartFlags, SpeedState, TimedStatuses};

/// Reference to a monster instance
pub type MonsterRef = MonsterId;

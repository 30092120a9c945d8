//! The narrow player-facing surface the turn engine reads.
//!
//! The full player model (attributes, conduct, skills, inventory, ...)
//! belongs to the player-facing subsystem and is out of scope here; see
//! `engine::Player` for exactly what melee2.c's monster-turn code touches.

mod engine;

pub use engine::{Player, PlayerFlags};

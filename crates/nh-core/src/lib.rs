//! nh-core: monster-turn engine for a grid-based roguelike
//!
//! This crate contains the per-turn monster decision loop with no I/O
//! dependencies. It is designed to be pure and testable.

pub mod cave;
pub mod combat;
pub mod error;
pub mod geometry;
pub mod host;
pub mod lore;
pub mod monster;
pub mod movement;
pub mod object;
pub mod player;
pub mod race;
pub mod spell;
pub mod turn;

mod consts;
mod rng;

pub use cave::{Cave, Feature};
pub use combat::{attack_player_melee as make_attack_normal, check_hit};
pub use consts::*;
pub use error::{EngineError, EngineResult};
pub use host::{GameHost, LoreEvent, NullHost, RecordingHost};
pub use lore::{Lore, LoreTable};
pub use race::{Race, RaceId};
pub use rng::GameRng;
pub use turn::{process_monsters, TurnReport};

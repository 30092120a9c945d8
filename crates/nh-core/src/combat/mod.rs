//! Melee resolution: to-hit/critical math and blow-table dispatch.

mod blow;
mod critical;

pub use blow::{attack_player_melee, resolve_blow, BlowOutcome};
pub use critical::{check_hit, monster_critical};

//! The narrow player-facing surface the turn engine actually reads.
//!
//! The full player model (`You`, `PropertySet`, skills, conduct, ...) is
//! the player's own subsystem and out of scope here; this type exposes
//! only the fields melee2.c's monster-turn code actually touches:
//! position, level, hit points, armor, the saving-throw skill, a couple
//! of timed flags, perceived noise, and carried gold.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The handful of player timed flags the engine's decisions key off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PlayerFlags: u16 {
        /// Wakes every monster on the level instantly, regardless of noise.
        const AGGRAVATE       = 1 << 0;
        /// Repels evil attackers on a post-hit roll.
        const PROTECT_EVIL    = 1 << 1;
        const FREE_ACTION     = 1 << 2;
        const HOLD_LIFE       = 1 << 3;
        const SEE_INVISIBLE   = 1 << 4;
    }
}

impl Serialize for PlayerFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PlayerFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(PlayerFlags::from_bits_truncate(u16::deserialize(deserializer)?))
    }
}

/// Engine-facing player snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub px: i32,
    pub py: i32,
    pub level: i32,
    pub chp: i32,
    pub mhp: i32,
    pub ac: i32,
    pub to_a: i32,
    pub skill_save: i32,
    pub flags: PlayerFlags,
    /// How much noise the player has made recently; compared against a
    /// sleeping monster's cubed wake-notice roll.
    pub noise: u32,
    pub gold: u64,

    /// Bleeding timer, incremented by a cutting blow's critical bucket
    /// (`TMD_CUT`).
    pub cut: u16,
    /// Stun timer, incremented by a stunning blow's critical bucket
    /// (`TMD_STUN`).
    pub stun: u16,
}

impl Player {
    pub fn is_evil_repelled(&self) -> bool {
        self.flags.contains(PlayerFlags::PROTECT_EVIL)
    }

    pub fn aggravates_monsters(&self) -> bool {
        self.flags.contains(PlayerFlags::AGGRAVATE)
    }
}

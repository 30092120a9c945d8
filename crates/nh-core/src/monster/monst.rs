//! Monster instances: per-monster runtime state the turn engine reads
//! and mutates every turn.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::object::Object;
use crate::player::PlayerFlags;
use crate::race::RaceId;

/// Unique identifier for monster instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const NONE: MonsterId = MonsterId(0);

    pub fn next(self) -> Self {
        MonsterId(self.0 + 1)
    }
}

/// Monster speed state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum SpeedState {
    Slow = 0,
    #[default]
    Normal = 1,
    Fast = 2,
}

bitflags! {
    /// Per-instance runtime flags (Angband's `mflag`), distinct from the
    /// race template's behavioural `RaceFlags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MonsterMFlags: u16 {
        /// NICE: never cast an annoyance spell while unaware/peaceful.
        const NICE    = 1 << 0;
        /// This monster's cell is within the player's current view.
        const VIEW    = 1 << 1;
        /// Already took its turn this game turn (scheduler bookkeeping).
        const HANDLED = 1 << 2;
    }
}

impl Serialize for MonsterMFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonsterMFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(MonsterMFlags::from_bits_truncate(u16::deserialize(deserializer)?))
    }
}

bitflags! {
    /// What a `SMART` monster has learned about the player's resistances
    /// and capabilities, used to prune spell choices (`unset_spells`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SmartFlags: u32 {
        const IMM_MANA      = 1 << 0;
        const RES_FIRE      = 1 << 1;
        const RES_COLD      = 1 << 2;
        const RES_ELEC      = 1 << 3;
        const RES_POISON    = 1 << 4;
        const RES_CONFUSION = 1 << 5;
        const RES_BLIND     = 1 << 6;
        const RES_FEAR      = 1 << 7;
        const FREE_ACTION   = 1 << 8;
        const HOLD_LIFE     = 1 << 9;
    }
}

impl Serialize for SmartFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SmartFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(SmartFlags::from_bits_truncate(u32::deserialize(deserializer)?))
    }
}

/// Timed statuses, decremented once per turn by `turn::process`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimedStatuses {
    pub sleep: u16,
    pub fear: u16,
    pub confused: u16,
    pub stunned: u16,
    pub blind: u16,
    pub paralyzed: u16,
    pub fast: u16,
    pub slow: u16,
}

impl TimedStatuses {
    pub const fn is_asleep(&self) -> bool {
        self.sleep > 0
    }

    pub const fn is_afraid(&self) -> bool {
        self.fear > 0
    }

    pub const fn is_confused(&self) -> bool {
        self.confused > 0
    }

    pub const fn is_stunned(&self) -> bool {
        self.stunned > 0
    }

    pub const fn is_paralyzed(&self) -> bool {
        self.paralyzed > 0
    }
}

/// One monster instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub race: RaceId,

    pub fx: i32,
    pub fy: i32,

    pub hp: i32,
    pub hp_max: i32,

    /// Chebyshev distance to the player, refreshed once per turn by the
    /// scheduler before any component reads it.
    pub cdis: i32,

    /// Energy accumulator; a monster acts once it reaches 100 and loses
    /// 100 for each action, scaled by `speed`.
    pub energy: i32,
    pub speed: SpeedState,

    pub timed: TimedStatuses,
    pub mflag: MonsterMFlags,
    pub smart: SmartFlags,

    /// Player-object flags this (`SMART`) monster has learned about,
    /// pruning future spell choices that flag would block
    /// (`unset_spells`). Occasionally wiped and relearned.
    pub known_pflags: PlayerFlags,

    /// True until the monster has taken a voluntary action the player
    /// could plausibly notice (`become_aware` in the original).
    pub unaware: bool,

    /// How many times this monster has multiplied this level.
    pub num_repro: u16,

    pub held: Vec<Object>,
}

impl Monster {
    pub fn new(id: MonsterId, race: RaceId, fx: i32, fy: i32, hp_max: i32) -> Self {
        Self {
            id,
            race,
            fx,
            fy,
            hp: hp_max,
            hp_max,
            cdis: i32::MAX,
            energy: 0,
            speed: SpeedState::Normal,
            timed: TimedStatuses::default(),
            mflag: MonsterMFlags::empty(),
            smart: SmartFlags::empty(),
            known_pflags: PlayerFlags::empty(),
            unaware: true,
            num_repro: 0,
            held: Vec::new(),
        }
    }

    pub const fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn can_act(&self) -> bool {
        !self.timed.is_paralyzed() && !self.timed.is_asleep()
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }

    pub fn distance_sq(&self, x: i32, y: i32) -> i32 {
        let dx = self.fx - x;
        let dy = self.fy - y;
        dx * dx + dy * dy
    }

    pub fn is_adjacent(&self, x: i32, y: i32) -> bool {
        crate::geometry::is_adjacent(self.fx, self.fy, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_monster_is_asleep_by_default_until_woken() {
        let m = Monster::new(MonsterId(1), RaceId(1), 5, 5, 10);
        assert!(!m.is_dead());
        assert!(m.can_act());
        assert!(m.unaware);
    }

    #[test]
    fn paralysis_and_sleep_block_action() {
        let mut m = Monster::new(MonsterId(1), RaceId(1), 0, 0, 10);
        m.timed.paralyzed = 3;
        assert!(!m.can_act());
        m.timed.paralyzed = 0;
        m.timed.sleep = 1;
        assert!(!m.can_act());
    }
}

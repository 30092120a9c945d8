//! Monster race templates: the immutable data shared by every instance
//! of a given kind of monster.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::consts::MONSTER_BLOW_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RaceId(pub u16);

bitflags! {
    /// Behavioural flags carried on the race template (subset of
    /// Angband's `RF_*` relevant to turn processing).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RaceFlags: u32 {
        const UNIQUE      = 1 << 0;
        const STUPID      = 1 << 1;
        const SMART       = 1 << 2;
        const PASS_WALL   = 1 << 3;
        const KILL_WALL   = 1 << 4;
        const NEVER_MOVE  = 1 << 5;
        const MULTIPLY    = 1 << 6;
        const EVIL        = 1 << 7;
        const UNDEAD      = 1 << 8;
        const DEMON       = 1 << 9;
        const ANIMAL      = 1 << 10;
        /// Pack behaviour: hides near, and surrounds, the player in a group.
        const GROUP_AI    = 1 << 11;
        const TAKE_ITEM   = 1 << 12;
        const OPEN_DOOR   = 1 << 13;
        const BASH_DOOR   = 1 << 14;
        const NEVER_BLOW  = 1 << 15;
        const KILL_ITEM   = 1 << 16;
        const KILL_BODY   = 1 << 17;
        const MOVE_BODY   = 1 << 18;
        const RAND_25     = 1 << 19;
        const RAND_50     = 1 << 20;
    }
}

impl Serialize for RaceFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RaceFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(RaceFlags::from_bits_truncate(u32::deserialize(deserializer)?))
    }
}

bitflags! {
    /// What *kind* of spell an id is, for filter/cast-decision purposes.
    /// The concrete effect of casting it (damage, summon contents, ...)
    /// is the spell-effect system's job, not this engine's.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpellClass: u32 {
        const BOLT       = 1 << 0;
        const BALL       = 1 << 1;
        const SUMMON     = 1 << 2;
        const HASTE      = 1 << 3;
        const HEAL       = 1 << 4;
        const TELE_TO    = 1 << 5;
        const ANNOY      = 1 << 6;
        const ESCAPE     = 1 << 7;
        const TACTIC     = 1 << 8;
        const DRAIN_MANA = 1 << 9;
        /// Never fails, never learned-resisted the way cast spells are.
        const INNATE     = 1 << 10;

        const PROJECTABLE = Self::BOLT.bits() | Self::BALL.bits();
        /// Classes left after a desperation override (`SMART` + low hp).
        const DESPERATION = Self::HASTE.bits()
            | Self::ANNOY.bits()
            | Self::ESCAPE.bits()
            | Self::HEAL.bits()
            | Self::TACTIC.bits()
            | Self::SUMMON.bits();
    }
}

impl Serialize for SpellClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpellClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(SpellClass::from_bits_truncate(u32::deserialize(deserializer)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellId(pub u16);

/// One entry in a race's spellbook: an id the host resolves to an
/// effect, tagged with the class(es) this engine needs to reason about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDef {
    pub id: SpellId,
    pub class: SpellClass,
}

impl SpellDef {
    pub const fn is_innate(&self) -> bool {
        self.class.contains(SpellClass::INNATE)
    }
}

/// How a blow is delivered (subset of Angband's `RBM_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlowMethod {
    #[default]
    Hit,
    Touch,
    Bite,
    Claw,
    Sting,
    Crush,
    Engulf,
    Gaze,
    Kick,
    Butt,
}

impl BlowMethod {
    /// Can this method cause a cut, per Angband's `list-blow-methods.h`
    /// (`monster_blow_method_cut`)?
    pub const fn cuts(self) -> bool {
        matches!(self, BlowMethod::Bite | BlowMethod::Claw | BlowMethod::Hit)
    }

    /// Can this method cause a stun (`monster_blow_method_stun`)?
    pub const fn stuns(self) -> bool {
        matches!(self, BlowMethod::Crush | BlowMethod::Kick | BlowMethod::Butt)
    }

    /// Does a miss from this method produce a "misses you" message
    /// (`monster_blow_method_miss`)? Every method that makes physical
    /// contact does; pure spell-like gazes don't.
    pub const fn has_miss_message(self) -> bool {
        !matches!(self, BlowMethod::Gaze)
    }

    /// Does this method do physical damage at all, for the purposes of
    /// the elemental-attack armor bonus (`monster_blow_method_physical`)?
    /// `Engulf`/`Gaze` carry no physical component of their own.
    pub const fn is_physical(self) -> bool {
        !matches!(self, BlowMethod::Engulf | BlowMethod::Gaze)
    }
}

/// What a blow does on a hit (`RBE_*`), dispatched through a lookup
/// table rather than a chain of `if`s — see `combat::blow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlowEffect {
    #[default]
    None,
    Hurt,
    Poison,
    Disenchant,
    DrainCharges,
    EatGold,
    EatItem,
    EatFood,
    EatLight,
    Acid,
    Elec,
    Fire,
    Cold,
    Blind,
    Confuse,
    Terrify,
    Paralyze,
    LoseStr,
    LoseInt,
    LoseWis,
    LoseDex,
    LoseCon,
    LoseAll,
    Shatter,
    Exp10,
    Exp20,
    Exp40,
    Exp80,
    Hallucination,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Blow {
    pub method: BlowMethod,
    pub effect: BlowEffect,
    pub dice: u8,
    pub sides: u8,
}

impl Blow {
    pub const NONE: Blow = Blow {
        method: BlowMethod::Hit,
        effect: BlowEffect::None,
        dice: 0,
        sides: 0,
    };

    pub const fn is_active(&self) -> bool {
        !matches!(self.method, BlowMethod::Hit) || self.dice > 0
    }
}

/// The immutable template shared by every monster of one kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    pub level: i32,
    pub speed: i32,
    pub armor_class: i32,
    pub mexp: u64,
    pub flags: RaceFlags,
    pub spells: Vec<SpellDef>,
    pub freq_innate: u32,
    pub freq_spell: u32,
    pub blows: [Blow; MONSTER_BLOW_MAX],
    /// Radius used by `near_permwall`/flow-following to scale flow cost
    /// tolerance (Angband's `aaf`).
    pub aaf: i32,
}

impl Race {
    pub const fn is_stupid(&self) -> bool {
        self.flags.contains(RaceFlags::STUPID)
    }

    pub const fn is_smart(&self) -> bool {
        self.flags.contains(RaceFlags::SMART)
    }

    pub const fn passes_walls(&self) -> bool {
        self.flags.contains(RaceFlags::PASS_WALL) || self.flags.contains(RaceFlags::KILL_WALL)
    }

    pub const fn never_moves(&self) -> bool {
        self.flags.contains(RaceFlags::NEVER_MOVE)
    }

    pub const fn is_group_ai(&self) -> bool {
        self.flags.contains(RaceFlags::GROUP_AI)
    }

    pub const fn never_blows(&self) -> bool {
        self.flags.contains(RaceFlags::NEVER_BLOW)
    }

    pub const fn eats_walls(&self) -> bool {
        self.flags.contains(RaceFlags::KILL_WALL)
    }
}

//! Accumulated player knowledge about a race, learned turn by turn.
//!
//! Every counter here saturates instead of wrapping or overflowing,
//! matching Angband's `l_ptr->field++` idiom where lore counters are
//! unsigned and clamped at their type's max rather than checked.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::race::RaceId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lore {
    pub sightings: u16,
    pub deaths: u16,
    pub wakes: u8,
    pub ignores: u8,
    pub spell_casts: u16,
    pub blows_seen: [u8; crate::consts::MONSTER_BLOW_MAX],
}

impl Lore {
    pub fn record_sighting(&mut self) {
        self.sightings = self.sightings.saturating_add(1);
    }

    pub fn record_death(&mut self) {
        self.deaths = self.deaths.saturating_add(1);
    }

    pub fn record_wake(&mut self) {
        self.wakes = self.wakes.saturating_add(1);
    }

    pub fn record_ignore(&mut self) {
        self.ignores = self.ignores.saturating_add(1);
    }

    pub fn record_spell_cast(&mut self) {
        self.spell_casts = self.spell_casts.saturating_add(1);
    }

    /// A blow is "well known" once it's been observed enough times,
    /// mirroring `blows[i] > 10` gating fuller lore display.
    pub fn record_blow(&mut self, index: usize) {
        if let Some(count) = self.blows_seen.get_mut(index) {
            *count = count.saturating_add(1);
        }
    }

    pub fn blow_well_known(&self, index: usize) -> bool {
        self.blows_seen.get(index).copied().unwrap_or(0) > 10
    }
}

/// Per-race lore, keyed by race id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoreTable {
    entries: HashMap<RaceId, Lore>,
}

impl LoreTable {
    pub fn entry(&mut self, race: RaceId) -> &mut Lore {
        self.entries.entry(race).or_default()
    }

    pub fn get(&self, race: RaceId) -> Option<&Lore> {
        self.entries.get(&race)
    }
}

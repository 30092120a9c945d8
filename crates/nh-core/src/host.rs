//! The external-collaborator seam (spec.md §6 "services consumed").
//!
//! The engine owns no global state: everything it cannot decide on its
//! own — casting a spell's actual effect, moving an item between
//! inventories, announcing a message, teleporting a monster to a free
//! cell — goes through this trait instead of a process-wide singleton.
//! Production wires a concrete host into the rest of the game; tests
//! use `RecordingHost` to assert on what the engine asked for.

use crate::cave::Cave;
use crate::monster::{Monster, MonsterId};
use crate::object::Object;
use crate::player::PlayerFlags;
use crate::race::{RaceId, SpellClass, SpellId};
use crate::rng::GameRng;

/// A player stat a drain-class blow can damage (`do_dec_stat`'s `A_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Str,
    Int,
    Wis,
    Dex,
    Con,
}

/// The element an elemental blow carries (`GF_*` in `melee_effect_elemental`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Acid,
    Elec,
    Fire,
    Cold,
    Poison,
}

/// Everything the turn engine needs from the rest of the game but does
/// not implement itself.
pub trait GameHost {
    /// Resolve and apply a spell's actual effect. The engine has already
    /// decided *that* this spell is being cast; this is where it decides
    /// *what happens* (damage, summon contents, status change on the
    /// player, etc). `caster` must still be alive in `cave`'s occupancy
    /// table; the host may mutate `cave`, the caster, or external player
    /// state freely.
    fn cast_spell(&mut self, cave: &mut Cave, caster: &mut Monster, spell: SpellId, rng: &mut GameRng);

    /// Find a random cell at least `min_distance` from the monster's
    /// current position and place it there (the `blinked` teleport used
    /// after a shatter/steal blow). Returns false if none was found.
    fn teleport_away(&mut self, cave: &mut Cave, monster: &mut Monster, min_distance: i32, rng: &mut GameRng) -> bool;

    /// Announce a message the player would see (hit/miss/status text).
    fn message(&mut self, text: &str);

    /// Ring the "something went wrong" bell: an unknown spell class or
    /// blow effect was encountered. Never fatal, always logged.
    fn bell(&mut self, what: &str);

    /// A monster finished processing its turn (woke, moved, attacked,
    /// or was skipped). Used by scheduler fairness tests.
    fn on_monster_processed(&mut self, _id: MonsterId) {}

    /// Persist an observation into that race's lore (wake, cast, blow).
    fn record_lore(&mut self, _race: crate::race::RaceId, _event: LoreEvent) {}

    /// What race is the monster occupying this cell (the stepper's
    /// `KILL_BODY`/`MOVE_BODY` comparisons need the occupant's `mexp`,
    /// which lives on its race, but the engine holds no monster array
    /// of its own to look it up in).
    fn occupant_race(&self, _id: MonsterId) -> Option<crate::race::RaceId> {
        None
    }

    /// Remove a monster the stepper displaced via `KILL_BODY`.
    fn delete_monster(&mut self, _cave: &mut Cave, _id: MonsterId) {}

    /// Swap two monsters' positions (`MOVE_BODY`). `cave` occupancy for
    /// both cells has already been updated by the stepper; the host only
    /// needs to keep its own monster array's coordinates in sync.
    fn swap_monster_position(&mut self, _id: MonsterId, _to: (i32, i32)) {}

    /// Shake the dungeon in a radius around `(cx, cy)` (a shatter blow's
    /// earthquake). Terrain collapse and any resulting player relocation
    /// are entirely the host's concern; the engine reads `player.px`/
    /// `player.py` back afterwards to see whether it moved.
    fn earthquake(&mut self, _cave: &mut Cave, _player: &mut crate::player::Player, _cx: i32, _cy: i32, _radius: i32) {}

    /// Damage one stat point (`do_dec_stat`), unless the host's own
    /// sustain checks block it. Returns whether the drain was obvious.
    fn dec_stat(&mut self, _stat: Stat) -> bool {
        false
    }

    /// Apply experience drain past whatever the engine has already
    /// decided about `HOLD_LIFE` (the engine reads that flag itself off
    /// the narrow `Player` facade and only calls this once it knows the
    /// player doesn't fully resist). `base_drain` is the pre-scaling
    /// amount already rolled by the engine (`damroll(n, 6)`); the host
    /// owns the player's actual experience total and the
    /// `(exp / 100) * MON_DRAIN_LIFE` top-up and halving-on-`HOLD_LIFE`
    /// that `player_exp_lose` applies.
    fn drain_experience(&mut self, _base_drain: i64, _hold_life: bool, _rng: &mut GameRng) {}

    /// Disenchant a random worn/wielded item (`apply_disenchant`).
    /// Returns whether anything was visibly affected.
    fn apply_disenchant(&mut self) -> bool {
        false
    }

    /// Drain charges from a random wand/staff in the player's pack
    /// (`melee_effect_handler_drain_charges`). Returns the hp the
    /// attacker should heal, if a charged device was found.
    fn drain_charges(&mut self, _rlev: i32, _rng: &mut GameRng) -> Option<i32> {
        None
    }

    /// Steal a non-artifact item from the player's pack
    /// (`melee_effect_handler_eat_item`). Returns the stolen object so
    /// the engine can add it to the attacker's `held` list.
    fn steal_item(&mut self, _rng: &mut GameRng) -> Option<Object> {
        None
    }

    /// Resolve an elemental attack's damage against the player's
    /// resistances (`adjust_dam`/`check_for_resist`). The engine takes
    /// the larger of this and its own armor-adjusted physical damage.
    fn elemental_resist_damage(&mut self, _element: Element, raw_damage: i32, _rng: &mut GameRng) -> i32 {
        raw_damage
    }

    /// Is this object vulnerable to the slaying flags a `KILL_ITEM` race
    /// carries (`react_to_slay`)? Used by the stepper to decide whether
    /// an item such a monster steps onto is destroyed outright.
    fn vulnerable_to_slay(&self, _race: RaceId, _object: &Object) -> bool {
        false
    }

    /// Which spell classes a `SMART` monster's learned player-flags rule
    /// out (`unset_spells`'s per-flag table, keyed off what the monster
    /// has learned rather than the race itself). The engine only decides
    /// *that* `known_pflags` applies; this external, data-driven table is
    /// the host's concern.
    fn spell_classes_blocked_by(&self, _known: PlayerFlags) -> SpellClass {
        SpellClass::empty()
    }
}

/// Lore-worthy events the engine reports but does not itself store
/// (persistence format is the host's concern).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoreEvent {
    Sighted,
    Woke,
    Ignored,
    CastSpell,
    Blow(usize),
    Died,
}

/// A host that does nothing: useful as a default/no-op collaborator in
/// tests that only care about the engine's own decisions.
#[derive(Debug, Default)]
pub struct NullHost;

impl GameHost for NullHost {
    fn cast_spell(&mut self, _cave: &mut Cave, _caster: &mut Monster, _spell: SpellId, _rng: &mut GameRng) {}

    fn teleport_away(&mut self, _cave: &mut Cave, _monster: &mut Monster, _min_distance: i32, _rng: &mut GameRng) -> bool {
        false
    }

    fn message(&mut self, _text: &str) {}

    fn bell(&mut self, _what: &str) {}
}

/// A host that records every call, for assertions in unit tests.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub messages: Vec<String>,
    pub bells: Vec<String>,
    pub spells_cast: Vec<(MonsterId, SpellId)>,
    pub teleports: Vec<MonsterId>,
    pub processed: Vec<MonsterId>,
    pub lore_events: Vec<(crate::race::RaceId, LoreEvent)>,
    /// Test-only stand-in for "the rest of the monster array": lets
    /// stepper tests exercise `KILL_BODY`/`MOVE_BODY` without a real
    /// monster table.
    pub occupant_races: std::collections::HashMap<MonsterId, crate::race::RaceId>,
    pub deleted: Vec<MonsterId>,
    pub swapped: Vec<(MonsterId, (i32, i32))>,
    pub quakes: Vec<(i32, i32, i32)>,
    /// Test knob: where a simulated earthquake relocates the player to,
    /// if anywhere. `apply_effect`'s Shatter handler reads the player's
    /// position back after calling `earthquake`, so tests drive this
    /// through the host rather than through a return value.
    pub quake_moves_player_to: Option<(i32, i32)>,

    pub dec_stats: Vec<Stat>,
    pub experience_drains: Vec<(i64, bool)>,
    pub disenchants: u32,
    /// Test knob: what `drain_charges` reports back as a heal amount.
    pub charge_drain_heal: Option<i32>,
    pub charges_drained: Vec<i32>,
    /// Test knob: the object `steal_item` hands back, if any.
    pub steal_item_result: Option<Object>,
    pub items_stolen: u32,
    pub elemental_hits: Vec<(Element, i32)>,
    /// Test knob: what `vulnerable_to_slay` answers.
    pub vulnerable_slay: bool,
    /// Test knob: what `spell_classes_blocked_by` answers.
    pub blocked_spell_classes: SpellClass,
}

impl GameHost for RecordingHost {
    fn cast_spell(&mut self, _cave: &mut Cave, caster: &mut Monster, spell: SpellId, _rng: &mut GameRng) {
        self.spells_cast.push((caster.id, spell));
    }

    fn teleport_away(&mut self, cave: &mut Cave, monster: &mut Monster, _min_distance: i32, rng: &mut GameRng) -> bool {
        self.teleports.push(monster.id);
        // Best-effort: pick the first empty cell found by scanning the
        // cave, which is adequate for a recording test double.
        for y in 0..cave.height() as i32 {
            for x in 0..cave.width() as i32 {
                if cave.is_empty_cell(x, y) {
                    let _ = rng.rn2(1); // keep RNG consumption parity with real hosts
                    monster.fx = x;
                    monster.fy = y;
                    return true;
                }
            }
        }
        false
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn bell(&mut self, what: &str) {
        self.bells.push(what.to_string());
    }

    fn on_monster_processed(&mut self, id: MonsterId) {
        self.processed.push(id);
    }

    fn record_lore(&mut self, race: crate::race::RaceId, event: LoreEvent) {
        self.lore_events.push((race, event));
    }

    fn occupant_race(&self, id: MonsterId) -> Option<crate::race::RaceId> {
        self.occupant_races.get(&id).copied()
    }

    fn delete_monster(&mut self, _cave: &mut Cave, id: MonsterId) {
        self.deleted.push(id);
    }

    fn swap_monster_position(&mut self, id: MonsterId, to: (i32, i32)) {
        self.swapped.push((id, to));
    }

    fn earthquake(&mut self, _cave: &mut Cave, player: &mut crate::player::Player, cx: i32, cy: i32, radius: i32) {
        self.quakes.push((cx, cy, radius));
        if let Some((x, y)) = self.quake_moves_player_to {
            player.px = x;
            player.py = y;
        }
    }

    fn dec_stat(&mut self, stat: Stat) -> bool {
        self.dec_stats.push(stat);
        true
    }

    fn drain_experience(&mut self, base_drain: i64, hold_life: bool, _rng: &mut GameRng) {
        self.experience_drains.push((base_drain, hold_life));
    }

    fn apply_disenchant(&mut self) -> bool {
        self.disenchants += 1;
        true
    }

    fn drain_charges(&mut self, rlev: i32, _rng: &mut GameRng) -> Option<i32> {
        self.charges_drained.push(rlev);
        self.charge_drain_heal
    }

    fn steal_item(&mut self, _rng: &mut GameRng) -> Option<Object> {
        let stolen = self.steal_item_result.take();
        if stolen.is_some() {
            self.items_stolen += 1;
        }
        stolen
    }

    fn elemental_resist_damage(&mut self, element: Element, raw_damage: i32, _rng: &mut GameRng) -> i32 {
        self.elemental_hits.push((element, raw_damage));
        raw_damage
    }

    fn vulnerable_to_slay(&self, _race: RaceId, _object: &Object) -> bool {
        self.vulnerable_slay
    }

    fn spell_classes_blocked_by(&self, _known: PlayerFlags) -> SpellClass {
        self.blocked_spell_classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::RaceId;

    #[test]
    fn recording_host_captures_messages_and_bells() {
        let mut host = RecordingHost::default();
        host.message("The orc hits you.");
        host.bell("unknown blow effect");
        host.record_lore(RaceId(1), LoreEvent::Woke);
        assert_eq!(host.messages.len(), 1);
        assert_eq!(host.bells.len(), 1);
        assert_eq!(host.lore_events.len(), 1);
    }
}

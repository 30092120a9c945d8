//! Strips spells that would be a wasted turn before one is ever chosen.
//!
//! Grounded on Angband's `remove_bad_spells`/`summon_possible`/
//! `clean_shot` (`original_source/src/monster/melee2.c` lines 66-157).

use crate::cave::Cave;
use crate::geometry::{dist2, line_of_sight};
use crate::host::GameHost;
use crate::monster::Monster;
use crate::race::{SpellClass, SpellDef};

/// Remove spells that are pointless given the monster's current state
/// and what it has learned about the player. `hide_drain_mana` is the
/// resolved (already-rolled) answer to rule 6's 50%/100% IMM_MANA
/// check — `remove_bad_spells` itself stays a pure function of its
/// arguments so repeated filtering is idempotent; the caller
/// (`cast_decision`) is where the dice get rolled.
pub fn remove_bad_spells(
    spells: &[SpellDef],
    monster: &Monster,
    cdis: i32,
    hide_drain_mana: bool,
    host: &dyn GameHost,
) -> Vec<SpellDef> {
    let learned_block = host.spell_classes_blocked_by(monster.known_pflags);
    spells
        .iter()
        .copied()
        .filter(|s| {
            if s.class.contains(SpellClass::HEAL) && monster.hp >= monster.hp_max {
                return false;
            }
            if s.class.contains(SpellClass::HASTE) && monster.timed.fast > 10 {
                return false;
            }
            if s.class.contains(SpellClass::TELE_TO) && cdis <= 1 {
                return false;
            }
            if s.class.contains(SpellClass::DRAIN_MANA) && hide_drain_mana {
                return false;
            }
            if s.class.intersects(learned_block) {
                return false;
            }
            true
        })
        .collect()
}

/// Would a bolt/ball reach the player cleanly from `(fx, fy)`?
pub fn clean_shot(cave: &Cave, fx: i32, fy: i32, tx: i32, ty: i32) -> bool {
    line_of_sight(fx, fy, tx, ty, |x, y| cave.blocks_sight(x, y))
}

/// Is there a cell within a radius-2 circle of `(fx, fy)` where a
/// summon could land: empty, unwarded, and in the caster's view?
pub fn summon_possible(cave: &Cave, fx: i32, fy: i32) -> bool {
    for dy in -2..=2 {
        for dx in -2..=2 {
            if dist2(0, 0, dx, dy) > 4 {
                continue;
            }
            let x = fx + dx;
            let y = fy + dy;
            if !cave.in_bounds(x, y) {
                continue;
            }
            if cave.is_empty_cell(x, y)
                && !cave.is_warded(x, y)
                && line_of_sight(fx, fy, x, y, |bx, by| cave.blocks_sight(bx, by))
            {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use crate::monster::MonsterId;
    use crate::race::{RaceId, SpellId};

    fn spell(class: SpellClass) -> SpellDef {
        SpellDef { id: SpellId(1), class }
    }

    #[test]
    fn heal_is_pruned_at_full_health() {
        let mut m = Monster::new(MonsterId(1), RaceId(1), 0, 0, 20);
        m.hp = 20;
        let spells = vec![spell(SpellClass::HEAL)];
        let host = NullHost;
        assert!(remove_bad_spells(&spells, &m, 5, false, &host).is_empty());
        m.hp = 5;
        assert_eq!(remove_bad_spells(&spells, &m, 5, false, &host).len(), 1);
    }

    #[test]
    fn teleport_to_is_pruned_when_adjacent() {
        let m = Monster::new(MonsterId(1), RaceId(1), 0, 0, 20);
        let spells = vec![spell(SpellClass::TELE_TO)];
        let host = NullHost;
        assert!(remove_bad_spells(&spells, &m, 1, false, &host).is_empty());
        assert_eq!(remove_bad_spells(&spells, &m, 2, false, &host).len(), 1);
    }

    #[test]
    fn drain_mana_pruned_when_hidden() {
        let m = Monster::new(MonsterId(1), RaceId(1), 0, 0, 20);
        let spells = vec![spell(SpellClass::DRAIN_MANA)];
        let host = NullHost;
        assert_eq!(remove_bad_spells(&spells, &m, 5, false, &host).len(), 1);
        assert!(remove_bad_spells(&spells, &m, 5, true, &host).is_empty());
    }

    #[test]
    fn spells_the_host_says_are_learned_blocked_are_pruned() {
        let m = Monster::new(MonsterId(1), RaceId(1), 0, 0, 20);
        let spells = vec![spell(SpellClass::BOLT)];
        let mut host = crate::host::RecordingHost::default();
        host.blocked_spell_classes = SpellClass::BOLT;
        assert!(remove_bad_spells(&spells, &m, 5, false, &host).is_empty());
    }

    #[test]
    fn summon_possible_blocked_by_full_footprint() {
        let mut cave = Cave::new(7, 7).unwrap();
        // Wall off everything except the caster's own cell.
        for y in 0..7 {
            for x in 0..7 {
                if (x, y) != (3, 3) {
                    cave.set_feature(x, y, crate::cave::Feature::Wall).unwrap();
                }
            }
        }
        assert!(!summon_possible(&cave, 3, 3));
    }

    #[test]
    fn summon_possible_true_with_open_floor() {
        let cave = Cave::new(7, 7).unwrap();
        assert!(summon_possible(&cave, 3, 3));
    }

    proptest::proptest! {
        #[test]
        fn filter_is_idempotent(
            bits in proptest::prelude::any::<u32>(),
            hp in 0i32..50,
            hp_max in 1i32..50,
            fast in 0u16..200,
            cdis in 0i32..20,
            hide_drain_mana in proptest::prelude::any::<bool>(),
        ) {
            let mut m = Monster::new(MonsterId(1), RaceId(1), 0, 0, hp_max);
            m.hp = hp.min(hp_max);
            m.timed.fast = fast;
            let spells = vec![spell(SpellClass::from_bits_truncate(bits))];
            let host = NullHost;
            let once = remove_bad_spells(&spells, &m, cdis, hide_drain_mana, &host);
            let twice = remove_bad_spells(&once, &m, cdis, hide_drain_mana, &host);
            proptest::prop_assert_eq!(once, twice);
        }
    }
}

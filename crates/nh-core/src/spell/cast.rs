//! Deciding whether a monster casts a spell this turn, and which one.
//!
//! Grounded on `choose_attack_spell`/`make_attack_spell`
//! (`original_source/src/monster/melee2.c` lines 159-382).

use crate::cave::Cave;
use crate::consts::MAX_RANGE;
use crate::host::GameHost;
use crate::monster::{Monster, MonsterMFlags, SmartFlags};
use crate::player::{Player, PlayerFlags};
use crate::race::{Race, SpellClass, SpellDef, SpellId};
use crate::rng::GameRng;

use super::filter::{clean_shot, remove_bad_spells, summon_possible};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOutcome {
    /// The monster never attempted to cast (asleep, confused, chance
    /// gate failed, or nothing castable survived filtering).
    NoAttempt,
    /// It tried and the spell fizzled (failrate roll).
    Failed,
    /// It cast `0` successfully. Haste is applied inline by the engine;
    /// every other spell's actual effect is the host's job.
    Cast(SpellId),
}

/// Uniform pick among the surviving candidates (`choose_attack_spell`).
pub fn choose_attack_spell(candidates: &[SpellDef], rng: &mut GameRng) -> Option<SpellDef> {
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.randint0(candidates.len() as u32) as usize;
    Some(candidates[idx])
}

/// The full per-turn cast decision gate. `monster` is `&mut` only to
/// apply rule 5's occasional forgetting of what's been learned about
/// the player (`known_pflags`); nothing else here mutates it.
pub fn cast_decision(
    monster: &mut Monster,
    race: &Race,
    player: &Player,
    cave: &Cave,
    rng: &mut GameRng,
    host: &dyn GameHost,
) -> CastOutcome {
    if monster.unaware
        || monster.timed.is_confused()
        || monster.timed.is_asleep()
        || monster.mflag.contains(MonsterMFlags::NICE)
    {
        return CastOutcome::NoAttempt;
    }
    if race.spells.is_empty() {
        return CastOutcome::NoAttempt;
    }

    let chance = (race.freq_innate + race.freq_spell) / 2;
    if rng.randint0(100) >= chance {
        return CastOutcome::NoAttempt;
    }

    if monster.cdis > MAX_RANGE {
        return CastOutcome::NoAttempt;
    }

    // Rule 5: a SMART monster occasionally forgets what it has learned
    // about the player's resistances and has to relearn them.
    if rng.percent(1) {
        monster.known_pflags = PlayerFlags::empty();
    }

    let candidates = if race.is_stupid() {
        // Rule 1: STUPID races skip every filtering step below and pick
        // uniformly from everything they know.
        race.spells.clone()
    } else {
        // Desperation: a smart, badly wounded monster restricts itself to
        // escape/support spells instead of attacking.
        let desperate = race.is_smart() && monster.hp * 10 < monster.hp_max && rng.percent(50);

        // Rule 6: IMM_MANA hides DRAIN_MANA half the time, always for a
        // SMART race.
        let hide_drain_mana =
            monster.smart.contains(SmartFlags::IMM_MANA) && (race.is_smart() || rng.percent(50));

        let mut candidates =
            remove_bad_spells(&race.spells, monster, monster.cdis, hide_drain_mana, host);
        if desperate {
            candidates.retain(|s| s.class.intersects(SpellClass::DESPERATION));
        }
        candidates.retain(|s| {
            if s.class.contains(SpellClass::BOLT) || s.class.contains(SpellClass::BALL) {
                clean_shot(cave, monster.fx, monster.fy, player.px, player.py)
            } else if s.class.contains(SpellClass::SUMMON) {
                summon_possible(cave, monster.fx, monster.fy)
            } else {
                true
            }
        });
        candidates
    };

    let Some(chosen) = choose_attack_spell(&candidates, rng) else {
        return CastOutcome::NoAttempt;
    };

    if !chosen.is_innate() {
        let mut failrate = 25 - (race.level + 3) / 4;
        if monster.timed.is_afraid() {
            failrate += 20;
        }
        if race.is_stupid() {
            failrate = 0;
        }
        if failrate > 0 && rng.randint0(100) < failrate as u32 {
            return CastOutcome::Failed;
        }
    }

    CastOutcome::Cast(chosen.id)
}

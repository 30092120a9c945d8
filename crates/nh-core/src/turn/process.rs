//! Per-monster process pipeline: sleep/status decay, reproduction,
//! spell attempt, move planning, and stepping.
//!
//! Grounded on `process_monster` (`original_source/src/monster/
//! melee2.c` lines 2546-3100).

use hashbrown::HashMap;

use crate::cave::Cave;
use crate::consts::{MAX_REPRO, MON_MULT_ADJ};
use crate::geometry::DDX_DDD;
use crate::host::{GameHost, LoreEvent};
use crate::monster::{Monster, MonsterId};
use crate::movement::{get_moves, MoveDecision};
use crate::player::Player;
use crate::race::{Race, RaceFlags, RaceId, SpellId};
use crate::rng::GameRng;
use crate::spell::cast_decision;
use crate::spell::CastOutcome;

use super::stepper::{try_direction, StepOutcome};

/// What a monster actually did with the turn it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterTurnOutcome {
    /// Not processed at all this scheduler pass (not enough energy, or
    /// didn't satisfy any wake condition).
    NotProcessed,
    /// Still asleep after the notice roll.
    SleptThrough,
    /// Woke up this turn; did not also act.
    Woke,
    /// Paralyzed or otherwise unable to act.
    CouldNotAct,
    /// Spent the turn attempting to reproduce (whether or not it succeeded).
    AttemptedReproduction,
    /// Still hidden/hasn't noticed the player yet; does nothing this turn.
    Hidden,
    /// Cast (or tried and failed to cast) a spell.
    Cast(CastOutcome),
    /// Moved to a new cell.
    Moved,
    /// Attacked the player in melee.
    Attacked,
    /// Tried every candidate direction and none worked.
    NoMove,
}

/// Run one monster's full process pass. `idx` indexes into `monsters`;
/// other monsters are read/written through `monsters` directly for the
/// `KILL_BODY`/`MOVE_BODY` occupant-swap cases the stepper needs.
#[allow(clippy::too_many_arguments)]
#[tracing::instrument(level = "debug", skip(monsters, races, cave, player, rng, host), fields(monster = ?monsters[idx].id))]
pub fn process_monster(
    idx: usize,
    monsters: &mut Vec<Monster>,
    races: &HashMap<RaceId, Race>,
    cave: &mut Cave,
    player: &mut Player,
    rng: &mut GameRng,
    host: &mut dyn GameHost,
) -> MonsterTurnOutcome {
    let race_id = monsters[idx].race;
    let Some(race) = races.get(&race_id).cloned() else {
        host.bell("unknown race id in process_monster");
        return MonsterTurnOutcome::NotProcessed;
    };

    // Sleep handling.
    if monsters[idx].timed.is_asleep() {
        if player.aggravates_monsters() {
            monsters[idx].timed.sleep = 0;
        } else {
            let notice = rng.randint0(1024) as u64;
            if notice.saturating_mul(notice).saturating_mul(notice) <= player.noise as u64 {
                let shave = (100 / monsters[idx].cdis.max(1)).max(1) as u16;
                monsters[idx].timed.sleep = monsters[idx].timed.sleep.saturating_sub(shave);
                if monsters[idx].timed.sleep == 0 {
                    tracing::debug!(monster = ?monsters[idx].id, "wakes up");
                    host.message("wakes up.");
                    host.record_lore(race_id, LoreEvent::Woke);
                    return MonsterTurnOutcome::Woke;
                }
            }
            return MonsterTurnOutcome::SleptThrough;
        }
    }

    if !monsters[idx].can_act() {
        return MonsterTurnOutcome::CouldNotAct;
    }

    decay_statuses(&mut monsters[idx], &race, rng);
    if monsters[idx].timed.is_stunned() {
        return MonsterTurnOutcome::CouldNotAct;
    }

    // Reproduction.
    if race.flags.contains(RaceFlags::MULTIPLY) && monsters[idx].num_repro < MAX_REPRO {
        let occupied = count_occupied_neighbours(cave, monsters[idx].fx, monsters[idx].fy);
        let chance = if occupied == 0 { 1 } else { 1.max((occupied as u32) * MON_MULT_ADJ) };
        if rng.one_in_(chance) {
            monsters[idx].num_repro += 1;
            return MonsterTurnOutcome::AttemptedReproduction;
        }
    }

    // A monster that hasn't become aware yet (e.g. still mimicking an
    // item) stays put rather than casting, moving, or attacking.
    if monsters[idx].unaware {
        return MonsterTurnOutcome::Hidden;
    }

    // Spell attempt.
    let outcome = cast_decision(&mut monsters[idx], &race, player, cave, rng, host);
    match outcome {
        CastOutcome::Cast(spell_id) => {
            apply_cast(&mut monsters[idx], cave, &race, spell_id, rng, host);
            return MonsterTurnOutcome::Cast(outcome);
        }
        CastOutcome::Failed => {
            host.message("tries to cast a spell, but fails.");
            return MonsterTurnOutcome::Cast(outcome);
        }
        CastOutcome::NoAttempt => {}
    }

    // Move determination.
    let stagger = monsters[idx].timed.is_confused() || roll_stagger(&race, rng);
    let mut acted = StepOutcome::Blocked;
    if stagger {
        for _ in 0..4 {
            let i = rng.randint0(8) as usize;
            let dx = DDX_DDD[i];
            let dy = crate::geometry::DDY_DDD[i];
            acted = try_direction(cave, &mut monsters[idx], &race, races, player, dx, dy, rng, host);
            if !matches!(acted, StepOutcome::Blocked) {
                break;
            }
        }
    } else {
        let decision = get_moves(cave, &monsters[idx], &race, player, rng);
        let delta = match decision {
            MoveDecision::Step(dx, dy) | MoveDecision::Flee(dx, dy) => Some((dx, dy)),
            MoveDecision::Stay => None,
        };
        if let Some((dx, dy)) = delta {
            acted = try_direction(cave, &mut monsters[idx], &race, races, player, dx, dy, rng, host);
        }
    }

    match acted {
        StepOutcome::Moved { .. } => {
            monsters[idx].unaware = false;
            MonsterTurnOutcome::Moved
        }
        StepOutcome::Attacked => MonsterTurnOutcome::Attacked,
        StepOutcome::DoorBashed | StepOutcome::DoorFumbled => MonsterTurnOutcome::Moved,
        StepOutcome::Blocked | StepOutcome::NeverMoves => MonsterTurnOutcome::NoMove,
    }
}

fn decay_statuses(monster: &mut Monster, race: &Race, rng: &mut GameRng) {
    let t = &mut monster.timed;
    if t.fast > 0 {
        t.fast -= 1;
    }
    if t.slow > 0 {
        t.slow -= 1;
    }
    if t.stunned > 0 {
        let save = rng.randint0(5000) as i32 <= race.level * race.level;
        if save {
            t.stunned = 0;
        } else {
            t.stunned -= 1;
        }
    }
    if t.confused > 0 {
        let dec = rng.randint1((race.level / 10 + 1).max(1) as u32) as u16;
        t.confused = t.confused.saturating_sub(dec);
    }
    if t.fear > 0 {
        let dec = rng.randint1((race.level / 10 + 1).max(1) as u32) as u16;
        t.fear = t.fear.saturating_sub(dec);
    }
}

fn count_occupied_neighbours(cave: &Cave, fx: i32, fy: i32) -> usize {
    (0..8)
        .filter(|&i| {
            let x = fx + DDX_DDD[i];
            let y = fy + crate::geometry::DDY_DDD[i];
            cave.occupant(x, y).is_some()
        })
        .count()
}

fn roll_stagger(race: &Race, rng: &mut GameRng) -> bool {
    let roll = rng.randint0(100);
    let rand25 = race.flags.contains(RaceFlags::RAND_25);
    let rand50 = race.flags.contains(RaceFlags::RAND_50);
    match roll {
        0..=24 => rand25 || rand50,
        25..=49 => rand50,
        50..=74 => rand25 && rand50,
        _ => false,
    }
}

fn apply_cast(
    monster: &mut Monster,
    cave: &mut Cave,
    race: &Race,
    spell_id: SpellId,
    rng: &mut GameRng,
    host: &mut dyn GameHost,
) {
    let is_haste = race
        .spells
        .iter()
        .find(|s| s.id == spell_id)
        .is_some_and(|s| s.class.contains(crate::race::SpellClass::HASTE));
    if is_haste {
        monster.timed.fast = monster.timed.fast.saturating_add(50);
    } else {
        host.cast_spell(cave, monster, spell_id, rng);
    }
    host.record_lore(race.id, LoreEvent::CastSpell);
}

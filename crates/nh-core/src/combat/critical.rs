//! To-hit resolution and critical-hit severity for monster blows.
//!
//! `check_hit` is a direct grounding of Angband's `check_hit()`
//! (`original_source/src/player-attack.c`, the same roll monster and
//! player attacks both use). `monster_critical` is a direct port of
//! `monster_critical()` (`original_source/src/monster/melee2.c:1274-1301`):
//! it does not scale damage, it only picks which cut/stun bucket
//! (`combat::blow`'s post-effect step) a blow lands in.

use crate::rng::GameRng;

/// Does an attack with the given `power` (spec-defined per-blow value,
/// typically `20 + 3 * blow_index`) and attacker `level` connect against
/// a defender with the given effective armor class?
pub fn check_hit(rng: &mut GameRng, power: i32, level: i32, ac: i32) -> bool {
    let chance = power + level * 3;
    if chance <= 0 {
        return false;
    }
    rng.randint1(chance as u32) as i32 >= (ac * 3) / 4
}

/// Critical-severity bucket for a blow that rolled `dam` out of a
/// possible `dice * sides`. `0` means "not a critical hit" (no cut/stun
/// bucket applies); `1..=6+` are increasingly severe buckets, ported
/// verbatim from the original's thresholds, including its "weak blows
/// rarely work" probabilistic floor and heavy-tailed super-charge loop.
pub fn monster_critical(dice: u32, sides: u32, dam: i32, rng: &mut GameRng) -> u32 {
    let total = (dice * sides) as i32;

    // Must do at least 95% of perfect.
    if dam < total * 19 / 20 {
        return 0;
    }

    // Weak blows rarely work.
    if dam < 20 && rng.randint0(100) as i32 >= dam {
        return 0;
    }

    let mut max = 0u32;

    // Perfect damage.
    if dam == total {
        max += 1;
    }

    // Super-charge.
    if dam >= 20 {
        while rng.randint0(100) < 2 {
            max += 1;
        }
    }

    if dam > 45 {
        6 + max
    } else if dam > 33 {
        5 + max
    } else if dam > 25 {
        4 + max
    } else if dam > 18 {
        3 + max
    } else if dam > 11 {
        2 + max
    } else {
        1 + max
    }
}

//! Flight decisions: whether a monster should run, and where to.
//!
//! Grounded on `mon_will_run`/`find_safety`/`get_fear_moves_aux`
//! (`original_source/src/monster/melee2.c` lines 399-672, 825-1064).

use crate::cave::Cave;
use crate::consts::{MAX_SIGHT, MONSTER_FLOW_DEPTH};
use crate::geometry::{cdis, dist2, in_sight_range, DDX_DDD, DDY_DDD};
use crate::monster::Monster;
use crate::player::Player;
use crate::race::Race;
use crate::rng::GameRng;

/// Should this monster decide to flee the player outright, independent
/// of its current fear timer?
pub fn mon_will_run(monster: &Monster, race: &Race, player: &Player) -> bool {
    let dis = cdis(monster.fx, monster.fy, player.px, player.py);
    if dis > MAX_SIGHT + 5 {
        return false;
    }
    if monster.timed.is_afraid() {
        return true;
    }
    if dis <= 5 {
        return false;
    }

    let m_lev = race.level + (monster.id.0 as i32 & 8) + 25;
    let p_val = (player.level * player.mhp) + (player.chp << 2);
    let m_val = (m_lev * monster.hp_max) + (monster.hp << 2);
    p_val * monster.hp_max > m_val * player.mhp
}

/// Expanding-ring search for a cell the player can't see and that's no
/// further "behind" the flow than the monster currently is.
pub fn find_safety(cave: &Cave, monster: &Monster, player: &Player) -> Option<(i32, i32)> {
    for d in 1..=10 {
        let mut best: Option<(i32, i32, i32)> = None; // x, y, gdis
        for (dx, dy) in crate::geometry::dist_offsets(d) {
            let x = monster.fx + dx;
            let y = monster.fy + dy;
            if !cave.in_bounds(x, y) || !cave.feature(x, y).is_passable() {
                continue;
            }
            if cave.when(x, y) < cave.when(player.px, player.py) {
                continue;
            }
            if cave.cost(x, y) > cave.cost(monster.fx, monster.fy).saturating_add(2 * d) {
                continue;
            }
            if in_sight_range(player.px, player.py, x, y)
                && crate::geometry::line_of_sight(player.px, player.py, x, y, |bx, by| cave.blocks_sight(bx, by))
            {
                continue;
            }
            let gdis = dist2(player.px, player.py, x, y);
            if best.is_none_or(|(_, _, bg)| gdis > bg) {
                best = Some((x, y, gdis));
            }
        }
        if let Some((x, y, _)) = best {
            return Some((x, y));
        }
    }
    None
}

/// Refine a flight target into a concrete direction by scoring each of
/// the 8 neighbours on freshness vs. cost.
pub fn get_fear_moves_aux(cave: &Cave, monster: &Monster) -> Option<(i32, i32)> {
    let mut best: Option<(i32, i32, i32)> = None; // dx, dy, score
    for i in 0..8 {
        let dx = DDX_DDD[i];
        let dy = DDY_DDD[i];
        let x = monster.fx + dx;
        let y = monster.fy + dy;
        if !cave.in_bounds(x, y) || !cave.feature(x, y).is_passable() {
            continue;
        }
        let cost = cave.cost(x, y);
        if cost >= MONSTER_FLOW_DEPTH {
            continue;
        }
        let dis = cdis(monster.fx, monster.fy, x, y);
        let score = (5000 / (dis + 3) - 500 / (cost + 1)).max(0);
        if best.is_none_or(|(_, _, bs)| score > bs) {
            best = Some((dx, dy, score));
        }
    }
    best.map(|(dx, dy, _)| (dx, dy))
}

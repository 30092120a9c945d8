//! Flow-field following: chase the player using the externally produced
//! `when`/`cost` fields rather than a direct line.
//!
//! Grounded on `near_permwall`/`get_moves_aux`/`monster_can_flow`
//! (`original_source/src/monster/melee2.c` lines 399-781).

use crate::cave::Cave;
use crate::consts::MONSTER_FLOW_DEPTH;
use crate::geometry::{DDX_DDD, DDY_DDD};
use crate::monster::Monster;
use crate::race::Race;
use crate::rng::GameRng;

/// Is this wall-passing monster close enough to indestructible rock
/// that following the flow field (instead of beelining) is worthwhile?
pub fn near_permwall(cave: &Cave, fx: i32, fy: i32, player_has_los: bool, rng: &mut GameRng) -> bool {
    if player_has_los {
        return false;
    }
    if rng.percent(5) {
        return true;
    }
    for dy in -2..=2 {
        for dx in -2..=2 {
            if cave.feature(fx + dx, fy + dy).is_permanent() {
                return true;
            }
        }
    }
    false
}

/// Is the flow at this cell fresh and cheap enough to trust?
pub fn monster_can_flow(cave: &Cave, race: &Race, fx: i32, fy: i32, px: i32, py: i32, small_range: bool) -> bool {
    let aaf_eff = if small_range { race.aaf / 2 } else { race.aaf };
    cave.when(fx, fy) == cave.when(px, py)
        && cave.cost(fx, fy) < MONSTER_FLOW_DEPTH
        && cave.cost(fx, fy) < aaf_eff
}

/// Pick the neighbour cell with the freshest, cheapest flow reading.
/// Returns `None` when there's no flow worth following (the caller
/// should fall back to a direct line toward the player instead).
pub fn get_moves_aux(
    cave: &Cave,
    monster: &Monster,
    race: &Race,
    player_has_los: bool,
    rng: &mut GameRng,
) -> Option<(i32, i32)> {
    let small_range = false;
    if race.passes_walls() && !near_permwall(cave, monster.fx, monster.fy, player_has_los, rng) {
        return None;
    }
    if cave.when(monster.fx, monster.fy) == 0 {
        return None;
    }
    if !monster_can_flow(cave, race, monster.fx, monster.fy, cave.player_x, cave.player_y, small_range) {
        return None;
    }
    if player_has_los {
        return None;
    }

    let mut best: Option<(i32, i32, u32, i32)> = None; // (dx, dy, when, cost)
    for i in (0..8).rev() {
        let dx = DDX_DDD[i];
        let dy = DDY_DDD[i];
        let x = monster.fx + dx;
        let y = monster.fy + dy;
        if !cave.in_bounds(x, y) || !cave.feature(x, y).is_passable() {
            continue;
        }
        let when = cave.when(x, y);
        let cost = cave.cost(x, y);
        let better = match best {
            None => true,
            Some((_, _, bw, bc)) => when > bw || (when == bw && cost < bc),
        };
        if better {
            best = Some((dx, dy, when, cost));
        }
    }
    best.map(|(dx, dy, _, _)| (dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::Feature;
    use crate::monster::MonsterId;
    use crate::race::{RaceFlags, RaceId};

    fn make_race() -> Race {
        Race {
            id: RaceId(1),
            name: "t".into(),
            level: 1,
            speed: 110,
            armor_class: 10,
            mexp: 1,
            flags: RaceFlags::empty(),
            spells: vec![],
            freq_innate: 0,
            freq_spell: 0,
            blows: [crate::race::Blow::NONE; crate::consts::MONSTER_BLOW_MAX],
            aaf: 20,
        }
    }

    #[test]
    fn no_flow_when_player_has_los() {
        let cave = Cave::new(5, 5).unwrap();
        let monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let race = make_race();
        let mut rng = GameRng::new(1);
        assert!(get_moves_aux(&cave, &monster, &race, true, &mut rng).is_none());
    }

    #[test]
    fn flow_prefers_freshest_neighbour() {
        let mut cave = Cave::new(5, 5).unwrap();
        cave.set_when(2, 2, 5).unwrap();
        cave.player_x = 4;
        cave.player_y = 4;
        cave.set_when(4, 4, 5).unwrap();
        cave.set_cost(2, 2, 3).unwrap();
        // The cell to the south-east should be the freshest.
        cave.set_when(3, 3, 5).unwrap();
        cave.set_cost(3, 3, 2).unwrap();
        let monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.aaf = 10;
        let mut rng = GameRng::new(1);
        let mv = get_moves_aux(&cave, &monster, &race, false, &mut rng);
        assert_eq!(mv, Some((1, 1)));
    }

    #[test]
    fn permwall_passer_skips_flow_far_from_rock() {
        let mut cave = Cave::new(9, 9).unwrap();
        cave.set_when(4, 4, 1).unwrap();
        let monster = Monster::new(MonsterId(1), RaceId(1), 4, 4, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::PASS_WALL);
        // No perm walls anywhere nearby and we force rng away from the
        // 5% override by checking the deterministic seed stays clear.
        let mut found_none = false;
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            if get_moves_aux(&cave, &monster, &race, false, &mut rng).is_none() {
                found_none = true;
                break;
            }
        }
        assert!(found_none);
        let _ = Feature::Floor;
    }
}

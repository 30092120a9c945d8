//! Orchestrates flow-following, flight, and hiding into a single move
//! decision, and performs the final direction-preference encoding.
//!
//! Grounded on `get_moves`/`find_hiding` (`original_source/src/monster/
//! melee2.c` lines 1065-1249, 1251-1387).

use crate::cave::Cave;
use crate::geometry::{cdis, dir_to_delta, dist2, line_of_sight, move_val, MOVE_DIR_TABLE};
use crate::monster::Monster;
use crate::player::Player;
use crate::race::{Race, RaceFlags};
use crate::rng::GameRng;

use super::fear::{find_safety, get_fear_moves_aux, mon_will_run};
use super::flow::get_moves_aux;

/// What a monster wants to do with its turn's movement budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDecision {
    /// Step toward `(dx, dy)`, one of the 8 neighbour offsets.
    Step(i32, i32),
    /// Flee toward `(dx, dy)`.
    Flee(i32, i32),
    /// Stay put this turn (no safe/useful move found).
    Stay,
}

/// Search an expanding ring for a cell out of the player's view but
/// still within earshot of where the monster last noticed them —
/// a monster "going to ground" rather than charging or fleeing.
pub fn find_hiding(cave: &Cave, monster: &Monster, player: &Player) -> Option<(i32, i32)> {
    for d in 1..=4 {
        let mut best: Option<(i32, i32, i32)> = None;
        for (dx, dy) in crate::geometry::dist_offsets(d) {
            let x = monster.fx + dx;
            let y = monster.fy + dy;
            if !cave.in_bounds(x, y) || !cave.feature(x, y).is_passable() {
                continue;
            }
            if cave.occupant(x, y).is_some() {
                continue;
            }
            if line_of_sight(player.px, player.py, x, y, |bx, by| cave.blocks_sight(bx, by)) {
                continue;
            }
            let gdis = dist2(monster.fx, monster.fy, x, y);
            if best.is_none_or(|(_, _, bd)| gdis < bd) {
                best = Some((x, y, gdis));
            }
        }
        if let Some((x, y, _)) = best {
            return Some((x, y));
        }
    }
    None
}

/// Translate a target cell into the caller's ranked direction preference
/// list, per `move_val`/`MOVE_DIR_TABLE`, then pick the first one that's
/// actually passable and unoccupied.
fn preferred_step(cave: &Cave, fx: i32, fy: i32, tx: i32, ty: i32) -> Option<(i32, i32)> {
    let dx = tx - fx;
    let dy = ty - fy;
    if dx == 0 && dy == 0 {
        return None;
    }
    let row = MOVE_DIR_TABLE[move_val(dx, dy)];
    for dir in row {
        let (sx, sy) = dir_to_delta(dir);
        let x = fx + sx;
        let y = fy + sy;
        if cave.in_bounds(x, y) && cave.feature(x, y).is_passable() && cave.occupant(x, y).is_none() {
            return Some((sx, sy));
        }
    }
    None
}

/// Full per-turn move decision: flee, hide, flow-follow, or beeline.
pub fn get_moves(
    cave: &Cave,
    monster: &Monster,
    race: &Race,
    player: &Player,
    rng: &mut GameRng,
) -> MoveDecision {
    if mon_will_run(monster, race, player) {
        if let Some((dx, dy)) = get_fear_moves_aux(cave, monster) {
            return MoveDecision::Flee(dx, dy);
        }
        if let Some((tx, ty)) = find_safety(cave, monster, player) {
            if let Some((dx, dy)) = preferred_step(cave, monster.fx, monster.fy, tx, ty) {
                return MoveDecision::Flee(dx, dy);
            }
        }
        return MoveDecision::Stay;
    }

    if race.is_group_ai()
        && !cave.player_has_los
        && cdis(monster.fx, monster.fy, player.px, player.py) > 3
    {
        if let Some((tx, ty)) = find_hiding(cave, monster, player) {
            if let Some((dx, dy)) = preferred_step(cave, monster.fx, monster.fy, tx, ty) {
                return MoveDecision::Step(dx, dy);
            }
        }
    }

    if let Some((dx, dy)) = get_moves_aux(cave, monster, race, cave.player_has_los, rng) {
        return MoveDecision::Step(dx, dy);
    }

    match preferred_step(cave, monster.fx, monster.fy, player.px, player.py) {
        Some((dx, dy)) => MoveDecision::Step(dx, dy),
        None => MoveDecision::Stay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::MonsterId;
    use crate::race::RaceId;

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

    fn make_player(px: i32, py: i32) -> Player {
        Player {
            px,
            py,
            level: 1,
            chp: 20,
            mhp: 20,
            ac: 10,
            to_a: 0,
            skill_save: 0,
            flags: crate::player::PlayerFlags::empty(),
            noise: 0,
            gold: 0,
        }
    }

    #[test]
    fn beelines_toward_player_with_no_flow_and_no_fear() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.player_has_los = true;
        let monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 20);
        let race = make_race();
        let player = make_player(8, 2);
        let mut rng = GameRng::new(1);
        let decision = get_moves(&cave, &monster, &race, &player, &mut rng);
        assert_eq!(decision, MoveDecision::Step(1, 0));
    }

    #[test]
    fn afraid_monster_flees_instead_of_approaching() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.player_has_los = true;
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 20);
        monster.timed.fear = 5;
        let race = make_race();
        let player = make_player(3, 2);
        let mut rng = GameRng::new(1);
        let decision = get_moves(&cave, &monster, &race, &player, &mut rng);
        assert!(matches!(decision, MoveDecision::Flee(_, _)));
    }

    #[test]
    fn preferred_step_skips_occupied_neighbour() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.set_occupant(6, 2, Some(MonsterId(2))).unwrap();
        let step = preferred_step(&cave, 5, 2, 8, 2);
        assert_ne!(step, None);
        assert_ne!(step, Some((1, 0)));
    }

    proptest::proptest! {
        #[test]
        fn get_moves_is_deterministic_for_a_fixed_rng_state(
            mx in 1i32..9,
            my in 1i32..9,
            px in 1i32..9,
            py in 1i32..9,
            seed in proptest::prelude::any::<u64>(),
            has_los in proptest::prelude::any::<bool>(),
        ) {
            let mut cave = Cave::new(10, 10).unwrap();
            cave.player_has_los = has_los;
            let monster = Monster::new(MonsterId(1), RaceId(1), mx, my, 20);
            let race = make_race();
            let player = make_player(px, py);

            let mut rng_a = GameRng::new(seed);
            let decision_a = get_moves(&cave, &monster, &race, &player, &mut rng_a);
            let mut rng_b = GameRng::new(seed);
            let decision_b = get_moves(&cave, &monster, &race, &player, &mut rng_b);
            proptest::prop_assert_eq!(decision_a, decision_b);
        }
    }
}

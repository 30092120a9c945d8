//! Terrain/occupant interaction while stepping one candidate direction.
//!
//! Grounded on `make_move`/`do_move` in `original_source/src/monster/
//! melee2.c` (lines ~1690-1950): walls, doors, glyphs, occupant swaps,
//! and the final "attack the player" terminal case.

use hashbrown::HashMap;

use crate::cave::{Cave, Feature};
use crate::consts::BREAK_GLYPH;
use crate::combat::attack_player_melee;
use crate::host::GameHost;
use crate::monster::Monster;
use crate::player::Player;
use crate::race::{Race, RaceFlags, RaceId};
use crate::rng::GameRng;

/// What happened when the stepper tried one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The monster moved to the given cell.
    Moved { to: (i32, i32) },
    /// It attacked the player in place instead of moving.
    Attacked,
    /// A door was bashed open (turn consumed, no move yet).
    DoorBashed,
    /// A door was fumbled with (turn consumed, no move).
    DoorFumbled,
    /// This direction was not viable; try the next one.
    Blocked,
    /// The race never moves; stop trying directions entirely.
    NeverMoves,
}

/// Try a single `(dx, dy)` candidate. The caller (the step loop in
/// `turn::process`) keeps calling this for `mm[0..4]` until something
/// other than `Blocked` comes back.
#[allow(clippy::too_many_arguments)]
pub fn try_direction(
    cave: &mut Cave,
    monster: &mut Monster,
    race: &Race,
    races: &HashMap<RaceId, Race>,
    player: &mut Player,
    dx: i32,
    dy: i32,
    rng: &mut GameRng,
    host: &mut dyn GameHost,
) -> StepOutcome {
    if race.never_moves() {
        return StepOutcome::NeverMoves;
    }

    let x = monster.fx + dx;
    let y = monster.fy + dy;

    if x == player.px && y == player.py {
        if race.never_blows() {
            return StepOutcome::Blocked;
        }
        attack_player_melee(cave, monster, race, player, rng, host);
        return StepOutcome::Attacked;
    }

    let feature = cave.feature(x, y);

    if feature.is_permanent() {
        return StepOutcome::Blocked;
    }

    if feature.is_wall() {
        if race.passes_walls() {
            return do_move(cave, monster, race, x, y, rng, host);
        }
        if race.eats_walls() {
            let _ = cave.set_feature(x, y, Feature::Floor);
            if cave.player_has_los {
                host.message("There is a grinding noise as rock gives way.");
            }
            return do_move(cave, monster, race, x, y, rng, host);
        }
        return StepOutcome::Blocked;
    }

    if feature.is_door() && matches!(feature, Feature::ClosedDoor | Feature::LockedDoor) {
        if race.flags.contains(RaceFlags::BASH_DOOR) && rng.one_in_(2) {
            let _ = cave.set_feature(x, y, Feature::BrokenDoor);
            host.message("There is a bursting sound.");
            return StepOutcome::DoorBashed;
        }
        if race.flags.intersects(RaceFlags::OPEN_DOOR | RaceFlags::BASH_DOOR) {
            if matches!(feature, Feature::LockedDoor) {
                let lock_power = 5;
                if rng.randint0((monster.hp / 10).max(1) as u32) as i32 > lock_power {
                    // Weakened, but still locked: no move this turn.
                }
            } else {
                let _ = cave.set_feature(x, y, Feature::OpenDoor);
            }
            return StepOutcome::DoorFumbled;
        }
        return StepOutcome::Blocked;
    }

    if cave.is_warded(x, y) {
        if rng.randint0(BREAK_GLYPH as u32) < race.level.max(0) as u32 {
            let _ = cave.set_warded(x, y, false);
        } else {
            return StepOutcome::Blocked;
        }
    }

    if let Some(occupant) = cave.occupant(x, y) {
        let occupant_mexp = host
            .occupant_race(occupant)
            .and_then(|rid| races.get(&rid))
            .map(|r| r.mexp)
            .unwrap_or(0);
        if occupant_mexp < race.mexp && race.flags.contains(RaceFlags::KILL_BODY) {
            host.delete_monster(cave, occupant);
            let _ = cave.set_occupant(x, y, None);
            return do_move(cave, monster, race, x, y, rng, host);
        }
        if occupant_mexp < race.mexp
            && race.flags.contains(RaceFlags::MOVE_BODY)
            && cave.feature(monster.fx, monster.fy).is_passable()
        {
            let from = (monster.fx, monster.fy);
            let _ = cave.set_occupant(from.0, from.1, Some(occupant));
            host.swap_monster_position(occupant, from);
            return do_move(cave, monster, race, x, y, rng, host);
        }
        return StepOutcome::Blocked;
    }

    if !feature.is_passable() {
        return StepOutcome::Blocked;
    }

    do_move(cave, monster, race, x, y, rng, host)
}

/// Step onto `(x, y)` and, if the race scavenges, pick up whatever is
/// lying there (`monster_pickup_object`,
/// `original_source/src/monster/melee2.c`'s move-onto-item tail).
/// Neither flag touches the floor at all. Artifacts are never carried
/// or destroyed. Otherwise: an item this race is vulnerable to
/// (`react_to_slay`) is destroyed if the race has `KILL_ITEM`, else
/// left untouched; everything else is carried off if the race has
/// `TAKE_ITEM`, else destroyed if it has `KILL_ITEM`.
fn do_move(
    cave: &mut Cave,
    monster: &mut Monster,
    race: &Race,
    x: i32,
    y: i32,
    rng: &mut GameRng,
    host: &mut dyn GameHost,
) -> StepOutcome {
    let _ = cave.set_occupant(monster.fx, monster.fy, None);
    let _ = cave.set_occupant(x, y, Some(monster.id));
    monster.fx = x;
    monster.fy = y;

    let takes = race.flags.contains(RaceFlags::TAKE_ITEM);
    let kills = race.flags.contains(RaceFlags::KILL_ITEM);
    if takes || kills {
        for obj in cave.take_objects(x, y) {
            if obj.artifact != 0 {
                let _ = cave.drop_object(x, y, obj);
                continue;
            }
            let vulnerable = host.vulnerable_to_slay(race.id, &obj);
            let _ = rng.rn2(1);
            if vulnerable {
                if kills {
                    continue; // destroyed, not carried
                }
                let _ = cave.drop_object(x, y, obj); // refuses pickup
            } else if takes {
                monster.held.push(obj);
            }
            // kills-only and not vulnerable: destroyed outright.
        }
    }

    StepOutcome::Moved { to: (x, y) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use crate::monster::MonsterId;
    use crate::race::RaceId;

    fn make_race() -> Race {
        Race {
            id: RaceId(1),
            name: "t".into(),
            level: 5,
            speed: 110,
            armor_class: 10,
            mexp: 10,
            flags: RaceFlags::empty(),
            spells: vec![],
            freq_innate: 0,
            freq_spell: 0,
            blows: [crate::race::Blow::NONE; crate::consts::MONSTER_BLOW_MAX],
            aaf: 20,
        }
    }

    fn make_player() -> Player {
        Player {
            px: 99,
            py: 99,
            level: 1,
            chp: 20,
            mhp: 20,
            ac: 10,
            to_a: 0,
            skill_save: 0,
            flags: crate::player::PlayerFlags::empty(),
            noise: 0,
            gold: 0,
            cut: 0,
            stun: 0,
        }
    }

    #[test]
    fn steps_onto_open_floor() {
        let mut cave = Cave::new(10, 10).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let race = make_race();
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        let outcome = try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert_eq!(outcome, StepOutcome::Moved { to: (3, 2) });
        assert_eq!(cave.occupant(3, 2), Some(MonsterId(1)));
        assert_eq!(cave.occupant(2, 2), None);
    }

    #[test]
    fn ordinary_monster_is_blocked_by_plain_wall() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.set_feature(3, 2, Feature::Wall).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let race = make_race();
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        let outcome = try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert_eq!(outcome, StepOutcome::Blocked);
    }

    #[test]
    fn wall_passer_steps_through_plain_wall() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.set_feature(3, 2, Feature::Wall).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::PASS_WALL);
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        let outcome = try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert_eq!(outcome, StepOutcome::Moved { to: (3, 2) });
    }

    #[test]
    fn never_blow_race_does_not_attack_the_player() {
        let mut cave = Cave::new(10, 10).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::NEVER_BLOW);
        let mut player = make_player();
        player.px = 3;
        player.py = 2;
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        let outcome = try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert_eq!(outcome, StepOutcome::Blocked);
    }

    #[test]
    fn bash_door_race_eventually_breaks_a_locked_door() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.set_feature(3, 2, Feature::LockedDoor).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 200);
        let mut race = make_race();
        race.flags.insert(RaceFlags::BASH_DOOR);
        let mut player = make_player();
        let mut rng = GameRng::new(3);
        let mut host = NullHost;
        let races = HashMap::new();

        let mut broke = false;
        for _ in 0..200 {
            let outcome =
                try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
            match outcome {
                StepOutcome::DoorBashed => {
                    broke = true;
                    break;
                }
                StepOutcome::DoorFumbled | StepOutcome::Blocked => continue,
                other => panic!("unexpected outcome while bashing a door: {other:?}"),
            }
        }
        assert!(broke, "a BASH_DOOR monster must eventually break a locked door open");
        assert_eq!(cave.feature(3, 2), Feature::BrokenDoor);
    }

    #[test]
    fn kill_body_deletes_weaker_occupant_and_steps_in() {
        let mut cave = Cave::new(10, 10).unwrap();
        let occupant_id = MonsterId(2);
        cave.set_occupant(3, 2, Some(occupant_id)).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::KILL_BODY);
        race.mexp = 100;
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = crate::host::RecordingHost::default();
        host.occupant_races.insert(occupant_id, RaceId(0));
        let races = HashMap::new();
        let outcome = try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert_eq!(outcome, StepOutcome::Moved { to: (3, 2) });
        assert_eq!(host.deleted, vec![occupant_id]);
    }

    #[test]
    fn plain_race_never_touches_items_underfoot() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.drop_object(3, 2, crate::object::Object::default()).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let race = make_race();
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert!(monster.held.is_empty());
        assert_eq!(cave.objects_at(3, 2).len(), 1, "an item a non-scavenging race steps onto stays on the floor");
    }

    #[test]
    fn take_item_race_picks_up_what_it_steps_onto() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.drop_object(3, 2, crate::object::Object::default()).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::TAKE_ITEM);
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert_eq!(monster.held.len(), 1);
        assert!(cave.objects_at(3, 2).is_empty());
    }

    #[test]
    fn take_item_race_refuses_an_item_it_is_vulnerable_to() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.drop_object(3, 2, crate::object::Object::default()).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::TAKE_ITEM);
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = crate::host::RecordingHost { vulnerable_slay: true, ..Default::default() };
        let races = HashMap::new();
        try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert!(monster.held.is_empty());
        assert_eq!(cave.objects_at(3, 2).len(), 1, "a vulnerable item is left on the floor, not carried");
    }

    #[test]
    fn kill_item_race_destroys_what_it_steps_onto() {
        let mut cave = Cave::new(10, 10).unwrap();
        cave.drop_object(3, 2, crate::object::Object::default()).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::KILL_ITEM);
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert!(monster.held.is_empty());
        assert!(cave.objects_at(3, 2).is_empty(), "KILL_ITEM destroys the item rather than leaving it behind");
    }

    #[test]
    fn artifacts_are_never_carried_or_destroyed() {
        let mut cave = Cave::new(10, 10).unwrap();
        let artifact = crate::object::Object { artifact: 1, ..Default::default() };
        cave.drop_object(3, 2, artifact).unwrap();
        let mut monster = Monster::new(MonsterId(1), RaceId(1), 2, 2, 10);
        let mut race = make_race();
        race.flags.insert(RaceFlags::TAKE_ITEM | RaceFlags::KILL_ITEM);
        let mut player = make_player();
        let mut rng = GameRng::new(1);
        let mut host = NullHost;
        let races = HashMap::new();
        try_direction(&mut cave, &mut monster, &race, &races, &mut player, 1, 0, &mut rng, &mut host);
        assert!(monster.held.is_empty());
        assert_eq!(cave.objects_at(3, 2).len(), 1, "an artifact is neither picked up nor destroyed");
    }
}

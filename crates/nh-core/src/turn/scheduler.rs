//! Energises monsters and dispatches those above the caller-supplied
//! minimum-energy threshold, high index to low.
//!
//! Grounded on `process_monsters` (`original_source/src/monster/
//! melee2.c` lines 3100-3212).

use hashbrown::HashMap;

use crate::cave::Cave;
use crate::consts::MONSTER_FLOW_DEPTH;
use crate::geometry::cdis;
use crate::host::GameHost;
use crate::monster::Monster;
use crate::player::Player;
use crate::race::{Race, RaceId};
use crate::rng::GameRng;

use super::process::{process_monster, MonsterTurnOutcome};

/// Summary of one `process_monsters` pass, in scheduling order (high
/// index to low, matching the original's save-index contract).
#[derive(Debug, Default)]
pub struct TurnReport {
    pub outcomes: Vec<(crate::monster::MonsterId, MonsterTurnOutcome)>,
}

fn should_process(cave: &Cave, monster: &Monster, race: &Race) -> bool {
    if monster.cdis <= race.aaf {
        return true;
    }
    if monster.hp < monster.hp_max {
        return true;
    }
    if cave.player_has_los {
        return true;
    }
    let on_flow = cave.when(monster.fx, monster.fy) == cave.when(cave.player_x, cave.player_y)
        && cave.cost(monster.fx, monster.fy) < MONSTER_FLOW_DEPTH
        && cave.cost(monster.fx, monster.fy) < race.aaf;
    on_flow
}

/// Run one scheduler pass over every monster currently in `monsters`.
/// Dead monsters (`hp <= 0`) are skipped but left in place; deleting
/// them is the caller's job, matching the "monster array is the
/// caller's, not the engine's" ownership split.
#[tracing::instrument(level = "debug", skip_all, fields(count = monsters.len(), minimum_energy))]
pub fn process_monsters(
    cave: &mut Cave,
    monsters: &mut Vec<Monster>,
    races: &HashMap<RaceId, Race>,
    player: &mut Player,
    minimum_energy: i32,
    rng: &mut GameRng,
    host: &mut dyn GameHost,
) -> TurnReport {
    let mut report = TurnReport::default();

    for idx in (0..monsters.len()).rev() {
        if monsters[idx].is_dead() {
            continue;
        }
        monsters[idx].cdis = cdis(monsters[idx].fx, monsters[idx].fy, player.px, player.py);

        if monsters[idx].energy < minimum_energy {
            continue;
        }
        monsters[idx].energy -= 100;

        let Some(race) = races.get(&monsters[idx].race) else {
            host.bell("unknown race id in process_monsters");
            continue;
        };
        if !should_process(cave, &monsters[idx], race) {
            continue;
        }

        let id = monsters[idx].id;
        let outcome = process_monster(idx, monsters, races, cave, player, rng, host);
        host.on_monster_processed(id);
        report.outcomes.push((id, outcome));
    }

    tracing::debug!(processed = report.outcomes.len(), "turn pass complete");
    report
}

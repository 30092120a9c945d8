//! Seeds a small cave with a handful of monsters and runs the turn
//! engine against them for a fixed number of turns, logging each pass
//! via `tracing`. Not a game client: there is no rendering, no saves,
//! no input loop.

use clap::Parser;
use hashbrown::HashMap;

use nh_core::host::NullHost;
use nh_core::monster::{Monster, MonsterId};
use nh_core::player::Player;
use nh_core::race::{Blow, Race, RaceFlags, RaceId};
use nh_core::{Cave, GameRng};

/// Run the monster turn engine against a seeded scenario.
#[derive(Parser, Debug)]
#[command(name = "nh-turn-demo")]
#[command(author, version, about = "Run the monster turn engine standalone")]
struct Args {
    /// Number of turn-engine passes to run.
    #[arg(short = 'n', long = "turns", default_value_t = 10)]
    turns: u32,

    /// Cave width.
    #[arg(long = "width", default_value_t = 20)]
    width: usize,

    /// Cave height.
    #[arg(long = "height", default_value_t = 20)]
    height: usize,

    /// Number of monsters to seed, spaced along the top row.
    #[arg(short = 'm', long = "monsters", default_value_t = 3)]
    monsters: u32,

    /// RNG seed, for reproducible runs.
    #[arg(long = "seed", default_value_t = 1)]
    seed: u64,
}

fn jackal_race() -> Race {
    Race {
        id: RaceId(1),
        name: "jackal".into(),
        level: 1,
        speed: 120,
        armor_class: 15,
        mexp: 1,
        flags: RaceFlags::empty(),
        spells: vec![],
        freq_innate: 0,
        freq_spell: 0,
        blows: [
            Blow {
                method: nh_core::race::BlowMethod::Bite,
                effect: nh_core::race::BlowEffect::Hurt,
                dice: 1,
                sides: 3,
            },
            Blow::NONE,
            Blow::NONE,
            Blow::NONE,
        ],
        aaf: 20,
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut cave = Cave::new(args.width, args.height).expect("valid cave dimensions");
    cave.player_x = args.width as i32 / 2;
    cave.player_y = args.height as i32 / 2;

    let mut player = Player {
        px: cave.player_x,
        py: cave.player_y,
        level: 5,
        chp: 40,
        mhp: 40,
        ac: 10,
        to_a: 0,
        skill_save: 0,
        flags: nh_core::player::PlayerFlags::empty(),
        noise: 200,
        gold: 50,
    };

    let mut races = HashMap::new();
    races.insert(RaceId(1), jackal_race());

    let mut monsters = Vec::new();
    for i in 0..args.monsters {
        let mut m = Monster::new(MonsterId(i + 1), RaceId(1), i as i32, 0, 8);
        m.energy = 100;
        m.unaware = false;
        monsters.push(m);
    }

    let mut rng = GameRng::new(args.seed);
    let mut host = NullHost;

    for turn in 1..=args.turns {
        cave.current_turn = turn;
        let report = nh_core::turn::process_monsters(
            &mut cave,
            &mut monsters,
            &races,
            &mut player,
            0,
            &mut rng,
            &mut host,
        );
        tracing::info!(turn, outcomes = ?report.outcomes, player_hp = player.chp, "turn complete");
        if player.chp <= 0 {
            tracing::warn!(turn, "player died");
            break;
        }
    }
}

//! Heart Hop headless runner
//!
//! Plays a session with a simple autopilot and prints the final frame as JSON.
//!
//! Usage: `heart-hop [ticks] [tuning.json]`

use heart_hop::Tuning;
use heart_hop::audio::{self, LogSink};
use heart_hop::consts::SIM_DT;
use heart_hop::sim::{ArcadePhysics, GameState, Pointer, RenderSnapshot, TickInput, tick};

const DEFAULT_TICKS: u64 = 60 * 60;

/// Chase the nearest visible heart; tap the jump zone when it sits above us
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player = &state.world.player.body;
    let width = state.tuning.world_width;

    let target = state
        .world
        .pickups
        .iter()
        .filter(|p| p.active)
        .min_by(|a, b| {
            let da = a.body.pos.distance_squared(player.pos);
            let db = b.body.pos.distance_squared(player.pos);
            da.total_cmp(&db)
        })
        .map(|p| p.body.pos);

    let Some(target) = target else {
        return input;
    };

    let dx = target.x - player.pos.x;
    if dx.abs() > player.half_size.x * 0.5 {
        let x = if dx < 0.0 { 0.0 } else { width };
        input.pointers[0] = Pointer { is_down: true, x };
    }
    if target.y < player.pos.y - player.half_size.y * 2.0 {
        input.pointers[1] = Pointer {
            is_down: true,
            x: width / 2.0,
        };
    }
    input
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Heart Hop (headless) starting...");

    let mut args = std::env::args().skip(1);
    let ticks = match args.next().map(|s| s.parse::<u64>()) {
        None => DEFAULT_TICKS,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid tick count: {e}");
            std::process::exit(2);
        }
    };
    let tuning = match args.next() {
        None => Tuning::default(),
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
    };

    let seed = 0x4845_4152_5453;
    let mut state = match GameState::new(seed, tuning) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let mut physics = ArcadePhysics;
    let mut sink = LogSink;

    for _ in 0..ticks {
        let input = autopilot(&state);
        tick(&mut state, &mut physics, &input, SIM_DT);
        audio::dispatch(&state.drain_events(), &mut sink);
        if state.is_game_over() {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks: score={}, level={}, hazards={}",
        state.time_ticks,
        state.progression.score,
        state.progression.level,
        state.world.hazards.len()
    );

    match serde_json::to_string_pretty(&RenderSnapshot::capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

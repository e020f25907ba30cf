//! Per-frame simulation tick
//!
//! Order within a tick is fixed: input sampling, horizontal movement, jump,
//! physics step, pickup contacts, level-up check, hazard contacts.

use super::input::{TickInput, TouchZones};
use super::physics::{Contact, PhysicsBackend};
use super::progression::{check_level_up, collect_pickup};
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::AudioCue;

/// Advance the game state by one frame
pub fn tick<P: PhysicsBackend + ?Sized>(
    state: &mut GameState,
    physics: &mut P,
    input: &TickInput,
    dt: f32,
) {
    // Frozen for good once the player is hit
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    let zones = TouchZones {
        left_ratio: state.tuning.touch_left_ratio,
        right_ratio: state.tuning.touch_right_ratio,
    };
    let controls = input.controls(state.tuning.world_width, &zones);

    let player = &mut state.world.player;
    player.apply_horizontal(&controls, state.progression.player_speed);

    let grounded = player.body.on_ground();
    let outcome = state
        .jump
        .update(controls.jump_held, controls.touch_jump, grounded);
    if let Some(speed) = outcome.launch_speed() {
        player.launch(speed);
    }

    let contacts = physics.step(&mut state.world, dt);

    let mut collected = false;
    for contact in &contacts {
        if let Contact::PlayerPickup { slot } = *contact {
            collected |= collect_pickup(state, slot);
        }
    }
    if collected {
        check_level_up(state);
    }

    for contact in &contacts {
        if let Contact::PlayerHazard { id } = *contact {
            if state.world.hazards.iter().any(|h| h.id == id) {
                trigger_game_over(state);
                break;
            }
            log::debug!("Ignoring contact with unknown hazard {}", id);
        }
    }
}

/// Player touched fire: stop the session for good.
///
/// Safe to call repeatedly; only the first call has any effect.
pub fn trigger_game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.phase = GamePhase::GameOver;
    state.world.player.hit = true;

    log::info!(
        "Game over at level {} with score {}",
        state.progression.level,
        state.progression.score
    );

    state.events.push(GameEvent::GameOver {
        score: state.progression.score,
        level: state.progression.level,
    });
    // Music stops regardless of mute; only the sting goes through `cue`
    state.events.push(GameEvent::Audio(AudioCue::StopMusic));
    state.cue(AudioCue::GameOver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PICKUP_COUNT, SIM_DT};
    use crate::sim::input::{Keys, Pointer};
    use crate::sim::physics::ArcadePhysics;
    use crate::tuning::Tuning;

    /// Physics stand-in that never moves anything and replays scripted contacts
    #[derive(Default)]
    struct Scripted {
        frames: Vec<Vec<Contact>>,
        grounded: bool,
    }

    impl PhysicsBackend for Scripted {
        fn step(&mut self, world: &mut crate::sim::state::World, _dt: f32) -> Vec<Contact> {
            world.player.body.touching.down = self.grounded;
            if self.frames.is_empty() {
                Vec::new()
            } else {
                self.frames.remove(0)
            }
        }
    }

    fn grounded() -> Scripted {
        Scripted {
            grounded: true,
            ..Default::default()
        }
    }

    fn keys(left: bool, right: bool, up: bool) -> TickInput {
        TickInput {
            keys: Keys { left, right, up },
            ..Default::default()
        }
    }

    #[test]
    fn test_keyboard_moves_player() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let mut physics = grounded();
        tick(&mut state, &mut physics, &keys(true, false, false), SIM_DT);
        assert_eq!(state.world.player.body.vel.x, -300.0);
        tick(&mut state, &mut physics, &keys(false, true, false), SIM_DT);
        assert_eq!(state.world.player.body.vel.x, 300.0);
        tick(&mut state, &mut physics, &TickInput::default(), SIM_DT);
        assert_eq!(state.world.player.body.vel.x, 0.0);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_charged_jump_needs_ground_contact() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let mut physics = grounded();

        // First frame: no ground contact recorded yet
        tick(&mut state, &mut physics, &keys(false, false, true), SIM_DT);
        assert_eq!(state.jump.current(), 350.0);

        for _ in 0..25 {
            tick(&mut state, &mut physics, &keys(false, false, true), SIM_DT);
        }
        assert_eq!(state.jump.current(), 400.0);

        tick(&mut state, &mut physics, &TickInput::default(), SIM_DT);
        assert_eq!(state.world.player.body.vel.y, -400.0);
        assert_eq!(state.jump.current(), 350.0);
    }

    #[test]
    fn test_touch_jump_center_zone() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let mut physics = grounded();
        let mut input = TickInput::default();
        input.pointers[1] = Pointer { is_down: true, x: 360.0 };

        tick(&mut state, &mut physics, &TickInput::default(), SIM_DT);
        tick(&mut state, &mut physics, &input, SIM_DT);
        assert_eq!(state.world.player.body.vel.y, -350.0);
        assert_eq!(state.world.player.body.vel.x, 0.0);
    }

    #[test]
    fn test_duplicate_pickup_contacts_score_once() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let mut physics = Scripted {
            frames: vec![vec![
                Contact::PlayerPickup { slot: 1 },
                Contact::PlayerPickup { slot: 1 },
            ]],
            grounded: true,
        };
        tick(&mut state, &mut physics, &TickInput::default(), SIM_DT);
        assert_eq!(state.progression.score, 10);
        assert_eq!(state.world.pickups.active_count(), PICKUP_COUNT - 1);
    }

    #[test]
    fn test_hazard_contact_ends_session() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let id = state.spawn_hazard();
        state.drain_events();
        let mut physics = Scripted {
            frames: vec![vec![Contact::PlayerHazard { id }]],
            grounded: true,
        };
        tick(&mut state, &mut physics, &TickInput::default(), SIM_DT);

        assert!(state.is_game_over());
        assert!(state.world.player.hit);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::GameOver { score: 0, level: 1 },
                GameEvent::Audio(AudioCue::StopMusic),
                GameEvent::Audio(AudioCue::GameOver),
            ]
        );
    }

    #[test]
    fn test_unknown_hazard_is_ignored() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let mut physics = Scripted {
            frames: vec![vec![Contact::PlayerHazard { id: 999 }]],
            grounded: true,
        };
        tick(&mut state, &mut physics, &TickInput::default(), SIM_DT);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_game_over_freezes_everything() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        state.spawn_hazard();
        let mut physics = ArcadePhysics;
        trigger_game_over(&mut state);
        state.drain_events();

        let score = state.progression.score;
        let level = state.progression.level;
        let player = state.world.player.body.clone();
        let hazard = state.world.hazards[0].body.clone();
        let ticks = state.time_ticks;

        for _ in 0..30 {
            tick(&mut state, &mut physics, &keys(true, false, true), SIM_DT);
        }

        assert_eq!(state.progression.score, score);
        assert_eq!(state.progression.level, level);
        assert_eq!(state.world.player.body.pos, player.pos);
        assert_eq!(state.world.player.body.vel, player.vel);
        assert_eq!(state.world.hazards[0].body.pos, hazard.pos);
        assert_eq!(state.world.hazards[0].body.vel, hazard.vel);
        assert_eq!(state.time_ticks, ticks);

        // Repeat triggers are no-ops
        trigger_game_over(&mut state);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_last_pickup_and_hit_same_tick_still_levels_up() {
        let mut state = GameState::new(5, Tuning::default()).unwrap();
        let id = state.spawn_hazard();
        for slot in 0..PICKUP_COUNT - 1 {
            collect_pickup(&mut state, slot);
        }
        let mut physics = Scripted {
            frames: vec![vec![
                Contact::PlayerPickup { slot: PICKUP_COUNT - 1 },
                Contact::PlayerHazard { id },
            ]],
            grounded: true,
        };
        tick(&mut state, &mut physics, &TickInput::default(), SIM_DT);

        // The row clears before the hit is resolved, and the hit still ends it
        assert!(state.is_game_over());
        assert_eq!(state.progression.score, 100);
        assert_eq!(state.progression.level, 2);
        assert_eq!(state.world.hazards.len(), 2);
        assert_eq!(state.world.pickups.active_count(), PICKUP_COUNT);
    }

    #[test]
    fn test_muted_game_over_still_stops_music() {
        let mut state = GameState::with_mute(5, Tuning::default(), true).unwrap();
        trigger_game_over(&mut state);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::GameOver { score: 0, level: 1 },
                GameEvent::Audio(AudioCue::StopMusic),
            ]
        );
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            keys(false, true, false),
            keys(false, true, true),
            keys(false, false, true),
            TickInput::default(),
            keys(true, false, false),
        ];

        let mut a = GameState::new(99999, Tuning::default()).unwrap();
        let mut b = GameState::new(99999, Tuning::default()).unwrap();
        a.spawn_hazard();
        b.spawn_hazard();

        for _ in 0..40 {
            for input in &inputs {
                tick(&mut a, &mut ArcadePhysics, input, SIM_DT);
                tick(&mut b, &mut ArcadePhysics, input, SIM_DT);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.world.player.body.pos, b.world.player.body.pos);
        assert_eq!(a.world.hazards[0].body.pos, b.world.hazards[0].body.pos);
        assert_eq!(a.progression, b.progression);
    }
}

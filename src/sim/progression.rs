//! Score, level and difficulty escalation
//!
//! `Collecting -> (row cleared) -> LevelUp -> Collecting`. Each level-up makes
//! the player faster and adds one more hazard.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use crate::audio::AudioCue;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub score: u32,
    /// Starts at 1
    pub level: u32,
    /// Horizontal run speed (pixels/s), grows every level
    pub player_speed: f32,
}

impl Progression {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            level: 1,
            player_speed: tuning.player_start_speed,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Advance one level and speed the player up, capped at `max_speed`
    pub fn advance(&mut self, speed_step: f32, max_speed: f32) {
        self.level = self.level.saturating_add(1);
        self.player_speed = (self.player_speed + speed_step).min(max_speed);
    }
}

/// Player touched the pickup in `slot`. Already-collected slots are ignored.
/// Returns whether anything was collected.
pub fn collect_pickup(state: &mut GameState, slot: usize) -> bool {
    if !state.world.pickups.deactivate(slot) {
        return false;
    }

    state.progression.add_score(state.tuning.points_per_pickup);
    state.events.push(GameEvent::PickupCollected {
        slot,
        score: state.progression.score,
    });
    state.cue(AudioCue::Pickup);
    true
}

/// Level up if the whole row has been collected. Returns whether it did.
pub fn check_level_up(state: &mut GameState) -> bool {
    if state.world.pickups.active_count() > 0 {
        return false;
    }
    level_up(state);
    true
}

/// Advance the level: faster player, one more hazard, fresh pickup row
pub fn level_up(state: &mut GameState) {
    let tuning = &state.tuning;
    state
        .progression
        .advance(tuning.speed_per_level, tuning.max_player_speed);

    let hazard_id = state.spawn_hazard();
    state.respawn_pickups();

    let Progression {
        level,
        player_speed,
        ..
    } = state.progression;
    log::info!(
        "Level {}: speed={}, hazards={} (new #{})",
        level,
        player_speed,
        state.world.hazards.len(),
        hazard_id
    );
    state.events.push(GameEvent::LevelUp {
        level,
        player_speed,
    });
}

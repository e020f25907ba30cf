//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Aabb, Platform};
use super::hazard::{Hazard, spawn_hazard};
use super::jump::JumpState;
use super::pickup::PickupPool;
use super::player::Player;
use super::progression::Progression;
use crate::audio::AudioCue;
use crate::tuning::{Tuning, TuningError};

/// Session phase. `GameOver` is terminal; only a fresh session leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// Things that happened during a tick, for the host's audio/UI layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupCollected { slot: usize, score: u32 },
    LevelUp { level: u32, player_speed: f32 },
    HazardSpawned { id: u32 },
    GameOver { score: u32, level: u32 },
    Audio(AudioCue),
}

/// Static platform layout: (center, scale)
const PLATFORM_LAYOUT: [((f32, f32), (f32, f32)); 5] = [
    ((360.0, 1270.0), (2.0, 2.0)),
    ((600.0, 1075.0), (1.0, 1.0)),
    ((60.0, 900.0), (1.0, 1.0)),
    ((420.0, 750.0), (0.3, 1.0)),
    ((750.0, 600.0), (1.0, 1.0)),
];

/// Bodies owned by the simulation and stepped by the physics backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub bounds: Aabb,
    pub gravity: f32,
    pub player: Player,
    pub pickups: PickupPool,
    /// Every hazard spawned this session, in spawn order
    pub hazards: Vec<Hazard>,
    pub platforms: Vec<Platform>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub progression: Progression,
    pub jump: JumpState,
    pub world: World,
    /// Sound toggle. Read by the tick, flipped by the host's music button.
    pub muted: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session with music playing
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        Self::with_mute(seed, tuning, false)
    }

    /// Create a new session. Rejects tuning that fails [`Tuning::validate`].
    pub fn with_mute(seed: u64, tuning: Tuning, muted: bool) -> Result<Self, TuningError> {
        tuning.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);

        let platforms = PLATFORM_LAYOUT
            .iter()
            .enumerate()
            .map(|(id, &((x, y), (sx, sy)))| {
                Platform::new(id as u32, Vec2::new(x, y), Vec2::new(sx, sy))
            })
            .collect();

        let world = World {
            bounds: Aabb {
                min: Vec2::ZERO,
                max: Vec2::new(tuning.world_width, tuning.world_height),
            },
            gravity: tuning.gravity,
            player: Player::new(&tuning),
            pickups: PickupPool::new(&tuning, &mut rng),
            hazards: Vec::new(),
            platforms,
        };

        let mut state = Self {
            seed,
            phase: GamePhase::Running,
            progression: Progression::new(&tuning),
            jump: JumpState::from_tuning(&tuning),
            world,
            muted,
            time_ticks: 0,
            events: Vec::new(),
            rng,
            next_id: 1,
            tuning,
        };

        if !muted {
            state.events.push(GameEvent::Audio(AudioCue::StartMusic));
        }

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one hazard at the configured scale. Returns its id.
    pub fn spawn_hazard(&mut self) -> u32 {
        let id = self.next_entity_id();
        let hazard = spawn_hazard(&self.tuning, &mut self.rng, id, self.tuning.hazard_scale);
        self.world.hazards.push(hazard);
        self.events.push(GameEvent::HazardSpawned { id });
        id
    }

    /// Re-enable the whole pickup row
    pub fn respawn_pickups(&mut self) {
        self.world.pickups.respawn_row(&self.tuning, &mut self.rng);
    }

    /// Queue a sound unless muted
    pub fn cue(&mut self, cue: AudioCue) {
        if !self.muted {
            self.events.push(GameEvent::Audio(cue));
        }
    }

    /// Music on/off button
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        let cue = if muted { AudioCue::StopMusic } else { AudioCue::StartMusic };
        self.events.push(GameEvent::Audio(cue));
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

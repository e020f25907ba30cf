//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives in [`Tuning`]. Defaults
//! reproduce the shipped game; a JSON file may override any subset of keys.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    pub gravity: f32,

    // === Player ===
    pub player_start: (f32, f32),
    pub player_bounce: f32,
    /// Horizontal speed at level 1 (pixels/s)
    pub player_start_speed: f32,
    /// Added to the horizontal speed on every level-up
    pub speed_per_level: f32,
    /// Upper bound for the horizontal speed
    pub max_player_speed: f32,

    // === Jump ===
    /// Jump velocity of an uncharged (or touch) jump
    pub base_jump_power: f32,
    /// Max charged power as a multiple of the base power
    pub max_jump_multiplier: f32,
    /// Power gained per frame while the jump key is held on the ground
    pub jump_charge_step: f32,

    // === Touch zones (fractions of viewport width) ===
    pub touch_left_ratio: f32,
    pub touch_right_ratio: f32,

    // === Pickups ===
    pub points_per_pickup: u32,
    pub pickup_row_start_x: f32,
    pub pickup_row_start_y: f32,
    /// Vertical offset between neighbouring hearts in the opening row
    pub pickup_row_step_y: f32,
    /// Height at which a fresh row is dropped after a level-up
    pub pickup_respawn_y: f32,
    pub pickup_bounce_min: f32,
    pub pickup_bounce_max: f32,

    // === Hazards ===
    pub hazard_spawn: (f32, f32),
    /// Horizontal launch speed is uniform in [-max, max]
    pub hazard_max_speed_x: f32,
    pub hazard_speed_y: f32,
    pub hazard_bounce: f32,
    pub hazard_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,

            player_start: (WORLD_WIDTH / 2.0, 1200.0),
            player_bounce: 0.3,
            player_start_speed: 300.0,
            speed_per_level: 50.0,
            max_player_speed: 10_000.0,

            base_jump_power: 350.0,
            max_jump_multiplier: 2.0,
            jump_charge_step: 2.0,

            touch_left_ratio: 0.28,
            touch_right_ratio: 0.72,

            points_per_pickup: 10,
            pickup_row_start_x: 30.0,
            pickup_row_start_y: 5.0,
            pickup_row_step_y: -30.0,
            pickup_respawn_y: 0.0,
            pickup_bounce_min: 0.2,
            pickup_bounce_max: 0.5,

            hazard_spawn: (WORLD_WIDTH / 2.0, 0.0),
            hazard_max_speed_x: 500.0,
            hazard_speed_y: 20.0,
            hazard_bounce: 1.0,
            hazard_scale: 1.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Highest power a charged keyboard jump can reach
    pub fn max_jump_power(&self) -> f32 {
        self.base_jump_power * self.max_jump_multiplier
    }

    /// Horizontal distance between pickup slots (the row spans the world)
    pub fn pickup_row_step_x(&self) -> f32 {
        self.world_width / PICKUP_COUNT as f32
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        let floats = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("gravity", self.gravity),
            ("player_start.x", self.player_start.0),
            ("player_start.y", self.player_start.1),
            ("player_bounce", self.player_bounce),
            ("player_start_speed", self.player_start_speed),
            ("speed_per_level", self.speed_per_level),
            ("max_player_speed", self.max_player_speed),
            ("base_jump_power", self.base_jump_power),
            ("max_jump_multiplier", self.max_jump_multiplier),
            ("jump_charge_step", self.jump_charge_step),
            ("touch_left_ratio", self.touch_left_ratio),
            ("touch_right_ratio", self.touch_right_ratio),
            ("pickup_row_start_x", self.pickup_row_start_x),
            ("pickup_row_start_y", self.pickup_row_start_y),
            ("pickup_row_step_y", self.pickup_row_step_y),
            ("pickup_respawn_y", self.pickup_respawn_y),
            ("pickup_bounce_min", self.pickup_bounce_min),
            ("pickup_bounce_max", self.pickup_bounce_max),
            ("hazard_spawn.x", self.hazard_spawn.0),
            ("hazard_spawn.y", self.hazard_spawn.1),
            ("hazard_max_speed_x", self.hazard_max_speed_x),
            ("hazard_speed_y", self.hazard_speed_y),
            ("hazard_bounce", self.hazard_bounce),
            ("hazard_scale", self.hazard_scale),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(*field, "must be finite");
        }

        if !(self.world_width > 0.0 && self.world_height > 0.0) {
            return invalid("world_width/world_height", "must be positive");
        }
        if !(self.base_jump_power > 0.0) {
            return invalid("base_jump_power", "must be positive");
        }
        if !(self.max_jump_multiplier >= 1.0) {
            return invalid("max_jump_multiplier", "must be at least 1");
        }
        if !(self.jump_charge_step > 0.0) {
            return invalid("jump_charge_step", "must be positive");
        }
        if !(self.player_start_speed >= 0.0 && self.speed_per_level >= 0.0) {
            return invalid("player_start_speed/speed_per_level", "must not be negative");
        }
        if !(self.max_player_speed >= self.player_start_speed) {
            return invalid("max_player_speed", "must be at least player_start_speed");
        }
        if !(0.0 <= self.touch_left_ratio
            && self.touch_left_ratio <= self.touch_right_ratio
            && self.touch_right_ratio <= 1.0)
        {
            return invalid("touch_left_ratio/touch_right_ratio", "must satisfy 0 <= left <= right <= 1");
        }
        if !(0.0 <= self.pickup_bounce_min
            && self.pickup_bounce_min <= self.pickup_bounce_max
            && self.pickup_bounce_max <= 1.0)
        {
            return invalid("pickup_bounce_min/pickup_bounce_max", "must satisfy 0 <= min <= max <= 1");
        }
        if !(self.hazard_max_speed_x >= 0.0) {
            return invalid("hazard_max_speed_x", "must not be negative");
        }
        if !(self.hazard_scale > 0.0) {
            return invalid("hazard_scale", "must be positive");
        }
        Ok(())
    }
}

//! The player sprite and horizontal movement

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::input::ControlVector;
use crate::consts::PLAYER_SIZE;
use crate::tuning::Tuning;

/// Which way the player is facing (drives the walk animation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Idle,
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub facing: Facing,
    /// Set once fire touches the player
    pub hit: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.player_start;
        Self {
            body: Body::new(Vec2::new(x, y), Vec2::splat(PLAYER_SIZE))
                .with_bounce(tuning.player_bounce)
                .with_world_bounds(),
            facing: Facing::Idle,
            hit: false,
        }
    }

    /// Set horizontal velocity from the controls
    pub fn apply_horizontal(&mut self, controls: &ControlVector, speed: f32) {
        let (vx, facing) = if controls.move_left {
            (-speed, Facing::Left)
        } else if controls.move_right {
            (speed, Facing::Right)
        } else {
            (0.0, Facing::Idle)
        };
        self.body.vel.x = vx;
        self.facing = facing;
    }

    /// Launch upward (screen y grows downward)
    pub fn launch(&mut self, speed: f32) {
        self.body.vel.y = -speed;
    }
}

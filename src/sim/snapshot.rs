//! Read-only per-frame view for the renderer and HUD

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::Facing;
use super::state::{GamePhase, GameState};

/// Tint applied to the player sprite once hit
pub const HIT_TINT: u32 = 0xff0000;

/// Animation key for a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimKey {
    Idle,
    Left,
    Right,
    Hit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub anim: AnimKey,
    pub tint: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub pos: Vec2,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub pos: Vec2,
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HudView {
    pub score_text: String,
    pub level_text: String,
    pub game_over_visible: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub player: PlayerView,
    pub pickups: Vec<PickupView>,
    pub hazards: Vec<HazardView>,
    pub hud: HudView,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.world.player;
        let anim = if player.hit {
            AnimKey::Hit
        } else {
            match player.facing {
                Facing::Idle => AnimKey::Idle,
                Facing::Left => AnimKey::Left,
                Facing::Right => AnimKey::Right,
            }
        };

        Self {
            tick: state.time_ticks,
            player: PlayerView {
                pos: player.body.pos,
                anim,
                tint: player.hit.then_some(HIT_TINT),
            },
            pickups: state
                .world
                .pickups
                .iter()
                .map(|p| PickupView {
                    pos: p.body.pos,
                    visible: p.active,
                })
                .collect(),
            hazards: state
                .world
                .hazards
                .iter()
                .map(|h| HazardView {
                    pos: h.body.pos,
                    scale: h.scale,
                })
                .collect(),
            hud: HudView {
                score_text: format!("Score: {}", state.progression.score),
                level_text: format!("Level: {}", state.progression.level),
                game_over_visible: state.phase == GamePhase::GameOver,
            },
        }
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (pickup slot order, hazard spawn order)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod hazard;
pub mod input;
pub mod jump;
pub mod physics;
pub mod pickup;
pub mod player;
pub mod progression;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{Aabb, Body, Platform, Touching};
pub use hazard::{Hazard, spawn_hazard};
pub use input::{ControlVector, Keys, MAX_POINTERS, Pointer, TickInput, TouchZones, Zone};
pub use jump::{JumpOutcome, JumpState};
pub use physics::{ArcadePhysics, Contact, PhysicsBackend};
pub use pickup::{Pickup, PickupPool};
pub use player::{Facing, Player};
pub use progression::{Progression, check_level_up, collect_pickup, level_up};
pub use snapshot::{AnimKey, RenderSnapshot};
pub use state::{GameEvent, GamePhase, GameState, World};
pub use tick::{tick, trigger_game_over};

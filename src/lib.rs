//! Heart Hop - a single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, jump, physics, progression)
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound cues emitted by the simulation

pub mod audio;
pub mod sim;
pub mod tuning;

pub use audio::{AudioCue, AudioSink};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions (portrait phone layout)
    pub const WORLD_WIDTH: f32 = 720.0;
    pub const WORLD_HEIGHT: f32 = 1280.0;

    /// Downward gravity (pixels/s²)
    pub const GRAVITY: f32 = 300.0;

    /// Number of hearts in the pickup row. Never changes during a session.
    pub const PICKUP_COUNT: usize = 10;

    /// Sprite sizes used for body extents
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PICKUP_SIZE: f32 = 24.0;
    pub const HAZARD_SIZE: f32 = 32.0;

    /// Platform art is 400x32 before scaling
    pub const PLATFORM_WIDTH: f32 = 400.0;
    pub const PLATFORM_HEIGHT: f32 = 32.0;

    /// Volume of every sound cue
    pub const CUE_VOLUME: f32 = 0.2;
}

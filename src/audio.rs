//! Sound cues emitted by the simulation
//!
//! The core never plays audio itself. It pushes [`AudioCue`]s into the frame's
//! event list and the host forwards them to whatever backend it owns.

use serde::{Deserialize, Serialize};

use crate::consts::CUE_VOLUME;
use crate::sim::GameEvent;

/// Discrete audio triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Heart collected
    Pickup,
    /// Player touched fire
    GameOver,
    /// Start the looping background track
    StartMusic,
    /// Stop the looping background track
    StopMusic,
}

impl AudioCue {
    /// Asset key the host should play
    pub fn asset_key(&self) -> &'static str {
        match self {
            AudioCue::Pickup => "pickup",
            AudioCue::GameOver => "gameover",
            AudioCue::StartMusic | AudioCue::StopMusic => "music",
        }
    }

    /// Playback volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        CUE_VOLUME
    }

    /// Whether the cue starts a looping track
    pub fn looping(&self) -> bool {
        matches!(self, AudioCue::StartMusic)
    }
}

/// Host-side audio backend
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Forward every audio cue in `events` to `sink`, in emission order
pub fn dispatch<S: AudioSink + ?Sized>(events: &[GameEvent], sink: &mut S) {
    for event in events {
        if let GameEvent::Audio(cue) = event {
            sink.play(*cue);
        }
    }
}

/// Sink that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("audio: {} (volume {}, loop {})", cue.asset_key(), cue.volume(), cue.looping());
    }
}

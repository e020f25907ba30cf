//! Raw input snapshot and its reduction to a control vector
//!
//! Keyboard and touch are merged per direction. Touch pointers are classified
//! by horizontal screen position into three zones of the viewport width.

use serde::{Deserialize, Serialize};

/// Maximum simultaneous pointers tracked (multitouch)
pub const MAX_POINTERS: usize = 3;

/// Keyboard arrow keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// A single pointer (mouse or finger)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub is_down: bool,
    /// Horizontal position in viewport pixels
    pub x: f32,
}

/// Horizontal touch zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Left,
    Jump,
    Right,
}

/// Touch zone boundaries as fractions of the viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchZones {
    pub left_ratio: f32,
    pub right_ratio: f32,
}

impl Default for TouchZones {
    fn default() -> Self {
        Self {
            left_ratio: 0.28,
            right_ratio: 0.72,
        }
    }
}

impl TouchZones {
    /// Classify a pointer x coordinate.
    ///
    /// `[0, left)` is Left, `(right, W]` is Right and everything in between,
    /// both boundary values included, is Jump.
    pub fn classify(&self, x: f32, viewport_width: f32) -> Zone {
        if x < self.left_ratio * viewport_width {
            Zone::Left
        } else if x > self.right_ratio * viewport_width {
            Zone::Right
        } else {
            Zone::Jump
        }
    }
}

/// Input sampled for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub keys: Keys,
    pub pointers: [Pointer; MAX_POINTERS],
}

/// Logical controls for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlVector {
    pub move_left: bool,
    pub move_right: bool,
    /// Keyboard jump key held (drives charge-and-release)
    pub jump_held: bool,
    /// A pointer is down in the center zone (fixed-height jump)
    pub touch_jump: bool,
}

impl TickInput {
    /// Reduce the raw snapshot to a control vector.
    ///
    /// Left wins over right when both are requested.
    pub fn controls(&self, viewport_width: f32, zones: &TouchZones) -> ControlVector {
        let mut touch_left = false;
        let mut touch_right = false;
        let mut touch_jump = false;

        for pointer in self.pointers.iter().filter(|p| p.is_down) {
            match zones.classify(pointer.x, viewport_width) {
                Zone::Left => touch_left = true,
                Zone::Right => touch_right = true,
                Zone::Jump => touch_jump = true,
            }
        }

        let move_left = self.keys.left || touch_left;
        let move_right = !move_left && (self.keys.right || touch_right);

        ControlVector {
            move_left,
            move_right,
            jump_held: self.keys.up,
            touch_jump,
        }
    }
}

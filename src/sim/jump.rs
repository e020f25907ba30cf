//! Charge-and-release jump
//!
//! Holding the jump key on the ground charges power; letting go while still
//! grounded launches with the charged power. Touch input only gets the fixed
//! base jump.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Jump power bookkeeping. `base <= current <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    current: f32,
    base: f32,
    max: f32,
    step: f32,
}

/// Upward launch speeds produced this frame (positive = up)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JumpOutcome {
    /// Charged keyboard jump released
    pub keyboard: Option<f32>,
    /// Fixed touch jump
    pub touch: Option<f32>,
}

impl JumpOutcome {
    /// Launch speed to apply. Touch is applied after keyboard, so it wins
    /// when both fire on the same frame.
    pub fn launch_speed(&self) -> Option<f32> {
        self.touch.or(self.keyboard)
    }
}

impl JumpState {
    pub fn new(base: f32, max: f32, step: f32) -> Self {
        let max = max.max(base);
        Self {
            current: base,
            base,
            max,
            step: step.max(0.0),
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.base_jump_power, tuning.max_jump_power(), tuning.jump_charge_step)
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn base(&self) -> f32 {
        self.base
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_charged(&self) -> bool {
        self.current > self.base
    }

    /// Advance one frame.
    ///
    /// Airborne frames leave the charge untouched; it is released on the
    /// first grounded frame without the key held.
    pub fn update(&mut self, jump_held: bool, touch_jump: bool, grounded: bool) -> JumpOutcome {
        let mut outcome = JumpOutcome::default();

        if jump_held && grounded {
            self.current = (self.current + self.step).min(self.max);
        } else if grounded && self.is_charged() {
            outcome.keyboard = Some(self.current);
            self.current = self.base;
        }

        if grounded && touch_jump {
            outcome.touch = Some(self.base);
        }

        outcome
    }
}

// Movement intent and facing memory

use glam::Vec2;

use crate::core::math::{clamp_to_unit, exceeds_dead_zone};
use crate::engine::input::InputSnapshot;

/// Facing at spawn: toward the top of the screen
pub const DEFAULT_FACING: Vec2 = Vec2::Y;

/// Per-actor movement state sampled from input
#[derive(Debug, Clone, PartialEq)]
pub struct ActorMotionState {
    /// Last non-trivial movement direction (unit length)
    facing: Vec2,
    /// Requested movement this tick (length <= 1)
    velocity_intent: Vec2,
    /// Run modifier as of the last sample
    is_running: bool,
}

impl Default for ActorMotionState {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorMotionState {
    pub fn new() -> Self {
        Self {
            facing: DEFAULT_FACING,
            velocity_intent: Vec2::ZERO,
            is_running: false,
        }
    }

    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    pub fn velocity_intent(&self) -> Vec2 {
        self.velocity_intent
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Check if the current intent is outside the dead zone
    pub fn is_moving(&self) -> bool {
        exceeds_dead_zone(self.velocity_intent)
    }

    /// Read one frame of input into intent, facing and the run flag
    pub fn sample(&mut self, input: &InputSnapshot) {
        let raw = Vec2::new(input.horizontal, input.vertical);

        // Facing only follows deliberate input so idle frames keep the old one
        if exceeds_dead_zone(raw) {
            self.facing = raw.normalize();
        }

        // Diagonals would otherwise be faster than straight movement
        self.velocity_intent = clamp_to_unit(raw);
        self.is_running = input.run;
    }

    /// Drop movement intent; facing is kept
    pub fn halt(&mut self) {
        self.velocity_intent = Vec2::ZERO;
    }
}

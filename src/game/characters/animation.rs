// Animation blend parameters for the swordsman
//
// The controller does not play animations itself. It writes named parameters
// that an animation blender reads to pick and interpolate clips.

use glam::Vec2;
use std::collections::{HashMap, HashSet};

use super::motion::ActorMotionState;

/// Blend-tree parameter names
pub mod params {
    pub const HORIZONTAL: &str = "Horizontal";
    pub const VERTICAL: &str = "Vertical";
    pub const SPEED: &str = "Speed";
    pub const IS_ATTACKING: &str = "IsAttacking";
    pub const TAKE_DAMAGE: &str = "TakeDamage";
    pub const DEATH: &str = "Death";
}

/// Blend value for standing still
pub const SPEED_IDLE: f32 = 0.0;
/// Blend value for walking
pub const SPEED_WALK: f32 = 0.3;
/// Blend value for running
pub const SPEED_RUN: f32 = 1.0;

/// Receives named animation parameters
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    /// Raise a one-shot trigger
    fn set_trigger(&mut self, name: &str);
}

/// Direction and speed band handed to the blend tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendProjection {
    pub horizontal: f32,
    pub vertical: f32,
    pub speed: f32,
}

impl BlendProjection {
    /// Map motion state onto blend parameters
    ///
    /// Moving frames point along the intent; idle frames point along the
    /// remembered facing. Speed is one of three discrete bands.
    pub fn from_motion(motion: &ActorMotionState) -> Self {
        let direction = if motion.is_moving() {
            motion.velocity_intent()
        } else {
            motion.facing()
        };

        let speed = match (motion.is_moving(), motion.is_running()) {
            (false, _) => SPEED_IDLE,
            (true, true) => SPEED_RUN,
            (true, false) => SPEED_WALK,
        };

        Self {
            horizontal: direction.x,
            vertical: direction.y,
            speed,
        }
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }

    /// Write all three parameters to a sink
    pub fn apply(&self, sink: &mut impl AnimationSink) {
        sink.set_float(params::HORIZONTAL, self.horizontal);
        sink.set_float(params::VERTICAL, self.vertical);
        sink.set_float(params::SPEED, self.speed);
    }
}

/// In-memory parameter set read by the renderer's animation blender
#[derive(Debug, Default, Clone)]
pub struct BlendParameters {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
    /// Triggers raised but not yet consumed
    triggers: HashSet<String>,
}

impl BlendParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a float parameter
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    /// Get a bool parameter (unset reads as false)
    pub fn bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    /// Check if a trigger is waiting to be consumed
    pub fn is_triggered(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    /// Consume a trigger. Returns true if it was raised
    pub fn consume_trigger(&mut self, name: &str) -> bool {
        self.triggers.remove(name)
    }

    /// Current facing as seen by the blender
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            self.float(params::HORIZONTAL).unwrap_or(0.0),
            self.float(params::VERTICAL).unwrap_or(0.0),
        )
    }
}

impl AnimationSink for BlendParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.insert(name.to_string());
    }
}

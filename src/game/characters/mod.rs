// Character system
//
// This module contains everything related to the playable swordsman:
// - Controller and physics-backed entity
// - Tuning values
// - Movement intent and facing memory
// - Action state machine (free, attacking, hurt, dead)
// - Animation blend parameters

pub mod animation;
pub mod character;
pub mod motion;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationSink, BlendParameters, BlendProjection};
pub use character::{Swordman, SwordmanController};
pub use motion::ActorMotionState;
pub use state::{ActionArbiter, ActionMode, ModeTransition};
pub use stats::SwordmanStats;

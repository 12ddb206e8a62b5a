// Per-player input state management

use super::action::Action;
use std::collections::HashSet;

/// One frame's worth of sampled controller input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Horizontal axis, -1 (left) to 1 (right)
    pub horizontal: f32,
    /// Vertical axis, -1 (down) to 1 (up)
    pub vertical: f32,
    /// Run modifier held
    pub run: bool,
    /// Attack pressed this frame (edge, not level)
    pub attack_pressed: bool,
}

impl InputSnapshot {
    /// Build a snapshot, clamping both axes into [-1, 1]
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
            run: false,
            attack_pressed: false,
        }
    }

    /// No directional input, no buttons
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn running(mut self) -> Self {
        self.run = true;
        self
    }

    pub fn attacking(mut self) -> Self {
        self.attack_pressed = true;
        self
    }
}

/// Input state for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear edge state for a new frame
    /// Call this once per frame after the frame's input has been consumed
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Get directional input from digital keys
    /// Returns (horizontal, vertical), each -1.0, 0.0 or 1.0
    pub fn get_direction(&self) -> (f32, f32) {
        let mut horizontal = 0.0;
        let mut vertical = 0.0;

        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            vertical -= 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            vertical += 1.0;
        }

        (horizontal, vertical)
    }

    /// Sample the current state into a controller snapshot
    pub fn snapshot(&self) -> InputSnapshot {
        let (horizontal, vertical) = self.get_direction();
        InputSnapshot {
            run: self.is_pressed(Action::Run),
            attack_pressed: self.just_pressed(Action::Attack),
            ..InputSnapshot::new(horizontal, vertical)
        }
    }
}

// Input manager - maps raw winit events onto game actions

use super::action::{default_bindings, Action, InputSource};
use super::player::{InputSnapshot, PlayerInput};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Main input manager for the local player
pub struct InputManager {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Input state for the player
    player: PlayerInput,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    /// Create an input manager from a list of bindings
    pub fn with_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            player: PlayerInput::new(),
        }
    }

    /// Bind an input source to an action, replacing any previous binding
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Get the action bound to an input source
    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            // Key repeat is not a new press
            if event.repeat && event.state == ElementState::Pressed {
                return;
            }
            self.apply(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.apply(InputSource::mouse(button), state);
    }

    fn apply(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.action_for(source) else {
            return;
        };

        match state {
            ElementState::Pressed => self.player.press(action),
            ElementState::Released => self.player.release(action),
        }
    }

    /// Current frame's controller snapshot
    pub fn snapshot(&self) -> InputSnapshot {
        self.player.snapshot()
    }

    /// Clear per-frame edges
    /// Call this once per frame after the frame's input has been consumed
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Get the player's input state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Get mutable input state
    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    /// Release everything (focus lost)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_default_bindings_loaded() {
        let manager = InputManager::new();
        assert_eq!(
            manager.action_for(InputSource::key(KeyCode::KeyW)),
            Some(Action::MoveUp)
        );
        assert_eq!(manager.action_for(InputSource::key(KeyCode::KeyZ)), None);
    }

    #[test]
    fn test_mouse_attack_edge() {
        let mut manager = InputManager::new();
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(manager.snapshot().attack_pressed);

        manager.update();
        assert!(!manager.snapshot().attack_pressed);
        assert!(manager.player().is_pressed(Action::Attack));

        manager.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!manager.player().is_pressed(Action::Attack));
    }

    #[test]
    fn test_unbound_mouse_button_ignored() {
        let mut manager = InputManager::new();
        manager.process_mouse_button(MouseButton::Middle, ElementState::Pressed);
        assert_eq!(manager.snapshot(), InputSnapshot::idle());
    }

    #[test]
    fn test_rebind() {
        let mut manager = InputManager::new();
        manager.bind(InputSource::key(KeyCode::Space), Action::Attack);
        assert_eq!(
            manager.action_for(InputSource::key(KeyCode::Space)),
            Some(Action::Attack)
        );
    }

    #[test]
    fn test_direct_input_manipulation() {
        let mut manager = InputManager::new();
        manager.player_mut().press(Action::MoveLeft);
        manager.player_mut().press(Action::MoveUp);

        let snapshot = manager.snapshot();
        assert_eq!((snapshot.horizontal, snapshot.vertical), (-1.0, 1.0));

        manager.reset();
        assert_eq!(manager.snapshot(), InputSnapshot::idle());
    }
}

// Input handling system
//
// Maps keyboard and mouse events onto game actions and samples them into a
// per-frame `InputSnapshot` for the character controller.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `player`: Pressed / just-pressed state and snapshot sampling
// - `manager`: Turns winit events into action presses
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In your event loop
// input.process_keyboard_event(&key_event);
// input.process_mouse_button(button, state);
//
// // Once per frame
// let snapshot = input.snapshot();
// controller.on_frame(&snapshot, frame_dt);
// input.update();
// ```

pub mod action;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use manager::InputManager;
pub use player::{InputSnapshot, PlayerInput};

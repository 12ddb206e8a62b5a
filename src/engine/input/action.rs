// Game action definitions and mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Run,

    // Combat
    Attack,

    // Menus and settings
    Confirm,
    Back,
    OpenSettings,
    ToggleFullscreen,
    ToggleKeyboardGuide,
    MusicVolumeDown,
    MusicVolumeUp,
    SfxVolumeDown,
    SfxVolumeUp,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Movement (WASD plus arrows)
        (InputSource::key(KeyCode::KeyW), Action::MoveUp),
        (InputSource::key(KeyCode::KeyS), Action::MoveDown),
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Action::MoveDown),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ShiftLeft), Action::Run),
        // Combat
        (InputSource::mouse(MouseButton::Left), Action::Attack),
        // Menus
        (InputSource::key(KeyCode::Enter), Action::Confirm),
        (InputSource::key(KeyCode::Escape), Action::Back),
        (InputSource::key(KeyCode::Tab), Action::OpenSettings),
        (InputSource::key(KeyCode::F11), Action::ToggleFullscreen),
        (InputSource::key(KeyCode::KeyK), Action::ToggleKeyboardGuide),
        (InputSource::key(KeyCode::Minus), Action::MusicVolumeDown),
        (InputSource::key(KeyCode::Equal), Action::MusicVolumeUp),
        (InputSource::key(KeyCode::BracketLeft), Action::SfxVolumeDown),
        (InputSource::key(KeyCode::BracketRight), Action::SfxVolumeUp),
    ]
}

// Game-specific logic: the swordsman, scenes and user settings

pub mod characters;
pub mod menu;
pub mod session;
pub mod settings;

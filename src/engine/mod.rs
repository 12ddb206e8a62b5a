// Engine modules: timing, input, physics, timers

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod timer;

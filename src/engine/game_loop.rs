/// Game loop timing and control system
///
/// Splits wall-clock time into two cadences: one logical frame per rendered
/// frame (input sampling, state timers) and a fixed number of physics steps
/// at a constant timestep (movement integration).
use std::time::{Duration, Instant};

/// Target physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of physics steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Longest frame delta handed to frame-cadence logic (e.g. after a debugger pause)
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// What the host should run for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the previous frame (clamped)
    pub frame_dt: f32,
    /// Number of fixed physics steps to run this frame
    pub physics_steps: u32,
}

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Total physics steps executed
    step_count: u64,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Begin a new frame using the wall clock
    pub fn begin_frame(&mut self) -> FrameTiming {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Begin a new frame that lasted `frame_time`
    pub fn advance(&mut self, frame_time: Duration) -> FrameTiming {
        self.frame_count += 1;
        let frame_time = frame_time.min(MAX_FRAME_DELTA);

        // If paused, neither cadence moves
        if self.paused {
            return FrameTiming {
                frame_dt: 0.0,
                physics_steps: 0,
            };
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Whatever could not be simulated this frame is dropped, not carried over
        if steps == MAX_PHYSICS_STEPS {
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP_DURATION);
        }

        self.step_count += steps as u64;
        FrameTiming {
            frame_dt: frame_time.as_secs_f32(),
            physics_steps: steps,
        }
    }

    /// Get the fixed timestep for physics updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Interpolation alpha between the last two physics steps
    pub fn alpha(&self) -> f32 {
        (self.accumulator.as_secs_f32() / FIXED_TIMESTEP).min(1.0)
    }

    /// Get total number of frames started
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of physics steps handed out
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.step_count(), 0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_fixed_timestep() {
        let game_loop = GameLoop::new();
        assert!((game_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_short_frame_accumulates() {
        let mut game_loop = GameLoop::new();

        let timing = game_loop.advance(Duration::from_millis(10));
        assert_eq!(timing.physics_steps, 0);
        assert!((timing.frame_dt - 0.01).abs() < 1e-6);

        // 10ms + 10ms crosses one fixed step
        let timing = game_loop.advance(Duration::from_millis(10));
        assert_eq!(timing.physics_steps, 1);
    }

    #[test]
    fn test_two_steps_per_slow_frame() {
        let mut game_loop = GameLoop::new();
        let timing = game_loop.advance(Duration::from_millis(34));
        assert_eq!(timing.physics_steps, 2);
        assert_eq!(game_loop.step_count(), 2);
    }

    #[test]
    fn test_max_physics_steps_limit() {
        let mut game_loop = GameLoop::new();

        // A 200ms frame would allow 12 steps
        let timing = game_loop.advance(Duration::from_millis(200));
        assert_eq!(timing.physics_steps, MAX_PHYSICS_STEPS);

        // The backlog is dropped instead of bursting next frame
        let timing = game_loop.advance(Duration::ZERO);
        assert!(timing.physics_steps <= 1);
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        let mut game_loop = GameLoop::new();
        let timing = game_loop.advance(Duration::from_secs(3));
        assert!((timing.frame_dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_paused_no_updates() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();

        let timing = game_loop.advance(Duration::from_millis(50));
        assert_eq!(timing.physics_steps, 0);
        assert_eq!(timing.frame_dt, 0.0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());

        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_alpha_range() {
        let mut game_loop = GameLoop::new();
        game_loop.advance(Duration::from_millis(25));
        let alpha = game_loop.alpha();
        assert!((0.0..=1.0).contains(&alpha));
    }
}

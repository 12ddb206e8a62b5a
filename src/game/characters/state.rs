// Action state machine for the swordsman

use crate::engine::timer::TimerQueue;

/// The character's current, mutually exclusive action state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActionMode {
    /// Walking, running or standing; reads input
    #[default]
    Free,
    /// Swinging the sword; locked in place
    Attacking,
    /// Reacting to a hit; locked in place
    Hurt,
    /// Terminal
    Dead,
}

impl ActionMode {
    /// Check if the character may move and read directional input
    pub fn can_move(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Check if an attack may start from this state
    pub fn can_attack(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Check if incoming damage is accepted in this state
    pub fn can_be_hurt(&self) -> bool {
        matches!(self, Self::Free | Self::Attacking)
    }

    /// Check if no further transition can leave this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Dead)
    }
}

/// A mode change produced by the arbiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTransition {
    pub from: ActionMode,
    pub to: ActionMode,
}

/// Timed return to `Free`, stamped with the epoch it was scheduled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ModeReset {
    mode: ActionMode,
    epoch: u64,
}

/// Arbitrates Free / Attacking / Hurt / Dead
///
/// Attacking and Hurt end on their own after a fixed delay. Every transition
/// bumps the epoch, so a reset scheduled for an earlier state is dropped when
/// it comes due instead of ending whatever state replaced it.
#[derive(Debug)]
pub struct ActionArbiter {
    current_mode: ActionMode,
    epoch: u64,
    timers: TimerQueue<ModeReset>,
}

impl Default for ActionArbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionArbiter {
    pub fn new() -> Self {
        Self {
            current_mode: ActionMode::Free,
            epoch: 0,
            timers: TimerQueue::new(),
        }
    }

    /// Get the current mode
    pub fn mode(&self) -> ActionMode {
        self.current_mode
    }

    /// Number of transitions so far
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Reset timers not yet fired, including stale ones
    pub fn pending_resets(&self) -> usize {
        self.timers.len()
    }

    fn transition(&mut self, to: ActionMode) -> ModeTransition {
        let from = self.current_mode;
        self.current_mode = to;
        self.epoch += 1;
        log::debug!("Swordman mode {:?} -> {:?} (epoch {})", from, to, self.epoch);
        ModeTransition { from, to }
    }

    fn schedule_reset(&mut self, delay: f32) {
        let reset = ModeReset {
            mode: self.current_mode,
            epoch: self.epoch,
        };
        self.timers.schedule(delay, reset);
    }

    /// Start an attack that ends after `duration` seconds
    pub fn try_attack(&mut self, duration: f32) -> Option<ModeTransition> {
        if !self.current_mode.can_attack() {
            return None;
        }

        let transition = self.transition(ActionMode::Attacking);
        self.schedule_reset(duration);
        Some(transition)
    }

    /// Enter the hurt reaction for `duration` seconds
    ///
    /// Ignored while already hurt (the running timer is kept) and once dead.
    /// An attack in progress is interrupted.
    pub fn try_hurt(&mut self, duration: f32) -> Option<ModeTransition> {
        if !self.current_mode.can_be_hurt() {
            return None;
        }

        let transition = self.transition(ActionMode::Hurt);
        self.schedule_reset(duration);
        Some(transition)
    }

    /// Enter the terminal Dead state
    pub fn kill(&mut self) -> Option<ModeTransition> {
        if self.current_mode.is_terminal() {
            return None;
        }

        self.timers.clear();
        Some(self.transition(ActionMode::Dead))
    }

    /// Advance timers by `dt`; returns the automatic return to Free, if any
    pub fn update(&mut self, dt: f32) -> Option<ModeTransition> {
        if self.current_mode.is_terminal() {
            return None;
        }

        let mut result = None;
        for reset in self.timers.advance(dt) {
            if reset.epoch == self.epoch && reset.mode == self.current_mode {
                result = Some(self.transition(ActionMode::Free));
            } else {
                log::trace!(
                    "Dropping stale {:?} reset from epoch {} (now {})",
                    reset.mode,
                    reset.epoch,
                    self.epoch
                );
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let arbiter = ActionArbiter::new();
        assert_eq!(arbiter.mode(), ActionMode::Free);
        assert_eq!(arbiter.epoch(), 0);
    }

    #[test]
    fn test_mode_capabilities() {
        assert!(ActionMode::Free.can_move());
        assert!(!ActionMode::Attacking.can_move());
        assert!(ActionMode::Attacking.can_be_hurt());
        assert!(!ActionMode::Hurt.can_be_hurt());
        assert!(!ActionMode::Dead.can_attack());
        assert!(ActionMode::Dead.is_terminal());
    }

    #[test]
    fn test_attack_then_auto_reset() {
        let mut arbiter = ActionArbiter::new();
        let transition = arbiter.try_attack(0.5);
        assert_eq!(
            transition,
            Some(ModeTransition {
                from: ActionMode::Free,
                to: ActionMode::Attacking
            })
        );

        assert_eq!(arbiter.update(0.25), None);
        assert_eq!(arbiter.mode(), ActionMode::Attacking);

        let transition = arbiter.update(0.25);
        assert_eq!(transition.map(|t| t.to), Some(ActionMode::Free));
        assert_eq!(arbiter.mode(), ActionMode::Free);
    }

    #[test]
    fn test_attack_only_from_free() {
        let mut arbiter = ActionArbiter::new();
        arbiter.try_attack(0.5);
        let epoch = arbiter.epoch();

        assert_eq!(arbiter.try_attack(0.5), None);
        assert_eq!(arbiter.epoch(), epoch);

        let mut arbiter = ActionArbiter::new();
        arbiter.try_hurt(0.5);
        assert_eq!(arbiter.try_attack(0.5), None);
        assert_eq!(arbiter.mode(), ActionMode::Hurt);
    }

    #[test]
    fn test_repeated_hurt_keeps_original_deadline() {
        let mut arbiter = ActionArbiter::new();
        arbiter.try_hurt(0.5);

        arbiter.update(0.25);
        assert_eq!(arbiter.try_hurt(0.5), None);

        // Exactly one Hurt -> Free, at the first deadline
        let mut returns = 0;
        if arbiter.update(0.25).is_some() {
            returns += 1;
        }
        assert_eq!(arbiter.mode(), ActionMode::Free);
        for _ in 0..8 {
            if arbiter.update(0.125).is_some() {
                returns += 1;
            }
        }
        assert_eq!(returns, 1);
    }

    #[test]
    fn test_hurt_interrupts_attack() {
        let mut arbiter = ActionArbiter::new();
        arbiter.try_attack(0.5);
        let transition = arbiter.try_hurt(0.5);

        assert_eq!(
            transition,
            Some(ModeTransition {
                from: ActionMode::Attacking,
                to: ActionMode::Hurt
            })
        );
        assert_eq!(arbiter.epoch(), 2);
    }

    #[test]
    fn test_stale_attack_reset_does_not_end_hurt() {
        let mut arbiter = ActionArbiter::new();
        arbiter.try_attack(0.5);
        arbiter.update(0.25);
        arbiter.try_hurt(0.5);

        // Attack deadline passes; hurt continues
        assert_eq!(arbiter.update(0.25), None);
        assert_eq!(arbiter.mode(), ActionMode::Hurt);

        // Hurt deadline (0.25 + 0.5)
        let transition = arbiter.update(0.25);
        assert_eq!(transition.map(|t| t.from), Some(ActionMode::Hurt));
        assert_eq!(arbiter.mode(), ActionMode::Free);
    }

    #[test]
    fn test_dead_is_terminal() {
        let mut arbiter = ActionArbiter::new();
        arbiter.try_attack(0.5);
        assert!(arbiter.kill().is_some());
        let epoch = arbiter.epoch();

        assert_eq!(arbiter.try_attack(0.5), None);
        assert_eq!(arbiter.try_hurt(0.5), None);
        assert_eq!(arbiter.kill(), None);
        assert_eq!(arbiter.update(10.0), None);

        assert_eq!(arbiter.mode(), ActionMode::Dead);
        assert_eq!(arbiter.epoch(), epoch);
        assert_eq!(arbiter.pending_resets(), 0);
    }

    #[test]
    fn test_attack_resets_after_long_session() {
        let mut arbiter = ActionArbiter::new();
        for _ in 0..600 {
            arbiter.update(1000.0);
        }

        arbiter.try_attack(0.5);
        for _ in 0..29 {
            assert_eq!(arbiter.update(1.0 / 60.0), None);
        }
        let transition = arbiter.update(1.0 / 60.0);
        assert_eq!(transition.map(|t| t.to), Some(ActionMode::Free));
    }
}

// Deferred fire-once timers driven by frame time

/// Slack allowed when a countdown lands just short of zero after repeated
/// subtraction of frame deltas
const FIRE_TOLERANCE: f32 = 1e-4;

/// Identifies a scheduled timer so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct PendingTimer<T> {
    id: TimerId,
    /// Seconds left until the timer fires; negative once overdue
    remaining: f32,
    payload: T,
}

/// Queue of fixed-delay timers, each carrying a payload handed back when it fires
///
/// Time only moves when [`TimerQueue::advance`] is called, so the queue follows
/// whatever clock drives it (normally the logical frame delta). Each timer
/// counts down its own remaining time, so precision does not depend on how
/// long the queue has been running.
#[derive(Debug)]
pub struct TimerQueue<T> {
    pending: Vec<PendingTimer<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to fire `delay` seconds from now
    pub fn schedule(&mut self, delay: f32, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.pending.push(PendingTimer {
            id,
            remaining: delay.max(0.0),
            payload,
        });

        id
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.pending.iter().position(|t| t.id == id) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Count every timer down by `dt` and return the payloads that came due,
    /// earliest deadline first
    pub fn advance(&mut self, dt: f32) -> Vec<T> {
        let dt = dt.max(0.0);

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            self.pending[i].remaining -= dt;
            if self.pending[i].remaining <= FIRE_TOLERANCE {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }

        due.sort_by(|a, b| a.remaining.total_cmp(&b.remaining).then(a.id.0.cmp(&b.id.0)));
        due.into_iter().map(|t| t.payload).collect()
    }

    /// Seconds until a pending timer fires
    pub fn remaining(&self, id: TimerId) -> Option<f32> {
        self.pending
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.remaining.max(0.0))
    }

    /// Number of timers still waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

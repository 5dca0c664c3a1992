//! Timer port for the shuffle, flip and clear delays.
//!
//! The engine never sleeps. It asks a [`Scheduler`] to deliver a [`Timer`]
//! later, and the host feeds it back as [`Command::TimerElapsed`].
//!
//! [`Command::TimerElapsed`]: super::events::Command::TimerElapsed

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    ShuffleComplete,
    RevealComplete,
    ClearComplete,
}

/// A scheduled wake-up, tagged with the round epoch it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timer {
    pub kind: TimerKind,
    pub epoch: u64,
}

pub trait Scheduler {
    /// Deliver `timer` back to the engine after `delay`. Not cancellable.
    fn after(&mut self, delay: Duration, timer: Timer);
}

/// Virtual-clock scheduler. The host advances time explicitly.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, u64, Timer)>,
    next_seq: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock forward and return every timer that came due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Timer> {
        let target = self.now + elapsed;
        let mut due = Vec::new();
        while let Some(timer) = self.pop_due(target) {
            due.push(timer);
        }
        self.wait_until(target);
        due
    }

    /// Remove the earliest timer due at or before `until` and move the clock
    /// to its due time.
    ///
    /// Timers scheduled after this one fires are measured from that instant,
    /// so a caller looping on this sees chained delays land inside the window.
    pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        let (pos, &(at, _, timer)) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (at, _, _))| *at <= until)
            .min_by_key(|(_, (at, seq, _))| (*at, *seq))?;
        self.pending.remove(pos);
        self.now = self.now.max(at);
        Some(timer)
    }

    /// Move the clock to `at` without firing anything. Never moves backwards.
    pub fn wait_until(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }

    /// Jump straight to the earliest pending timer and return it.
    pub fn fire_next(&mut self) -> Option<Timer> {
        self.pop_due(Duration::MAX)
    }
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay: Duration, timer: Timer) {
        self.pending.push((self.now + delay, self.next_seq, timer));
        self.next_seq += 1;
    }
}

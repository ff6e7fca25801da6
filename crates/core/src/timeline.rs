//! Virtual clock for deferred effects
//!
//! Timers fire in due-time order; timers due at the same instant fire in the order they
//! were scheduled.

use crate::state::Timer;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    seq: u64,
    timer: Timer,
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    pub fn schedule(&mut self, delay_ms: u64, timer: Timer) {
        self.pending.push(Pending {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
            timer,
        });
        self.next_seq += 1;
    }

    /// Pop the earliest timer due at or before `at_ms`, moving the clock to its due time
    pub fn pop_due(&mut self, at_ms: u64) -> Option<Timer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= at_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(index, _)| index)?;

        let pending = self.pending.swap_remove(index);
        self.now_ms = self.now_ms.max(pending.due_ms);
        Some(pending.timer)
    }

    /// Move the clock to `at_ms` and return every timer due by then
    pub fn advance_to(&mut self, at_ms: u64) -> Vec<Timer> {
        let mut due = Vec::new();
        while let Some(timer) = self.pop_due(at_ms) {
            due.push(timer);
        }
        self.now_ms = self.now_ms.max(at_ms);
        due
    }
}

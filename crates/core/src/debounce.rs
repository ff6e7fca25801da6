//! Debounce over a virtual clock
//!
//! Every [`Debouncer::call`] supersedes the pending one. The caller schedules the
//! returned [`Timer`]; when it comes back, [`Debouncer::fire`] says whether it is still the
//! latest call.

use crate::state::{Effect, Timer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    key: String,
    wait_ms: u64,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new(key: impl Into<String>, wait_ms: u64) -> Self {
        Self {
            key: key.into(),
            wait_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Register a call and get the effect that schedules its fire
    pub fn call(&mut self) -> Effect {
        self.generation += 1;
        self.pending = true;
        Effect::Schedule {
            delay_ms: self.wait_ms,
            timer: Timer::Debounce {
                key: self.key.clone(),
                generation: self.generation,
            },
        }
    }

    /// `true` when `timer` belongs to this debouncer and is the most recent call
    pub fn fire(&mut self, timer: &Timer) -> bool {
        match timer {
            Timer::Debounce { key, generation }
                if *key == self.key && *generation == self.generation && self.pending =>
            {
                self.pending = false;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending call, if any
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

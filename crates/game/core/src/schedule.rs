//! Cooperative single-shot timers.
//!
//! Timers are keyed by purpose. Scheduling a key that is still pending replaces
//! the earlier timer, so a purpose never has more than one deadline. Nothing
//! runs on its own: the host loop calls [`DeferredScheduler::advance`] with the
//! elapsed frame time and handles the keys that came due.

use core::time::Duration;

#[derive(Clone, Debug)]
struct PendingTimer<K> {
    key: K,
    deadline: Duration,
    seq: u64,
}

#[derive(Clone, Debug)]
pub struct DeferredScheduler<K> {
    now: Duration,
    pending: Vec<PendingTimer<K>>,
    next_seq: u64,
}

impl<K: PartialEq> DeferredScheduler<K> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedules `key` to come due after `delay`, superseding any pending timer
    /// for the same key. Returns the absolute deadline.
    pub fn schedule(&mut self, key: K, delay: Duration) -> Duration {
        self.cancel(&key);
        let deadline = self.now + delay;
        self.pending.push(PendingTimer {
            key,
            deadline,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        deadline
    }

    /// Cancels the pending timer for `key`. Returns false if none was pending.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.key != *key);
        self.pending.len() != before
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.iter().any(|timer| timer.key == *key)
    }

    /// Moves the clock forward and returns the keys that came due, earliest
    /// deadline first; equal deadlines keep scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<K> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.deadline <= now);
        self.pending = pending;

        due.sort_by_key(|timer| (timer.deadline, timer.seq));
        due.into_iter().map(|timer| timer.key).collect()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<K: PartialEq> Default for DeferredScheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

//! One-shot timers ordered by deadline

use std::time::Instant;

use super::Callback;

/// Handle to a pending timer, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

struct TimerEntry {
    id: TimerId,
    /// Absolute instant at which the timer fires
    fire_at: Instant,
    callback: Callback,
}

#[derive(Default)]
pub(super) struct TimerQueue {
    next_id: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn schedule(&mut self, fire_at: Instant, callback: Callback) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.entries.push(TimerEntry {
            id,
            fire_at,
            callback,
        });
        id
    }

    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Remove and return the earliest timer due at `now`.
    /// Equal deadlines come out in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerId, Callback)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.fire_at <= now)
            .min_by_key(|(_, entry)| (entry.fire_at, entry.id))
            .map(|(index, _)| index)?;

        let entry = self.entries.swap_remove(index);
        Some((entry.id, entry.callback))
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.fire_at).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

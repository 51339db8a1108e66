//! Debounce calls until a quiet period has passed
//!
//! Every call restarts the countdown, so the target runs once, `delay` after
//! the last call of a burst. A zero delay disables deferral entirely.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::trace;

use crate::scheduler::{Scheduler, TimerId};

struct DebounceState {
    target: Rc<dyn Fn()>,
    delay: Duration,
    pending: Cell<Option<TimerId>>,
}

impl DebounceState {
    fn invoke(&self) {
        // Cloned out so a re-entrant call finds no outstanding borrow
        let target = self.target.clone();
        target();
    }
}

/// Handle to a debounced function. Clones share the same pending timer.
#[derive(Clone)]
pub struct Debounced {
    state: Rc<DebounceState>,
    scheduler: Scheduler,
}

/// Debounce `target` by `delay`
pub fn debounce<F>(scheduler: &Scheduler, target: F, delay: Duration) -> Debounced
where
    F: Fn() + 'static,
{
    Debounced {
        state: Rc::new(DebounceState {
            target: Rc::new(target),
            delay,
            pending: Cell::new(None),
        }),
        scheduler: scheduler.clone(),
    }
}

impl Debounced {
    /// Debounce relative to the current time. Returns the configured delay.
    pub fn call(&self) -> Duration {
        self.call_at(Instant::now())
    }

    /// Debounce relative to `now`. Returns the configured delay.
    pub fn call_at(&self, now: Instant) -> Duration {
        let delay = self.state.delay;

        if delay.is_zero() {
            self.state.invoke();
            return delay;
        }

        self.cancel();

        let state = self.state.clone();
        let id = self.scheduler.set_timeout(now, delay, move || {
            state.pending.set(None);
            state.invoke();
        });
        self.state.pending.set(Some(id));
        trace!(timer = id.0, "Debounce timer restarted");

        delay
    }

    /// Drop the pending invocation, if any, without running it
    pub fn cancel(&self) -> bool {
        match self.state.pending.take() {
            Some(id) => self.scheduler.clear_timeout(id),
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }

    pub fn delay(&self) -> Duration {
        self.state.delay
    }
}

//! Animation-frame and timer scheduling
//!
//! A single-threaded scheduler handle. The frame strategy is resolved once,
//! when the scheduler is built, and never re-checked:
//! - `FrameDriven`: callbacks wait for the next [`Scheduler::run_frame`]
//! - `Immediate`: no display, so "next frame" means "now" and callbacks run
//!   inside the request
//!
//! Timers are independent of the strategy and fire from
//! [`Scheduler::run_due_timers`]. Time is always passed in by the driver.

pub mod detect;
mod frame;
mod timer;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

pub use frame::FrameId;
pub use timer::TimerId;

use frame::FrameQueue;
use timer::TimerQueue;

pub(crate) type Callback = Box<dyn FnOnce()>;

/// Configured scheduling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerMode {
    /// Pick `Frame` when a display is detected, `Immediate` otherwise
    #[default]
    Auto,
    Frame,
    Immediate,
}

impl SchedulerMode {
    /// Resolve to a concrete strategy, probing the environment for `Auto`
    pub fn resolve(self) -> Strategy {
        match self {
            Self::Auto => {
                if detect::display_available() {
                    Strategy::FrameDriven
                } else {
                    Strategy::Immediate
                }
            }
            Self::Frame => Strategy::FrameDriven,
            Self::Immediate => Strategy::Immediate,
        }
    }
}

impl std::str::FromStr for SchedulerMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "frame" => Ok(Self::Frame),
            "immediate" => Ok(Self::Immediate),
            other => anyhow::bail!(
                "Unknown scheduler mode '{}' (expected auto, frame or immediate)",
                other
            ),
        }
    }
}

/// How animation-frame requests are serviced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    FrameDriven,
    Immediate,
}

/// Outcome of [`Scheduler::request_animation_frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// The callback already ran (immediate strategy)
    Ran,
    /// The callback waits for the next frame
    Queued(FrameId),
}

#[derive(Default)]
struct Queues {
    frames: FrameQueue,
    timers: TimerQueue,
}

/// Cloneable handle; all clones share the same queues
#[derive(Clone)]
pub struct Scheduler {
    strategy: Strategy,
    queues: Rc<RefCell<Queues>>,
}

impl Scheduler {
    pub fn new(strategy: Strategy) -> Self {
        debug!(?strategy, "Creating scheduler");
        Self {
            strategy,
            queues: Rc::default(),
        }
    }

    /// Build a scheduler from the configured mode (detection happens here, once)
    pub fn from_mode(mode: SchedulerMode) -> Self {
        let strategy = mode.resolve();
        info!(?mode, ?strategy, "Resolved scheduler strategy");
        Self::new(strategy)
    }

    pub fn frame_driven() -> Self {
        Self::new(Strategy::FrameDriven)
    }

    pub fn immediate() -> Self {
        Self::new(Strategy::Immediate)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Schedule `callback` to run before the next repaint
    pub fn request_animation_frame<F>(&self, callback: F) -> FrameRequest
    where
        F: FnOnce() + 'static,
    {
        match self.strategy {
            Strategy::Immediate => {
                callback();
                FrameRequest::Ran
            }
            Strategy::FrameDriven => {
                let id = self.queues.borrow_mut().frames.push(Box::new(callback));
                trace!(frame = id.0, "Queued animation frame callback");
                FrameRequest::Queued(id)
            }
        }
    }

    /// Drop a queued callback. Returns false if it already ran or never existed.
    pub fn cancel_animation_frame(&self, id: FrameId) -> bool {
        self.queues.borrow_mut().frames.cancel(id)
    }

    /// Run every callback queued before this frame started.
    /// Callbacks requested during the frame wait for the next one.
    pub fn run_frame(&self) -> usize {
        let ids = self.queues.borrow().frames.snapshot();
        let mut ran = 0;

        for id in ids {
            // Re-borrow per callback so callbacks can use the scheduler
            let callback = self.queues.borrow_mut().frames.take(id);
            if let Some(callback) = callback {
                callback();
                ran += 1;
            }
        }

        if ran > 0 {
            trace!(callbacks = ran, "Frame complete");
        }
        ran
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending_frames(&self) -> usize {
        self.queues.borrow().frames.len()
    }

    /// Run `callback` once, `delay` after `now`
    pub fn set_timeout<F>(&self, now: Instant, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce() + 'static,
    {
        let id = self
            .queues
            .borrow_mut()
            .timers
            .schedule(now + delay, Box::new(callback));
        trace!(timer = id.0, delay_ms = delay.as_millis() as u64, "Timer scheduled");
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed.
    pub fn clear_timeout(&self, id: TimerId) -> bool {
        let cleared = self.queues.borrow_mut().timers.clear(id);
        if cleared {
            trace!(timer = id.0, "Timer cleared");
        }
        cleared
    }

    /// Fire every timer due at `now`, earliest first
    pub fn run_due_timers(&self, now: Instant) -> usize {
        let mut fired = 0;
        loop {
            let due = self.queues.borrow_mut().timers.pop_due(now);
            let Some((id, callback)) = due else {
                break;
            };
            trace!(timer = id.0, "Timer fired");
            callback();
            fired += 1;
        }
        fired
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queues.borrow().timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.queues.borrow().timers.len()
    }

    /// One turn of the loop: due timers first, then a frame
    pub fn tick(&self, now: Instant) -> usize {
        self.run_due_timers(now) + self.run_frame()
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("strategy", &self.strategy)
            .field("pending_frames", &self.pending_frames())
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        let make = move || {
            let count = handle.clone();
            Box::new(move || count.set(count.get() + 1)) as Box<dyn FnOnce()>
        };
        (count, make)
    }

    #[test]
    fn test_immediate_runs_synchronously() {
        let scheduler = Scheduler::immediate();
        let (count, make) = counter();

        assert_eq!(scheduler.request_animation_frame(make()), FrameRequest::Ran);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending_frames(), 0);
        assert_eq!(scheduler.run_frame(), 0);
    }

    #[test]
    fn test_frame_driven_defers_until_frame() {
        let scheduler = Scheduler::frame_driven();
        let (count, make) = counter();

        let request = scheduler.request_animation_frame(make());
        assert!(matches!(request, FrameRequest::Queued(_)));
        assert_eq!(count.get(), 0);

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.run_frame(), 0);
    }

    #[test]
    fn test_frame_callbacks_run_in_request_order() {
        let scheduler = Scheduler::frame_driven();
        let order = Rc::new(RefCell::new(Vec::new()));

        for n in 0..3 {
            let order = order.clone();
            scheduler.request_animation_frame(move || order.borrow_mut().push(n));
        }
        scheduler.run_frame();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_requests_during_frame_wait_for_next_frame() {
        let scheduler = Scheduler::frame_driven();
        let (count, make) = counter();

        let inner = scheduler.clone();
        let next = make();
        scheduler.request_animation_frame(move || {
            inner.request_animation_frame(next);
        });

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.pending_frames(), 1);

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancel_animation_frame() {
        let scheduler = Scheduler::frame_driven();
        let (count, make) = counter();

        let FrameRequest::Queued(id) = scheduler.request_animation_frame(make()) else {
            panic!("expected a queued frame");
        };
        assert!(scheduler.cancel_animation_frame(id));
        assert!(!scheduler.cancel_animation_frame(id));
        assert_eq!(scheduler.run_frame(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_cancel_from_earlier_callback_in_same_frame() {
        let scheduler = Scheduler::frame_driven();
        let (count, make) = counter();

        let victim = Rc::new(Cell::new(None));
        let canceller = scheduler.clone();
        let target = victim.clone();
        scheduler.request_animation_frame(move || {
            if let Some(id) = target.get() {
                canceller.cancel_animation_frame(id);
            }
        });
        if let FrameRequest::Queued(id) = scheduler.request_animation_frame(make()) {
            victim.set(Some(id));
        }

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_timers_fire_at_deadline() {
        let scheduler = Scheduler::frame_driven();
        let (count, make) = counter();
        let t0 = Instant::now();

        scheduler.set_timeout(t0, Duration::from_millis(100), make());
        assert_eq!(scheduler.next_deadline(), Some(t0 + Duration::from_millis(100)));

        assert_eq!(scheduler.run_due_timers(t0 + Duration::from_millis(99)), 0);
        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.run_due_timers(t0 + Duration::from_millis(100)), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn test_cleared_timer_never_fires() {
        let scheduler = Scheduler::immediate();
        let (count, make) = counter();
        let t0 = Instant::now();

        let id = scheduler.set_timeout(t0, Duration::from_millis(10), make());
        assert!(scheduler.clear_timeout(id));
        assert!(!scheduler.clear_timeout(id));
        assert_eq!(scheduler.run_due_timers(t0 + Duration::from_secs(1)), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_tick_runs_timers_then_frame() {
        let scheduler = Scheduler::frame_driven();
        let order = Rc::new(RefCell::new(Vec::new()));
        let t0 = Instant::now();

        let frame_order = order.clone();
        scheduler.request_animation_frame(move || frame_order.borrow_mut().push("frame"));
        let timer_order = order.clone();
        scheduler.set_timeout(t0, Duration::ZERO, move || timer_order.borrow_mut().push("timer"));

        assert_eq!(scheduler.tick(t0), 2);
        assert_eq!(*order.borrow(), vec!["timer", "frame"]);
    }

    #[test]
    fn test_explicit_modes_resolve_without_detection() {
        assert_eq!(SchedulerMode::Frame.resolve(), Strategy::FrameDriven);
        assert_eq!(SchedulerMode::Immediate.resolve(), Strategy::Immediate);
        assert_eq!(
            Scheduler::from_mode(SchedulerMode::Immediate).strategy(),
            Strategy::Immediate
        );
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("auto".parse::<SchedulerMode>().unwrap(), SchedulerMode::Auto);
        assert_eq!(
            "immediate".parse::<SchedulerMode>().unwrap(),
            SchedulerMode::Immediate
        );
        assert!("Frame".parse::<SchedulerMode>().is_err());
    }

    #[test]
    fn test_mode_serde() {
        let mode: SchedulerMode = serde_json::from_str(r#""frame""#).unwrap();
        assert_eq!(mode, SchedulerMode::Frame);
        assert_eq!(
            serde_json::to_string(&SchedulerMode::Auto).unwrap(),
            r#""auto""#
        );
    }
}

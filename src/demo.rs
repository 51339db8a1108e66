//! `demo` subcommand: drive throttled and debounced calls through a real
//! frame loop and report what the targets saw.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use frame_helpers::{Scheduler, debounce, throttled};

/// What the targets observed during one demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub calls: u32,
    /// Arguments of every throttled invocation, in order
    pub throttled_invocations: Vec<Vec<u32>>,
    pub debounced_invocations: u32,
    pub frames: u32,
}

/// Fire a burst of `calls` calls, then run frames until nothing is pending
pub async fn run(
    scheduler: Scheduler,
    calls: u32,
    frame_interval: Duration,
    debounce_delay: Duration,
) -> DemoReport {
    let received: Rc<RefCell<Vec<Vec<u32>>>> = Rc::default();
    let throttle = throttled(
        &scheduler,
        |log: &Rc<RefCell<Vec<Vec<u32>>>>, args: Vec<u32>| {
            info!(?args, "Throttled target invoked");
            log.borrow_mut().push(args);
        },
        received.clone(),
    );

    let debounce_hits = Rc::new(Cell::new(0u32));
    let hits = debounce_hits.clone();
    let debounced = debounce(
        &scheduler,
        move || {
            hits.set(hits.get() + 1);
            info!(count = hits.get(), "Debounced target invoked");
        },
        debounce_delay,
    );

    for n in 1..=calls {
        throttle.call(vec![n]);
        debounced.call();
    }
    debug!(calls, ?scheduler, "Burst sent");

    let mut interval = tokio::time::interval(frame_interval);
    let mut frames = 0;
    while scheduler.pending_frames() > 0 || scheduler.pending_timers() > 0 {
        interval.tick().await;
        scheduler.tick(Instant::now());
        frames += 1;
    }

    let throttled_invocations = received.borrow().clone();
    DemoReport {
        calls,
        throttled_invocations,
        debounced_invocations: debounce_hits.get(),
        frames,
    }
}

//! Throttle calls to once per animation frame
//!
//! Bursts of calls between two frames collapse into a single invocation of
//! the target, which receives the arguments of the latest call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

use crate::scheduler::Scheduler;

type Target<C, A> = Rc<dyn Fn(&C, A)>;
type UpdateArgs<I, A> = Box<dyn Fn(I) -> A>;

struct ThrottleState<C, I, A> {
    target: Target<C, A>,
    context: C,
    update_args: UpdateArgs<I, A>,
    /// A frame is requested and has not fired yet
    ticking: Cell<bool>,
    /// Latest arguments, consumed when the frame fires
    args: RefCell<Option<A>>,
}

/// Handle to a throttled function. Clones share the same pending state.
pub struct Throttled<C, I, A = I> {
    state: Rc<ThrottleState<C, I, A>>,
    scheduler: Scheduler,
}

impl<C, I, A> Clone for Throttled<C, I, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}

/// Throttle `target`, passing the caller's arguments through unchanged
pub fn throttled<C, A, F>(scheduler: &Scheduler, target: F, context: C) -> Throttled<C, A, A>
where
    C: 'static,
    A: 'static,
    F: Fn(&C, A) + 'static,
{
    throttled_with(scheduler, target, context, |args| args)
}

/// Throttle `target`, running each call's input through `update_args` first
pub fn throttled_with<C, I, A, F, U>(
    scheduler: &Scheduler,
    target: F,
    context: C,
    update_args: U,
) -> Throttled<C, I, A>
where
    C: 'static,
    I: 'static,
    A: 'static,
    F: Fn(&C, A) + 'static,
    U: Fn(I) -> A + 'static,
{
    Throttled {
        state: Rc::new(ThrottleState {
            target: Rc::new(target),
            context,
            update_args: Box::new(update_args),
            ticking: Cell::new(false),
            args: RefCell::new(None),
        }),
        scheduler: scheduler.clone(),
    }
}

impl<C, I, A> Throttled<C, I, A>
where
    C: 'static,
    I: 'static,
    A: 'static,
{
    /// Record `input` as the latest arguments and make sure a frame is requested
    pub fn call(&self, input: I) {
        let args = (self.state.update_args)(input);
        *self.state.args.borrow_mut() = Some(args);

        if self.state.ticking.get() {
            trace!("Throttled call coalesced into pending frame");
            return;
        }

        self.state.ticking.set(true);
        let state = self.state.clone();
        self.scheduler.request_animation_frame(move || state.fire());
    }

    /// Whether a frame is requested and has not fired yet
    pub fn is_scheduled(&self) -> bool {
        self.state.ticking.get()
    }
}

impl<C, I, A> ThrottleState<C, I, A> {
    fn fire(&self) {
        self.ticking.set(false);
        let Some(args) = self.args.borrow_mut().take() else {
            return;
        };
        // No borrow is held while the target runs, so it may call back in
        let target = self.target.clone();
        target(&self.context, args);
    }
}

//! Call rate limiting on top of the scheduler
//!
//! - [`throttled`]: at most one call per animation frame, latest arguments win
//! - [`debounce`]: one call after a quiet period, latest call restarts it

pub mod debounce;
pub mod throttle;

pub use debounce::{Debounced, debounce};
pub use throttle::{Throttled, throttled, throttled_with};

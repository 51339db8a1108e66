//! Helpers for a frame-driven renderer: font shorthand strings, alignment
//! mapping, and call throttling/debouncing on an animation-frame scheduler.

#![deny(unsafe_code)]

pub mod common;
pub mod config;
pub mod constants;
pub mod rate_limit;
pub mod scheduler;

pub use common::{Align, FontSpec, TextAlign, align_start_end, font_string, to_left_right_center};
pub use rate_limit::{Debounced, Throttled, debounce, throttled, throttled_with};
pub use scheduler::{FrameRequest, Scheduler, SchedulerMode, Strategy};

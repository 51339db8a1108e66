//! Configuration management
//!
//! A single JSON file selects the scheduler mode, frame and debounce timing,
//! and the default font used by the CLI.

pub mod settings;

pub use settings::Config;

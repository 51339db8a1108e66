//! Application-wide constants
//!
//! Default values and string literals used throughout the crate, kept in
//! one place so the config layer and the CLI agree on them.

/// Alignment keywords accepted by the alignment mappers
pub mod align {
    /// Keyword mapped to the leading edge
    pub const START: &str = "start";

    /// Keyword mapped to the trailing edge
    pub const END: &str = "end";

    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const CENTER: &str = "center";
}

/// Display environment variables consulted once at startup
pub mod display {
    /// Set by Wayland compositors for their clients
    pub const WAYLAND_DISPLAY_VAR: &str = "WAYLAND_DISPLAY";

    /// Set by X11 sessions (and XWayland)
    pub const X11_DISPLAY_VAR: &str = "DISPLAY";

    /// Session type hint, logged only
    pub const SESSION_TYPE_VAR: &str = "XDG_SESSION_TYPE";
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "frame-helpers";

    /// Configuration filename
    pub const FILENAME: &str = "config.json";
}

/// Default configuration values
/// These are used when the config file is missing or omits a field
pub mod defaults {
    /// Font settings
    pub mod font {
        /// Default font size in pixels
        pub const SIZE: f64 = 12.0;

        /// Default style keywords
        pub const STYLE: &str = "normal";

        /// Default font family
        pub const FAMILY: &str = "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif";
    }

    /// Scheduling settings
    pub mod scheduling {
        /// Interval between frames when driving the scheduler (~60 Hz)
        pub const FRAME_INTERVAL_MS: u64 = 16;

        /// Default debounce delay in milliseconds
        pub const DEBOUNCE_DELAY_MS: u64 = 100;
    }

    /// `demo` subcommand settings
    pub mod demo {
        /// Number of calls fired in one burst
        pub const CALLS: u32 = 10;
    }
}

//! Display capability detection
//!
//! Decides once, at startup, whether a display server is reachable and
//! therefore whether animation frames are meaningful.

use tracing::info;

use crate::constants::display;

/// Check the process environment for a display server and log what was found
pub fn display_available() -> bool {
    let available = display_available_from(|name| std::env::var(name).ok());

    if let Ok(session) = std::env::var(display::SESSION_TYPE_VAR) {
        info!("Session Type: {}", session);
    }
    info!(available, "Display detection complete");

    available
}

/// Same check against an arbitrary variable lookup
pub fn display_available_from<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    [display::WAYLAND_DISPLAY_VAR, display::X11_DISPLAY_VAR]
        .into_iter()
        .any(|name| lookup(name).is_some_and(|value| !value.trim().is_empty()))
}

//! Alignment keyword mapping
//!
//! Text layout code speaks in logical `start`/`end` terms while the drawing
//! backend wants physical `left`/`right`/`center`. Anything that is neither
//! `start` nor `end` is treated as centered.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::align as keywords;

/// Logical alignment along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Align {
    Start,
    End,
    /// Any keyword other than `start` or `end`
    #[default]
    Center,
}

impl Align {
    /// Parse an alignment keyword. Unknown keywords map to `Center`.
    pub fn parse(keyword: &str) -> Self {
        match keyword {
            keywords::START => Self::Start,
            keywords::END => Self::End,
            _ => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => keywords::START,
            Self::End => keywords::END,
            Self::Center => keywords::CENTER,
        }
    }
}

impl From<&str> for Align {
    fn from(keyword: &str) -> Self {
        Self::parse(keyword)
    }
}

impl From<String> for Align {
    fn from(keyword: String) -> Self {
        Self::parse(&keyword)
    }
}

impl From<Align> for String {
    fn from(align: Align) -> Self {
        align.as_str().to_string()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Right,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => keywords::LEFT,
            Self::Right => keywords::RIGHT,
            Self::Center => keywords::CENTER,
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for TextAlign {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Map `start` to left, `end` to right and everything else to center
pub fn to_left_right_center(align: impl Into<Align>) -> TextAlign {
    match align.into() {
        Align::Start => TextAlign::Left,
        Align::End => TextAlign::Right,
        Align::Center => TextAlign::Center,
    }
}

/// Pick `start`, `end` or their midpoint depending on `align`
pub fn align_start_end(align: impl Into<Align>, start: f64, end: f64) -> f64 {
    match align.into() {
        Align::Start => start,
        Align::End => end,
        Align::Center => (start + end) / 2.0,
    }
}

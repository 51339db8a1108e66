//! Font description strings
//!
//! Builds the canonical `"<style> <size>px <family>"` string that text
//! renderers accept as a font shorthand.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::defaults;

/// Format a font shorthand string: `"<style> <size>px <family>"`
///
/// Integral sizes print without a fractional part (`16` -> `16px`).
pub fn font_string(pixel_size: impl Into<f64>, font_style: &str, font_family: &str) -> String {
    format!("{} {}px {}", font_style, pixel_size.into(), font_family)
}

/// Font settings as stored in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_family")]
    pub family: String,
}

impl FontSpec {
    pub fn new(size: impl Into<f64>, style: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            style: style.into(),
            family: family.into(),
        }
    }

    /// Shorthand string for this font
    pub fn to_font_string(&self) -> String {
        font_string(self.size, &self.style, &self.family)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_font_string())
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: default_size(),
            style: default_style(),
            family: default_family(),
        }
    }
}

fn default_size() -> f64 {
    defaults::font::SIZE
}

fn default_style() -> String {
    defaults::font::STYLE.to_string()
}

fn default_family() -> String {
    defaults::font::FAMILY.to_string()
}

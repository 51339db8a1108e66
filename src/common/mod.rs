//! Pure helpers shared by text layout code

pub mod align;
pub mod font;

pub use align::{Align, TextAlign, align_start_end, to_left_right_center};
pub use font::{FontSpec, font_string};

//! The layout solvers.
//!
//! All solvers are pure functions of their arguments: they never fail, and
//! fall back to a placeholder or minimum-size layout when nothing fits.

mod battle;
mod dual;
mod hand;
mod single;

pub use battle::*;
pub use dual::*;
pub use hand::*;
pub use single::*;

use crate::geometry::{card_height, ASPECT_RATIO};

/// Height of `rows` rows of cards of the given width, including the gaps between them.
pub(crate) fn stack_height(width: u32, rows: u32, gap: f64) -> f64 {
    rows as f64 * card_height(width) as f64 + gap * rows.saturating_sub(1) as f64
}

/// The (fractional) card width at which `rows` rows exactly fill `height`.
pub(crate) fn width_for_height(height: f64, rows: u32, gap: f64) -> f64 {
    (height - gap * rows.saturating_sub(1) as f64) / (rows as f64 * ASPECT_RATIO)
}

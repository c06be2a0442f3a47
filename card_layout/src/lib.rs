//! Card sizes for the zones of a card game board.
//!
//! Given how many cards a zone holds and how much room it has, the solvers in
//! this crate pick the largest card size (at a fixed 7:5 aspect ratio) and the
//! grid arrangement that fit. The [`driver`] module recomputes a layout
//! whenever its container is resized.

pub use config::*;
pub use errors::*;
pub use geometry::*;
pub use phases::*;
pub use solver::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod config;
pub mod driver;
mod errors;
mod geometry;
mod phases;
mod solver;
mod visualization;

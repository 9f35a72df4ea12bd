//! Animation module for the assembled/scattered morph
//!
//! Holds the easing curves and the per-system progress controller.

mod easing;
mod morph;

pub use easing::{ease, Easing};
pub use morph::{MorphController, TargetStatus, SETTLE_EPSILON};
